//! Seams between the reactor and the hosting game server.
//!
//! The reactor never touches world storage or player objects directly. It
//! reads and writes through [`WorldAccess`] and [`ActorAccess`], which a
//! host implements over its own model. Implementations for the in-memory
//! [`GridWorld`] and [`Actor`] are provided here and back the console and
//! the tests.

use cropcycle_actors::{Actor, Permissible};
use cropcycle_types::{
    ActorId, CellPosition, DropSet, FeedbackKind, HeldTool, ItemKind, ItemStack,
};
use cropcycle_world::{GridWorld, WorldCell};

use crate::error::HostError;

/// World operations the reactor needs.
///
/// Implementations must report failure through [`HostError`] and must not
/// panic. The reactor contains returned errors only; a panic unwinds into
/// the host's event dispatch.
pub trait WorldAccess {
    /// The cell at `position`, or `None` if it cannot be resolved.
    fn cell(&self, position: CellPosition) -> Option<WorldCell>;

    /// Drops for breaking the cell at `position` with `tool`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the host cannot compute drops.
    fn drops_for(&self, position: CellPosition, tool: &HeldTool) -> Result<DropSet, HostError>;

    /// Overwrite the cell at `position` with `cell` as one write.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the host refuses the write.
    fn replant(&mut self, position: CellPosition, cell: WorldCell) -> Result<(), HostError>;

    /// Place `stack` at `position` as a free-standing pickup.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the host cannot place the item.
    fn spill(&mut self, position: CellPosition, stack: ItemStack) -> Result<(), HostError>;
}

/// Player operations the reactor needs.
///
/// The same contract as [`WorldAccess`] applies: fail with [`HostError`],
/// never panic.
pub trait ActorAccess: Permissible {
    /// The player's identifier.
    fn actor_id(&self) -> ActorId;

    /// The tool in the player's main hand.
    fn held_tool(&self) -> HeldTool;

    /// How many more units of `item` the inventory could take.
    fn remaining_capacity(&self, item: ItemKind) -> u32;

    /// Insert as much of `stack` as fits; return the count that did not fit.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the insertion fails outright.
    fn offer(&mut self, stack: ItemStack) -> Result<u32, HostError>;

    /// Grant `amount` experience points.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the grant fails.
    fn grant_experience(&mut self, amount: u32) -> Result<(), HostError>;

    /// Play `kind` to the player at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if playback fails.
    fn play_feedback(
        &mut self,
        kind: FeedbackKind,
        position: CellPosition,
    ) -> Result<(), HostError>;

    /// Show the player a short chat notice.
    fn notify(&mut self, message: &str);
}

impl WorldAccess for GridWorld {
    fn cell(&self, position: CellPosition) -> Option<WorldCell> {
        Self::cell(self, position)
    }

    fn drops_for(&self, position: CellPosition, tool: &HeldTool) -> Result<DropSet, HostError> {
        Ok(self.drops_at(position, tool)?)
    }

    fn replant(&mut self, position: CellPosition, cell: WorldCell) -> Result<(), HostError> {
        self.set_cell(position, cell);
        Ok(())
    }

    fn spill(&mut self, position: CellPosition, stack: ItemStack) -> Result<(), HostError> {
        Self::spill(self, position, stack);
        Ok(())
    }
}

impl ActorAccess for Actor {
    fn actor_id(&self) -> ActorId {
        self.id()
    }

    fn held_tool(&self) -> HeldTool {
        Self::held_tool(self)
    }

    fn remaining_capacity(&self, item: ItemKind) -> u32 {
        self.inventory().remaining_capacity(item)
    }

    fn offer(&mut self, stack: ItemStack) -> Result<u32, HostError> {
        Ok(self.inventory_mut().insert(stack)?)
    }

    fn grant_experience(&mut self, amount: u32) -> Result<(), HostError> {
        self.add_experience(amount)?;
        Ok(())
    }

    fn play_feedback(
        &mut self,
        kind: FeedbackKind,
        position: CellPosition,
    ) -> Result<(), HostError> {
        self.hear(kind, position);
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        Self::notify(self, message);
    }
}
