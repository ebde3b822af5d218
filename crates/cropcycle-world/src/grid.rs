//! In-memory world of cells and loose pickups.
//!
//! [`GridWorld`] stands in for the host's world model: it stores cells by
//! position, records spilled items as pickups, and simulates growth ticks.
//! Cell writes always replace the whole [`WorldCell`] value.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use cropcycle_types::{CellPosition, DropSet, HeldTool, ItemStack, ResourceKind};

use crate::cell::WorldCell;
use crate::drops::harvest_drops;
use crate::error::WorldError;

/// An item lying in the world as a free-standing pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pickup {
    /// Where the item was dropped.
    pub position: CellPosition,
    /// What was dropped.
    pub stack: ItemStack,
}

/// Cells keyed by position plus the pickups lying around them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GridWorld {
    cells: BTreeMap<CellPosition, WorldCell>,
    pickups: Vec<Pickup>,
}

impl GridWorld {
    /// Create an empty world.
    pub const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
            pickups: Vec::new(),
        }
    }

    /// Lay out a rectangular field of `kind` at height `y`, every cell at
    /// `stage`, starting at `(x0, z0)` and spanning `width` by `depth`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::StageOutOfRange`] if `stage` is invalid for
    /// `kind`, or [`WorldError::ArithmeticOverflow`] if the field leaves the
    /// coordinate range.
    pub fn plant_field(
        &mut self,
        kind: ResourceKind,
        stage: u8,
        origin: CellPosition,
        width: u16,
        depth: u16,
    ) -> Result<usize, WorldError> {
        let cell = WorldCell::new(kind, stage)?;
        let mut placed: usize = 0;
        for dx in 0..width {
            for dz in 0..depth {
                let x = origin
                    .x
                    .checked_add(i32::from(dx))
                    .ok_or(WorldError::ArithmeticOverflow)?;
                let z = origin
                    .z
                    .checked_add(i32::from(dz))
                    .ok_or(WorldError::ArithmeticOverflow)?;
                self.cells.insert(CellPosition::new(x, origin.y, z), cell);
                placed = placed.saturating_add(1);
            }
        }
        Ok(placed)
    }

    /// The cell at `position`, if any.
    pub fn cell(&self, position: CellPosition) -> Option<WorldCell> {
        self.cells.get(&position).copied()
    }

    /// Overwrite the cell at `position` with `cell` in one write.
    pub fn set_cell(&mut self, position: CellPosition, cell: WorldCell) {
        self.cells.insert(position, cell);
    }

    /// Number of cells in the world.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cells in position order.
    pub fn cells(&self) -> impl Iterator<Item = (CellPosition, WorldCell)> + '_ {
        self.cells.iter().map(|(pos, cell)| (*pos, *cell))
    }

    /// Drops the host would produce for breaking the cell at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::CellNotFound`] if no cell exists there.
    pub fn drops_at(&self, position: CellPosition, tool: &HeldTool) -> Result<DropSet, WorldError> {
        let cell = self
            .cell(position)
            .ok_or(WorldError::CellNotFound(position))?;
        Ok(harvest_drops(&cell, tool))
    }

    /// Place `stack` at `position` as a free-standing pickup.
    pub fn spill(&mut self, position: CellPosition, stack: ItemStack) {
        if stack.count == 0 {
            return;
        }
        debug!(%position, item = %stack.item, count = stack.count, "item spilled");
        self.pickups.push(Pickup { position, stack });
    }

    /// Host default handling for breaking a cell: the drops become pickups
    /// and the cell turns to air.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::CellNotFound`] if no cell exists there.
    pub fn break_cell(
        &mut self,
        position: CellPosition,
        tool: &HeldTool,
    ) -> Result<DropSet, WorldError> {
        let drops = self.drops_at(position, tool)?;
        self.set_cell(position, WorldCell::planted(ResourceKind::Air));
        for stack in &drops {
            self.spill(position, *stack);
        }
        Ok(drops)
    }

    /// Advance every staged cell by `steps` growth stages.
    ///
    /// Returns the number of cells whose stage changed.
    pub fn grow_all(&mut self, steps: u8) -> usize {
        let mut changed: usize = 0;
        for cell in self.cells.values_mut() {
            let next = cell.grown(steps);
            if next != *cell {
                *cell = next;
                changed = changed.saturating_add(1);
            }
        }
        changed
    }

    /// All pickups currently lying in the world.
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    /// Pickups lying at `position`.
    pub fn pickups_at(&self, position: CellPosition) -> impl Iterator<Item = &Pickup> + '_ {
        self.pickups
            .iter()
            .filter(move |pickup| pickup.position == position)
    }

    /// Remove and return every pickup.
    pub fn collect_pickups(&mut self) -> Vec<Pickup> {
        std::mem::take(&mut self.pickups)
    }
}
