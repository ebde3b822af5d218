//! In-memory player model.
//!
//! [`Actor`] stands in for the host's player object: it holds capability
//! grants, an [`ActorInventory`], the tool in hand, an experience total,
//! and the notices and sounds the player has received.

use std::collections::BTreeSet;

use serde::Serialize;

use cropcycle_types::{ActorId, CellPosition, FeedbackKind, HeldTool};

use crate::error::ActorError;
use crate::inventory::ActorInventory;

/// A feedback sound the actor heard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeardFeedback {
    /// The sound.
    pub kind: FeedbackKind,
    /// Where it was played.
    pub position: CellPosition,
}

/// A player as seen by the reactor.
#[derive(Debug, Clone, Serialize)]
pub struct Actor {
    id: ActorId,
    name: String,
    operator: bool,
    capabilities: BTreeSet<String>,
    inventory: ActorInventory,
    held_tool: HeldTool,
    experience: u32,
    notices: Vec<String>,
    heard: Vec<HeardFeedback>,
}

impl Actor {
    /// Create a player with no capabilities and an empty default inventory.
    pub fn new(name: &str) -> Self {
        Self {
            id: ActorId::new(),
            name: name.to_owned(),
            operator: false,
            capabilities: BTreeSet::new(),
            inventory: ActorInventory::default(),
            held_tool: HeldTool::bare_hand(),
            experience: 0,
            notices: Vec::new(),
            heard: Vec::new(),
        }
    }

    /// Create a server operator, who holds every capability.
    pub fn operator(name: &str) -> Self {
        Self {
            operator: true,
            ..Self::new(name)
        }
    }

    /// Replace the inventory (e.g. with a smaller one).
    #[must_use]
    pub fn with_inventory(mut self, inventory: ActorInventory) -> Self {
        self.inventory = inventory;
        self
    }

    /// The actor's identifier.
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// The actor's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grant a capability.
    pub fn grant(&mut self, capability: &str) {
        self.capabilities.insert(capability.to_owned());
    }

    /// Revoke a capability.
    pub fn revoke(&mut self, capability: &str) {
        self.capabilities.remove(capability);
    }

    /// Whether the actor holds `capability` (operators hold all).
    pub fn holds(&self, capability: &str) -> bool {
        self.operator || self.capabilities.contains(capability)
    }

    /// The actor's inventory.
    pub const fn inventory(&self) -> &ActorInventory {
        &self.inventory
    }

    /// Mutable access to the actor's inventory.
    pub const fn inventory_mut(&mut self) -> &mut ActorInventory {
        &mut self.inventory
    }

    /// The tool in the main hand.
    pub const fn held_tool(&self) -> HeldTool {
        self.held_tool
    }

    /// Put `tool` in the main hand.
    pub const fn set_held_tool(&mut self, tool: HeldTool) {
        self.held_tool = tool;
    }

    /// Total experience points.
    pub const fn experience(&self) -> u32 {
        self.experience
    }

    /// Add `amount` experience points.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::ExperienceOverflow`] if the total would
    /// overflow; the total is unchanged in that case.
    pub fn add_experience(&mut self, amount: u32) -> Result<u32, ActorError> {
        self.experience = self
            .experience
            .checked_add(amount)
            .ok_or(ActorError::ExperienceOverflow {
                current: self.experience,
                amount,
            })?;
        Ok(self.experience)
    }

    /// Deliver a chat notice.
    pub fn notify(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Record a sound played to this actor.
    pub fn hear(&mut self, kind: FeedbackKind, position: CellPosition) {
        self.heard.push(HeardFeedback { kind, position });
    }

    /// Sounds heard so far, oldest first.
    pub fn heard(&self) -> &[HeardFeedback] {
        &self.heard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_actor_holds_nothing() {
        let actor = Actor::new("Steve");
        assert_eq!(actor.name(), "Steve");
        assert!(!actor.holds("autofarm.use"));
        assert_eq!(actor.experience(), 0);
    }

    #[test]
    fn operator_holds_everything() {
        let actor = Actor::operator("Alex");
        assert!(actor.holds("autofarm.reload"));
        assert!(actor.holds("anything.else"));
    }

    #[test]
    fn grant_and_revoke() {
        let mut actor = Actor::new("Steve");
        actor.grant("autofarm.use");
        assert!(actor.holds("autofarm.use"));
        actor.revoke("autofarm.use");
        assert!(!actor.holds("autofarm.use"));
    }

    #[test]
    fn experience_accumulates() {
        let mut actor = Actor::new("Steve");
        assert_eq!(actor.add_experience(3), Ok(3));
        assert_eq!(actor.add_experience(4), Ok(7));
    }

    #[test]
    fn experience_overflow_leaves_total_unchanged() {
        let mut actor = Actor::new("Steve");
        assert_eq!(actor.add_experience(u32::MAX), Ok(u32::MAX));
        assert_eq!(
            actor.add_experience(1),
            Err(ActorError::ExperienceOverflow {
                current: u32::MAX,
                amount: 1,
            })
        );
        assert_eq!(actor.experience(), u32::MAX);
    }

    #[test]
    fn notices_and_sounds_are_recorded_in_order() {
        let mut actor = Actor::new("Steve");
        actor.notify("first");
        actor.notify("second");
        assert_eq!(actor.notices(), ["first", "second"]);
        actor.hear(FeedbackKind::BlockCropBreak, CellPosition::new(0, 0, 0));
        assert_eq!(actor.heard().len(), 1);
    }
}
