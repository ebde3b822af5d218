//! Bounded slot inventory for actors.
//!
//! An inventory is a fixed number of slots, each empty or holding one
//! stack no larger than the item's stack limit. Insertion tops up partial
//! stacks of the same item first, then claims empty slots in order, and
//! hands back whatever did not fit. Slots are never exposed for direct
//! mutation.

use serde::Serialize;

use cropcycle_types::{ItemKind, ItemStack};

use crate::error::ActorError;

/// Slot count of a standard player inventory.
pub const DEFAULT_SLOT_COUNT: usize = 36;

/// A bounded multiset of items held by one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorInventory {
    slots: Vec<Option<ItemStack>>,
}

impl Default for ActorInventory {
    fn default() -> Self {
        Self {
            slots: vec![None; DEFAULT_SLOT_COUNT],
        }
    }
}

impl ActorInventory {
    /// Create an empty inventory with `slot_count` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::NoSlots`] when `slot_count` is zero.
    pub fn new(slot_count: usize) -> Result<Self, ActorError> {
        if slot_count == 0 {
            return Err(ActorError::NoSlots);
        }
        Ok(Self {
            slots: vec![None; slot_count],
        })
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// How many more units of `item` would fit.
    pub fn remaining_capacity(&self, item: ItemKind) -> u32 {
        let limit = item.max_stack_size();
        self.slots.iter().fold(0_u32, |room, slot| {
            let free = match slot {
                None => limit,
                Some(stack) if stack.item == item => limit.saturating_sub(stack.count),
                Some(_) => 0,
            };
            room.saturating_add(free)
        })
    }

    /// Insert as much of `stack` as fits and return the leftover count.
    ///
    /// A leftover of zero means the whole stack was stored. On error the
    /// inventory may hold part of the stack; the error only arises from an
    /// overflow that slot limits already rule out.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::ArithmeticOverflow`] if a slot count overflows.
    pub fn insert(&mut self, stack: ItemStack) -> Result<u32, ActorError> {
        let limit = stack.item.max_stack_size();
        let mut remaining = stack.count;

        // Top up partial stacks of the same item.
        for existing in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if existing.item != stack.item || existing.count >= limit {
                continue;
            }
            let moved = limit.saturating_sub(existing.count).min(remaining);
            existing.count = existing.count.checked_add(moved).ok_or_else(|| {
                ActorError::ArithmeticOverflow {
                    context: String::from("slot count overflow while stacking"),
                }
            })?;
            remaining = remaining.saturating_sub(moved);
        }

        // Claim empty slots.
        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            if slot.is_none() {
                let moved = limit.min(remaining);
                *slot = Some(ItemStack::new(stack.item, moved));
                remaining = remaining.saturating_sub(moved);
            }
        }

        Ok(remaining)
    }

    /// Total units of `item` held.
    pub fn count_of(&self, item: ItemKind) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|stack| stack.item == item)
            .fold(0_u32, |total, stack| total.saturating_add(stack.count))
    }

    /// Total units of every item held.
    pub fn total_items(&self) -> u32 {
        self.slots
            .iter()
            .flatten()
            .fold(0_u32, |total, stack| total.saturating_add(stack.count))
    }

    /// Whether no slot is empty and every stack is at its limit.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| {
            slot.is_some_and(|stack| stack.count >= stack.item.max_stack_size())
        })
    }

    /// Occupied slots in slot order.
    pub fn stacks(&self) -> impl Iterator<Item = ItemStack> + '_ {
        self.slots.iter().flatten().copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn small_inventory(slots: usize) -> ActorInventory {
        ActorInventory::new(slots).unwrap()
    }

    #[test]
    fn zero_slots_is_rejected() {
        assert_eq!(ActorInventory::new(0), Err(ActorError::NoSlots));
    }

    #[test]
    fn default_inventory_has_player_size() {
        let inv = ActorInventory::default();
        assert_eq!(inv.slot_count(), DEFAULT_SLOT_COUNT);
        assert_eq!(inv.remaining_capacity(ItemKind::Wheat), 36 * 64);
    }

    #[test]
    fn insert_into_empty_inventory() {
        let mut inv = small_inventory(2);
        assert_eq!(inv.insert(ItemStack::new(ItemKind::Wheat, 10)), Ok(0));
        assert_eq!(inv.count_of(ItemKind::Wheat), 10);
        assert_eq!(inv.stacks().count(), 1);
    }

    #[test]
    fn insert_tops_up_partial_stack_before_new_slot() {
        let mut inv = small_inventory(3);
        inv.insert(ItemStack::new(ItemKind::Carrot, 60)).unwrap();
        inv.insert(ItemStack::new(ItemKind::Carrot, 10)).unwrap();
        let stacks: Vec<ItemStack> = inv.stacks().collect();
        assert_eq!(
            stacks,
            vec![
                ItemStack::new(ItemKind::Carrot, 64),
                ItemStack::new(ItemKind::Carrot, 6),
            ]
        );
    }

    #[test]
    fn insert_returns_leftover_when_full() {
        let mut inv = small_inventory(1);
        assert_eq!(inv.insert(ItemStack::new(ItemKind::Potato, 70)), Ok(6));
        assert!(inv.is_full());
        assert_eq!(inv.insert(ItemStack::new(ItemKind::Wheat, 3)), Ok(3));
        assert_eq!(inv.remaining_capacity(ItemKind::Wheat), 0);
    }

    #[test]
    fn tools_take_one_slot_each() {
        let mut inv = small_inventory(2);
        assert_eq!(inv.insert(ItemStack::new(ItemKind::IronHoe, 3)), Ok(1));
        assert_eq!(inv.count_of(ItemKind::IronHoe), 2);
        assert!(inv.is_full());
    }

    #[test]
    fn remaining_capacity_counts_matching_partials_only() {
        let mut inv = small_inventory(3);
        inv.insert(ItemStack::new(ItemKind::Wheat, 60)).unwrap();
        inv.insert(ItemStack::new(ItemKind::WheatSeeds, 1)).unwrap();
        assert_eq!(inv.remaining_capacity(ItemKind::Wheat), 4 + 64);
        assert_eq!(inv.remaining_capacity(ItemKind::WheatSeeds), 63 + 64);
    }

    proptest! {
        #[test]
        fn insert_conserves_units(first in 0_u32..300, second in 0_u32..300) {
            let mut inv = small_inventory(4);
            let left_a = inv.insert(ItemStack::new(ItemKind::Wheat, first)).unwrap();
            let left_b = inv.insert(ItemStack::new(ItemKind::Beetroot, second)).unwrap();
            let stored = inv.total_items();
            prop_assert_eq!(stored + left_a + left_b, first + second);
            prop_assert!(stored <= 4 * 64);
        }
    }
}
