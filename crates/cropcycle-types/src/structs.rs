//! Core value types shared between the host adapters and the reactor.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{InteractionShape, ItemKind};
use crate::ids::ActorId;

/// Integer coordinates of a world cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    /// East-west coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
    /// North-south coordinate.
    pub z: i32,
}

impl CellPosition {
    /// Create a position from its three coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A quantity of one item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    /// The item.
    pub item: ItemKind,
    /// Number of units.
    pub count: u32,
}

impl ItemStack {
    /// Create a stack of `count` units of `item`.
    pub const fn new(item: ItemKind, count: u32) -> Self {
        Self { item, count }
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.item, self.count)
    }
}

/// Ordered drops produced by harvesting one cell with one tool.
///
/// Ephemeral: computed by the host, consumed once by the mutator.
pub type DropSet = Vec<ItemStack>;

/// Sum of the counts of a slice of stacks.
///
/// Returns `None` if the sum overflows `u32`.
pub fn total_count(stacks: &[ItemStack]) -> Option<u32> {
    stacks
        .iter()
        .try_fold(0_u32, |acc, stack| acc.checked_add(stack.count))
}

/// The tool an actor holds in the main hand when interacting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeldTool {
    /// The held item, `None` for an empty hand.
    pub item: Option<ItemKind>,
    /// Fortune enchantment level (0 when unenchanted).
    pub fortune: u8,
}

impl HeldTool {
    /// An empty hand.
    pub const fn bare_hand() -> Self {
        Self {
            item: None,
            fortune: 0,
        }
    }

    /// A held item with the given fortune level.
    pub const fn with_fortune(item: ItemKind, fortune: u8) -> Self {
        Self {
            item: Some(item),
            fortune,
        }
    }
}

/// Interaction event delivered by the host for every player click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// The acting player.
    pub actor: ActorId,
    /// What kind of click this was.
    pub shape: InteractionShape,
    /// The targeted cell, if the click hit one.
    pub target: Option<CellPosition>,
}

impl InteractionEvent {
    /// A right click on the cell at `position`.
    pub const fn primary_on(actor: ActorId, position: CellPosition) -> Self {
        Self {
            actor,
            shape: InteractionShape::PrimaryOnCell,
            target: Some(position),
        }
    }
}
