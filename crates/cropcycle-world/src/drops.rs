//! Harvest drop computation.
//!
//! Drops are a pure function of the cell and the held tool, so repeated
//! evaluation of the same cell yields the same [`DropSet`]. Counts follow
//! the vanilla means with fortune adding one unit per level to the
//! bonus-eligible stack.

use cropcycle_types::{DropSet, HeldTool, ItemKind, ItemStack, ResourceKind};

use crate::cell::WorldCell;
use crate::maturity::is_mature;

/// Base number of seeds dropped by mature wheat and beetroots.
pub const BASE_SEED_DROP: u32 = 2;

/// Base number of roots dropped by mature carrots and potatoes.
pub const BASE_ROOT_DROP: u32 = 3;

/// Base number of warts dropped by mature nether wart.
pub const BASE_WART_DROP: u32 = 3;

/// Compute the drops for breaking `cell` with `tool`.
///
/// Immature crops return their propagation item only; non-crop materials
/// drop nothing.
pub fn harvest_drops(cell: &WorldCell, tool: &HeldTool) -> DropSet {
    let bonus = u32::from(tool.fortune);
    let mature = is_mature(cell);

    match cell.kind() {
        ResourceKind::Wheat if mature => vec![
            ItemStack::new(ItemKind::Wheat, 1),
            ItemStack::new(ItemKind::WheatSeeds, BASE_SEED_DROP.saturating_add(bonus)),
        ],
        ResourceKind::Wheat => vec![ItemStack::new(ItemKind::WheatSeeds, 1)],
        ResourceKind::Carrots if mature => vec![ItemStack::new(
            ItemKind::Carrot,
            BASE_ROOT_DROP.saturating_add(bonus),
        )],
        ResourceKind::Carrots => vec![ItemStack::new(ItemKind::Carrot, 1)],
        ResourceKind::Potatoes if mature => vec![ItemStack::new(
            ItemKind::Potato,
            BASE_ROOT_DROP.saturating_add(bonus),
        )],
        ResourceKind::Potatoes => vec![ItemStack::new(ItemKind::Potato, 1)],
        ResourceKind::Beetroots if mature => vec![
            ItemStack::new(ItemKind::Beetroot, 1),
            ItemStack::new(
                ItemKind::BeetrootSeeds,
                BASE_SEED_DROP.saturating_add(bonus),
            ),
        ],
        ResourceKind::Beetroots => vec![ItemStack::new(ItemKind::BeetrootSeeds, 1)],
        ResourceKind::NetherWart if mature => vec![ItemStack::new(
            ItemKind::NetherWart,
            BASE_WART_DROP.saturating_add(bonus),
        )],
        ResourceKind::NetherWart => vec![ItemStack::new(ItemKind::NetherWart, 1)],
        ResourceKind::MelonStem
        | ResourceKind::PumpkinStem
        | ResourceKind::SweetBerryBush
        | ResourceKind::Cocoa
        | ResourceKind::Air
        | ResourceKind::Dirt
        | ResourceKind::Farmland
        | ResourceKind::SoulSand
        | ResourceKind::Stone
        | ResourceKind::GrassBlock => Vec::new(),
    }
}
