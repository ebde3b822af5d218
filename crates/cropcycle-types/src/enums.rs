//! Enumeration types for the crop cycle reactor.
//!
//! Material and item names follow the host's fixed vocabulary and serialize
//! in `SCREAMING_SNAKE_CASE`, the same spelling operators see in listings.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Growth capability
// ---------------------------------------------------------------------------

/// Whether a material carries a maturity-stage attribute.
///
/// Every [`ResourceKind`] declares its growth capability statically; the
/// maturity check pattern-matches on this tag instead of probing the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Growth {
    /// The material grows through stages `0..=max_stage`.
    Staged {
        /// The final (fully mature) stage.
        max_stage: u8,
    },
    /// The material has no growth stages.
    Static,
}

impl Growth {
    /// Highest stage a cell of this growth class may hold (`0` for static).
    pub const fn max_stage(self) -> u8 {
        match self {
            Self::Staged { max_stage } => max_stage,
            Self::Static => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

/// The material occupying a world cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    // --- Cyclable crops ---
    /// Wheat crop, eight growth stages.
    Wheat,
    /// Carrot crop, eight growth stages.
    Carrots,
    /// Potato crop, eight growth stages.
    Potatoes,
    /// Beetroot crop, four growth stages.
    Beetroots,
    /// Nether wart, four growth stages.
    NetherWart,

    // --- Staged, not cyclable ---
    /// Melon stem.
    MelonStem,
    /// Pumpkin stem.
    PumpkinStem,
    /// Sweet berry bush.
    SweetBerryBush,
    /// Cocoa pod.
    Cocoa,

    // --- Static ---
    /// Empty space.
    Air,
    /// Plain dirt.
    Dirt,
    /// Tilled soil.
    Farmland,
    /// Soul sand (nether wart soil).
    SoulSand,
    /// Stone.
    Stone,
    /// Grass block.
    GrassBlock,
}

impl ResourceKind {
    /// Every material, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Wheat,
        Self::Carrots,
        Self::Potatoes,
        Self::Beetroots,
        Self::NetherWart,
        Self::MelonStem,
        Self::PumpkinStem,
        Self::SweetBerryBush,
        Self::Cocoa,
        Self::Air,
        Self::Dirt,
        Self::Farmland,
        Self::SoulSand,
        Self::Stone,
        Self::GrassBlock,
    ];

    /// The growth capability this material declares.
    pub const fn growth(self) -> Growth {
        match self {
            Self::Wheat | Self::Carrots | Self::Potatoes | Self::MelonStem | Self::PumpkinStem => {
                Growth::Staged { max_stage: 7 }
            }
            Self::Beetroots | Self::NetherWart | Self::SweetBerryBush => {
                Growth::Staged { max_stage: 3 }
            }
            Self::Cocoa => Growth::Staged { max_stage: 2 },
            Self::Air
            | Self::Dirt
            | Self::Farmland
            | Self::SoulSand
            | Self::Stone
            | Self::GrassBlock => Growth::Static,
        }
    }

    /// Host vocabulary name, e.g. `NETHER_WART`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wheat => "WHEAT",
            Self::Carrots => "CARROTS",
            Self::Potatoes => "POTATOES",
            Self::Beetroots => "BEETROOTS",
            Self::NetherWart => "NETHER_WART",
            Self::MelonStem => "MELON_STEM",
            Self::PumpkinStem => "PUMPKIN_STEM",
            Self::SweetBerryBush => "SWEET_BERRY_BUSH",
            Self::Cocoa => "COCOA",
            Self::Air => "AIR",
            Self::Dirt => "DIRT",
            Self::Farmland => "FARMLAND",
            Self::SoulSand => "SOUL_SAND",
            Self::Stone => "STONE",
            Self::GrassBlock => "GRASS_BLOCK",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// An item that can sit in an inventory or lie in the world as a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    /// Harvested wheat.
    Wheat,
    /// Wheat seeds.
    WheatSeeds,
    /// Carrot (also plants carrots).
    Carrot,
    /// Potato (also plants potatoes).
    Potato,
    /// Harvested beetroot.
    Beetroot,
    /// Beetroot seeds.
    BeetrootSeeds,
    /// Nether wart (also plants nether wart).
    NetherWart,
    /// Wooden hoe.
    WoodenHoe,
    /// Iron hoe.
    IronHoe,
    /// Diamond hoe.
    DiamondHoe,
}

impl ItemKind {
    /// Every item kind.
    pub const ALL: [Self; 10] = [
        Self::Wheat,
        Self::WheatSeeds,
        Self::Carrot,
        Self::Potato,
        Self::Beetroot,
        Self::BeetrootSeeds,
        Self::NetherWart,
        Self::WoodenHoe,
        Self::IronHoe,
        Self::DiamondHoe,
    ];

    /// Largest stack a single inventory slot holds for this item.
    pub const fn max_stack_size(self) -> u32 {
        match self {
            Self::WoodenHoe | Self::IronHoe | Self::DiamondHoe => 1,
            Self::Wheat
            | Self::WheatSeeds
            | Self::Carrot
            | Self::Potato
            | Self::Beetroot
            | Self::BeetrootSeeds
            | Self::NetherWart => 64,
        }
    }

    /// Host vocabulary name, e.g. `WHEAT_SEEDS`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wheat => "WHEAT",
            Self::WheatSeeds => "WHEAT_SEEDS",
            Self::Carrot => "CARROT",
            Self::Potato => "POTATO",
            Self::Beetroot => "BEETROOT",
            Self::BeetrootSeeds => "BEETROOT_SEEDS",
            Self::NetherWart => "NETHER_WART",
            Self::WoodenHoe => "WOODEN_HOE",
            Self::IronHoe => "IRON_HOE",
            Self::DiamondHoe => "DIAMOND_HOE",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Interaction shape
// ---------------------------------------------------------------------------

/// The shape of a player interaction reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionShape {
    /// Right click against a targeted cell. The only shape the reactor acts on.
    PrimaryOnCell,
    /// Right click into the air.
    PrimaryInAir,
    /// Left click against a targeted cell.
    SecondaryOnCell,
    /// Left click into the air.
    SecondaryInAir,
    /// Stepping on a pressure-sensitive cell.
    Physical,
}

// ---------------------------------------------------------------------------
// Feedback kinds
// ---------------------------------------------------------------------------

/// Acknowledgement sound played at a cell after a successful cycle.
///
/// Configured as a free-form string and parsed only at the moment of use,
/// so a typo in the configuration costs one warning per cycle instead of
/// a failed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackKind {
    /// Item pickup pop.
    EntityItemPickup,
    /// Experience orb chime.
    EntityExperienceOrbPickup,
    /// Crop breaking.
    BlockCropBreak,
    /// Nether wart breaking.
    BlockNetherWartBreak,
    /// Grass breaking.
    BlockGrassBreak,
    /// Crop planting.
    ItemCropPlant,
    /// Nether wart planting.
    ItemNetherWartPlant,
    /// Interface click.
    UiButtonClick,
}

impl FeedbackKind {
    /// Every feedback kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::EntityItemPickup,
        Self::EntityExperienceOrbPickup,
        Self::BlockCropBreak,
        Self::BlockNetherWartBreak,
        Self::BlockGrassBreak,
        Self::ItemCropPlant,
        Self::ItemNetherWartPlant,
        Self::UiButtonClick,
    ];

    /// Host vocabulary name, e.g. `ENTITY_ITEM_PICKUP`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EntityItemPickup => "ENTITY_ITEM_PICKUP",
            Self::EntityExperienceOrbPickup => "ENTITY_EXPERIENCE_ORB_PICKUP",
            Self::BlockCropBreak => "BLOCK_CROP_BREAK",
            Self::BlockNetherWartBreak => "BLOCK_NETHER_WART_BREAK",
            Self::BlockGrassBreak => "BLOCK_GRASS_BREAK",
            Self::ItemCropPlant => "ITEM_CROP_PLANT",
            Self::ItemNetherWartPlant => "ITEM_NETHER_WART_PLANT",
            Self::UiButtonClick => "UI_BUTTON_CLICK",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured feedback name that matches no [`FeedbackKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feedback kind: {0}")]
pub struct UnknownFeedbackKind(pub String);

impl FromStr for FeedbackKind {
    type Err = UnknownFeedbackKind;

    /// Exact, case-sensitive match against the host names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownFeedbackKind(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crops_declare_vanilla_stage_bounds() {
        assert_eq!(ResourceKind::Wheat.growth().max_stage(), 7);
        assert_eq!(ResourceKind::Beetroots.growth().max_stage(), 3);
        assert_eq!(ResourceKind::NetherWart.growth().max_stage(), 3);
        assert_eq!(ResourceKind::Cocoa.growth().max_stage(), 2);
        assert_eq!(ResourceKind::Farmland.growth(), Growth::Static);
        assert_eq!(ResourceKind::Farmland.growth().max_stage(), 0);
    }

    #[test]
    fn feedback_kind_parses_host_names() {
        assert_eq!(
            "ENTITY_ITEM_PICKUP".parse::<FeedbackKind>(),
            Ok(FeedbackKind::EntityItemPickup)
        );
        for kind in FeedbackKind::ALL {
            assert_eq!(kind.name().parse::<FeedbackKind>(), Ok(kind));
        }
    }

    #[test]
    fn feedback_kind_is_case_sensitive() {
        let err = "entity_item_pickup".parse::<FeedbackKind>();
        assert_eq!(
            err,
            Err(UnknownFeedbackKind(String::from("entity_item_pickup")))
        );
    }

    #[test]
    fn unknown_feedback_kind_names_the_value() {
        let err = "NOT_A_SOUND".parse::<FeedbackKind>().err();
        assert_eq!(
            err.map(|e| e.to_string()),
            Some(String::from("unknown feedback kind: NOT_A_SOUND"))
        );
    }

    #[test]
    fn names_match_serde_spelling() {
        let yaml = serde_yml::to_string(&ResourceKind::NetherWart).ok();
        assert_eq!(yaml.as_deref().map(str::trim), Some("NETHER_WART"));
        let yaml = serde_yml::to_string(&ItemKind::BeetrootSeeds).ok();
        assert_eq!(yaml.as_deref().map(str::trim), Some("BEETROOT_SEEDS"));
    }

    #[test]
    fn tools_do_not_stack() {
        assert_eq!(ItemKind::IronHoe.max_stack_size(), 1);
        assert_eq!(ItemKind::WheatSeeds.max_stack_size(), 64);
    }
}
