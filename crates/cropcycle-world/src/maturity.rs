//! Maturity predicate for world cells.
//!
//! A cell is mature when its material is [`Growth::Staged`] and the cell
//! sits at the final stage. Static materials are never mature.

use cropcycle_types::Growth;

use crate::cell::WorldCell;

/// Whether `cell` is at the maximum stage for its material.
pub const fn is_mature(cell: &WorldCell) -> bool {
    match cell.kind().growth() {
        Growth::Staged { max_stage } => cell.stage() == max_stage,
        Growth::Static => false,
    }
}

#[cfg(test)]
mod tests {
    use cropcycle_types::ResourceKind;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn mature_crop_is_mature() {
        assert!(is_mature(&WorldCell::mature(ResourceKind::Wheat)));
        assert!(is_mature(&WorldCell::mature(ResourceKind::NetherWart)));
    }

    #[test]
    fn young_crop_is_not_mature() {
        assert!(!is_mature(&WorldCell::planted(ResourceKind::Wheat)));
        let almost = WorldCell::new(ResourceKind::Wheat, 6);
        assert_eq!(almost.map(|c| is_mature(&c)), Ok(false));
    }

    #[test]
    fn static_material_is_never_mature() {
        assert!(!is_mature(&WorldCell::mature(ResourceKind::Farmland)));
        assert!(!is_mature(&WorldCell::planted(ResourceKind::Air)));
    }

    proptest! {
        #[test]
        fn only_the_final_stage_is_mature(
            index in 0..ResourceKind::ALL.len(),
            stage in 0_u8..=7,
        ) {
            let kind = ResourceKind::ALL.get(index).copied().unwrap_or(ResourceKind::Air);
            if let Ok(cell) = WorldCell::new(kind, stage) {
                let expected = matches!(
                    kind.growth(),
                    Growth::Staged { max_stage } if max_stage == stage
                );
                prop_assert_eq!(is_mature(&cell), expected);
            }
        }
    }
}
