//! The static table of cyclable crops and their propagation items.
//!
//! The table is fixed; "reloading" the catalog re-runs construction from
//! [`STANDARD_CYCLE_TABLE`] and replaces the whole value.

use std::collections::BTreeMap;

use serde::Serialize;

use cropcycle_types::{ItemKind, ResourceKind};

/// Crop material to the item that replants it.
pub const STANDARD_CYCLE_TABLE: [(ResourceKind, ItemKind); 5] = [
    (ResourceKind::Wheat, ItemKind::WheatSeeds),
    (ResourceKind::Carrots, ItemKind::Carrot),
    (ResourceKind::Potatoes, ItemKind::Potato),
    (ResourceKind::Beetroots, ItemKind::BeetrootSeeds),
    (ResourceKind::NetherWart, ItemKind::NetherWart),
];

/// Immutable mapping from a crop material to its propagation item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceCycleCatalog {
    entries: BTreeMap<ResourceKind, ItemKind>,
}

impl ResourceCycleCatalog {
    /// Build the catalog from [`STANDARD_CYCLE_TABLE`].
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_CYCLE_TABLE)
    }

    /// Build a catalog from arbitrary pairs. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ResourceKind, ItemKind)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The propagation item for `kind`, if the crop is cyclable.
    pub fn seed_for(&self, kind: ResourceKind) -> Option<ItemKind> {
        self.entries.get(&kind).copied()
    }

    /// Whether `kind` is cyclable.
    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Number of cyclable crops.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in material order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, ItemKind)> + '_ {
        self.entries.iter().map(|(kind, seed)| (*kind, *seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_five_crops() {
        let catalog = ResourceCycleCatalog::standard();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn seed_lookup() {
        let catalog = ResourceCycleCatalog::standard();
        assert_eq!(catalog.seed_for(ResourceKind::Wheat), Some(ItemKind::WheatSeeds));
        assert_eq!(catalog.seed_for(ResourceKind::Carrots), Some(ItemKind::Carrot));
        assert_eq!(catalog.seed_for(ResourceKind::Potatoes), Some(ItemKind::Potato));
        assert_eq!(
            catalog.seed_for(ResourceKind::Beetroots),
            Some(ItemKind::BeetrootSeeds)
        );
        assert_eq!(
            catalog.seed_for(ResourceKind::NetherWart),
            Some(ItemKind::NetherWart)
        );
    }

    #[test]
    fn staged_non_crops_are_absent() {
        let catalog = ResourceCycleCatalog::standard();
        assert!(!catalog.contains(ResourceKind::MelonStem));
        assert!(!catalog.contains(ResourceKind::SweetBerryBush));
        assert_eq!(catalog.seed_for(ResourceKind::Farmland), None);
    }

    #[test]
    fn rebuilding_yields_an_equal_catalog() {
        assert_eq!(
            ResourceCycleCatalog::standard(),
            ResourceCycleCatalog::standard()
        );
    }

    #[test]
    fn iter_is_ordered_by_material() {
        let kinds: Vec<ResourceKind> = ResourceCycleCatalog::standard()
            .iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::Wheat,
                ResourceKind::Carrots,
                ResourceKind::Potatoes,
                ResourceKind::Beetroots,
                ResourceKind::NetherWart,
            ]
        );
    }
}
