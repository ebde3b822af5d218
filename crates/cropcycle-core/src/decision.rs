//! Go/no-go decision for the harvest-and-replant cycle.
//!
//! Every player click in the world reaches [`CycleDecisionEngine::decide`],
//! so the checks run cheapest first and each one short-circuits:
//!
//! 1. global switch,
//! 2. interaction shape,
//! 3. target cell resolves,
//! 4. use capability (when required),
//! 5. material is in the catalog,
//! 6. cell is mature.
//!
//! The capability check precedes the catalog lookup so an unauthorized
//! actor learns nothing about which crops are cyclable. `decide` is a pure
//! read: it keeps no counters and logs nothing, and the same inputs always
//! yield the same [`Decision`].

use cropcycle_actors::{Capability, Permissible, PermissionGate};
use cropcycle_types::{CellPosition, InteractionEvent, InteractionShape, ItemKind, ResourceKind};
use cropcycle_world::{ResourceCycleCatalog, is_mature};

use crate::config::EngineSettings;
use crate::host::WorldAccess;

/// The crop to cycle, resolved by a successful decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclePlan {
    /// The targeted cell.
    pub position: CellPosition,
    /// The cell's crop material.
    pub kind: ResourceKind,
    /// The crop's propagation item.
    pub seed: ItemKind,
}

/// Outcome of [`CycleDecisionEngine::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run the compound mutation for this plan.
    Proceed(CyclePlan),
    /// Leave the interaction to the host untouched.
    Ignore,
}

impl Decision {
    /// Whether the host must cancel its default handling of the click.
    ///
    /// Only a `Proceed` suppresses; letting the host also harvest would
    /// double-count drops.
    pub const fn suppresses_default(&self) -> bool {
        matches!(self, Self::Proceed(_))
    }

    /// The plan, when the decision is `Proceed`.
    pub const fn plan(&self) -> Option<&CyclePlan> {
        match self {
            Self::Proceed(plan) => Some(plan),
            Self::Ignore => None,
        }
    }
}

/// Stateless decision engine bound to one capability namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleDecisionEngine {
    gate: PermissionGate,
}

impl CycleDecisionEngine {
    /// Create an engine that checks capabilities through `gate`.
    pub const fn new(gate: PermissionGate) -> Self {
        Self { gate }
    }

    /// The gate used for the use-capability check.
    pub const fn gate(&self) -> &PermissionGate {
        &self.gate
    }

    /// Decide whether `event` triggers a cycle.
    pub fn decide<W, P>(
        &self,
        event: &InteractionEvent,
        settings: &EngineSettings,
        catalog: &ResourceCycleCatalog,
        world: &W,
        actor: &P,
    ) -> Decision
    where
        W: WorldAccess + ?Sized,
        P: Permissible + ?Sized,
    {
        if !settings.enabled {
            return Decision::Ignore;
        }

        if event.shape != InteractionShape::PrimaryOnCell {
            return Decision::Ignore;
        }

        let Some(position) = event.target else {
            return Decision::Ignore;
        };
        let Some(cell) = world.cell(position) else {
            return Decision::Ignore;
        };

        if settings.require_permission && !self.gate.allows(actor, Capability::Use) {
            return Decision::Ignore;
        }

        let kind = cell.kind();
        let Some(seed) = catalog.seed_for(kind) else {
            return Decision::Ignore;
        };

        if !is_mature(&cell) {
            return Decision::Ignore;
        }

        Decision::Proceed(CyclePlan {
            position,
            kind,
            seed,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cropcycle_actors::Actor;
    use cropcycle_types::ActorId;
    use cropcycle_world::{GridWorld, WorldCell};
    use proptest::prelude::*;

    use super::*;

    fn pos() -> CellPosition {
        CellPosition::new(4, 64, 4)
    }

    fn world_with(cell: WorldCell) -> GridWorld {
        let mut world = GridWorld::new();
        world.set_cell(pos(), cell);
        world
    }

    fn farmer() -> Actor {
        let mut actor = Actor::new("Farmer");
        actor.grant("autofarm.use");
        actor
    }

    fn click(actor: &Actor) -> InteractionEvent {
        InteractionEvent::primary_on(actor.id(), pos())
    }

    fn decide(world: &GridWorld, actor: &Actor, settings: &EngineSettings) -> Decision {
        CycleDecisionEngine::default().decide(
            &click(actor),
            settings,
            &ResourceCycleCatalog::standard(),
            world,
            actor,
        )
    }

    #[test]
    fn mature_wheat_proceeds_and_suppresses() {
        let world = world_with(WorldCell::mature(ResourceKind::Wheat));
        let decision = decide(&world, &farmer(), &EngineSettings::default());
        assert_eq!(
            decision,
            Decision::Proceed(CyclePlan {
                position: pos(),
                kind: ResourceKind::Wheat,
                seed: ItemKind::WheatSeeds,
            })
        );
        assert!(decision.suppresses_default());
        assert_eq!(decision.plan().map(|p| p.seed), Some(ItemKind::WheatSeeds));
    }

    #[test]
    fn disabled_ignores_and_does_not_suppress() {
        let world = world_with(WorldCell::mature(ResourceKind::Wheat));
        let settings = EngineSettings {
            enabled: false,
            ..EngineSettings::default()
        };
        let decision = decide(&world, &farmer(), &settings);
        assert_eq!(decision, Decision::Ignore);
        assert!(!decision.suppresses_default());
        assert_eq!(decision.plan(), None);
    }

    #[test]
    fn other_interaction_shapes_are_ignored() {
        let world = world_with(WorldCell::mature(ResourceKind::Wheat));
        let actor = farmer();
        for shape in [
            InteractionShape::PrimaryInAir,
            InteractionShape::SecondaryOnCell,
            InteractionShape::SecondaryInAir,
            InteractionShape::Physical,
        ] {
            let event = InteractionEvent {
                actor: actor.id(),
                shape,
                target: Some(pos()),
            };
            let decision = CycleDecisionEngine::default().decide(
                &event,
                &EngineSettings::default(),
                &ResourceCycleCatalog::standard(),
                &world,
                &actor,
            );
            assert_eq!(decision, Decision::Ignore, "shape {shape:?}");
        }
    }

    #[test]
    fn missing_or_unresolvable_target_is_ignored() {
        let world = world_with(WorldCell::mature(ResourceKind::Wheat));
        let actor = farmer();
        let engine = CycleDecisionEngine::default();
        let catalog = ResourceCycleCatalog::standard();
        let settings = EngineSettings::default();

        let no_target = InteractionEvent {
            actor: actor.id(),
            shape: InteractionShape::PrimaryOnCell,
            target: None,
        };
        assert_eq!(
            engine.decide(&no_target, &settings, &catalog, &world, &actor),
            Decision::Ignore
        );

        let elsewhere = InteractionEvent::primary_on(actor.id(), CellPosition::new(99, 0, 99));
        assert_eq!(
            engine.decide(&elsewhere, &settings, &catalog, &world, &actor),
            Decision::Ignore
        );
    }

    #[test]
    fn missing_capability_is_ignored_when_required() {
        let world = world_with(WorldCell::mature(ResourceKind::Wheat));
        let stranger = Actor::new("Stranger");
        assert_eq!(
            decide(&world, &stranger, &EngineSettings::default()),
            Decision::Ignore
        );

        let open = EngineSettings {
            require_permission: false,
            ..EngineSettings::default()
        };
        assert!(decide(&world, &stranger, &open).suppresses_default());
    }

    #[test]
    fn capability_is_namespaced() {
        let world = world_with(WorldCell::mature(ResourceKind::Wheat));
        let mut actor = Actor::new("Farmer");
        actor.grant("farm.use");
        let engine = CycleDecisionEngine::new(PermissionGate::new("farm"));
        let decision = engine.decide(
            &click(&actor),
            &EngineSettings::default(),
            &ResourceCycleCatalog::standard(),
            &world,
            &actor,
        );
        assert!(decision.suppresses_default());
        assert_eq!(decide(&world, &actor, &EngineSettings::default()), Decision::Ignore);
    }

    #[test]
    fn immature_crop_is_ignored() {
        let world = world_with(WorldCell::new(ResourceKind::Carrots, 6).unwrap());
        assert_eq!(
            decide(&world, &farmer(), &EngineSettings::default()),
            Decision::Ignore
        );
    }

    #[test]
    fn mature_non_catalog_crop_is_ignored() {
        let world = world_with(WorldCell::mature(ResourceKind::SweetBerryBush));
        assert_eq!(
            decide(&world, &farmer(), &EngineSettings::default()),
            Decision::Ignore
        );
    }

    #[test]
    fn every_catalog_crop_proceeds_when_mature() {
        let catalog = ResourceCycleCatalog::standard();
        for (kind, seed) in catalog.iter() {
            let world = world_with(WorldCell::mature(kind));
            let decision = decide(&world, &farmer(), &EngineSettings::default());
            assert_eq!(
                decision,
                Decision::Proceed(CyclePlan {
                    position: pos(),
                    kind,
                    seed,
                })
            );
        }
    }

    #[test]
    fn event_actor_id_is_not_consulted_for_capability() {
        // The host resolves the actor; the engine only asks it for capabilities.
        let world = world_with(WorldCell::mature(ResourceKind::Potatoes));
        let actor = farmer();
        let event = InteractionEvent::primary_on(ActorId::new(), pos());
        let decision = CycleDecisionEngine::default().decide(
            &event,
            &EngineSettings::default(),
            &ResourceCycleCatalog::standard(),
            &world,
            &actor,
        );
        assert!(decision.suppresses_default());
    }

    fn any_settings() -> impl Strategy<Value = EngineSettings> {
        (any::<bool>(), any::<bool>()).prop_map(|(enabled, require_permission)| EngineSettings {
            enabled,
            require_permission,
            ..EngineSettings::default()
        })
    }

    proptest! {
        #[test]
        fn non_catalog_cells_always_ignore(
            index in 0..ResourceKind::ALL.len(),
            stage in 0_u8..=7,
            settings in any_settings(),
            permitted in any::<bool>(),
        ) {
            let kind = ResourceKind::ALL.get(index).copied().unwrap_or(ResourceKind::Air);
            prop_assume!(!ResourceCycleCatalog::standard().contains(kind));
            if let Ok(cell) = WorldCell::new(kind, stage) {
                let world = world_with(cell);
                let actor = if permitted { farmer() } else { Actor::new("Stranger") };
                prop_assert_eq!(decide(&world, &actor, &settings), Decision::Ignore);
            }
        }

        #[test]
        fn ignore_is_idempotent(
            index in 0..ResourceKind::ALL.len(),
            stage in 0_u8..=7,
            settings in any_settings(),
        ) {
            let kind = ResourceKind::ALL.get(index).copied().unwrap_or(ResourceKind::Air);
            if let Ok(cell) = WorldCell::new(kind, stage) {
                let world = world_with(cell);
                let actor = Actor::new("Stranger");
                let first = decide(&world, &actor, &settings);
                for _ in 0..5 {
                    prop_assert_eq!(decide(&world, &actor, &settings), first);
                }
                prop_assert_eq!(world.cell(pos()), Some(cell));
            }
        }
    }
}
