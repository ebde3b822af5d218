//! Single entry point for host interaction events.
//!
//! The host calls [`Reactor::handle_interaction`] synchronously for every
//! click and honours [`InteractionOutcome::suppress_default`] afterwards.
//! Each call samples the configuration snapshot once, so a reload that lands
//! mid-interaction cannot change the settings that interaction runs with.

use std::sync::Arc;

use tracing::info;

use cropcycle_actors::PermissionGate;
use cropcycle_types::InteractionEvent;

use crate::context::ConfigurationContext;
use crate::decision::{CycleDecisionEngine, Decision};
use crate::error::CycleFault;
use crate::host::{ActorAccess, WorldAccess};
use crate::mutator::{CompoundMutator, CycleReport};

/// What the reactor did with an interaction.
#[derive(Debug)]
pub enum InteractionOutcome {
    /// Preconditions failed; the host handles the click normally.
    Ignored,
    /// The cycle ran to completion.
    Cycled(CycleReport),
    /// The cycle stopped partway and may be partially applied.
    Faulted(CycleFault),
}

impl InteractionOutcome {
    /// Whether the host must cancel its default handling of the click.
    ///
    /// True for a fault as well: the cell may already be replanted, and
    /// letting the host break it would discard the new crop.
    pub const fn suppress_default(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// The report of a completed cycle.
    pub const fn report(&self) -> Option<&CycleReport> {
        match self {
            Self::Cycled(report) => Some(report),
            Self::Ignored | Self::Faulted(_) => None,
        }
    }

    /// The fault of an interrupted cycle.
    pub const fn fault(&self) -> Option<&CycleFault> {
        match self {
            Self::Faulted(fault) => Some(fault),
            Self::Ignored | Self::Cycled(_) => None,
        }
    }
}

/// Wires the configuration context, decision engine, and mutator together.
#[derive(Debug)]
pub struct Reactor {
    context: Arc<ConfigurationContext>,
    engine: CycleDecisionEngine,
    mutator: CompoundMutator,
}

impl Reactor {
    /// Build a reactor over a loaded context.
    pub const fn new(context: Arc<ConfigurationContext>, gate: PermissionGate) -> Self {
        Self {
            context,
            engine: CycleDecisionEngine::new(gate),
            mutator: CompoundMutator::new(),
        }
    }

    /// The shared configuration context.
    pub const fn context(&self) -> &Arc<ConfigurationContext> {
        &self.context
    }

    /// The decision engine.
    pub const fn engine(&self) -> &CycleDecisionEngine {
        &self.engine
    }

    /// Log startup.
    pub fn on_enable(&self) {
        let snapshot = self.context.snapshot();
        info!(
            enabled = snapshot.settings.enabled,
            crops = snapshot.catalog.len(),
            namespace = self.engine.gate().namespace(),
            "Crop cycle reactor enabled"
        );
    }

    /// Log shutdown.
    pub fn on_disable(&self) {
        info!("Crop cycle reactor disabled");
    }

    /// React to one interaction event.
    ///
    /// Never fails: host faults come back as
    /// [`InteractionOutcome::Faulted`] after being logged. Containment
    /// covers errors returned by the host seams, not panics raised inside
    /// them.
    pub fn handle_interaction<A, W>(
        &self,
        event: &InteractionEvent,
        actor: &mut A,
        world: &mut W,
    ) -> InteractionOutcome
    where
        A: ActorAccess + ?Sized,
        W: WorldAccess + ?Sized,
    {
        let snapshot = self.context.snapshot();
        let decision = self.engine.decide(
            event,
            &snapshot.settings,
            &snapshot.catalog,
            &*world,
            &*actor,
        );

        let Decision::Proceed(plan) = decision else {
            return InteractionOutcome::Ignored;
        };

        match self.mutator.apply(actor, world, &plan, &snapshot.settings) {
            Ok(report) => InteractionOutcome::Cycled(report),
            Err(fault) => InteractionOutcome::Faulted(fault),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cropcycle_actors::Actor;
    use cropcycle_types::{CellPosition, InteractionShape, ItemKind, ResourceKind};
    use cropcycle_world::{GridWorld, WorldCell};

    use super::*;
    use crate::config::{EngineSettings, StaticSettingsSource};

    fn reactor(settings: EngineSettings) -> Reactor {
        let context = ConfigurationContext::load(StaticSettingsSource(settings)).unwrap();
        Reactor::new(Arc::new(context), PermissionGate::default())
    }

    fn setup() -> (GridWorld, Actor, CellPosition) {
        let pos = CellPosition::new(2, 64, 2);
        let mut world = GridWorld::new();
        world.set_cell(pos, WorldCell::mature(ResourceKind::Beetroots));
        (world, Actor::operator("Alex"), pos)
    }

    #[test]
    fn mature_crop_is_cycled_and_suppressed() {
        let (mut world, mut actor, pos) = setup();
        let event = InteractionEvent::primary_on(actor.id(), pos);
        let outcome =
            reactor(EngineSettings::default()).handle_interaction(&event, &mut actor, &mut world);

        assert!(outcome.suppress_default());
        let report = outcome.report().unwrap();
        assert_eq!(report.kind, ResourceKind::Beetroots);
        assert_eq!(world.cell(pos), Some(WorldCell::planted(ResourceKind::Beetroots)));
        assert_eq!(actor.inventory().count_of(ItemKind::Beetroot), 1);
        assert_eq!(actor.inventory().count_of(ItemKind::BeetrootSeeds), 1);
    }

    #[test]
    fn ignored_interaction_leaves_world_alone() {
        let (mut world, mut actor, pos) = setup();
        let event = InteractionEvent {
            actor: actor.id(),
            shape: InteractionShape::SecondaryOnCell,
            target: Some(pos),
        };
        let outcome =
            reactor(EngineSettings::default()).handle_interaction(&event, &mut actor, &mut world);

        assert!(!outcome.suppress_default());
        assert!(outcome.report().is_none());
        assert_eq!(world.cell(pos), Some(WorldCell::mature(ResourceKind::Beetroots)));
        assert_eq!(actor.inventory().total_items(), 0);
    }

    #[test]
    fn fault_still_suppresses_default() {
        let mut world = GridWorld::new();
        let pos = CellPosition::new(0, 0, 0);
        world.set_cell(pos, WorldCell::mature(ResourceKind::Wheat));
        let mut actor = Actor::operator("Alex");
        actor.add_experience(u32::MAX).unwrap();

        let event = InteractionEvent::primary_on(actor.id(), pos);
        let outcome =
            reactor(EngineSettings::default()).handle_interaction(&event, &mut actor, &mut world);

        assert!(outcome.suppress_default());
        assert!(outcome.fault().is_some());
        assert_eq!(world.cell(pos), Some(WorldCell::planted(ResourceKind::Wheat)));
    }
}
