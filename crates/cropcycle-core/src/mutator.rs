//! The compound harvest-and-replant mutation.
//!
//! One cycle computes drops for the mature cell, overwrites the cell with
//! the same crop at stage zero, consumes one seed from the drops, hands the
//! rest to the actor (spilling what does not fit), grants the experience
//! reward, and plays the acknowledgement sound.
//!
//! Steps run in that fixed order and commit as they go. A host failure in
//! any step up to the reward stops the cycle with a [`CycleFault`] naming
//! the step; earlier writes are not undone. Sound problems never fault a
//! cycle.

use cropcycle_types::{CellPosition, DropSet, FeedbackKind, ItemKind, ItemStack, ResourceKind};
use cropcycle_world::WorldCell;
use tracing::{debug, error, warn};

use crate::config::EngineSettings;
use crate::decision::CyclePlan;
use crate::error::{CycleFault, CycleStage, HostError};
use crate::host::{ActorAccess, WorldAccess};

/// Notice shown to the actor when a cycle faults.
pub const FAULT_NOTICE: &str = "Something went wrong while harvesting that crop.";

/// What happened to the acknowledgement sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// Sound is switched off in settings.
    Disabled,
    /// The sound was played.
    Played(FeedbackKind),
    /// The configured name is not a known sound; nothing was played.
    InvalidKind(String),
    /// The host failed to play a valid sound.
    Failed(String),
}

/// Record of one completed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// The cycled cell.
    pub position: CellPosition,
    /// The crop that was harvested and replanted.
    pub kind: ResourceKind,
    /// The crop's seed item.
    pub seed: ItemKind,
    /// Whether one seed was taken out of the drops for the replant.
    pub consumed_seed: bool,
    /// Units that went into the actor's inventory, per drop entry.
    pub delivered: Vec<ItemStack>,
    /// Units placed in the world because the inventory was full.
    pub spilled: Vec<ItemStack>,
    /// Experience points granted (zero when no reward was due).
    pub experience_granted: u32,
    /// The acknowledgement sound result.
    pub feedback: FeedbackOutcome,
}

/// Executes [`CyclePlan`]s against the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundMutator {
    fault_notice: &'static str,
}

impl Default for CompoundMutator {
    fn default() -> Self {
        Self::new()
    }
}

impl CompoundMutator {
    /// Create a mutator that sends [`FAULT_NOTICE`] on faults.
    pub const fn new() -> Self {
        Self::with_fault_notice(FAULT_NOTICE)
    }

    /// Create a mutator with a custom fault notice.
    pub const fn with_fault_notice(fault_notice: &'static str) -> Self {
        Self { fault_notice }
    }

    /// Run one harvest-and-replant cycle.
    ///
    /// A fault is logged with full context and the actor gets a short
    /// notice before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CycleFault`] if the host fails while computing drops,
    /// replanting, distributing, spilling, or rewarding. The cycle may be
    /// partially applied; see [`CycleStage::cell_replanted`].
    pub fn apply<A, W>(
        &self,
        actor: &mut A,
        world: &mut W,
        plan: &CyclePlan,
        settings: &EngineSettings,
    ) -> Result<CycleReport, CycleFault>
    where
        A: ActorAccess + ?Sized,
        W: WorldAccess + ?Sized,
    {
        match run_cycle(actor, world, plan, settings) {
            Ok(report) => {
                debug!(
                    actor = %actor.actor_id(),
                    position = %plan.position,
                    kind = %plan.kind,
                    delivered = report.delivered.len(),
                    spilled = report.spilled.len(),
                    experience = report.experience_granted,
                    "Crop cycled"
                );
                Ok(report)
            }
            Err(fault) => {
                error!(
                    actor = %actor.actor_id(),
                    position = %fault.position,
                    kind = %fault.kind,
                    stage = %fault.stage,
                    cell_replanted = fault.stage.cell_replanted(),
                    error = %fault.source,
                    "Crop cycle failed"
                );
                actor.notify(self.fault_notice);
                Err(fault)
            }
        }
    }
}

fn run_cycle<A, W>(
    actor: &mut A,
    world: &mut W,
    plan: &CyclePlan,
    settings: &EngineSettings,
) -> Result<CycleReport, CycleFault>
where
    A: ActorAccess + ?Sized,
    W: WorldAccess + ?Sized,
{
    let fault = |stage: CycleStage| {
        move |source: HostError| CycleFault {
            stage,
            kind: plan.kind,
            position: plan.position,
            source,
        }
    };

    let tool = actor.held_tool();
    let mut drops = world
        .drops_for(plan.position, &tool)
        .map_err(fault(CycleStage::ComputeDrops))?;

    world
        .replant(plan.position, WorldCell::planted(plan.kind))
        .map_err(fault(CycleStage::Replant))?;

    let consumed_seed = consume_seed(&mut drops, plan.seed);

    let mut delivered = Vec::new();
    let mut spilled = Vec::new();
    for stack in drops.into_iter().filter(|stack| stack.count > 0) {
        let leftover = actor
            .offer(stack)
            .map_err(fault(CycleStage::Distribute))?;
        let inserted = stack.count.saturating_sub(leftover);
        if inserted > 0 {
            delivered.push(ItemStack::new(stack.item, inserted));
        }
        if leftover > 0 {
            let remainder = ItemStack::new(stack.item, leftover);
            world
                .spill(plan.position, remainder)
                .map_err(fault(CycleStage::Spill))?;
            spilled.push(remainder);
        }
    }

    let mut experience_granted = 0;
    if settings.give_reward && settings.reward_amount > 0 {
        actor
            .grant_experience(settings.reward_amount)
            .map_err(fault(CycleStage::Reward))?;
        experience_granted = settings.reward_amount;
    }

    let feedback = play_feedback(actor, plan.position, settings);

    Ok(CycleReport {
        position: plan.position,
        kind: plan.kind,
        seed: plan.seed,
        consumed_seed,
        delivered,
        spilled,
        experience_granted,
        feedback,
    })
}

/// Take one seed out of the first seed entry holding more than one.
///
/// A lone seed is left alone: the replant does not draw on the drops in
/// that case.
fn consume_seed(drops: &mut DropSet, seed: ItemKind) -> bool {
    let Some(stack) = drops
        .iter_mut()
        .find(|stack| stack.item == seed && stack.count > 1)
    else {
        return false;
    };
    stack.count = stack.count.saturating_sub(1);
    true
}

fn play_feedback<A>(
    actor: &mut A,
    position: CellPosition,
    settings: &EngineSettings,
) -> FeedbackOutcome
where
    A: ActorAccess + ?Sized,
{
    if !settings.feedback_enabled {
        return FeedbackOutcome::Disabled;
    }

    let kind = match settings.feedback_kind.parse::<FeedbackKind>() {
        Ok(kind) => kind,
        Err(err) => {
            warn!(
                sound = %settings.feedback_kind,
                error = %err,
                "Invalid sound type in config"
            );
            return FeedbackOutcome::InvalidKind(settings.feedback_kind.clone());
        }
    };

    match actor.play_feedback(kind, position) {
        Ok(()) => FeedbackOutcome::Played(kind),
        Err(err) => {
            warn!(
                actor = %actor.actor_id(),
                sound = %kind,
                error = %err,
                "Failed to play sound"
            );
            FeedbackOutcome::Failed(err.to_string())
        }
    }
}
