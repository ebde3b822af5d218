//! Error types for the reactor core.
//!
//! [`HostError`] is what a host collaborator reports when one of its
//! operations fails. [`CycleFault`] is a host error pinned to the step of
//! the compound mutation it interrupted; it is the only failure the
//! mutator hands back, and it never means "nothing happened".

use core::fmt;

use cropcycle_actors::ActorError;
use cropcycle_types::{CellPosition, ResourceKind};
use cropcycle_world::WorldError;

use crate::config::ConfigError;

/// A failure reported by the host while serving the reactor.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The world model failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// The actor model failed.
    #[error("actor error: {source}")]
    Actor {
        /// The underlying actor error.
        #[from]
        source: ActorError,
    },

    /// The host refused an operation for its own reasons.
    #[error("host rejected {operation}: {reason}")]
    Rejected {
        /// The operation that was refused.
        operation: &'static str,
        /// The host's explanation.
        reason: String,
    },
}

/// The step of the compound mutation that was running when a fault hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleStage {
    /// Computing the drop set for the cell and tool.
    ComputeDrops,
    /// Overwriting the cell with the freshly planted crop.
    Replant,
    /// Inserting a drop entry into the actor's inventory.
    Distribute,
    /// Placing an uninsertable remainder in the world.
    Spill,
    /// Granting the experience reward.
    Reward,
}

impl CycleStage {
    /// Whether the replant write had already been committed when a fault
    /// at this stage occurred.
    pub const fn cell_replanted(self) -> bool {
        !matches!(self, Self::ComputeDrops | Self::Replant)
    }
}

impl fmt::Display for CycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ComputeDrops => "compute-drops",
            Self::Replant => "replant",
            Self::Distribute => "distribute",
            Self::Spill => "spill",
            Self::Reward => "reward",
        })
    }
}

/// A compound mutation that stopped partway.
///
/// Writes committed before `stage` stand; nothing is rolled back.
#[derive(Debug, thiserror::Error)]
#[error("crop cycle of {kind} at {position} failed during {stage}: {source}")]
pub struct CycleFault {
    /// Where the mutation stopped.
    pub stage: CycleStage,
    /// The crop being cycled.
    pub kind: ResourceKind,
    /// The cell being cycled.
    pub position: CellPosition,
    /// What the host reported.
    #[source]
    pub source: HostError,
}

/// Errors returned by the admin surface.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// The sender lacks the capability for this sub-action.
    #[error("permission denied: requires {capability}")]
    PermissionDenied {
        /// The missing capability string.
        capability: String,
    },

    /// Re-reading the configuration failed; previous settings remain.
    #[error("reload failed: {source}")]
    Reload {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },
}
