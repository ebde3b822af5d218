//! Actor state, inventory, and capability checks for the crop cycle reactor.
//!
//! Everything here operates on actor state without touching the world: the
//! slot inventory with stacking rules, the capability gate, and the
//! in-memory [`Actor`] the console and tests use as the host's player.
//!
//! # Modules
//!
//! - [`actor`] -- [`Actor`]: capabilities, inventory, experience, notices
//! - [`error`] -- Error types for actor operations ([`ActorError`])
//! - [`inventory`] -- [`ActorInventory`]: bounded slot inventory
//! - [`permission`] -- [`PermissionGate`] and the [`Permissible`] seam

pub mod actor;
pub mod error;
pub mod inventory;
pub mod permission;

// Re-export primary types at crate root for convenience.
pub use actor::{Actor, HeardFeedback};
pub use error::ActorError;
pub use inventory::{ActorInventory, DEFAULT_SLOT_COUNT};
pub use permission::{Capability, DEFAULT_NAMESPACE, Permissible, PermissionGate};
