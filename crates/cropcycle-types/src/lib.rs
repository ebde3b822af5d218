//! Shared type definitions for the crop cycle reactor.
//!
//! This crate is the single vocabulary used by the world, actor, and core
//! crates: material and item identifiers, cell positions, item stacks, and
//! the inbound interaction event the host delivers.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for actor identifiers
//! - [`enums`] -- Materials ([`ResourceKind`]), items ([`ItemKind`]),
//!   interaction shapes, and acknowledgement feedback kinds
//! - [`structs`] -- Positions, item stacks, held tools, and the
//!   [`InteractionEvent`] payload

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{FeedbackKind, Growth, InteractionShape, ItemKind, ResourceKind, UnknownFeedbackKind};
pub use ids::ActorId;
pub use structs::{CellPosition, DropSet, HeldTool, InteractionEvent, ItemStack, total_count};
