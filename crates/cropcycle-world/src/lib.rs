//! World cells, crop catalog, maturity, and drops for the crop cycle reactor.
//!
//! This crate models the part of the host world the reactor reads and
//! writes: cells carrying a material and a growth stage, the static table of
//! cyclable crops, the maturity predicate, and vanilla-style harvest drops.
//!
//! # Modules
//!
//! - [`catalog`] -- [`ResourceCycleCatalog`]: crop to propagation item table.
//! - [`cell`] -- [`WorldCell`]: material plus bounded growth stage.
//! - [`drops`] -- Harvest drop computation for a cell and held tool.
//! - [`error`] -- Error types for world operations.
//! - [`grid`] -- [`GridWorld`]: an in-memory world used by the console and
//!   by tests as the host's world model.
//! - [`maturity`] -- The maturity predicate over growth capability tags.

pub mod catalog;
pub mod cell;
pub mod drops;
pub mod error;
pub mod grid;
pub mod maturity;

// Re-export primary types at crate root.
pub use catalog::{ResourceCycleCatalog, STANDARD_CYCLE_TABLE};
pub use cell::WorldCell;
pub use drops::harvest_drops;
pub use error::WorldError;
pub use grid::{GridWorld, Pickup};
pub use maturity::is_mature;
