//! Error types for the `cropcycle-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type.

use cropcycle_types::{CellPosition, ResourceKind};

/// Errors that can occur during world-cell operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// A growth stage outside `[0, max]` for the material.
    #[error("stage {stage} out of range for {kind} (max {max_stage})")]
    StageOutOfRange {
        /// The material.
        kind: ResourceKind,
        /// The rejected stage.
        stage: u8,
        /// The material's maximum stage.
        max_stage: u8,
    },

    /// No cell exists at the position.
    #[error("no cell at {0}")]
    CellNotFound(CellPosition),

    /// Arithmetic overflow during a checked operation.
    #[error("arithmetic overflow in world calculation")]
    ArithmeticOverflow,
}
