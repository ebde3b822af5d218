//! A single world cell: material plus growth stage.
//!
//! The stage is only meaningful for materials whose [`Growth`] is
//! [`Growth::Staged`]; static materials always hold stage `0`. Cells are
//! plain values, so a replant is one whole-value overwrite and no observer
//! can see a new material with an old stage.

use serde::{Deserialize, Serialize};

use cropcycle_types::{Growth, ResourceKind};

use crate::error::WorldError;

/// Material and growth stage of one world cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldCell {
    kind: ResourceKind,
    stage: u8,
}

impl WorldCell {
    /// Create a cell, validating `stage` against the material's bound.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::StageOutOfRange`] when `stage` exceeds the
    /// material's maximum stage.
    pub const fn new(kind: ResourceKind, stage: u8) -> Result<Self, WorldError> {
        let max_stage = kind.growth().max_stage();
        if stage > max_stage {
            return Err(WorldError::StageOutOfRange {
                kind,
                stage,
                max_stage,
            });
        }
        Ok(Self { kind, stage })
    }

    /// A freshly planted cell (stage `0`).
    pub const fn planted(kind: ResourceKind) -> Self {
        Self { kind, stage: 0 }
    }

    /// A cell at the final stage of its material.
    pub const fn mature(kind: ResourceKind) -> Self {
        Self {
            kind,
            stage: kind.growth().max_stage(),
        }
    }

    /// The material.
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// The growth stage.
    pub const fn stage(&self) -> u8 {
        self.stage
    }

    /// This cell advanced by `steps` stages, capped at the material's maximum.
    ///
    /// Static materials are returned unchanged.
    #[must_use]
    pub const fn grown(self, steps: u8) -> Self {
        match self.kind.growth() {
            Growth::Staged { max_stage } => {
                let next = self.stage.saturating_add(steps);
                let stage = if next > max_stage { max_stage } else { next };
                Self {
                    kind: self.kind,
                    stage,
                }
            }
            Growth::Static => self,
        }
    }
}
