//! Error types for the cropcycle-actors crate.
//!
//! Inventory and experience updates use checked arithmetic and report
//! failures through [`ActorError`] instead of panicking.

/// Errors that can occur during actor state operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActorError {
    /// An arithmetic overflow occurred while updating actor state.
    #[error("arithmetic overflow in actor computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },

    /// Experience would exceed the representable maximum.
    #[error("experience overflow: {current} + {amount}")]
    ExperienceOverflow {
        /// Experience before the grant.
        current: u32,
        /// The amount being granted.
        amount: u32,
    },

    /// An inventory was constructed without slots.
    #[error("inventory must have at least one slot")]
    NoSlots,
}
