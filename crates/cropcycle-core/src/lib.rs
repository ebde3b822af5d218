//! Decision engine, compound mutation, configuration, and admin surface for
//! the crop cycle reactor.
//!
//! The host delivers every player click as an [`InteractionEvent`]. The
//! [`Reactor`] samples the current [`ContextSnapshot`], asks the
//! [`CycleDecisionEngine`] for a go/no-go, and on go runs the
//! [`CompoundMutator`]: harvest, replant, distribute, reward, acknowledge.
//! All of it is synchronous and run-to-completion.
//!
//! # Modules
//!
//! - [`admin`] -- [`AdminSurface`]: status, reload, info, tab completion.
//! - [`config`] -- [`EngineSettings`] loaded from YAML, settings sources.
//! - [`context`] -- [`ConfigurationContext`]: snapshot swapped on reload.
//! - [`decision`] -- [`CycleDecisionEngine`] and its [`Decision`].
//! - [`error`] -- Host faults, cycle faults, and admin errors.
//! - [`host`] -- [`WorldAccess`] and [`ActorAccess`], the seams to the host.
//! - [`mutator`] -- [`CompoundMutator`] and the [`CycleReport`] it returns.
//! - [`reactor`] -- [`Reactor`], the single entry point for interactions.
//!
//! [`InteractionEvent`]: cropcycle_types::InteractionEvent
//! [`AdminSurface`]: admin::AdminSurface
//! [`EngineSettings`]: config::EngineSettings
//! [`ConfigurationContext`]: context::ConfigurationContext
//! [`ContextSnapshot`]: context::ContextSnapshot
//! [`CycleDecisionEngine`]: decision::CycleDecisionEngine
//! [`Decision`]: decision::Decision
//! [`WorldAccess`]: host::WorldAccess
//! [`ActorAccess`]: host::ActorAccess
//! [`CompoundMutator`]: mutator::CompoundMutator
//! [`CycleReport`]: mutator::CycleReport
//! [`Reactor`]: reactor::Reactor

pub mod admin;
pub mod config;
pub mod context;
pub mod decision;
pub mod error;
pub mod host;
pub mod mutator;
pub mod reactor;
