//! # Command Handler Tasks
//!
//! One async handler per command kind. Handlers call the daemon through the
//! injected [`crate::core::DaemonService`] handle and emit state updates over
//! the [`crate::app::EventBus`]; each invocation runs to exactly one terminal
//! outcome (success events or an error surface).

pub(crate) mod consensus;
pub(crate) mod wallet;
