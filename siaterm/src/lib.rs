//! # Sia Wallet Terminal - Library Root
//!
//! A native wallet terminal for the Sia daemon (`siad`). This crate is the
//! coordination layer between the UI and the daemon's HTTP API: it maps wallet
//! commands onto daemon requests and turns the responses into state updates.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              siaterm (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client                          │
//! │  async-channel  - Event channel to the state consumer  │
//! │  shared         - Daemon DTOs and currency conversion  │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP
//!          ▼
//! ┌─────────────────┐
//! │   Sia daemon    │
//! │   (siad API)    │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Commands, state-update events, per-command async tasks, the
//!   orchestrator that dispatches them, and the reference state reducer.
//! - **core**: Error type and the [`crate::core::DaemonService`] trait used
//!   for dependency injection (real client in production, mocks in tests).
//! - **services**: The daemon HTTP client (`services::api`) and transaction
//!   normalization (`services::transactions`).
//! - **utils**: Input validation.
//!
//! ## Core Concepts
//!
//! Each [`app::Command`] spawns one independent async task. Tasks call the
//! daemon through the injected [`core::DaemonService`] handle and emit
//! [`app::StateUpdate`] events over an `async_channel` to whatever consumes
//! state (the reference reducer in [`app::state`], or a real UI store). For
//! any command exactly one terminal outcome is emitted: the command's success
//! events, or an error surface. Background polls (lock status, balance,
//! transactions, sync state) degrade silently and only log on failure.

pub mod app;
pub mod core;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{apply_event, Command, EventBus, Orchestrator, StateUpdate, WalletState};
pub use crate::core::{AppError, DaemonService, Result};
pub use crate::services::api::SiadClient;
