//! # Daemon API Client Module
//!
//! HTTP client for communicating with the Sia daemon (`siad`).
//! Handles wallet status, lock/unlock, seed initialization, balances,
//! transactions, addresses, sends and consensus queries.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - SiadClient struct and common functionality
//! ├── wallet.rs     - /wallet endpoints (status, unlock, lock, init, send, ...)
//! └── consensus.rs  - /consensus endpoint (sync state)
//! ```

pub mod client;
pub mod consensus;
pub mod wallet;

pub use client::SiadClient;
