//! # Shared Daemon Types Library
//!
//! This library defines the contract between the terminal and the Sia daemon's
//! HTTP API. All response models deserialize from JSON via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for daemon API responses
//!   - **[`dto::wallet`]**: Wallet endpoint responses (`/wallet`, `/wallet/transactions`, ...)
//!   - **[`dto::consensus`]**: Consensus endpoint responses (`/consensus`)
//! - **[`currency`]**: Hastings/siacoin conversion helpers
//!
//! ## Wire Format
//!
//! The daemon uses single-word lowercase JSON keys (`confirmedsiacoinbalance`);
//! Rust field names use snake_case with `#[serde(rename = "...")]` mapping back
//! to the wire names. Currency values arrive as arbitrary-precision JSON
//! integers and are deserialized into `u128` (1 siacoin = 10^24 hastings, so
//! realistic balances overflow `u64`).

pub mod currency;
pub mod dto;

// Re-export commonly used types for convenience
pub use currency::{
    hastings_to_siacoin_string, siacoin_string_to_hastings, signed_hastings_to_siacoin_string,
    HASTINGS_PER_SIACOIN,
};
pub use dto::*;
