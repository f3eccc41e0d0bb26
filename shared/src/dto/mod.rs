//! # Data Transfer Objects (DTOs)
//!
//! Typed models of the daemon's JSON responses.
//!
//! ## Module Organization
//!
//! - [`wallet`] - Wallet endpoint responses (status, seed init, transactions, address)
//! - [`consensus`] - Consensus endpoint responses (sync state)
//!
//! ## Deserialization Notes
//!
//! - Wire keys are single-word lowercase; Rust fields map via `#[serde(rename)]`.
//! - Currency fields are arbitrary-precision JSON integers deserialized as `u128`.
//! - The daemon omits or nulls empty transaction lists, so those fields are `Option`.

pub mod consensus;
pub mod wallet;

pub use consensus::*;
pub use wallet::*;
