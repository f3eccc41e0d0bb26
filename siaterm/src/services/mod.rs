//! # External Service Integrations
//!
//! - [`api`]: HTTP client for the Sia daemon's REST API
//! - [`transactions`]: normalization of raw daemon transactions into display
//!   summaries

pub mod api;
pub mod transactions;
