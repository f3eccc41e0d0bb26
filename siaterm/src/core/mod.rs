//! # Core Types
//!
//! Application-wide error handling and the service trait used for dependency
//! injection.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::DaemonService;
