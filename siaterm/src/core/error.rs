//! # Common Error Types
//!
//! Consolidated error handling for the wallet terminal.
//!
//! ## Error Categories
//!
//! - **Api**: Daemon API communication errors (network, HTTP, JSON parsing)
//! - **Validation**: Input validation errors (missing fields, invalid currency,
//!   unparseable amounts)
//!
//! The daemon API functions in [`crate::services::api`] return
//! `Result<T, String>` so failure messages can be forwarded verbatim to the
//! notification surface; `String` converts into [`AppError::Api`] at the
//! boundary where a typed error is needed.

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use siaterm::core::error::AppError;
///
/// let api_err = AppError::Api("connection refused".to_string());
/// let validation_err = AppError::Validation("Amount is required".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: connection refused");
/// assert_eq!(validation_err.to_string(), "Validation error: Amount is required");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Daemon API communication error.
    ///
    /// Network failures, non-2xx responses, and malformed response bodies all
    /// land here with the daemon's message text where one exists.
    #[error("API error: {0}")]
    Api(String),

    /// Input validation error.
    ///
    /// Raised before any network call is made; follows the same user-visible
    /// path as transport failures.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_layer_strings_convert_to_api_errors() {
        fn forward(message: std::result::Result<(), String>) -> Result<()> {
            message?;
            Ok(())
        }

        let err = forward(Err("daemon returned 500 Internal Server Error".to_string()))
            .unwrap_err();
        assert!(matches!(err, AppError::Api(_)));
        assert_eq!(
            err.to_string(),
            "API error: daemon returned 500 Internal Server Error"
        );
    }

    #[test]
    fn test_validation_display() {
        let err = AppError::Validation("Invalid currency type: bogus".to_string());
        assert_eq!(err.to_string(), "Validation error: Invalid currency type: bogus");
    }
}
