/// Validation utilities for user input
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a send request before any network call is made.
///
/// Amount and destination must be non-empty and the currency must be exactly
/// `siacoins` or `siafunds` (the daemon route segment).
pub fn validate_send_request(currency: &str, amount: &str, destination: &str) -> ValidationResult {
    if amount.is_empty() {
        return ValidationResult::err("Amount is required");
    }

    if destination.is_empty() {
        return ValidationResult::err("Destination address is required");
    }

    if currency.is_empty() {
        return ValidationResult::err("Currency type is required");
    }

    if currency != "siacoins" && currency != "siafunds" {
        return ValidationResult::err(format!("Invalid currency type: {}", currency));
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_send_requests() {
        assert!(validate_send_request("siacoins", "2.5", "addr").is_valid);
        assert!(validate_send_request("siafunds", "3", "addr").is_valid);
    }

    #[test]
    fn test_missing_fields() {
        assert!(!validate_send_request("siacoins", "", "addr").is_valid);
        assert!(!validate_send_request("siacoins", "2.5", "").is_valid);
        assert!(!validate_send_request("", "2.5", "addr").is_valid);
    }

    #[test]
    fn test_invalid_currency() {
        let result = validate_send_request("bogus", "2.5", "addr");
        assert!(!result.is_valid);
        assert_eq!(result.error.unwrap(), "Invalid currency type: bogus");
    }

    #[test]
    fn test_amount_checked_before_currency() {
        // missing amount reports the amount error regardless of currency
        let result = validate_send_request("bogus", "", "addr");
        assert_eq!(result.error.unwrap(), "Amount is required");
    }
}
