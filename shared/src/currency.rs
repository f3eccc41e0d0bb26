//! # Currency Conversion
//!
//! Conversion between hastings (the daemon's smallest indivisible unit) and
//! siacoin display strings.
//!
//! All arithmetic is integer-only: balances are far outside the range where
//! `f64` is exact, so display values are produced as decimal strings and never
//! pass through floating point. Siafund balances are plain integers and are
//! never converted.

/// Number of hastings in one siacoin (10^24).
pub const HASTINGS_PER_SIACOIN: u128 = 1_000_000_000_000_000_000_000_000;

/// Convert a hastings amount into a siacoin display string with two decimal
/// places, rounding half-up.
///
/// # Examples
///
/// ```rust
/// use shared::currency::{hastings_to_siacoin_string, HASTINGS_PER_SIACOIN};
///
/// assert_eq!(hastings_to_siacoin_string(2500 * HASTINGS_PER_SIACOIN), "2500.00");
/// assert_eq!(hastings_to_siacoin_string(HASTINGS_PER_SIACOIN / 2), "0.50");
/// ```
pub fn hastings_to_siacoin_string(hastings: u128) -> String {
    let mut whole = hastings / HASTINGS_PER_SIACOIN;
    let remainder = hastings % HASTINGS_PER_SIACOIN;
    // remainder < 10^24, so remainder * 100 cannot overflow u128
    let mut cents = (remainder * 100 + HASTINGS_PER_SIACOIN / 2) / HASTINGS_PER_SIACOIN;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }
    format!("{}.{:02}", whole, cents)
}

/// Convert a signed hastings delta (e.g. unconfirmed incoming minus outgoing)
/// into a siacoin display string with two decimal places.
pub fn signed_hastings_to_siacoin_string(hastings: i128) -> String {
    if hastings < 0 {
        format!("-{}", hastings_to_siacoin_string(hastings.unsigned_abs()))
    } else {
        hastings_to_siacoin_string(hastings as u128)
    }
}

/// Parse a siacoin display amount (e.g. `"2.5"`) into an exact hastings count.
///
/// Rejects empty input, non-digit characters, more than one decimal point,
/// more than 24 fractional digits, and amounts that overflow `u128`.
///
/// # Examples
///
/// ```rust
/// use shared::currency::{siacoin_string_to_hastings, HASTINGS_PER_SIACOIN};
///
/// assert_eq!(siacoin_string_to_hastings("2.5"), Ok(5 * HASTINGS_PER_SIACOIN / 2));
/// assert!(siacoin_string_to_hastings("2.5.0").is_err());
/// ```
pub fn siacoin_string_to_hastings(amount: &str) -> Result<u128, String> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err("Amount is empty".to_string());
    }

    let mut parts = amount.splitn(2, '.');
    let whole_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");

    if frac_part.contains('.') {
        return Err(format!("Invalid amount: {}", amount));
    }
    if whole_part.is_empty() && frac_part.is_empty() {
        return Err(format!("Invalid amount: {}", amount));
    }
    if !whole_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(format!("Invalid amount: {}", amount));
    }
    if frac_part.len() > 24 {
        return Err("Amount is more precise than one hastings".to_string());
    }

    let whole: u128 = if whole_part.is_empty() {
        0
    } else {
        whole_part
            .parse()
            .map_err(|_| format!("Invalid amount: {}", amount))?
    };

    // Scale the fractional digits up to 24 places
    let mut frac: u128 = 0;
    if !frac_part.is_empty() {
        frac = frac_part
            .parse()
            .map_err(|_| format!("Invalid amount: {}", amount))?;
        for _ in 0..(24 - frac_part.len()) {
            frac *= 10;
        }
    }

    whole
        .checked_mul(HASTINGS_PER_SIACOIN)
        .and_then(|h| h.checked_add(frac))
        .ok_or_else(|| "Amount is too large".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hastings_to_siacoin_string() {
        assert_eq!(hastings_to_siacoin_string(0), "0.00");
        assert_eq!(
            hastings_to_siacoin_string(2500 * HASTINGS_PER_SIACOIN),
            "2500.00"
        );
        assert_eq!(
            hastings_to_siacoin_string(HASTINGS_PER_SIACOIN / 4),
            "0.25"
        );
    }

    #[test]
    fn test_rounding_half_up() {
        // 1.005 SC rounds up to 1.01
        assert_eq!(
            hastings_to_siacoin_string(HASTINGS_PER_SIACOIN + HASTINGS_PER_SIACOIN / 200),
            "1.01"
        );
        // 0.004 SC rounds down to 0.00
        assert_eq!(
            hastings_to_siacoin_string(4 * (HASTINGS_PER_SIACOIN / 1000)),
            "0.00"
        );
        // 0.999... carries into the whole part
        assert_eq!(
            hastings_to_siacoin_string(HASTINGS_PER_SIACOIN - 1),
            "1.00"
        );
    }

    #[test]
    fn test_signed_display() {
        assert_eq!(signed_hastings_to_siacoin_string(0), "0.00");
        assert_eq!(
            signed_hastings_to_siacoin_string(-(HASTINGS_PER_SIACOIN as i128) * 5 / 2),
            "-2.50"
        );
        assert_eq!(
            signed_hastings_to_siacoin_string(HASTINGS_PER_SIACOIN as i128 * 3),
            "3.00"
        );
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(siacoin_string_to_hastings("0"), Ok(0));
        assert_eq!(
            siacoin_string_to_hastings("2500"),
            Ok(2500 * HASTINGS_PER_SIACOIN)
        );
        assert_eq!(
            siacoin_string_to_hastings("2.5"),
            Ok(2 * HASTINGS_PER_SIACOIN + HASTINGS_PER_SIACOIN / 2)
        );
        assert_eq!(siacoin_string_to_hastings(".5"), Ok(HASTINGS_PER_SIACOIN / 2));
        assert_eq!(siacoin_string_to_hastings("1."), Ok(HASTINGS_PER_SIACOIN));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(siacoin_string_to_hastings("").is_err());
        assert!(siacoin_string_to_hastings(".").is_err());
        assert!(siacoin_string_to_hastings("abc").is_err());
        assert!(siacoin_string_to_hastings("1.2.3").is_err());
        assert!(siacoin_string_to_hastings("-5").is_err());
        assert!(siacoin_string_to_hastings("1 000").is_err());
    }

    #[test]
    fn test_parse_precision_limit() {
        // exactly one hastings
        assert_eq!(
            siacoin_string_to_hastings("0.000000000000000000000001"),
            Ok(1)
        );
        // 25 fractional digits is below one hastings
        assert!(siacoin_string_to_hastings("0.0000000000000000000000001").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        // u128::MAX is ~3.4e38, so 10^15 SC = 10^39 hastings overflows
        assert!(siacoin_string_to_hastings("1000000000000000").is_err());
    }
}
