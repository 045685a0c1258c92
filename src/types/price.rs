//! Fixed-point tick conversion.
//!
//! The book treats a price as an exact `u64` key: integer ticks scaled by
//! 10^8 (eight decimal places). Decimal strings are converted once at the
//! boundary; inside the book no arithmetic ever touches a decimal type, so
//! equal prices are equal keys and phantom levels cannot appear.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Scaling factor for fixed-point ticks: 10^8
pub const SCALE: u64 = 100_000_000;

/// Convert a decimal string to ticks
///
/// # Example
///
/// ```
/// use tickbook::types::price::to_ticks;
///
/// assert_eq!(to_ticks("100.00"), Some(10_000_000_000));
/// assert_eq!(to_ticks("0.00000001"), Some(1));
/// ```
///
/// Returns `None` for negative values or strings that fail to parse.
pub fn to_ticks(s: &str) -> Option<u64> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_ticks(decimal)
}

/// Convert a `Decimal` to ticks
///
/// Returns `None` if the value is negative or out of range.
pub fn decimal_to_ticks(d: Decimal) -> Option<u64> {
    if d.is_sign_negative() {
        return None;
    }

    let scaled = d.checked_mul(Decimal::from(SCALE))?;
    let rounded = scaled.round_dp(0);
    rounded.to_u64()
}

/// Convert ticks to a `Decimal`
pub fn ticks_to_decimal(value: u64) -> Decimal {
    Decimal::from(value) / Decimal::from(SCALE)
}

/// Convert ticks to a string with 8 decimal places
///
/// # Example
///
/// ```
/// use tickbook::types::price::from_ticks;
///
/// assert_eq!(from_ticks(10_000_000_000), "100.00000000");
/// ```
pub fn from_ticks(value: u64) -> String {
    format!("{:.8}", ticks_to_decimal(value))
}

/// Convert ticks to a human-readable string, trailing zeros trimmed
///
/// # Example
///
/// ```
/// use tickbook::types::price::from_ticks_trimmed;
///
/// assert_eq!(from_ticks_trimmed(10_000_000_000), "100");
/// assert_eq!(from_ticks_trimmed(9_950_000_000), "99.5");
/// ```
pub fn from_ticks_trimmed(value: u64) -> String {
    format!("{}", ticks_to_decimal(value).normalize())
}

// ============================================================================
// Unit Tests
// ============================================================================
