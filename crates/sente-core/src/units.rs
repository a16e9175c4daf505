//! Conversion between human-readable token amounts and on-chain micro-units.

use crate::error::AmmError;
use crate::{MICRO_UNITS_PER_TOKEN, TOKEN_DECIMALS};

/// Parse a decimal amount such as `"1.25"` into micro-units (`1_250_000`).
///
/// Digits past the sixth decimal are truncated, like the contract's floor
/// rounding. Signs, exponents and thousands separators are rejected.
pub fn to_micro_units(input: &str) -> Result<u128, AmmError> {
    let s = input.trim();
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));

    if whole.is_empty() && frac.is_empty() {
        return Err(AmmError::InvalidAmount(format!("'{}' is not a number", input)));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmmError::InvalidAmount(format!("'{}' is not a number", input)));
    }

    let whole_units: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| AmmError::InvalidAmount(format!("'{}' is too large", input)))?
    };

    let mut frac_units: u128 = 0;
    for (i, b) in frac.bytes().take(TOKEN_DECIMALS).enumerate() {
        let digit = (b - b'0') as u128;
        frac_units += digit * 10u128.pow((TOKEN_DECIMALS - 1 - i) as u32);
    }

    whole_units
        .checked_mul(MICRO_UNITS_PER_TOKEN)
        .and_then(|v| v.checked_add(frac_units))
        .ok_or_else(|| AmmError::InvalidAmount(format!("'{}' is too large", input)))
}

/// Format micro-units with all six decimals (`1_250_000` → `"1.250000"`).
pub fn format_micro_units(micro: u128) -> String {
    format!(
        "{}.{:06}",
        micro / MICRO_UNITS_PER_TOKEN,
        micro % MICRO_UNITS_PER_TOKEN
    )
}
