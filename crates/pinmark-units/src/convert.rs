use primitive_types::U256;

use crate::error::{invalid, UnitResult};

/// Decimal places of the chain's native currency unit.
pub const ETHER_DECIMALS: u32 = 18;

/// Most decimal places a 256-bit fixed-point value can carry: `10^77` is the
/// largest power of ten below `2^256`.
pub const MAX_DECIMALS: u32 = 77;

/// Scale a decimal string to an integer with `decimals` fractional digits.
///
/// Fractional digits beyond `decimals` are truncated, missing ones are padded
/// with zeros. Signs, whitespace, exponents, a second `.`, and an empty
/// integer part are all rejected, as is `decimals` above [`MAX_DECIMALS`].
pub fn to_fixed_point(decimal: &str, decimals: u32) -> UnitResult<U256> {
    if decimals > MAX_DECIMALS {
        return Err(invalid(decimal, "too many decimal places"));
    }
    let mut parts = decimal.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return Err(invalid(decimal, "more than one decimal point"));
    }
    if whole.is_empty() {
        return Err(invalid(decimal, "empty integer part"));
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid(decimal, "non-digit character"));
    }

    let decimals = decimals as usize;
    let mut digits = String::with_capacity(whole.len() + decimals);
    digits.push_str(whole);
    if fraction.len() >= decimals {
        digits.push_str(&fraction[..decimals]);
    } else {
        digits.push_str(fraction);
        digits.extend(std::iter::repeat('0').take(decimals - fraction.len()));
    }

    U256::from_dec_str(&digits).map_err(|_| invalid(decimal, "exceeds 256 bits"))
}

/// Render a fixed-point integer as a decimal string.
///
/// Trailing zero fractional digits are trimmed, but at least one fractional
/// digit is always kept (`1000000000000000000` renders as `"1.0"`).
/// `decimals` above [`MAX_DECIMALS`] is rejected.
pub fn from_fixed_point(value: U256, decimals: u32) -> UnitResult<String> {
    if decimals > MAX_DECIMALS {
        return Err(invalid(&value.to_string(), "too many decimal places"));
    }
    Ok(render(value, decimals as usize))
}

fn render(value: U256, decimals: usize) -> String {
    let mut digits = value.to_string();
    if digits.len() <= decimals {
        let pad = decimals + 1 - digits.len();
        digits.insert_str(0, &"0".repeat(pad));
    }
    let (whole, fraction) = digits.split_at(digits.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    format!("{whole}.{fraction}")
}

/// [`to_fixed_point`] with 18 decimals.
pub fn to_wei(decimal: &str) -> UnitResult<U256> {
    to_fixed_point(decimal, ETHER_DECIMALS)
}

/// [`from_fixed_point`] with 18 decimals.
pub fn from_wei(value: U256) -> String {
    render(value, ETHER_DECIMALS as usize)
}
