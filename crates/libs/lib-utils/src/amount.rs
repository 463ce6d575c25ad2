//! # Token Amounts
//!
//! Conversions between human-readable token amounts and integer base units.
//! All arithmetic is exact decimal; floats never touch a quote.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a user-entered amount. The value must be strictly positive.
pub fn parse_amount(input: &str) -> Result<Decimal, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Empty);
    }
    let value = Decimal::from_str(trimmed).map_err(|_| Error::Invalid(trimmed.to_string()))?;
    if value <= Decimal::ZERO {
        return Err(Error::NotPositive);
    }
    Ok(value)
}

/// Convert a human amount to base units: `round(amount * 10^decimals)`.
pub fn to_base_units(amount: Decimal, decimals: u8) -> Result<u64, Error> {
    let factor = 10u64
        .checked_pow(u32::from(decimals))
        .ok_or(Error::Overflow)?;
    amount
        .checked_mul(Decimal::from(factor))
        .ok_or(Error::Overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or(Error::Overflow)
}

/// Convert base units back to a human amount: `raw / 10^decimals`.
pub fn from_base_units(raw: u64, decimals: u8) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(raw), u32::from(decimals))
}

/// Render with exactly `dp` decimal places, rounding half away from zero.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Empty,
    Invalid(String),
    NotPositive,
    Overflow,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Empty => write!(fmt, "amount is empty"),
            Error::Invalid(raw) => write!(fmt, "'{raw}' is not a number"),
            Error::NotPositive => write!(fmt, "amount must be greater than zero"),
            Error::Overflow => write!(fmt, "amount is too large"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 1.5 ").unwrap(), Decimal::from_str("1.5").unwrap());
        assert_eq!(parse_amount(""), Err(Error::Empty));
        assert_eq!(parse_amount("0"), Err(Error::NotPositive));
        assert_eq!(parse_amount("-2"), Err(Error::NotPositive));
        assert!(matches!(parse_amount("abc"), Err(Error::Invalid(_))));
    }

    #[test]
    fn test_to_base_units() {
        let one = parse_amount("1").unwrap();
        assert_eq!(to_base_units(one, 9).unwrap(), 1_000_000_000);

        let fractional = parse_amount("0.1234567").unwrap();
        // 123456.7 rounds up
        assert_eq!(to_base_units(fractional, 6).unwrap(), 123_457);
    }

    #[test]
    fn test_to_base_units_overflow() {
        let huge = parse_amount("99999999999999999999").unwrap();
        assert_eq!(to_base_units(huge, 9), Err(Error::Overflow));
    }

    #[test]
    fn test_from_base_units_and_format() {
        let usdc = from_base_units(150_000_000, 6);
        assert_eq!(format_fixed(usdc, 6), "150.000000");
        assert_eq!(format_fixed(usdc, 2), "150.00");

        let sol = from_base_units(1_234_567_891, 9);
        assert_eq!(format_fixed(sol, 6), "1.234568");
    }
}
