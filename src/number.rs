//! Numeric input accepted by the converter.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::NumWordsError;

/// An integer or a fixed-point decimal read to two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Integer(i64),
    Decimal(Decimal),
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<Decimal> for Number {
    fn from(n: Decimal) -> Self {
        Number::Decimal(n)
    }
}

impl FromStr for Number {
    type Err = NumWordsError;

    /// `"12.50"` is a decimal, `"-7"` an integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = if s.contains('.') {
            Decimal::from_str(s).ok().map(Number::Decimal)
        } else {
            s.parse::<i64>().ok().map(Number::Integer)
        };
        parsed.ok_or_else(|| NumWordsError::InvalidNumber(s.to_string()))
    }
}

/// Sign, integer part and two-digit fraction of a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecimalParts {
    pub negative: bool,
    pub integer: u128,
    /// 0..=100, read as its own integer (`.05` is five). A fraction that
    /// rounds up to 100 stays 100 and does not carry.
    pub fraction: u8,
}

impl DecimalParts {
    /// Truncate toward zero for the integer part, then round the remainder
    /// times 100 half away from zero.
    pub(crate) fn split(value: Decimal) -> Result<Self, NumWordsError> {
        let magnitude = value.abs();
        let integer_part = magnitude.trunc();
        let integer = integer_part
            .to_u128()
            .ok_or_else(|| NumWordsError::InvalidNumber(value.to_string()))?;
        let fraction = ((magnitude - integer_part) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .ok_or_else(|| NumWordsError::InvalidNumber(value.to_string()))?;

        Ok(Self {
            negative: value.is_sign_negative() && (integer != 0 || fraction != 0),
            integer,
            fraction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!("42".parse::<Number>().unwrap(), Number::Integer(42));
        assert_eq!(" -7 ".parse::<Number>().unwrap(), Number::Integer(-7));
        assert_eq!(
            "12.50".parse::<Number>().unwrap(),
            Number::Decimal(dec("12.50"))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            "twelve".parse::<Number>(),
            Err(NumWordsError::InvalidNumber("twelve".into()))
        );
        assert!("1.2.3".parse::<Number>().is_err());
        assert!("".parse::<Number>().is_err());
    }

    #[test]
    fn split_reads_two_digit_fraction() {
        let p = DecimalParts::split(dec("12.50")).unwrap();
        assert_eq!((p.negative, p.integer, p.fraction), (false, 12, 50));

        let p = DecimalParts::split(dec("0.05")).unwrap();
        assert_eq!((p.integer, p.fraction), (0, 5));
    }

    #[test]
    fn split_rounds_half_away_from_zero() {
        assert_eq!(DecimalParts::split(dec("1.005")).unwrap().fraction, 1);
        assert_eq!(DecimalParts::split(dec("1.004")).unwrap().fraction, 0);
        let p = DecimalParts::split(dec("-2.345")).unwrap();
        assert_eq!((p.negative, p.integer, p.fraction), (true, 2, 35));
    }

    #[test]
    fn split_keeps_integer_part_when_fraction_rounds_to_hundred() {
        let p = DecimalParts::split(dec("0.999")).unwrap();
        assert_eq!((p.integer, p.fraction), (0, 100));

        let p = DecimalParts::split(dec("-1.996")).unwrap();
        assert_eq!((p.negative, p.integer, p.fraction), (true, 1, 100));
    }

    #[test]
    fn negative_rounding_to_zero_drops_sign() {
        let p = DecimalParts::split(dec("-0.001")).unwrap();
        assert_eq!((p.negative, p.integer, p.fraction), (false, 0, 0));
    }
}
