//! Decimal digits to working bit precision.
//!
//! MPFR keeps the precision on every value, so instead of an ambient setting
//! the controller hands out a [`Precision`] that each `Float` is created with.

use rug::{Assign, Float};

use crate::config::GUARD_BITS;
use crate::error::{PiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    digits: u64,
    bits: u32,
}

impl Precision {
    /// `ceil(digits * log2(10)) + GUARD_BITS`. Fails for zero digits or when
    /// twice the result is out of range for MPFR.
    pub fn from_digits(digits: u64) -> Result<Self> {
        if digits == 0 {
            return Err(PiError::InvalidDigits(digits.to_string()));
        }

        let bits = (digits as f64 * std::f64::consts::LOG2_10).ceil() as u64;
        let bits = bits.saturating_add(GUARD_BITS);
        // Fixed-point output holds value * 10^digits exactly, about 2 * bits.
        let max = u64::from(rug::float::prec_max()) / 2;
        if bits > max {
            return Err(PiError::PrecisionTooLarge { digits, bits, max });
        }

        Ok(Self {
            digits,
            bits: bits as u32,
        })
    }

    pub fn digits(&self) -> u64 {
        self.digits
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// A float at the working precision.
    pub fn float<T>(&self, val: T) -> Float
    where
        Float: Assign<T>,
    {
        Float::with_val(self.bits, val)
    }
}

/// Parses a digit count as typed by a user; `_` separators are allowed.
pub fn parse_digits(arg: &str) -> Result<u64> {
    let cleaned = arg.trim().replace('_', "");
    match cleaned.parse::<u64>() {
        Ok(0) | Err(_) => Err(PiError::InvalidDigits(arg.to_string())),
        Ok(digits) => Ok(digits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_include_guard() {
        // ceil(50 * 3.3219...) = 167
        let prec = Precision::from_digits(50).unwrap();
        assert_eq!(prec.bits(), 167 + 32);
        assert_eq!(prec.digits(), 50);

        // ceil(3.3219...) = 4
        assert_eq!(Precision::from_digits(1).unwrap().bits(), 36);
    }

    #[test]
    fn zero_digits_is_rejected() {
        assert!(matches!(
            Precision::from_digits(0),
            Err(PiError::InvalidDigits(_))
        ));
    }

    #[test]
    fn huge_digit_count_is_rejected() {
        assert!(matches!(
            Precision::from_digits(u64::MAX / 4),
            Err(PiError::PrecisionTooLarge { .. })
        ));
    }

    #[test]
    fn formatting_headroom_is_reserved() {
        // ~2.33e9 bits: fits u32 alone, but not once scaled by 10^digits.
        match Precision::from_digits(700_000_000) {
            Err(PiError::PrecisionTooLarge { bits, max, .. }) => {
                assert!(bits <= u64::from(u32::MAX));
                assert!(bits > max);
            }
            other => panic!("expected PrecisionTooLarge, got {other:?}"),
        }
        let prec = Precision::from_digits(600_000_000).unwrap();
        assert!(2 * u64::from(prec.bits()) <= u64::from(rug::float::prec_max()));
    }

    #[test]
    fn floats_carry_the_working_precision() {
        let prec = Precision::from_digits(100).unwrap();
        assert_eq!(prec.float(3).prec(), prec.bits());
    }

    #[test]
    fn parse_accepts_separators() {
        assert_eq!(parse_digits("1_000_000").unwrap(), 1_000_000);
        assert_eq!(parse_digits(" 42 ").unwrap(), 42);
    }

    #[test]
    fn parse_rejects_bad_input() {
        for arg in ["", "0", "-5", "abc", "1.5", "_"] {
            assert!(
                matches!(parse_digits(arg), Err(PiError::InvalidDigits(_))),
                "'{arg}' should be rejected"
            );
        }
    }
}
