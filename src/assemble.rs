//! Final division and square root, and fixed-point formatting.

use rug::{float::Round, Complete, Float, Integer};

use crate::error::{PiError, Result};
use crate::precision::Precision;
use crate::series::{Triple, A, C};

/// `Q / (P + Q*A) * (C/12) * sqrt(C)` at the working precision.
///
/// The denominator is formed exactly as an integer so the only roundings are
/// the division, the square root and the two products.
pub fn assemble(triple: &Triple, prec: Precision) -> Float {
    let mut denom = (&triple.q * A).complete();
    denom += &triple.p;

    let mut result = prec.float(&triple.q);
    result /= &denom;

    let mut g = prec.float(Float::sqrt_u(C));
    g *= C / 12;

    result *= &g;
    result
}

/// Formats `value` with exactly `prec.digits()` digits after the decimal
/// point, rounding the last one with `round`.
pub fn to_fixed(value: &Float, prec: Precision, round: Round) -> Result<String> {
    if !value.is_finite() {
        return Err(PiError::NonFinite);
    }

    // 10^digits has at most prec.bits() significant bits.
    let bound = u64::from(value.prec()) + u64::from(prec.bits());
    let max = u64::from(rug::float::prec_max());
    if bound > max {
        return Err(PiError::PrecisionTooLarge {
            digits: prec.digits(),
            bits: bound,
            max,
        });
    }

    // Precision keeps digits * log2(10) below u32::MAX.
    let digits = prec.digits() as u32;
    let scale = Integer::u_pow_u(10, digits).complete();

    // Enough bits for the product to be exact, so only `round` applies.
    let scaled_bits = value.prec() + scale.significant_bits();
    let scaled = Float::with_val(scaled_bits, value * &scale);
    let (int, _) = scaled.to_integer_round(round).ok_or(PiError::NonFinite)?;

    let mut s = String::with_capacity(digits as usize + 8);
    if int < 0 {
        s.push('-');
    }
    let mut abs = int.abs().to_string();
    if abs.len() <= digits as usize {
        abs.insert_str(0, &"0".repeat(digits as usize + 1 - abs.len()));
    }
    let point = abs.len() - digits as usize;
    s.push_str(&abs[..point]);
    s.push('.');
    s.push_str(&abs[point..]);

    Ok(s)
}
