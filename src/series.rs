//! Chudnovsky series constants and the closed form of a single term.
//!
//! ```text
//!            (C/12) * sqrt(C) * Q(0, N)
//! pi = -----------------------------------
//!         A * Q(0, N) + P(0, N)
//! ```

use rug::{
    ops::{NegAssign, PowAssign},
    Integer,
};

use crate::config::EXTRA_TERMS;

pub const A: u32 = 13591409;
pub const B: u32 = 545140134;
pub const C: u32 = 640320;
/// C^3 / 24
pub const C3_OVER_24: u64 = 10939058860032000;
/// 3 * log2(C/12): bits gained per term, only used for sizing.
pub const BITS_PER_TERM: f64 = 47.11041313821584202247;

/// Partial numerator, denominator and auxiliary product over a term range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triple {
    pub p: Integer,
    pub q: Integer,
    pub g: Integer,
}

/// Terms needed for `bits` of precision.
pub fn term_count(bits: u32) -> u64 {
    (f64::from(bits) / BITS_PER_TERM).ceil() as u64 + EXTRA_TERMS
}

/// Closed form for term `n`; panics for `n == 0`:
///
/// ```text
/// G(n) = (2n-1)(6n-1)(6n-5)
/// P(n) = (-1)^n * G(n) * (B*n + A)
/// Q(n) = n^3 * C^3/24
/// ```
pub fn term(n: u64) -> Triple {
    assert!(n >= 1, "term 0 is folded into the final assembly");

    let mut g = Integer::from(2 * n - 1);
    g *= 6 * n - 1;
    g *= 6 * n - 5;

    let mut p = Integer::from(n);
    p *= B;
    p += A;
    p *= &g;
    if n % 2 == 1 {
        p.neg_assign();
    }

    let mut q = Integer::from(n);
    q.pow_assign(3);
    q *= C3_OVER_24;

    Triple { p, q, g }
}
