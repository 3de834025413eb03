//! Binary splitting over half-open term ranges `[a, b)`.
//!
//! ```text
//! P(a,b) = P(a,m) * Q(m,b) + P(m,b) * G(a,m)
//! Q(a,b) = Q(a,m) * Q(m,b)
//! G(a,b) = G(a,m) * G(m,b)
//! ```

use rug::Integer;
use tracing::trace_span;

use crate::series::{term, Triple};

/// Merges the triples of two adjacent ranges. `left` must carry its real G.
/// When `need_g` is false the merged G is left as zero.
pub fn combine(left: Triple, right: Triple, need_g: bool) -> Triple {
    let Triple {
        mut p,
        mut q,
        mut g,
    } = left;
    let Triple {
        p: in_p,
        q: in_q,
        g: in_g,
    } = right;

    p *= &in_q;
    p += in_p * &g;

    q *= in_q;

    if need_g {
        g *= in_g;
    } else {
        g = Integer::new();
    }

    Triple { p, q, g }
}

/// Triple for `[a, b)`. Panics unless `a < b`.
///
/// A singleton range `[b-1, b)` is the closed form at index `b`, with G always
/// present. Larger ranges split at the midpoint; the left half always computes
/// G since the merge multiplies by it, the right half only when `need_g`.
pub fn split(a: u64, b: u64, need_g: bool) -> Triple {
    assert!(a < b, "empty range [{a}, {b})");

    if b - a == 1 {
        return term(b);
    }

    let c = (a + b) / 2;
    let left = split(a, c, true);
    let right = split(c, b, need_g);
    combine(left, right, need_g)
}

/// Same result as [`split`], but ranges of at least `grain` terms evaluate
/// their halves with `rayon::join`. Runs on the current rayon pool.
pub fn split_parallel(a: u64, b: u64, need_g: bool, grain: u64) -> Triple {
    assert!(a < b, "empty range [{a}, {b})");

    if b - a < grain.max(2) {
        return split(a, b, need_g);
    }

    let _span = trace_span!("fork", a, b).entered();
    let c = (a + b) / 2;
    let (left, right) = rayon::join(
        || split_parallel(a, c, true, grain),
        || split_parallel(c, b, need_g, grain),
    );
    combine(left, right, need_g)
}

/// Term-by-term baseline: folds the singleton triples of `[a, b)` strictly
/// left to right. G is elided under the same rule as [`split`].
pub fn fold_terms(a: u64, b: u64, need_g: bool) -> Triple {
    assert!(a < b, "empty range [{a}, {b})");

    let mut acc = term(a + 1);
    for n in a + 2..=b {
        acc = combine(acc, term(n), true);
    }
    if !need_g && b - a > 1 {
        acc.g = Integer::new();
    }
    acc
}
