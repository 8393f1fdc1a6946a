//! Semiconvergent search
//!
//! Once convergent `n` meets the tolerance, the semiconvergents
//! `(k p_{n-1} + p_{n-2}) / (k q_{n-1} + q_{n-2})` for `1 <= k <= a_n` are the
//! only candidates with a denominator between `q_{n-1}` and `q_n`. Their
//! error shrinks monotonically in `k`, so the smallest accepted `k` gives the
//! smallest denominator.

use tracing::debug;

use super::expander::Expansion;
use super::guard::recurrence;
use crate::error::RationalizeError;
use crate::float::DoubleDouble;
use crate::types::{MAX_SAFE_INTEGER, Search};

/// Which closed form estimates the smallest accepted `k`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Semiconvergent {
    /// No search: `k = a_n`
    Convergent,
    /// Previous convergent is the pole `1/0`; candidates are the integers
    /// `k/1` and the first one within tolerance is `ceil(x - tol)`
    Integer,
    /// Previous convergent is `0/1`; candidates are the unit fractions
    /// `1/k` and the first one within tolerance is `ceil(1 / (x + tol))`
    Reciprocal,
    /// `ceil((|e_{n-2}| - t_{n-2}) / (|e_{n-1}| + t_{n-1}))`
    General,
}

impl Semiconvergent {
    pub(crate) fn classify(expansion: &Expansion, search: Search) -> Self {
        if search == Search::Convergent || expansion.a <= 1.0 {
            Semiconvergent::Convergent
        } else if expansion.q[1] == 0 {
            Semiconvergent::Integer
        } else if expansion.p[1] == 0 {
            Semiconvergent::Reciprocal
        } else {
            Semiconvergent::General
        }
    }

    /// First guess for `k`, before clamping to `[1, a_n]`.
    fn estimate(self, expansion: &Expansion) -> f64 {
        let Expansion { x, tol, e, t, a, .. } = *expansion;
        match self {
            Semiconvergent::Convergent => a,
            Semiconvergent::Integer => (DoubleDouble::from(x) - tol).ceil(),
            Semiconvergent::Reciprocal => (DoubleDouble::ONE / (DoubleDouble::from(x) + tol))
                .ceil()
                .min(a),
            Semiconvergent::General => {
                ((DoubleDouble::from(e[0]) - t[0]) / (DoubleDouble::from(e[1]) + t[1])).ceil()
            }
        }
    }
}

/// Moves `k` to the smallest value in `[1, a_n]` that passes the exact
/// acceptance test.
fn refine(expansion: &Expansion, estimate: f64) -> f64 {
    let a = expansion.a;
    let mut k = estimate.max(1.0).min(a);
    // Too large to ever pass the guard; stepping would not terminate in time.
    if k > (MAX_SAFE_INTEGER + 1) as f64 {
        return k;
    }
    while k > 1.0 && expansion.accepts(k - 1.0) {
        k -= 1.0;
    }
    while k < a && !expansion.accepts(k) {
        k += 1.0;
    }
    k
}

/// Picks the semiconvergent to return and builds its numerator and
/// denominator, both guarded.
pub(crate) fn minimize(
    expansion: &Expansion,
    search: Search,
) -> Result<(u64, u64), RationalizeError> {
    let case = Semiconvergent::classify(expansion, search);
    let estimate = case.estimate(expansion);
    let k = match case {
        Semiconvergent::Convergent => estimate,
        _ => refine(expansion, estimate),
    };

    let numer = recurrence(k, expansion.p[1], expansion.p[0])?;
    let denom = recurrence(k, expansion.q[1], expansion.q[0])?;
    debug!(?case, k, quotient = expansion.a, numer, denom, "semiconvergent");
    Ok((numer, denom))
}
