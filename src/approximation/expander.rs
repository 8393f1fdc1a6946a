//! Continued-fraction expansion
//!
//! Standard algorithm for convergents:
//! a_n = floor(x_n)
//! p_n = a_n * p_{n-1} + p_{n-2}
//! q_n = a_n * q_{n-1} + q_{n-2}
//! with (p_{-2}, q_{-2}) = (0, 1) and (p_{-1}, q_{-1}) = (1, 0).
//!
//! Instead of re-evaluating `|x - p/q|`, which cancels badly once `q` is
//! large, the residuals `|e_n| = |q_n x - p_n|` run through the Euclidean
//! algorithm on `(x, 1)`. Every finite double is a dyadic rational, so the
//! floating-point remainder keeps them exact. The tolerance terms
//! `t_n = tol * q_n` follow the same recurrence in double-double.

use tracing::trace;

use super::guard::recurrence;
use crate::error::RationalizeError;
use crate::float::{DoubleDouble, modf};

/// Quotient and remainder of the euclidean division `n / d` for `n, d > 0`.
///
/// The remainder is exact. The quotient is rounded to the nearest integer to
/// undo the rounding of `(n - r) / d`.
fn euclid(n: f64, d: f64) -> (f64, f64) {
    let r = n % d;
    (((n - r) / d).round(), r)
}

/// State of the expansion of a positive, non-integer `x`
///
/// After [`Expansion::expand`], convergent `n = a * p[1] + p[0]` is the first
/// one within tolerance; the convergents before it are `p`/`q`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Expansion {
    pub(crate) x: f64,
    pub(crate) tol: f64,
    /// `[p_{n-2}, p_{n-1}]`
    pub(crate) p: [u64; 2],
    /// `[q_{n-2}, q_{n-1}]`
    pub(crate) q: [u64; 2],
    /// `[|e_{n-2}|, |e_{n-1}|, |e_n|]`
    pub(crate) e: [f64; 3],
    /// `[t_{n-2}, t_{n-1}, t_n]`
    pub(crate) t: [DoubleDouble; 3],
    /// `a_n`
    pub(crate) a: f64,
    /// Number of convergents produced so far
    pub(crate) terms: usize,
}

impl Expansion {
    fn seed(x: f64, tol: f64) -> Self {
        let (a, fraction) = modf(x);
        let tol_dd = DoubleDouble::from(tol);
        Expansion {
            x,
            tol,
            p: [0, 1],
            q: [1, 0],
            e: [x, 1.0, fraction],
            t: [tol_dd, DoubleDouble::ZERO, tol_dd],
            a,
            terms: 0,
        }
    }

    /// Runs the expansion of `x > 0` until the pending convergent is within
    /// `tol`.
    pub(crate) fn expand(x: f64, tol: f64) -> Result<Self, RationalizeError> {
        let mut expansion = Expansion::seed(x, tol);
        while !expansion.within_tolerance() {
            expansion.step()?;
        }
        Ok(expansion)
    }

    /// `|e_n| <= t_n`, i.e. `|x - p_n/q_n| <= tol`
    pub(crate) fn within_tolerance(&self) -> bool {
        DoubleDouble::from(self.e[2]) <= self.t[2]
    }

    /// Commits convergent `n` and moves on to the next partial quotient.
    fn step(&mut self) -> Result<(), RationalizeError> {
        let numer = recurrence(self.a, self.p[1], self.p[0])?;
        let denom = recurrence(self.a, self.q[1], self.q[0])?;
        trace!(term = self.terms, quotient = self.a, numer, denom, "convergent");
        self.p = [self.p[1], numer];
        self.q = [self.q[1], denom];
        self.terms += 1;

        // e[2] > t[2] >= 0 here, so the division is well defined
        let (a, r) = euclid(self.e[1], self.e[2]);
        if !a.is_finite() {
            return Err(RationalizeError::IntegerOverflow { value: a });
        }
        self.e = [self.e[1], self.e[2], r];
        self.t = [self.t[1], self.t[2], self.t[2] * a + self.t[1]];
        self.a = a;
        Ok(())
    }

    /// Whether the semiconvergent `(k p_{n-1} + p_{n-2}) / (k q_{n-1} + q_{n-2})`
    /// is within tolerance, for `0 <= k <= a_n`:
    /// `|e_{n-2}| - k |e_{n-1}| <= t_{n-2} + k t_{n-1}`.
    pub(crate) fn accepts(&self, k: f64) -> bool {
        let residual = DoubleDouble::from(self.e[0]) - DoubleDouble::from_product(k, self.e[1]);
        let tolerance = self.t[1] * k + self.t[0];
        residual <= tolerance
    }
}
