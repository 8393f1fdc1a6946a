//! Best rational approximation of a double
//!
//! The pipeline is validation, special values, the continued-fraction
//! expansion of `|x|` and the semiconvergent search. The sign of `x` is
//! folded back in at the end, so negative inputs mirror positive ones
//! exactly and `-0.0` stays `-0/1`.

mod expander;
mod guard;
mod minimizer;
mod special;
mod validate;

use tracing::debug;

use crate::error::RationalizeError;
use crate::float::eps;
use crate::types::{Rational, RationalizeConfig, Search};

use expander::Expansion;
use special::SpecialValue;

/// Approximates `x` to within half a unit in its last place.
///
/// Every finite double is itself a rational, so this recovers the simplest
/// fraction that rounds to `x`.
///
/// # Examples
/// ```
/// use rationalize::rationalize;
///
/// assert_eq!(rationalize(0.1).unwrap().to_string(), "1/10");
/// assert_eq!(rationalize(-1.0 / 3.0).unwrap().to_string(), "-1/3");
/// assert_eq!(rationalize(f64::INFINITY).unwrap().to_string(), "1/0");
/// ```
pub fn rationalize(x: f64) -> Result<Rational, RationalizeError> {
    rationalize_with_tolerance(x, eps(x))
}

/// Finds the fraction with the smallest denominator within `tol` of `x`.
///
/// # Errors
/// * [`RationalizeError::InvalidValue`] if `x` is NaN
/// * [`RationalizeError::InvalidTolerance`] if `tol` is NaN or negative
/// * [`RationalizeError::IntegerOverflow`] if the answer needs a numerator
///   or denominator above `2^53 - 1`
///
/// # Examples
/// ```
/// use std::f64::consts::PI;
/// use rationalize::rationalize_with_tolerance;
///
/// let r = rationalize_with_tolerance(PI, 1e-3).unwrap();
/// assert_eq!((r.numer(), r.denom()), (201, 64));
///
/// let r = rationalize_with_tolerance(-0.75, 0.0).unwrap();
/// assert_eq!((r.numer(), r.denom()), (-3, 4));
/// ```
pub fn rationalize_with_tolerance(x: f64, tol: f64) -> Result<Rational, RationalizeError> {
    run(x, tol, Search::Best)
}

/// Rationalizes `x` with the tolerance policy and search depth of `config`.
///
/// # Examples
/// ```
/// use rationalize::{rationalize_with, RationalizeConfig, Search, Tolerance};
///
/// let config = RationalizeConfig {
///     tolerance: Tolerance::Absolute(0.25),
///     search: Search::Convergent,
/// };
/// assert_eq!(rationalize_with(0.3, &config).unwrap().to_string(), "1/3");
/// ```
pub fn rationalize_with(x: f64, config: &RationalizeConfig) -> Result<Rational, RationalizeError> {
    run(x, config.tolerance.resolve(x), config.search)
}

fn run(x: f64, tol: f64, search: Search) -> Result<Rational, RationalizeError> {
    validate::validate(x, tol)?;

    if let Some(special) = SpecialValue::classify(x, tol)? {
        return Ok(special.to_rational(x));
    }

    let expansion = Expansion::expand(x.abs(), tol)?;
    debug!(
        x,
        tol,
        terms = expansion.terms,
        quotient = expansion.a,
        "expansion within tolerance"
    );
    let (numer, denom) = minimizer::minimize(&expansion, search)?;
    Ok(Rational::new(x.is_sign_negative(), numer, denom))
}
