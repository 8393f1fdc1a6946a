use crate::error::RationalizeError;

/// Rejects inputs the expansion cannot work with.
///
/// * `x` must not be NaN. Infinities are accepted and handled as poles.
/// * `tol` must be a non-negative number, so NaN is rejected; `+inf` is
///   accepted.
pub(crate) fn validate(x: f64, tol: f64) -> Result<(), RationalizeError> {
    if x.is_nan() {
        return Err(RationalizeError::InvalidValue { value: x });
    }
    if !(tol >= 0.0) {
        return Err(RationalizeError::InvalidTolerance { value: tol });
    }
    Ok(())
}
