use crate::error::RationalizeError;
use crate::types::MAX_SAFE_INTEGER;

/// Returns `|value|` as an integer if `value` is a safe integer.
///
/// Fails with `IntegerOverflow` carrying the offending value otherwise.
pub(crate) fn safe_integer(value: f64) -> Result<u64, RationalizeError> {
    let magnitude = value.abs();
    if magnitude.fract() == 0.0 && magnitude <= MAX_SAFE_INTEGER as f64 {
        Ok(magnitude as u64)
    } else {
        Err(RationalizeError::IntegerOverflow { value })
    }
}

/// One step of the convergent recurrence, `a * prev1 + prev2`, guarded.
///
/// The sum is formed in `f64`: exact whenever the true result is a safe
/// integer, and at least `2^53` whenever it is not, so the guard never
/// accepts a rounded value.
pub(crate) fn recurrence(a: f64, prev1: u64, prev2: u64) -> Result<u64, RationalizeError> {
    safe_integer(a.mul_add(prev1 as f64, prev2 as f64))
}
