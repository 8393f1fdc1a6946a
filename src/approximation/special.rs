use tracing::debug;

use super::guard::safe_integer;
use crate::error::RationalizeError;
use crate::float::modf;
use crate::types::Rational;

/// Inputs that do not need a continued fraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SpecialValue {
    /// `±inf`, encoded as `±1/0`
    Pole,
    /// An exact integer with the given magnitude
    Integer(u64),
    /// `|x| <= tol`: zero is already close enough
    Zero,
}

impl SpecialValue {
    /// Classifies a validated input; `None` means the expansion has to run.
    pub(crate) fn classify(x: f64, tol: f64) -> Result<Option<SpecialValue>, RationalizeError> {
        if x.is_infinite() {
            return Ok(Some(SpecialValue::Pole));
        }
        if modf(x).1 == 0.0 {
            return Ok(Some(SpecialValue::Integer(safe_integer(x)?)));
        }
        if x.abs() <= tol {
            return Ok(Some(SpecialValue::Zero));
        }
        Ok(None)
    }

    /// The rational for this case, with the sign of `x` folded in.
    pub(crate) fn to_rational(self, x: f64) -> Rational {
        let negative = x.is_sign_negative();
        debug!(case = ?self, negative, "special value");
        match self {
            SpecialValue::Pole => Rational::pole(negative),
            SpecialValue::Integer(magnitude) => Rational::new(negative, magnitude, 1),
            SpecialValue::Zero => Rational::zero(negative),
        }
    }
}
