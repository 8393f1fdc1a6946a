use winnow::ascii::{float, multispace0};
use winnow::combinator::delimited;
use winnow::{ModalResult, Parser};

use crate::approximation::{rationalize, rationalize_with_tolerance};
use crate::error::{Operand, RationalizeError};
use crate::types::Rational;

/// A float literal, `inf` or `nan`, with optional surrounding whitespace
fn number(input: &mut &str) -> ModalResult<f64> {
    delimited(multispace0, float, multispace0).parse_next(input)
}

/// Parses the text of one operand.
///
/// Accepts anything `winnow`'s float grammar does, including `inf`,
/// `-infinity` and `nan`. NaN is returned as a value so the core can report
/// it as `InvalidValue`; only text that is not a number at all is an
/// `InvalidType`.
///
/// # Examples
/// ```
/// use rationalize::{parse_operand, Operand};
///
/// assert_eq!(parse_operand(Operand::Value, " 0.25 ").unwrap(), 0.25);
/// assert!(parse_operand(Operand::Value, "-inf").unwrap().is_infinite());
/// assert!(parse_operand(Operand::Tolerance, "abc").unwrap_err().is_type_error());
/// ```
pub fn parse_operand(operand: Operand, text: &str) -> Result<f64, RationalizeError> {
    let invalid = || RationalizeError::InvalidType {
        operand,
        received: text.to_string(),
    };

    let mut input = text;
    let value = number.parse_next(&mut input).map_err(|_| invalid())?;
    if !input.is_empty() {
        return Err(invalid());
    }
    Ok(value)
}

/// Rationalizes operands given as text.
///
/// A missing tolerance means the default half-ulp tolerance of `x`.
///
/// # Examples
/// ```
/// use rationalize::rationalize_str;
///
/// assert_eq!(rationalize_str("3.14159", Some("0.01")).unwrap().to_string(), "22/7");
/// assert_eq!(rationalize_str("0.5", None).unwrap().to_string(), "1/2");
/// ```
pub fn rationalize_str(x: &str, tol: Option<&str>) -> Result<Rational, RationalizeError> {
    let x = parse_operand(Operand::Value, x)?;
    match tol {
        Some(tol) => rationalize_with_tolerance(x, parse_operand(Operand::Tolerance, tol)?),
        None => rationalize(x),
    }
}
