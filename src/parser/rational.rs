use std::str::FromStr;

use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

use crate::error::ParseRationalError;
use crate::types::Rational;

fn magnitude(input: &mut &str) -> ModalResult<u64> {
    digit1.try_map(|digits: &str| digits.parse::<u64>()).parse_next(input)
}

/// `[+-]digits[/digits]`; a missing denominator means `1`
fn rational(input: &mut &str) -> ModalResult<Rational> {
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;
    let numer = magnitude.parse_next(input)?;
    let denom = opt(preceded('/', magnitude)).parse_next(input)?;
    Ok(Rational::new(sign == Some('-'), numer, denom.unwrap_or(1)))
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses the form produced by `Display`, e.g. `-3/4`, `1/0` or `-0/1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRationalError {
            input: s.to_string(),
        };

        let mut input = s;
        let value = rational.parse_next(&mut input).map_err(|_| invalid())?;
        if !input.is_empty() {
            return Err(invalid());
        }
        Ok(value)
    }
}
