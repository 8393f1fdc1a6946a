//! Error types
//!
//! ┌ [`RationalizeError`]   : rejected inputs and unreachable precision
//! │   ├ non-numeric operand text (boundary layer)
//! │   ├ NaN input / invalid tolerance
//! │   └ numerator or denominator beyond 2^53 - 1
//! │
//! ├ [`ConfigError`]        : configuration loading
//! │
//! └ [`ParseRationalError`] : `p/q` text that is not a rational

use std::fmt;

use thiserror::Error;

/// Which argument of a rationalization an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The value being approximated
    Value,
    /// The absolute tolerance
    Tolerance,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value => write!(f, "x"),
            Operand::Tolerance => write!(f, "tolerance"),
        }
    }
}

/// Rationalization failures
///
/// There is no partial result: the caller either loosens the tolerance or
/// accepts the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RationalizeError {
    #[error("{operand} must be a number (received {received:?})")]
    InvalidType { operand: Operand, received: String },

    #[error("x must be a valid number (received {value})")]
    InvalidValue { value: f64 },

    #[error("tolerance must be a non-negative number (received {value})")]
    InvalidTolerance { value: f64 },

    #[error("{value} is not a safe integer")]
    IntegerOverflow { value: f64 },
}

impl RationalizeError {
    /// Errors about a numeric value outside the accepted range.
    pub fn is_range_error(&self) -> bool {
        !self.is_type_error()
    }

    /// Errors about an operand that is not a number at all.
    pub fn is_type_error(&self) -> bool {
        matches!(self, RationalizeError::InvalidType { .. })
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid tolerance: must be a non-negative number. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid significant bits: must be in 1..=53. got {got}")]
    InvalidSignificantBits { got: u32 },
}

/// Returned by `Rational::from_str`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid rational literal {input:?}: expected `p/q`")]
pub struct ParseRationalError {
    pub input: String,
}
