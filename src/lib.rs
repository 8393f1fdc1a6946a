//! Best rational approximations of doubles
//!
//! [`rationalize_with_tolerance`] finds the fraction with the smallest
//! denominator within an absolute tolerance of a value, using its continued
//! fraction and the semiconvergents between the last two convergents.
//! Numerators and denominators are plain integers that stay exact in an
//! `f64` (at most `2^53 - 1`); answers that would need more fail with
//! [`RationalizeError::IntegerOverflow`].
//!
//! ```
//! use rationalize::{rationalize, rationalize_with_tolerance};
//!
//! assert_eq!(rationalize(0.75).unwrap().to_string(), "3/4");
//! assert_eq!(
//!     rationalize_with_tolerance(std::f64::consts::PI, 1e-2).unwrap().to_string(),
//!     "22/7"
//! );
//! ```

pub mod approximation;
pub mod config;
pub mod error;
pub mod float;
pub mod parser;
pub mod types;

pub use approximation::{rationalize, rationalize_with, rationalize_with_tolerance};
pub use error::{ConfigError, Operand, ParseRationalError, RationalizeError};
pub use float::{DoubleDouble, eps, modf, truncate_mantissa, ulp};
pub use parser::{parse_operand, rationalize_str};
pub use types::*;
