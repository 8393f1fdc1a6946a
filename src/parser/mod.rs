//! Text boundary
//!
//! This module turns operand text into doubles and parses the `p/q` form
//! that [`Rational`](crate::Rational) displays as. The numeric core only
//! ever sees `f64`; anything that is not a number is rejected here as
//! [`RationalizeError::InvalidType`](crate::RationalizeError::InvalidType).

mod operand;
mod rational;

pub use operand::{parse_operand, rationalize_str};
