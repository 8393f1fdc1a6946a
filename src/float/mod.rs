//! Floating-point helpers used by the rationalization core
//!
//! This module provides the pieces the continued-fraction engine needs from the
//! `f64` representation: spacing of adjacent values (`ulp`/`eps`), integer and
//! fractional splitting, mantissa truncation and double-double arithmetic.

mod bits;
mod double_double;
mod split;
mod ulp;

pub use bits::{significant_bits_tolerance, truncate_mantissa};
pub use double_double::DoubleDouble;
pub use split::modf;
pub use ulp::{eps, ulp};
