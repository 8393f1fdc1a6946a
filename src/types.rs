//! Type definitions for rational approximation
//!
//! This module defines the result type of a rationalization and the settings
//! that control how the tolerance is chosen and how hard the search works.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest integer `n` such that every integer in `0..=n` is exactly
/// representable as an `f64`: `2^53 - 1`.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// A rational number `±numer/denom` produced by rationalization
///
/// The sign is stored separately from the magnitude so that a negative zero
/// input maps to `-0/1`. A zero denominator encodes ±infinity as a pole
/// (`±1/0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    negative: bool,
    numer: u64,
    denom: u64,
}

impl Rational {
    /// Creates `±numer/denom` without reducing it.
    pub fn new(negative: bool, numer: u64, denom: u64) -> Self {
        Rational {
            negative,
            numer,
            denom,
        }
    }

    /// `±1/0`
    pub fn pole(negative: bool) -> Self {
        Rational::new(negative, 1, 0)
    }

    /// `±0/1`
    pub fn zero(negative: bool) -> Self {
        Rational::new(negative, 0, 1)
    }

    /// Signed numerator. A negative zero reads as `0`; use
    /// [`Rational::is_sign_negative`] to tell it apart.
    pub fn numer(&self) -> i64 {
        let magnitude = self.numer as i64;
        if self.negative { -magnitude } else { magnitude }
    }

    /// Unsigned numerator.
    pub fn magnitude(&self) -> u64 {
        self.numer
    }

    pub fn denom(&self) -> u64 {
        self.denom
    }

    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// True for the `±1/0` encoding of an infinite input.
    pub fn is_pole(&self) -> bool {
        self.denom == 0
    }

    /// The nearest double to `numer/denom`, keeping the sign of zero and
    /// mapping poles to infinities.
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.numer as f64 / self.denom as f64;
        if self.negative { -magnitude } else { magnitude }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{}{}/{}", sign, self.numer, self.denom)
    }
}

/// How the absolute tolerance is derived from the input
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Tolerance {
    /// Half a unit in the last place of `x`
    #[default]
    HalfUlp,
    /// A fixed absolute tolerance
    Absolute(f64),
    /// A multiple of `|x|`
    Relative(f64),
    /// Half a unit in the given significant bit of `x` (1 to 53)
    SignificantBits(u32),
}

/// How far the search goes once a convergent meets the tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Search {
    /// Look for a semiconvergent with a smaller denominator
    #[default]
    Best,
    /// Return the first convergent within tolerance
    Convergent,
}

/// Settings for [`rationalize_with`](crate::rationalize_with)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RationalizeConfig {
    /// Tolerance policy
    pub tolerance: Tolerance,
    /// Search depth
    pub search: Search,
}
