//! Configuration support for rationalization
//!
//! Settings live in a small TOML document:
//!
//! ```toml
//! search = "convergent"
//!
//! [tolerance]
//! kind = "significant_bits"
//! value = 20
//! ```
//!
//! Every field is optional; the defaults are a half-ulp tolerance and the
//! full semiconvergent search.

use crate::error::ConfigError;
use crate::float::{eps, significant_bits_tolerance};
use crate::types::{RationalizeConfig, Tolerance};

type Result<T> = std::result::Result<T, ConfigError>;

/// Largest meaningful bit count for [`Tolerance::SignificantBits`]
const MAX_SIGNIFICANT_BITS: u32 = 53;

impl Tolerance {
    /// The absolute tolerance this policy gives for `x`.
    ///
    /// # Examples
    /// ```
    /// use rationalize::Tolerance;
    ///
    /// assert_eq!(Tolerance::Absolute(0.5).resolve(3.0), 0.5);
    /// assert_eq!(Tolerance::Relative(0.5).resolve(-3.0), 1.5);
    /// assert_eq!(Tolerance::SignificantBits(2).resolve(3.0), 0.5);
    /// ```
    pub fn resolve(&self, x: f64) -> f64 {
        match *self {
            Tolerance::HalfUlp => eps(x),
            Tolerance::Absolute(tol) => tol,
            Tolerance::Relative(ratio) if x.is_finite() => ratio * x.abs(),
            Tolerance::Relative(ratio) => ratio,
            Tolerance::SignificantBits(bits) => significant_bits_tolerance(x, bits),
        }
    }
}

impl RationalizeConfig {
    /// Parses and validates a TOML configuration.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: RationalizeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the tolerance settings without running anything.
    pub fn validate(&self) -> Result<()> {
        match self.tolerance {
            Tolerance::Absolute(tol) | Tolerance::Relative(tol) if !(tol >= 0.0) => {
                Err(ConfigError::InvalidTolerance { got: tol })
            }
            Tolerance::SignificantBits(bits) if !(1..=MAX_SIGNIFICANT_BITS).contains(&bits) => {
                Err(ConfigError::InvalidSignificantBits { got: bits })
            }
            _ => Ok(()),
        }
    }
}
