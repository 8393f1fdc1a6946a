//! Double-double arithmetic
//!
//! A `DoubleDouble` is the unevaluated sum `hi + lo` of two doubles with
//! `|lo| <= ulp(hi) / 2`, giving roughly 106 bits of significand. Sums use
//! Knuth's two-sum, products use a fused multiply-add for the exact error
//! term. Only finite values are supported; infinities can be stored and
//! compared but not combined.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Exact sum: `a + b == s + err`.
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Exact sum assuming `|a| >= |b|` (or `a == 0`).
#[inline]
fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    (s, b - (s - a))
}

/// Exact product: `a * b == p + err`.
#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    (p, a.mul_add(b, -p))
}

/// Extended-precision real number represented as `hi + lo`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DoubleDouble {
    hi: f64,
    lo: f64,
}

impl DoubleDouble {
    pub const ZERO: DoubleDouble = DoubleDouble { hi: 0.0, lo: 0.0 };
    pub const ONE: DoubleDouble = DoubleDouble { hi: 1.0, lo: 0.0 };

    /// The exact sum `hi + lo`, renormalized.
    pub fn new(hi: f64, lo: f64) -> Self {
        let (hi, lo) = two_sum(hi, lo);
        DoubleDouble { hi, lo }
    }

    /// The exact product `a * b`.
    pub fn from_product(a: f64, b: f64) -> Self {
        let (hi, lo) = two_prod(a, b);
        DoubleDouble { hi, lo }
    }

    pub fn hi(self) -> f64 {
        self.hi
    }

    pub fn lo(self) -> f64 {
        self.lo
    }

    /// Nearest double to the represented value.
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    pub fn is_sign_negative(self) -> bool {
        self.hi < 0.0 || (self.hi == 0.0 && self.lo < 0.0)
    }

    pub fn abs(self) -> Self {
        if self.is_sign_negative() { -self } else { self }
    }

    /// Smallest integer not below the represented value, as a double.
    ///
    /// `hi` alone decides unless it is already integral, in which case the
    /// sign of `lo` says whether the value sits just above it.
    pub fn ceil(self) -> f64 {
        let c = self.hi.ceil();
        if c == self.hi && self.lo > 0.0 {
            c + 1.0
        } else {
            c
        }
    }
}

impl From<f64> for DoubleDouble {
    fn from(value: f64) -> Self {
        DoubleDouble { hi: value, lo: 0.0 }
    }
}

impl Neg for DoubleDouble {
    type Output = DoubleDouble;

    fn neg(self) -> DoubleDouble {
        DoubleDouble {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Add for DoubleDouble {
    type Output = DoubleDouble;

    fn add(self, rhs: DoubleDouble) -> DoubleDouble {
        let (s, e) = two_sum(self.hi, rhs.hi);
        let (t, f) = two_sum(self.lo, rhs.lo);
        let (s, e) = quick_two_sum(s, e + t);
        let (hi, lo) = quick_two_sum(s, e + f);
        DoubleDouble { hi, lo }
    }
}

impl Add<f64> for DoubleDouble {
    type Output = DoubleDouble;

    fn add(self, rhs: f64) -> DoubleDouble {
        self + DoubleDouble::from(rhs)
    }
}

impl Sub for DoubleDouble {
    type Output = DoubleDouble;

    fn sub(self, rhs: DoubleDouble) -> DoubleDouble {
        self + (-rhs)
    }
}

impl Sub<f64> for DoubleDouble {
    type Output = DoubleDouble;

    fn sub(self, rhs: f64) -> DoubleDouble {
        self + DoubleDouble::from(-rhs)
    }
}

impl Mul for DoubleDouble {
    type Output = DoubleDouble;

    fn mul(self, rhs: DoubleDouble) -> DoubleDouble {
        let (p, e) = two_prod(self.hi, rhs.hi);
        let e = e + (self.hi * rhs.lo + self.lo * rhs.hi);
        let (hi, lo) = quick_two_sum(p, e);
        DoubleDouble { hi, lo }
    }
}

impl Mul<f64> for DoubleDouble {
    type Output = DoubleDouble;

    fn mul(self, rhs: f64) -> DoubleDouble {
        let (p, e) = two_prod(self.hi, rhs);
        let e = self.lo.mul_add(rhs, e);
        let (hi, lo) = quick_two_sum(p, e);
        DoubleDouble { hi, lo }
    }
}

impl Div for DoubleDouble {
    type Output = DoubleDouble;

    /// Long division: three quotient digits, each correcting the remainder
    /// of the previous one.
    fn div(self, rhs: DoubleDouble) -> DoubleDouble {
        let q1 = self.hi / rhs.hi;
        let r = self - rhs * q1;
        let q2 = r.hi / rhs.hi;
        let r = r - rhs * q2;
        let q3 = r.hi / rhs.hi;

        let (hi, lo) = quick_two_sum(q1, q2);
        DoubleDouble { hi, lo } + q3
    }
}

impl Div<f64> for DoubleDouble {
    type Output = DoubleDouble;

    fn div(self, rhs: f64) -> DoubleDouble {
        self / DoubleDouble::from(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_is_exact() {
        let p = DoubleDouble::from_product(0.1, 3.0);
        assert_eq!(p.hi(), 0.1 * 3.0);
        assert_eq!(p.lo(), 0.1f64.mul_add(3.0, -(0.1 * 3.0)));
        assert_ne!(p.lo(), 0.0);
    }

    #[test]
    fn test_addition_keeps_small_terms() {
        let x = DoubleDouble::ONE + 1e-20;
        assert_eq!(x.hi(), 1.0);
        assert_eq!(x.lo(), 1e-20);

        let back = x - 1.0;
        assert_eq!(back.hi(), 1e-20);
        assert_eq!(back.lo(), 0.0);
    }

    #[test]
    fn test_division() {
        let tenth = DoubleDouble::ONE / 10.0;
        assert_eq!(tenth.hi(), 0.1);
        // 1/10 - fl(0.1) = -2^-55 / 5
        let expected = -(2f64.powi(-55)) / 5.0;
        assert!((tenth.lo() - expected).abs() < 1e-32);

        let third = DoubleDouble::ONE / 3.0;
        let one = third * 3.0;
        assert!((one - 1.0).abs().hi() < 1e-30);
    }

    #[test]
    fn test_exact_division() {
        let q = DoubleDouble::ONE / DoubleDouble::from(0.25);
        assert_eq!(q, DoubleDouble::from(4.0));
        let q = DoubleDouble::from(0.75) / 0.25;
        assert_eq!(q, DoubleDouble::from(3.0));
    }

    #[test]
    fn test_ordering_uses_low_part() {
        let a = DoubleDouble::ONE + 1e-20;
        let b = DoubleDouble::ONE - 1e-20;
        assert!(a > DoubleDouble::ONE);
        assert!(b < DoubleDouble::ONE);
        assert!(b < a);
        assert!(DoubleDouble::from(2.0) > a);
    }

    #[test]
    fn test_abs_and_neg() {
        let x = DoubleDouble::new(-2.0, 1e-20);
        assert!(x.is_sign_negative());
        let y = x.abs();
        assert_eq!(y.hi(), 2.0);
        assert_eq!(y.lo(), -1e-20);
        assert_eq!(-y, x);
        assert!(!DoubleDouble::ZERO.is_sign_negative());
    }

    #[test]
    fn test_ceil() {
        assert_eq!(DoubleDouble::new(3.0, 1e-20).ceil(), 4.0);
        assert_eq!(DoubleDouble::new(3.0, -1e-20).ceil(), 3.0);
        assert_eq!(DoubleDouble::from(3.0).ceil(), 3.0);
        assert_eq!(DoubleDouble::from(2.5).ceil(), 3.0);
        assert_eq!(DoubleDouble::from(-2.5).ceil(), -2.0);
    }

    #[test]
    fn test_cancellation_is_recovered() {
        // (1 + 2^-60) - 1 is lost in f64 but not here
        let tiny = 2f64.powi(-60);
        let x = (DoubleDouble::ONE + tiny) - DoubleDouble::ONE;
        assert_eq!(x.to_f64(), tiny);
    }
}
