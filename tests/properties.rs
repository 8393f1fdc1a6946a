use proptest::prelude::*;

use rationalize::{DoubleDouble, MAX_SAFE_INTEGER, rationalize, rationalize_with_tolerance};

/// `|q x - p|` and `tol q`, both exact up to double-double rounding
fn residual_and_bound(x: f64, tol: f64, p: u64, q: u64) -> (DoubleDouble, DoubleDouble) {
    let residual = (DoubleDouble::from_product(q as f64, x.abs()) - p as f64).abs();
    let bound = DoubleDouble::from_product(tol, q as f64);
    (residual, bound)
}

/// Room for the last bits of double-double rounding
fn slack(bound: DoubleDouble) -> f64 {
    bound.hi() * 2f64.powi(-100)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Tolerances of the form `m * 10^-k`
fn decimal_tolerance(max_exponent: i32) -> impl Strategy<Value = f64> {
    (1u32..=9, 1..=max_exponent).prop_map(|(m, k)| m as f64 * 10f64.powi(-k))
}

proptest! {
    #[test]
    fn tolerance_law(x in -1e6f64..1e6, tol in decimal_tolerance(9)) {
        let r = rationalize_with_tolerance(x, tol).unwrap();
        let (residual, bound) = residual_and_bound(x, tol, r.magnitude(), r.denom());
        prop_assert!(residual <= bound + slack(bound), "x = {}, tol = {}, got {}", x, tol, r);
    }

    #[test]
    fn default_tolerance_law(x in -1e3f64..1e3) {
        // half-ulp answers can need denominators beyond 2^53
        if let Ok(r) = rationalize(x) {
            let tol = rationalize::eps(x);
            let (residual, bound) = residual_and_bound(x, tol, r.magnitude(), r.denom());
            prop_assert!(residual <= bound + slack(bound), "x = {}, got {}", x, r);
        }
    }

    #[test]
    fn sign_symmetry(x in -1e6f64..1e6, tol in decimal_tolerance(9)) {
        let positive = rationalize_with_tolerance(x, tol).unwrap();
        let negative = rationalize_with_tolerance(-x, tol).unwrap();
        prop_assert_eq!(positive.magnitude(), negative.magnitude());
        prop_assert_eq!(positive.denom(), negative.denom());
        prop_assert_ne!(positive.is_sign_negative(), negative.is_sign_negative());
    }

    #[test]
    fn minimal_denominator(x in -100f64..100.0, tol in decimal_tolerance(5)) {
        let r = rationalize_with_tolerance(x, tol).unwrap();
        for d in 1..r.denom() {
            let nearest = (d as f64 * x.abs()).round() as u64;
            let (residual, bound) = residual_and_bound(x, tol, nearest, d);
            prop_assert!(
                residual > bound - slack(bound),
                "{}/{} is within {} of {} but {} was returned",
                nearest, d, tol, x, r
            );
        }
    }

    #[test]
    fn results_are_reduced(x in -1e3f64..1e3, tol in decimal_tolerance(12)) {
        let r = rationalize_with_tolerance(x, tol).unwrap();
        prop_assert_eq!(gcd(r.magnitude(), r.denom()), 1);
    }

    #[test]
    fn small_fractions_round_trip(p in 0u64..10_000, q in 1u64..10_000) {
        let r = rationalize(p as f64 / q as f64).unwrap();
        let g = gcd(p, q);
        prop_assert_eq!((r.magnitude(), r.denom()), (p / g, q / g));
    }

    #[test]
    fn safe_integers_are_fixed_points(n in 0..=MAX_SAFE_INTEGER, negative: bool) {
        let x = if negative { -(n as f64) } else { n as f64 };
        let r = rationalize(x).unwrap();
        prop_assert_eq!(r.magnitude(), n);
        prop_assert_eq!(r.denom(), 1);
        prop_assert_eq!(r.is_sign_negative(), negative);
    }
}
