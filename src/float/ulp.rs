use super::bits::truncate_mantissa;

/// Spacing between `|x|` and the next larger `f64`.
///
/// * NaN stays NaN, infinities give `+inf`.
/// * Zero and subnormal values give the smallest subnormal, `2^-1074`.
///
/// # Examples
/// ```
/// use rationalize::float::ulp;
///
/// assert_eq!(ulp(1.0), f64::EPSILON);
/// assert_eq!(ulp(-1.5), f64::EPSILON);
/// assert_eq!(ulp(0.0), f64::from_bits(1));
/// ```
pub fn ulp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return f64::INFINITY;
    }

    let magnitude = x.abs();
    if magnitude < f64::MIN_POSITIVE {
        return f64::from_bits(1);
    }
    // 2^exponent * 2^-52 is exact down to 2^-1074
    truncate_mantissa(magnitude, 0) * f64::EPSILON
}

/// Half a unit in the last place of `x`: the default tolerance.
///
/// Any real number within `eps(x)` of `x` rounds to `x`. For zero and
/// subnormal inputs the half-spacing is not representable and this returns
/// `0.0`.
pub fn eps(x: f64) -> f64 {
    ulp(x) / 2.0
}
