/// Number of explicit mantissa bits in an `f64`.
const MANTISSA_BITS: u32 = 52;

/// Clears the low mantissa bits of `x`, keeping the `keep` most significant
/// explicit mantissa bits.
///
/// The sign and exponent are untouched, so `truncate_mantissa(x, 0)` is the
/// power of two at or below `|x|` (with the sign of `x`) for normal values.
/// `keep` values above 52 are treated as 52.
///
/// # Examples
/// ```
/// use rationalize::float::truncate_mantissa;
///
/// assert_eq!(truncate_mantissa(3.75, 0), 2.0);
/// assert_eq!(truncate_mantissa(3.75, 1), 3.0);
/// assert_eq!(truncate_mantissa(-3.75, 2), -3.5);
/// ```
pub fn truncate_mantissa(x: f64, keep: u32) -> f64 {
    let dropped = MANTISSA_BITS - keep.min(MANTISSA_BITS);
    let mask = !((1u64 << dropped) - 1);
    f64::from_bits(x.to_bits() & mask)
}

/// Half a unit in the `bits`-th significant bit of `x`.
///
/// With `bits = 53` this is the same as [`eps`](super::eps). Zero and
/// subnormal values fall back to `eps(x)` since they have no implicit
/// leading bit to count from.
pub fn significant_bits_tolerance(x: f64, bits: u32) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return super::eps(x);
    }
    let magnitude = x.abs();
    if magnitude < f64::MIN_POSITIVE {
        return super::eps(x);
    }
    truncate_mantissa(magnitude, 0) * 2f64.powi(-(bits as i32))
}
