/// Splits a finite `x` into `(⌊x⌋, x - ⌊x⌋)`.
///
/// Both parts are exact: the integer part of a double is representable, and
/// so is the difference. The fractional part is always in `[0, 1)`, so for
/// negative non-integers the integer part rounds down, e.g. `-1.25` splits
/// into `(-2.0, 0.75)`.
pub fn modf(x: f64) -> (f64, f64) {
    let integer = x.floor();
    (integer, x - integer)
}
