/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` lose precision, the same way mixed integer and float
/// arithmetic does on any IEEE 754 host.
///
/// ## Example
/// ```
/// use reckon::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Integer division rounded toward negative infinity.
///
/// Returns `None` when `b` is zero or the quotient overflows
/// (`i64::MIN // -1`).
///
/// ## Example
/// ```
/// use reckon::util::num::floor_div_i64;
///
/// assert_eq!(floor_div_i64(7, 2), Some(3));
/// assert_eq!(floor_div_i64(-7, 2), Some(-4));
/// assert_eq!(floor_div_i64(7, -2), Some(-4));
/// assert_eq!(floor_div_i64(i64::MIN, -1), None);
/// ```
#[must_use]
pub fn floor_div_i64(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Integer modulo whose result takes the sign of the divisor.
///
/// Returns `None` only when `b` is zero.
///
/// ## Example
/// ```
/// use reckon::util::num::floor_mod_i64;
///
/// assert_eq!(floor_mod_i64(7, 3), Some(1));
/// assert_eq!(floor_mod_i64(-7, 3), Some(2));
/// assert_eq!(floor_mod_i64(7, -3), Some(-2));
/// assert_eq!(floor_mod_i64(i64::MIN, -1), Some(0));
/// ```
#[must_use]
pub fn floor_mod_i64(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        return None;
    }
    // `checked_rem` only fails for `i64::MIN % -1`, whose remainder is zero.
    let remainder = a.checked_rem(b).unwrap_or(0);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}

/// Float division rounded toward negative infinity.
///
/// ## Example
/// ```
/// use reckon::util::num::floor_div_f64;
///
/// assert_eq!(floor_div_f64(7.5, 2.0), 3.0);
/// assert_eq!(floor_div_f64(-7.5, 2.0), -4.0);
/// ```
#[must_use]
pub fn floor_div_f64(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

/// Float modulo whose result takes the sign of the divisor.
///
/// ## Example
/// ```
/// use reckon::util::num::floor_mod_f64;
///
/// assert_eq!(floor_mod_f64(7.5, 2.0), 1.5);
/// assert_eq!(floor_mod_f64(-7.5, 2.0), 0.5);
/// assert_eq!(floor_mod_f64(7.5, -2.0), -0.5);
/// ```
#[must_use]
pub fn floor_mod_f64(a: f64, b: f64) -> f64 {
    let remainder = a % b;
    if remainder != 0.0 && ((remainder < 0.0) != (b < 0.0)) {
        remainder + b
    } else {
        remainder
    }
}
