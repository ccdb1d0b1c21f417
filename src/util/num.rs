/// Divides `dividend` by `divisor`, rounding toward negative infinity.
///
/// ## Returns
/// - `Some(quotient)` when the division is defined.
/// - `None` if `divisor` is `0` or the result overflows (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use intcalc::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(-8, 2), Some(-4));
/// assert_eq!(floor_div(1, 0), None);
/// assert_eq!(floor_div(i64::MIN, -1), None);
/// ```
#[must_use]
pub const fn floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let Some(quotient) = dividend.checked_div(divisor) else {
        return None;
    };
    // An inexact quotient of opposite-signed operands was rounded up by `/`.
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Divides `dividend` by `divisor`, rounding toward zero.
///
/// This is Rust's native `/` on integers, without the panics.
///
/// ## Example
/// ```
/// use intcalc::util::num::trunc_div;
///
/// assert_eq!(trunc_div(7, 2), Some(3));
/// assert_eq!(trunc_div(-7, 2), Some(-3));
/// assert_eq!(trunc_div(1, 0), None);
/// ```
#[must_use]
pub const fn trunc_div(dividend: i64, divisor: i64) -> Option<i64> {
    dividend.checked_div(divisor)
}
