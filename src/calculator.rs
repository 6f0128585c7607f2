//! Calculator module with basic arithmetic operations
//!
//! All operations wrap on overflow, so none of them can panic.

/// Adds two numbers together
///
/// # Examples
/// ```
/// use toolcheck_fixture::calculator::add;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(-2, 3), 1);
/// ```
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Subtracts b from a
pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Multiplies two numbers
pub fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Divides a by b, truncating toward zero
///
/// A zero divisor yields 0 rather than an error. Use [`checked_divide`] when
/// the caller needs to tell the two cases apart.
///
/// # Examples
/// ```
/// use toolcheck_fixture::calculator::divide;
///
/// assert_eq!(divide(-6, 3), -2);
/// assert_eq!(divide(5, 0), 0);
/// ```
pub fn divide(a: i64, b: i64) -> i64 {
    checked_divide(a, b).unwrap_or(0)
}

/// Divides a by b, returns None if b is zero
pub fn checked_divide(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        log::debug!("division of {} by zero", a);
        None
    } else {
        Some(a.wrapping_div(b))
    }
}
