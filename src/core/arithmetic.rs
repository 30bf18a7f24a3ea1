//! Integer arithmetic

use crate::utils::PositiveInt;

/// Sum of two positive integers
///
/// Widened to `i64` so that `i32::MAX + i32::MAX` cannot overflow.
pub fn add(a: PositiveInt, b: PositiveInt) -> i64 {
    i64::from(a.get()) + i64::from(b.get())
}
