//! Common mathematical utility functions that didn't fit anywhere else.

use std::ops::{Add, Mul};

use super::Float;

/// Linearly interpolates (unclamped) between two values.
pub fn mix<T>(a: T, b: T, t: Float) -> <T::Output as Add>::Output
where
    T: Mul<Float>,
    T::Output: Add,
{
    a * (1.0 - t) + b * t
}

/// Divides `lhs` by `rhs` if the reciprocal of `rhs` is finite; otherwise
/// returns `None`.
pub fn try_div<T>(lhs: T, rhs: Float) -> Option<T::Output>
where
    T: Mul<Float>,
{
    let recip_rhs = rhs.recip();
    recip_rhs.is_finite().then(|| lhs * recip_rhs)
}
