//! Float comparisons with a tolerance of [`EPSILON`].

use std::cmp::Ordering;

use crate::{EPSILON, Float};

/// Returns whether `a` and `b` differ by at most [`EPSILON`]. Infinities are
/// only equal to themselves.
pub fn approx_eq(a: Float, b: Float) -> bool {
    a == b || approx::abs_diff_eq!(a, b, epsilon = EPSILON)
}

/// Returns whether two buffers have the same length and are [`approx_eq()`]
/// element-by-element.
pub fn approx_eq_all(a: &[Float], b: &[Float]) -> bool {
    a.len() == b.len() && std::iter::zip(a, b).all(|(&x, &y)| approx_eq(x, y))
}

/// Orders two numbers, treating them as equal when they are [`approx_eq()`].
pub fn approx_cmp(a: Float, b: Float) -> Ordering {
    if approx_eq(a, b) {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Returns whether `x` is farther than [`EPSILON`] from zero.
pub fn is_approx_nonzero(x: Float) -> bool {
    !approx_eq(x, 0.0)
}
