//! Fixed-size 3D vector, matrix, quaternion, and plane primitives.
//!
//! Every function in this crate is pure: it takes its inputs by value and
//! returns a new fixed-size buffer. Matrices are stored in **column-major**
//! order, so element `(col, row)` of a 4x4 matrix lives at index
//! `col * 4 + row`.

pub use approx;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Small floating-point value used for comparisons and degenerate-input
/// detection.
pub const EPSILON: Float = 0.000001;

/// Names for the three axes.
pub const AXIS_NAMES: &str = "XYZ";

/// Asserts that two fixed-size buffers are approximately equal,
/// element-by-element.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {{
        let (a, b) = (&$a, &$b);
        assert!(
            $crate::approx_cmp::approx_eq_all(a, b),
            "assertion failed: `left ≈ right`\n  left: {a:?}\n right: {b:?}",
        );
    }};
}

pub mod approx_cmp;
pub mod matrix;
pub mod plane;
pub mod quaternion;
pub mod util;
pub mod vector;
pub mod which_side;


/// Structs, functions, and constants.
pub mod prelude {
    pub use crate::approx_cmp::*;
    pub use crate::matrix::*;
    pub use crate::plane::Plane;
    pub use crate::quaternion::*;
    pub use crate::vector::*;
    pub use crate::which_side::Facing;
    pub use crate::{AXIS_NAMES, EPSILON, Float};
}
pub use prelude::*;
