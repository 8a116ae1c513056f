//! 3x3 and 4x4 matrix math.
//!
//! All matrices are stored in **column-major** order. [`multiply()`] computes
//! `a * b`, so the basis of `a` is applied to every column of `b`. The camera
//! functions ([`look_at()`], [`perspective()`], [`rotate()`]) all assume this
//! operand order.

use crate::vector::{self, Vec3};
use crate::{EPSILON, Float};

/// 3x3 matrix in column-major order.
pub type Mat3 = [Float; 9];
/// 4x4 matrix in column-major order.
pub type Mat4 = [Float; 16];

/// Returns the 4x4 identity matrix.
pub fn identity() -> Mat4 {
    let mut ret = [0.0; 16];
    for i in 0..4 {
        ret[i * 4 + i] = 1.0;
    }
    ret
}
/// Returns the 3x3 identity matrix.
pub fn identity3() -> Mat3 {
    let mut ret = [0.0; 9];
    for i in 0..3 {
        ret[i * 3 + i] = 1.0;
    }
    ret
}

/// Multiplies two column-major square matrices with `N` rows, returning
/// `a * b`.
fn multiply_n<const N: usize, const LEN: usize>(a: &[Float; LEN], b: &[Float; LEN]) -> [Float; LEN] {
    debug_assert_eq!(N * N, LEN);
    let mut ret = [0.0; LEN];
    for col in 0..N {
        for row in 0..N {
            ret[col * N + row] = (0..N).map(|k| a[k * N + row] * b[col * N + k]).sum();
        }
    }
    ret
}

/// Returns `a * b` for column-major 4x4 matrices.
///
/// The operand order matters: the result is `b` transformed by `a`.
///
/// ```
/// # use twistymath::assert_approx_eq;
/// # use twistymath::prelude::*;
/// let translate_x = {
///     let mut m = identity();
///     m[12] = 1.0;
///     m
/// };
/// let rotate_z = rotate(identity(), std::f64::consts::FRAC_PI_2, [0.0, 0.0, 1.0]);
/// // Rotate first, then translate.
/// let m = multiply(translate_x, rotate_z);
/// assert_approx_eq!(transform_mat4([1.0, 0.0, 0.0], m), [1.0, 1.0, 0.0]);
/// ```
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    multiply_n::<4, 16>(&a, &b)
}
/// Returns `a * b` for column-major 3x3 matrices.
pub fn multiply3(a: Mat3, b: Mat3) -> Mat3 {
    multiply_n::<3, 9>(&a, &b)
}

/// Returns the transpose of a 4x4 matrix.
pub fn transpose(m: Mat4) -> Mat4 {
    std::array::from_fn(|i| m[(i % 4) * 4 + i / 4])
}

/// Returns the determinant of a 3x3 matrix.
pub fn determinant3(a: Mat3) -> Float {
    let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = a;
    a00 * (a22 * a11 - a12 * a21) + a01 * (-a22 * a10 + a12 * a20) + a02 * (a21 * a10 - a11 * a20)
}

/// Returns the inverse of a 3x3 matrix using cofactor expansion, or `None` if
/// the determinant is exactly zero.
pub fn invert3(a: Mat3) -> Option<Mat3> {
    let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = a;

    let b01 = a22 * a11 - a12 * a21;
    let b11 = -a22 * a10 + a12 * a20;
    let b21 = a21 * a10 - a11 * a20;

    let det = a00 * b01 + a01 * b11 + a02 * b21;
    if det == 0.0 {
        return None;
    }
    let det = 1.0 / det;

    Some([
        b01 * det,
        (-a22 * a01 + a02 * a21) * det,
        (a12 * a01 - a02 * a11) * det,
        b11 * det,
        (a22 * a00 - a02 * a20) * det,
        (-a12 * a00 + a02 * a10) * det,
        b21 * det,
        (-a21 * a00 + a01 * a20) * det,
        (a11 * a00 - a01 * a10) * det,
    ])
}

/// Returns the upper-left 3x3 submatrix of a 4x4 matrix.
pub fn mat3_from_mat4(m: Mat4) -> Mat3 {
    std::array::from_fn(|i| m[(i / 3) * 4 + i % 3])
}

/// Transforms a vector by a 3x3 matrix.
pub fn transform_mat3(v: Vec3, m: Mat3) -> Vec3 {
    let [x, y, z] = v;
    [
        x * m[0] + y * m[3] + z * m[6],
        x * m[1] + y * m[4] + z * m[7],
        x * m[2] + y * m[5] + z * m[8],
    ]
}

/// Transforms a point by a 4x4 matrix, treating it as homogeneous with
/// `w = 1`. The result is divided by the transformed `w` unless it is zero.
pub fn transform_mat4(v: Vec3, m: Mat4) -> Vec3 {
    let [x, y, z] = v;
    let w = m[3] * x + m[7] * y + m[11] * z + m[15];
    let w = if w == 0.0 { 1.0 } else { w };
    [
        (m[0] * x + m[4] * y + m[8] * z + m[12]) / w,
        (m[1] * x + m[5] * y + m[9] * z + m[13]) / w,
        (m[2] * x + m[6] * y + m[10] * z + m[14]) / w,
    ]
}

/// Returns the matrix rotating by `radians` around `axis` (which need not be
/// normalized), or `None` if `axis` has length less than [`EPSILON`].
pub fn rotation(radians: Float, axis: Vec3) -> Option<Mat4> {
    let [x, y, z] = vector::normalize(axis)?;
    let (s, c) = radians.sin_cos();
    let t = 1.0 - c;

    #[rustfmt::skip]
    let ret = [
        x * x * t + c,     y * x * t + z * s, z * x * t - y * s, 0.0,
        x * y * t - z * s, y * y * t + c,     z * y * t + x * s, 0.0,
        x * z * t + y * s, y * z * t - x * s, z * z * t + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    ];
    Some(ret)
}

/// Composes a rotation by `radians` around `axis` onto `a`, returning
/// `a * R`.
///
/// If `axis` is approximately zero, returns the identity matrix.
pub fn rotate(a: Mat4, radians: Float, axis: Vec3) -> Mat4 {
    match rotation(radians, axis) {
        Some(r) => multiply(a, r),
        None => {
            log::trace!("degenerate rotation axis {axis:?}; using identity");
            identity()
        }
    }
}

/// Returns a view matrix for a camera at `eye` looking toward `center`, with
/// `up` pointing roughly upward on screen.
///
/// If `eye` and `center` coincide within [`EPSILON`] on every axis, returns the
/// identity matrix. If `up` is parallel to the view direction, the sideways
/// axis collapses to zero instead of producing NaN.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    if vector::coincident(eye, center) {
        log::trace!("camera eye coincides with center {center:?}; using identity");
        return identity();
    }

    let z = vector::normalize(vector::sub(eye, center)).unwrap_or(vector::ZERO3);
    let x = vector::normalize(vector::cross(up, z)).unwrap_or(vector::ZERO3);
    let y = vector::normalize(vector::cross(z, x)).unwrap_or(vector::ZERO3);

    #[rustfmt::skip]
    let ret = [
        x[0], y[0], z[0], 0.0,
        x[1], y[1], z[1], 0.0,
        x[2], y[2], z[2], 0.0,
        -vector::dot(x, eye), -vector::dot(y, eye), -vector::dot(z, eye), 1.0,
    ];
    ret
}

/// Returns a right-handed perspective projection matrix mapping view-space
/// depth in `[-near, -far]` to clip-space Z in `[-1, 1]`.
///
/// `fov_y` is the vertical field of view in radians. If `far` is infinite,
/// the infinite-far-plane projection is returned.
pub fn perspective(fov_y: Float, aspect: Float, near: Float, far: Float) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let mut ret = [0.0; 16];
    ret[0] = f / aspect;
    ret[5] = f;
    ret[11] = -1.0;
    if far.is_finite() {
        let nf = 1.0 / (near - far);
        ret[10] = (far + near) * nf;
        ret[14] = 2.0 * far * near * nf;
    } else {
        ret[10] = -1.0;
        ret[14] = -2.0 * near;
    }
    ret
}

/// Returns whether `m` is within [`EPSILON`] of the identity matrix.
pub fn is_approx_identity(m: Mat4) -> bool {
    std::iter::zip(m, identity()).all(|(a, b)| (a - b).abs() <= EPSILON)
}
