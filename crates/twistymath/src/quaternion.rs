//! Quaternions stored as `[x, y, z, w]`.

use crate::matrix::Mat4;
use crate::vector::{self, Vec3};
use crate::Float;

/// Quaternion stored as `[x, y, z, w]`.
pub type Quat = [Float; 4];

/// Returns the identity quaternion.
pub fn identity_quat() -> Quat {
    [0.0, 0.0, 0.0, 1.0]
}

/// Returns the quaternion for a rotation by `radians` around `axis`, or `None`
/// if `axis` is approximately zero.
pub fn quat_from_axis_angle(axis: Vec3, radians: Float) -> Option<Quat> {
    let [x, y, z] = vector::normalize(axis)?;
    let (s, c) = (radians / 2.0).sin_cos();
    Some([s * x, s * y, s * z, c])
}

/// Converts Euler angles in radians (not degrees) to a quaternion.
///
/// The rotations are composed in ZYX order: the result rotates around X
/// first, then Y, then Z. This order must not change, since it determines the
/// on-screen orientation of the puzzle.
pub fn euler_to_quat(x: Float, y: Float, z: Float) -> Quat {
    let (sx, cx) = (x / 2.0).sin_cos();
    let (sy, cy) = (y / 2.0).sin_cos();
    let (sz, cz) = (z / 2.0).sin_cos();

    [
        sx * cy * cz - cx * sy * sz,
        cx * sy * cz + sx * cy * sz,
        cx * cy * sz - sx * sy * cz,
        cx * cy * cz + sx * sy * sz,
    ]
}

/// Returns the Hamilton product `a * b`, which applies `b` first and then `a`.
pub fn multiply_quat(a: Quat, b: Quat) -> Quat {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;

    [
        ax * bw + aw * bx + ay * bz - az * by,
        ay * bw + aw * by + az * bx - ax * bz,
        az * bw + aw * bz + ax * by - ay * bx,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

/// Returns the inverse of a quaternion: its conjugate divided by its squared
/// norm.
///
/// The zero quaternion has no inverse; in that case the zero quaternion is
/// returned, which callers should treat as a degenerate rotation.
pub fn invert_quat(a: Quat) -> Quat {
    let [x, y, z, w] = a;
    let norm2 = x * x + y * y + z * z + w * w;
    let inv_norm2 = if norm2 == 0.0 { 0.0 } else { 1.0 / norm2 };
    [-x * inv_norm2, -y * inv_norm2, -z * inv_norm2, w * inv_norm2]
}

/// Returns the rotation matrix for a unit quaternion.
pub fn quat_to_mat4(q: Quat) -> Mat4 {
    let [x, y, z, w] = q;
    let (x2, y2, z2) = (x + x, y + y, z + z);

    let xx = x * x2;
    let yx = y * x2;
    let yy = y * y2;
    let zx = z * x2;
    let zy = z * y2;
    let zz = z * z2;
    let wx = w * x2;
    let wy = w * y2;
    let wz = w * z2;

    #[rustfmt::skip]
    let ret = [
        1.0 - yy - zz, yx + wz,       zx - wy,       0.0,
        yx - wz,       1.0 - xx - zz, zy + wx,       0.0,
        zx + wy,       zy - wx,       1.0 - xx - yy, 0.0,
        0.0,           0.0,           0.0,           1.0,
    ];
    ret
}
