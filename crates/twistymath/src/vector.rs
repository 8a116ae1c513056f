//! 3D vector math.

use crate::{EPSILON, Float, util};

/// 3D vector or point.
pub type Vec3 = [Float; 3];

/// Zero vector.
pub const ZERO3: Vec3 = [0.0; 3];

/// Returns the cross product of two vectors.
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    let [ax, ay, az] = a;
    let [bx, by, bz] = b;
    [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx]
}

/// Returns the dot product of two vectors.
pub fn dot(a: Vec3, b: Vec3) -> Float {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Returns the component-wise sum of two vectors.
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}
/// Returns the component-wise difference `a - b`.
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
/// Returns a scaled copy of the vector.
pub fn scale(v: Vec3, scalar: Float) -> Vec3 {
    v.map(|x| x * scalar)
}
/// Returns the negation of the vector.
pub fn neg(v: Vec3) -> Vec3 {
    v.map(|x| -x)
}

/// Returns the magnitude of the vector.
pub fn mag(v: Vec3) -> Float {
    mag2(v).sqrt()
}
/// Returns the squared magnitude of the vector.
pub fn mag2(v: Vec3) -> Float {
    dot(v, v)
}

/// Returns a normalized copy of the vector, or `None` if its magnitude is less
/// than [`EPSILON`].
pub fn normalize(v: Vec3) -> Option<Vec3> {
    let len = mag(v);
    if len < EPSILON {
        return None;
    }
    util::try_div(1.0, len).map(|mult| scale(v, mult))
}

/// Returns whether two points are within [`EPSILON`] of each other on every
/// axis.
pub fn coincident(a: Vec3, b: Vec3) -> bool {
    std::iter::zip(a, b).all(|(x, y)| (x - y).abs() < EPSILON)
}

/// Returns the component of `v` that is perpendicular to `axis`, or `None` if
/// `axis` is zero.
pub fn rejected_from(v: Vec3, axis: Vec3) -> Option<Vec3> {
    let scale_factor = util::try_div(dot(v, axis), mag2(axis))?;
    Some(sub(v, scale(axis, scale_factor)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_cross_product() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
        assert_eq!(cross([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]), [-3.0, 6.0, -3.0]);
    }

    #[test]
    pub fn test_dot_product() {
        assert_eq!(dot([1.0, 2.0, -10.0], [-5.0, 16.0, 0.0]), 27.0);
    }

    #[test]
    pub fn test_normalize() {
        assert_approx_eq!(normalize([0.0, 3.0, 4.0]).unwrap(), [0.0, 0.6, 0.8]);
        assert_eq!(normalize(ZERO3), None);
        assert_eq!(normalize([EPSILON / 2.0, 0.0, 0.0]), None);
    }

    #[test]
    pub fn test_rejected_from() {
        assert_eq!(
            rejected_from([1.0, 2.0, 3.0], [0.0, 0.0, 2.0]),
            Some([1.0, 2.0, 0.0]),
        );
        assert_eq!(rejected_from([1.0, 2.0, 3.0], ZERO3), None);
    }

    #[test]
    pub fn test_coincident() {
        assert!(coincident([1.0, 2.0, 3.0], [1.0, 2.0, 3.0 + EPSILON / 2.0]));
        assert!(!coincident([1.0, 2.0, 3.0], [1.0, 2.0, 3.1]));
    }
}
