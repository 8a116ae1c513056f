//! Colored planes used for back-face culling of puzzle faces.

use std::fmt;

use crate::vector::{self, Vec3};
use crate::{AXIS_NAMES, Facing, Float, is_approx_nonzero};

/// Plane `ax + by + cz + d = 0` through one face of a puzzle, tagged with the
/// face's color and a reference sticker.
///
/// The normal `(a, b, c)` is not normalized, so signed distances are scaled by
/// its magnitude. Only their sign is meaningful.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// X coefficient of the normal vector.
    pub a: Float,
    /// Y coefficient of the normal vector.
    pub b: Float,
    /// Z coefficient of the normal vector.
    pub c: Float,
    /// Constant term.
    pub d: Float,
    /// Display color of the face, such as `#ff0000`.
    pub color: String,
    /// Name of the face's color.
    pub color_name: String,
    /// Index of the sticker at the center of the face.
    pub center: usize,
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = (0..3)
            .map(|i| (&AXIS_NAMES[i..i + 1], self.normal()[i]))
            .filter(|&(_, coef)| is_approx_nonzero(coef))
            .chain(is_approx_nonzero(self.d).then_some(("", self.d)));
        match terms.next() {
            Some((axis, coef)) => write!(f, "{coef}{axis}")?,
            None => write!(f, "0")?,
        }
        for (axis, coef) in terms {
            write!(f, " + {coef}{axis}")?;
        }
        write!(f, " = 0")
    }
}

impl Plane {
    /// Constructs the plane through three points, with the normal
    /// `(b - a) × (c - a)`.
    ///
    /// If the points are collinear, the normal is zero and `d` is zero. Such a
    /// plane is valid but faces nowhere.
    pub fn from_three_points(
        a: Vec3,
        b: Vec3,
        c: Vec3,
        color: impl Into<String>,
        color_name: impl Into<String>,
        center: usize,
    ) -> Self {
        let normal = vector::cross(vector::sub(b, a), vector::sub(c, a));
        let d = -vector::dot(normal, a);
        let [na, nb, nc] = normal;
        Self {
            a: na,
            b: nb,
            c: nc,
            d,
            color: color.into(),
            color_name: color_name.into(),
            center,
        }
    }

    /// Returns the (non-normalized) normal vector `(a, b, c)`.
    pub fn normal(&self) -> Vec3 {
        [self.a, self.b, self.c]
    }

    /// Returns the dot product of the plane's normal with `point`, ignoring
    /// `d`.
    pub fn dot_normal(&self, point: Vec3) -> Float {
        vector::dot(point, self.normal())
    }

    /// Returns the value of the plane equation at `point`. It is positive if
    /// `point` is on the side that the normal points toward.
    pub fn signed_distance(&self, point: Vec3) -> Float {
        self.dot_normal(point) + self.d
    }

    /// Returns which side of the plane `viewpoint` is on.
    pub fn facing(&self, viewpoint: Vec3) -> Facing {
        Facing::from_signed_distance(self.signed_distance(viewpoint))
    }

    /// Returns whether the face is front-facing as seen from `viewpoint`.
    pub fn is_visible_from(&self, viewpoint: Vec3) -> bool {
        self.facing(viewpoint).is_visible()
    }

    /// Returns whether the normal vector is zero, which happens when the plane
    /// was constructed from collinear points.
    pub fn is_degenerate(&self) -> bool {
        self.normal() == vector::ZERO3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_face() -> Plane {
        // counterclockwise when seen from above
        Plane::from_three_points(
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            "#ffffff",
            "white",
            4,
        )
    }

    #[test]
    fn test_plane_from_three_points() {
        let p = top_face();
        assert_eq!(p.normal(), [0.0, 0.0, 1.0]);
        assert_eq!(p.d, -1.0);
        assert_eq!(p.color, "#ffffff");
        assert_eq!(p.color_name, "white");
        assert_eq!(p.center, 4);
        assert_eq!(p.to_string(), "1Z + -1 = 0");
    }

    #[test]
    fn test_signed_distance() {
        let p = top_face();
        assert_eq!(p.signed_distance([0.0, 0.0, 3.0]), 2.0);
        assert_eq!(p.signed_distance([5.0, -2.0, 1.0]), 0.0);
        assert_eq!(p.signed_distance([0.0, 0.0, 0.0]), -1.0);
        assert_eq!(p.dot_normal([1.0, 2.0, 3.0]), 3.0);
    }

    #[test]
    fn test_facing() {
        let p = top_face();
        assert_eq!(p.facing([0.0, 0.0, 10.0]), Facing::Front);
        assert_eq!(p.facing([0.0, 0.0, -10.0]), Facing::Back);
        assert_eq!(p.facing([3.0, 3.0, 1.0]), Facing::On);
        assert!(p.is_visible_from([0.0, 0.0, 10.0]));
        assert!(!p.is_visible_from([3.0, 3.0, 1.0]));
    }

    #[test]
    fn test_winding_order_flips_normal() {
        let p = Plane::from_three_points(
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
            "#ffffff",
            "white",
            4,
        );
        assert_eq!(p.normal(), [0.0, 0.0, -1.0]);
        assert!(!p.is_visible_from([0.0, 0.0, 10.0]));
    }

    #[test]
    fn test_collinear_points() {
        let p = Plane::from_three_points(
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0],
            [3.0, 3.0, 3.0],
            "#000000",
            "black",
            0,
        );
        assert!(p.is_degenerate());
        assert_eq!(p.d, 0.0);
        assert_eq!(p.signed_distance([4.0, -1.0, 9.0]), 0.0);
        assert_eq!(p.facing([4.0, -1.0, 9.0]), Facing::On);
        assert_eq!(p.to_string(), "0 = 0");
    }
}
