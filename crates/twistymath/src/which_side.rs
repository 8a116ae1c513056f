//! Which side of a plane a point lies on.

use std::ops::Neg;

use crate::{Float, approx_cmp};

/// Position of a viewpoint relative to an oriented plane, which determines
/// whether the plane's face is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    /// The viewpoint is on the side the normal points toward, so the face is
    /// visible.
    Front,
    /// The viewpoint is (approximately) on the plane, so the face is seen
    /// edge-on.
    On,
    /// The viewpoint is behind the plane, so the face should be culled.
    Back,
}
impl Neg for Facing {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Facing::Front => Facing::Back,
            Facing::Back => Facing::Front,
            other => other,
        }
    }
}
impl Facing {
    /// Returns the facing for a signed distance from a plane.
    pub fn from_signed_distance(h: Float) -> Self {
        match approx_cmp(h, 0.0) {
            std::cmp::Ordering::Less => Facing::Back,
            std::cmp::Ordering::Equal => Facing::On,
            std::cmp::Ordering::Greater => Facing::Front,
        }
    }

    /// Returns whether the face should be drawn.
    pub fn is_visible(self) -> bool {
        self == Facing::Front
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_from_signed_distance() {
        assert_eq!(Facing::from_signed_distance(2.0), Facing::Front);
        assert_eq!(Facing::from_signed_distance(-0.1), Facing::Back);
        assert_eq!(Facing::from_signed_distance(crate::EPSILON / 2.0), Facing::On);
        assert_eq!(-Facing::Front, Facing::Back);
        assert_eq!(-Facing::On, Facing::On);
    }
}
