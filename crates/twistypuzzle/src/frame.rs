//! Per-frame geometry handed to a renderer: camera matrices, layer rotations
//! for animated moves, and face visibility.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use twistymath::prelude::*;
use twistymath::util;

use crate::MoveSet;

/// Perspective camera.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Camera position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub center: Vec3,
    /// Direction that is roughly upward on screen.
    pub up: Vec3,
    /// Vertical field of view, in radians.
    pub fov_y: Float,
    /// Width divided by height of the viewport.
    pub aspect: Float,
    /// Distance to the near clipping plane.
    pub near: Float,
    /// Distance to the far clipping plane, which may be infinite.
    pub far: Float,
}

impl Default for Camera {
    fn default() -> Self {
        Self::orbit(6.0, 0.0, 0.0)
    }
}

impl Camera {
    /// Constructs a camera looking at the origin from `distance` units away,
    /// after tilting by `pitch` around the X axis and then turning by `yaw`
    /// around the Y axis (both in radians).
    pub fn orbit(distance: Float, pitch: Float, yaw: Float) -> Self {
        let orientation = quat_to_mat4(euler_to_quat(pitch, yaw, 0.0));
        Self {
            eye: transform_mat4([0.0, 0.0, distance], orientation),
            center: ZERO3,
            up: transform_mat4([0.0, 1.0, 0.0], orientation),
            fov_y: std::f64::consts::FRAC_PI_4,
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Returns the world-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.eye, self.center, self.up)
    }
    /// Returns the view-to-clip matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        perspective(self.fov_y, self.aspect, self.near, self.far)
    }
    /// Returns the world-to-clip matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        multiply(self.projection_matrix(), self.view_matrix())
    }

    /// Returns the camera matrices along with the visibility of each face.
    pub fn frame(&self, planes: &[Plane]) -> Frame {
        Frame {
            view: self.view_matrix(),
            projection: self.projection_matrix(),
            visible_faces: face_visibility(planes, self.eye),
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Frame {
    /// World-to-view matrix.
    pub view: Mat4,
    /// View-to-clip matrix.
    pub projection: Mat4,
    /// Whether each face is front-facing, in the same order as the planes
    /// passed in.
    pub visible_faces: Vec<bool>,
}

/// Returns the rotation of a layer around `axis` for a move of `turn` quarter
/// turns, `progress` of the way through its animation.
///
/// `progress` is not clamped. If `axis` is zero, returns the identity matrix.
pub fn layer_rotation(axis: Vec3, turn: i32, progress: Float) -> Mat4 {
    let angle = util::mix(0.0, Float::from(turn) * FRAC_PI_2, progress);
    rotate(identity(), angle, axis)
}

/// Returns the layer rotation for an animated move, using the normal of the
/// face whose reference sticker is the move's rotation anchor as the axis.
///
/// Returns `None` if the move has no rotation or no face is anchored at its
/// rotation position.
pub fn move_rotation(move_set: &MoveSet, planes: &[Plane], progress: Float) -> Option<Mat4> {
    let rotate = move_set.rotate?;
    let plane = planes.iter().find(|p| p.center == rotate.position)?;
    Some(layer_rotation(plane.normal(), rotate.turn, progress))
}

/// Returns whether each face is visible from `eye`.
pub fn face_visibility(planes: &[Plane], eye: Vec3) -> Vec<bool> {
    planes.iter().map(|p| p.is_visible_from(eye)).collect()
}
