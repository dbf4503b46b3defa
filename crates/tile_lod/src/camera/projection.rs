//! Matrix construction for the orbit camera.
//!
//! Conventions: right-handed world with `+Z` up, clip depth in `[0, 1]`,
//! clip `w` positive in front of the camera.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat4, Vec3, Vec4};

/// Unit direction from the focus to the camera for the given orbit
/// parameters.
///
/// `orbit_yz` is the normalized elevation (0 = straight above the focus,
/// 1 = on the ground plane). `orbit_xz` is the normalized heading, one full
/// turn per unit.
pub fn orbit_direction(orbit_xz: f32, orbit_yz: f32) -> Vec3 {
  let (elevation_sin, elevation_cos) = (orbit_yz * FRAC_PI_2).sin_cos();
  let (heading_sin, heading_cos) = (orbit_xz * TAU).sin_cos();
  Vec3::new(
    elevation_sin * heading_sin,
    elevation_sin * heading_cos,
    elevation_cos,
  )
}

/// Camera basis as used by [`look_at`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
  /// Unit vector from the focus towards the eye.
  pub forward: Vec3,
  /// `normalize(cross(forward, up))`.
  pub right: Vec3,
  /// `cross(right, forward)`.
  pub up: Vec3,
}

impl CameraBasis {
  pub fn new(eye: Vec3, focus: Vec3, world_up: Vec3) -> Self {
    let forward = (eye - focus).normalize();
    let right = forward.cross(world_up).normalize();
    let up = right.cross(forward);
    Self { forward, right, up }
  }
}

/// World-to-camera matrix.
///
/// The basis axes form the rows of the rotation part; the translation is the
/// negated projection of the eye onto each axis.
pub fn look_at(eye: Vec3, focus: Vec3, world_up: Vec3) -> Mat4 {
  let CameraBasis { forward, right, up } = CameraBasis::new(eye, focus, world_up);

  Mat4::from_cols(
    Vec4::new(right.x, up.x, forward.x, 0.0),
    Vec4::new(right.y, up.y, forward.y, 0.0),
    Vec4::new(right.z, up.z, forward.z, 0.0),
    Vec4::new(-right.dot(eye), -up.dot(eye), -forward.dot(eye), 1.0),
  )
}

/// Perspective projection with a vertical field of view in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
  let y_scale = 1.0 / (0.5 * fov_y).tan();
  let x_scale = y_scale / aspect;
  let depth = near - far;

  Mat4::from_cols(
    Vec4::new(x_scale, 0.0, 0.0, 0.0),
    Vec4::new(0.0, y_scale, 0.0, 0.0),
    Vec4::new(0.0, 0.0, far / depth, -1.0),
    Vec4::new(0.0, 0.0, near * far / depth, 0.0),
  )
}

/// View and projection of a fixed camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraMatrices {
  pub position: Vec3,
  pub focus: Vec3,
  pub fov_y: f32,
  pub near: f32,
  pub far: f32,
  pub view: Mat4,
  pub projection: Mat4,
}

/// Matrices of the fixed observer used to inspect culling from outside the
/// orbit camera.
pub fn debug_camera_matrices(aspect: f32) -> CameraMatrices {
  use crate::constants::{
    DEBUG_CAMERA_FAR, DEBUG_CAMERA_FOV_DEGREES, DEBUG_CAMERA_NEAR, DEBUG_CAMERA_POSITION,
    FOCUS_POINT, WORLD_UP,
  };

  let fov_y = DEBUG_CAMERA_FOV_DEGREES.to_radians();
  CameraMatrices {
    position: DEBUG_CAMERA_POSITION,
    focus: FOCUS_POINT,
    fov_y,
    near: DEBUG_CAMERA_NEAR,
    far: DEBUG_CAMERA_FAR,
    view: look_at(DEBUG_CAMERA_POSITION, FOCUS_POINT, WORLD_UP),
    projection: perspective(fov_y, aspect, DEBUG_CAMERA_NEAR, DEBUG_CAMERA_FAR),
  }
}

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;
