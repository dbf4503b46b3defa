//! Orbit camera model.
//!
//! The camera is parameterized by two normalized orbit angles, a radial
//! distance and a detail threshold. All derived state (position, clip planes,
//! view, projection and their product) is recomputed together by every setter,
//! so readers never observe matrices that lag behind the parameters.
//!
//! # Module Structure
//!
//! - [`projection`]: `look_at`, `perspective` and the orbit direction
//! - `OrbitCamera`: persistent parameters plus the derived matrices

pub mod projection;

pub use projection::{
  debug_camera_matrices, look_at, orbit_direction, perspective, CameraBasis, CameraMatrices,
};

use glam::{Mat4, Vec3};

use crate::config::ViewConfig;
use crate::constants::{
  FAR_CLIP_RATIO, FOCUS_POINT, NEAR_CLIP_DISTANCE_RATIO, NEAR_CLIP_MAX, WORLD_UP,
};

/// Orbit camera around the world origin.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
  // Persistent parameters
  orbit_xz: f32,
  orbit_yz: f32,
  distance: f32,
  detail: f32,
  fov_y: f32,
  aspect: f32,

  // Limits copied from the config
  viewport_width: f32,
  viewport_height: f32,
  elevation_range: (f32, f32),
  distance_range: (f32, f32),
  detail_range: (f32, f32),

  // Derived, always in sync with the parameters
  position: Vec3,
  focus: Vec3,
  near_clip: f32,
  far_clip: f32,
  view: Mat4,
  projection: Mat4,
  view_projection: Mat4,

  /// Set by every recompute, cleared by the frame driver.
  moved: bool,
}

impl OrbitCamera {
  /// Create a camera with the pointer resting at the viewport center.
  pub fn new(config: &ViewConfig) -> Self {
    let mut camera = Self {
      orbit_xz: 0.0,
      orbit_yz: 0.0,
      distance: config.initial_distance,
      detail: config.initial_detail,
      fov_y: config.fov_radians(),
      aspect: config.aspect_ratio(),
      viewport_width: config.viewport_width,
      viewport_height: config.viewport_height,
      elevation_range: (config.orbit_elevation_min, config.orbit_elevation_max),
      distance_range: (config.min_distance, config.max_distance),
      detail_range: (config.min_detail, config.max_detail),
      position: Vec3::ZERO,
      focus: FOCUS_POINT,
      near_clip: 0.0,
      far_clip: 0.0,
      view: Mat4::IDENTITY,
      projection: Mat4::IDENTITY,
      view_projection: Mat4::IDENTITY,
      moved: false,
    };
    camera.set_orbit(config.viewport_width * 0.5, config.viewport_height * 0.5);
    camera
  }

  /// Set both orbit angles from a pointer position in viewport pixels.
  ///
  /// The elevation is clamped away from the pole, where the view basis
  /// would degenerate.
  pub fn set_orbit(&mut self, x: f32, y: f32) {
    let (lo, hi) = self.elevation_range;
    self.orbit_xz = x / self.viewport_width;
    self.orbit_yz = (y / self.viewport_height).clamp(lo, hi);
    self.recompute();
  }

  /// Multiply the orbit distance by `factor`, clamped to the configured range.
  pub fn adjust_distance(&mut self, factor: f32) {
    let (lo, hi) = self.distance_range;
    self.distance = (self.distance * factor).clamp(lo, hi);
    self.recompute();
  }

  /// Set the screen-space edge budget, clamped to the configured range.
  pub fn set_detail(&mut self, value: f32) {
    let (lo, hi) = self.detail_range;
    self.detail = value.clamp(lo, hi);
    self.recompute();
  }

  /// Rebuild every derived field from the current parameters.
  pub fn recompute(&mut self) {
    self.position = orbit_direction(self.orbit_xz, self.orbit_yz) * self.distance;
    self.focus = FOCUS_POINT;

    self.view = look_at(self.position, self.focus, WORLD_UP);

    // Clip planes follow the zoom level to keep depth precision usable
    self.near_clip = (self.distance * NEAR_CLIP_DISTANCE_RATIO).min(NEAR_CLIP_MAX);
    self.far_clip = self.near_clip * FAR_CLIP_RATIO;

    self.projection = perspective(self.fov_y, self.aspect, self.near_clip, self.far_clip);
    self.view_projection = self.projection * self.view;
    self.moved = true;
  }

  #[inline]
  pub fn orbit_xz(&self) -> f32 {
    self.orbit_xz
  }

  #[inline]
  pub fn orbit_yz(&self) -> f32 {
    self.orbit_yz
  }

  #[inline]
  pub fn distance(&self) -> f32 {
    self.distance
  }

  #[inline]
  pub fn detail(&self) -> f32 {
    self.detail
  }

  /// Vertical field of view in radians.
  #[inline]
  pub fn fov_y(&self) -> f32 {
    self.fov_y
  }

  #[inline]
  pub fn aspect(&self) -> f32 {
    self.aspect
  }

  #[inline]
  pub fn position(&self) -> Vec3 {
    self.position
  }

  #[inline]
  pub fn focus(&self) -> Vec3 {
    self.focus
  }

  #[inline]
  pub fn near_clip(&self) -> f32 {
    self.near_clip
  }

  #[inline]
  pub fn far_clip(&self) -> f32 {
    self.far_clip
  }

  #[inline]
  pub fn view(&self) -> Mat4 {
    self.view
  }

  #[inline]
  pub fn projection(&self) -> Mat4 {
    self.projection
  }

  #[inline]
  pub fn view_projection(&self) -> Mat4 {
    self.view_projection
  }

  /// Current view basis.
  pub fn basis(&self) -> CameraBasis {
    CameraBasis::new(self.position, self.focus, WORLD_UP)
  }

  /// Whether anything changed since the last [`clear_moved`](Self::clear_moved).
  #[inline]
  pub fn is_moved(&self) -> bool {
    self.moved
  }

  /// Force the next tick to regenerate without touching the parameters.
  #[inline]
  pub fn mark_moved(&mut self) {
    self.moved = true;
  }

  #[inline]
  pub fn clear_moved(&mut self) {
    self.moved = false;
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
