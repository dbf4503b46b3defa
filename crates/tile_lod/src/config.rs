//! ViewConfig - startup configuration for the orbit camera and tile
//! subdivision.
//!
//! Values are fixed for the lifetime of a [`TerrainView`](crate::TerrainView).
//! With the `serde` feature a config can be read from a partial file: every
//! field falls back to its default.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::MAX_SUPPORTED_DEPTH;
use crate::subdivision::CullingPolicy;

/// Configuration for the orbit camera, input response and tile subdivision.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
  /// Viewport width in pixels. Pointer X is normalized against it.
  pub viewport_width: f32,
  /// Viewport height in pixels. Pointer Y is normalized against it.
  pub viewport_height: f32,

  /// Vertical field of view in degrees.
  pub fov_degrees: f32,

  /// Closest orbit distance.
  pub min_distance: f32,
  /// Farthest orbit distance.
  pub max_distance: f32,
  /// Orbit distance at startup.
  pub initial_distance: f32,

  /// Finest allowed screen-space edge budget.
  pub min_detail: f32,
  /// Coarsest allowed screen-space edge budget.
  pub max_detail: f32,
  /// Edge budget at startup.
  pub initial_detail: f32,

  /// Lower clamp for normalized pointer Y (keeps the camera off the pole).
  pub orbit_elevation_min: f32,
  /// Upper clamp for normalized pointer Y.
  pub orbit_elevation_max: f32,

  /// Distance multiplier applied each tick while zooming in.
  pub zoom_in_factor: f32,
  /// Distance multiplier applied each tick while zooming out.
  pub zoom_out_factor: f32,

  /// Detail multiplier for a wheel-up step (smaller budget, finer tiles).
  pub detail_finer_factor: f32,
  /// Detail multiplier for a wheel-down step.
  pub detail_coarser_factor: f32,

  /// Maximum subdivision depth.
  pub max_depth: u32,

  /// Half the side length of the root quad, centered at the origin.
  pub root_half_extent: f32,

  /// How quads partially behind the camera are pruned.
  pub culling_policy: CullingPolicy,
}

impl ViewConfig {
  /// Viewport aspect ratio (width / height).
  #[inline]
  pub fn aspect_ratio(&self) -> f32 {
    self.viewport_width / self.viewport_height
  }

  /// Vertical field of view in radians.
  #[inline]
  pub fn fov_radians(&self) -> f32 {
    self.fov_degrees.to_radians()
  }

  /// Check every field, returning the first problem found.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if !(self.viewport_width > 0.0) || !(self.viewport_height > 0.0) {
      return Err(ConfigError::Viewport {
        width: self.viewport_width,
        height: self.viewport_height,
      });
    }

    if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
      return Err(ConfigError::FieldOfView(self.fov_degrees));
    }

    check_range(
      "distance",
      self.min_distance,
      self.max_distance,
      self.initial_distance,
    )?;
    check_range("detail", self.min_detail, self.max_detail, self.initial_detail)?;

    let elevation_ok = self.orbit_elevation_min > 0.0
      && self.orbit_elevation_max < 1.0
      && self.orbit_elevation_min <= self.orbit_elevation_max;
    if !elevation_ok {
      return Err(ConfigError::Elevation {
        min: self.orbit_elevation_min,
        max: self.orbit_elevation_max,
      });
    }

    for (name, value) in [
      ("zoom_in_factor", self.zoom_in_factor),
      ("zoom_out_factor", self.zoom_out_factor),
      ("detail_finer_factor", self.detail_finer_factor),
      ("detail_coarser_factor", self.detail_coarser_factor),
    ] {
      if !(value > 0.0) || !value.is_finite() {
        return Err(ConfigError::Factor { name, value });
      }
    }

    if self.max_depth > MAX_SUPPORTED_DEPTH {
      return Err(ConfigError::MaxDepth {
        requested: self.max_depth,
        supported: MAX_SUPPORTED_DEPTH,
      });
    }

    if !(self.root_half_extent > 0.0) || !self.root_half_extent.is_finite() {
      return Err(ConfigError::RootExtent(self.root_half_extent));
    }

    Ok(())
  }
}

fn check_range(name: &'static str, min: f32, max: f32, initial: f32) -> Result<(), ConfigError> {
  if !(min > 0.0) || !(min <= max) || !max.is_finite() {
    return Err(ConfigError::Range { name, min, max });
  }
  if !(initial >= min && initial <= max) {
    return Err(ConfigError::Initial {
      name,
      value: initial,
      min,
      max,
    });
  }
  Ok(())
}

impl Default for ViewConfig {
  fn default() -> Self {
    Self {
      viewport_width: 1280.0,
      viewport_height: 720.0,
      fov_degrees: 45.0,
      min_distance: 0.00001,
      max_distance: 20.0,
      initial_distance: 10.0,
      min_detail: 0.05,
      max_detail: 1.5,
      initial_detail: 0.2,
      orbit_elevation_min: 0.05,
      orbit_elevation_max: 0.95,
      zoom_in_factor: 0.97,
      zoom_out_factor: 1.03,
      detail_finer_factor: 0.9,
      detail_coarser_factor: 1.1,
      max_depth: MAX_SUPPORTED_DEPTH,
      root_half_extent: 5.0,
      culling_policy: CullingPolicy::default(),
    }
  }
}

/// Reasons a [`ViewConfig`] is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
  #[error("viewport must be positive, got {width}x{height}")]
  Viewport { width: f32, height: f32 },

  #[error("field of view must be within (0, 180) degrees, got {0}")]
  FieldOfView(f32),

  #[error("{name} range [{min}, {max}] must be positive and ordered")]
  Range { name: &'static str, min: f32, max: f32 },

  #[error("initial {name} {value} outside [{min}, {max}]")]
  Initial {
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
  },

  #[error("orbit elevation clamp [{min}, {max}] must lie strictly inside (0, 1)")]
  Elevation { min: f32, max: f32 },

  #[error("{name} must be a positive finite multiplier, got {value}")]
  Factor { name: &'static str, value: f32 },

  #[error("max depth {requested} exceeds supported depth {supported}")]
  MaxDepth { requested: u32, supported: u32 },

  #[error("root half extent must be positive, got {0}")]
  RootExtent(f32),
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
