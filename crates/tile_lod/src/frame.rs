//! Per-tick frame driver.
//!
//! `TerrainView` owns every piece of runtime state: the camera, the held
//! buttons, and the tile list of the last regenerated frame. The host calls
//! the input forwarding methods as events arrive and [`TerrainView::tick`]
//! once per frame.
//!
//! ```text
//!   pointer / buttons ──► InputMapper ──► OrbitCamera (moved = true)
//!                                              │
//!   tick(): held zoom ──► moved? ──► subdivide ──► tiles + metrics
//!                                              │
//!                                     moved = false, Some(Frame)
//! ```

use glam::{Mat4, Vec2};
use web_time::Instant;

use crate::camera::{debug_camera_matrices, OrbitCamera};
use crate::config::{ConfigError, ViewConfig};
use crate::input::{ButtonState, InputMapper};
use crate::metrics::TileMetrics;
use crate::subdivision::{self, SubdivisionInput, SubdivisionParams, SubdivisionStats};
use crate::tile::Tile;

/// A regenerated frame, ready for the draw pass.
///
/// `view` and `projection` suit draw passes that consume matrices directly.
/// Engines that place their own camera entity from a position and a target
/// can take the same pose from [`OrbitCamera`] or [`debug_camera_matrices`];
/// the perspective parameters there reproduce `projection` exactly.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
  /// Tiles in emission order.
  pub tiles: &'a [Tile],
  /// View matrix of the camera the frame is drawn from.
  pub view: Mat4,
  /// Projection of the camera the frame is drawn from.
  pub projection: Mat4,
  /// Orbit view-projection the tiles were generated against. Differs from
  /// `projection * view` while the debug camera is active.
  pub view_projection: Mat4,
  pub debug_camera: bool,
  pub stats: SubdivisionStats,
}

/// Owned runtime state of one ground view.
#[derive(Clone, Debug)]
pub struct TerrainView {
  config: ViewConfig,
  camera: OrbitCamera,
  input: InputMapper,
  tiles: Vec<Tile>,
  stats: SubdivisionStats,
  metrics: TileMetrics,
}

impl TerrainView {
  /// Build a view without validating `config`.
  pub fn new(config: ViewConfig) -> Self {
    let camera = OrbitCamera::new(&config);
    let input = InputMapper::new(&config);
    Self {
      config,
      camera,
      input,
      tiles: Vec::new(),
      stats: SubdivisionStats::default(),
      metrics: TileMetrics::default(),
    }
  }

  /// Validate `config`, then build the view.
  pub fn try_new(config: ViewConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self::new(config))
  }

  /// Forward a pointer position in viewport pixels.
  pub fn on_pointer_move(&mut self, x: f32, y: f32) {
    self.input.on_pointer_move(&mut self.camera, x, y);
  }

  /// Forward a numbered button transition. Returns false for unknown ids.
  pub fn on_button_change(&mut self, id: u32, pressed: bool) -> bool {
    self.input.on_button_change(&mut self.camera, id, pressed)
  }

  /// Advance one tick.
  ///
  /// Applies the held zoom, then regenerates the tile list when anything
  /// changed since the previous frame. Returns `None` when nothing did.
  pub fn tick(&mut self) -> Option<Frame<'_>> {
    if let Some(factor) = self.input.buttons().held_zoom_factor(&self.config) {
      self.camera.adjust_distance(factor);
    }

    if !self.camera.is_moved() {
      return None;
    }

    self.regenerate();
    self.camera.clear_moved();
    Some(self.frame())
  }

  fn regenerate(&mut self) {
    let input = self.subdivision_input();

    let start = Instant::now();
    self.tiles.clear();
    let (_, stats) = subdivision::generate_into(&input, &mut self.tiles);
    let elapsed_us = start.elapsed().as_micros() as u64;

    self.stats = stats;
    self.metrics.record_frame(&self.tiles, &stats, elapsed_us);
  }

  /// The last generated frame, with matrices for the current draw camera.
  pub fn frame(&self) -> Frame<'_> {
    let debug_camera = self.input.buttons().debug_camera();
    let (view, projection) = if debug_camera {
      let debug = debug_camera_matrices(self.camera.aspect());
      (debug.view, debug.projection)
    } else {
      (self.camera.view(), self.camera.projection())
    };

    Frame {
      tiles: &self.tiles,
      view,
      projection,
      view_projection: self.camera.view_projection(),
      debug_camera,
      stats: self.stats,
    }
  }

  /// Parameters for a pass against the current camera.
  pub fn subdivision_params(&self) -> SubdivisionParams {
    SubdivisionParams {
      view_projection: self.camera.view_projection(),
      detail: self.camera.detail(),
      max_depth: self.config.max_depth,
      culling_policy: self.config.culling_policy,
      camera_position: self.camera.position(),
    }
  }

  /// Full pass over the root quad against the current camera.
  pub fn subdivision_input(&self) -> SubdivisionInput {
    SubdivisionInput {
      params: self.subdivision_params(),
      corner1: Vec2::splat(self.config.root_half_extent),
      corner2: Vec2::splat(-self.config.root_half_extent),
    }
  }

  #[inline]
  pub fn config(&self) -> &ViewConfig {
    &self.config
  }

  #[inline]
  pub fn camera(&self) -> &OrbitCamera {
    &self.camera
  }

  /// Direct camera access. Setters mark the frame dirty.
  #[inline]
  pub fn camera_mut(&mut self) -> &mut OrbitCamera {
    &mut self.camera
  }

  #[inline]
  pub fn tiles(&self) -> &[Tile] {
    &self.tiles
  }

  #[inline]
  pub fn stats(&self) -> &SubdivisionStats {
    &self.stats
  }

  #[inline]
  pub fn metrics(&self) -> &TileMetrics {
    &self.metrics
  }

  #[inline]
  pub fn buttons(&self) -> ButtonState {
    self.input.buttons()
  }

  #[inline]
  pub fn debug_camera(&self) -> bool {
    self.input.buttons().debug_camera()
  }
}

impl Default for TerrainView {
  fn default() -> Self {
    Self::new(ViewConfig::default())
  }
}

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;
