//! Tile - one emitted ground rectangle and its diagnostic color.

use glam::{Vec2, Vec3, Vec4};

use crate::constants::MAX_DEPTH_COLOR;

/// Axis-aligned rectangle on the ground plane, emitted by the subdivision
/// engine.
///
/// The corners are opposite but not ordered: `corner1` may be the max corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
  pub corner1: Vec2,
  pub corner2: Vec2,
  /// Recursion depth at which the tile was emitted (0 = root).
  pub depth: u32,
  /// RGBA visualization color. Never read back by the engine.
  pub color: Vec4,
}

impl Tile {
  pub fn new(corner1: Vec2, corner2: Vec2, depth: u32, color: Vec4) -> Self {
    Self {
      corner1,
      corner2,
      depth,
      color,
    }
  }

  #[inline]
  pub fn min(&self) -> Vec2 {
    self.corner1.min(self.corner2)
  }

  #[inline]
  pub fn max(&self) -> Vec2 {
    self.corner1.max(self.corner2)
  }

  #[inline]
  pub fn center(&self) -> Vec2 {
    (self.corner1 + self.corner2) * 0.5
  }

  #[inline]
  pub fn size(&self) -> Vec2 {
    (self.corner2 - self.corner1).abs()
  }

  /// Corners on the `z = 0` plane in the canonical quad winding.
  pub fn world_corners(&self) -> [Vec3; 4] {
    let (p1, p2) = (self.corner1, self.corner2);
    [
      Vec3::new(p1.x, p1.y, 0.0),
      Vec3::new(p2.x, p1.y, 0.0),
      Vec3::new(p2.x, p2.y, 0.0),
      Vec3::new(p1.x, p2.y, 0.0),
    ]
  }
}

/// Color for a tile finalized at `depth` whose shortest projected edge is
/// `edge_length`.
///
/// Blue shifts to green as depth grows; red rises as the edge approaches
/// the detail budget.
pub fn tile_color(depth: u32, edge_length: f32, detail: f32, max_depth: u32) -> Vec4 {
  let scaled = if max_depth == 0 {
    1.0
  } else {
    (depth as f32 / max_depth as f32).clamp(0.0, 1.0)
  };

  let proximity = edge_length / detail;
  let red = if proximity.is_finite() {
    proximity.clamp(0.0, 1.0)
  } else {
    1.0
  };

  Vec4::new(red, scaled, 1.0 - scaled, 1.0)
}

/// Color for tiles emitted at the depth ceiling.
#[inline]
pub fn max_depth_color() -> Vec4 {
  MAX_DEPTH_COLOR
}

#[cfg(test)]
#[path = "tile_test.rs"]
mod tile_test;
