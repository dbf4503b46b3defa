//! Corner projection and conservative frustum rejection for a single quad.
//!
//! All tests are all-corners tests: a quad is rejected only when every
//! corner lies on the same outside side of one boundary. Quads that straddle
//! a boundary are never rejected, and quads whose corners sit on opposite
//! outside sides without crossing the volume are not caught either.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::EDGE_CORNERS;

/// Policy for quads with corners behind the camera plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CullingPolicy {
  /// Prune only when all four corners are behind the camera.
  ///
  /// Quads that are partly behind survive, which can leave a few coarse
  /// tiles directly behind the viewer at low detail.
  #[default]
  AllCornersBehind,
  /// Prune when all four corners are behind, or when more than one corner
  /// is behind and the camera's ground position lies outside the quad's
  /// bounds.
  CameraBoundsFallback,
}

/// Why a quad was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
  /// Behind the camera plane.
  Behind,
  /// Beyond the far plane, or every `w` degenerate.
  BeyondFar,
  /// Entirely past one side of the x or y clip range.
  OutsideXY,
}

/// The four corners of a quad in canonical winding:
/// P1, (P2.x, P1.y), P2, (P1.x, P2.y).
#[inline]
pub fn quad_corners(p1: Vec2, p2: Vec2) -> [Vec2; 4] {
  [p1, Vec2::new(p2.x, p1.y), p2, Vec2::new(p1.x, p2.y)]
}

/// A quad's corners after projection and perspective division.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedQuad {
  /// Clip coordinates with `w` replaced by `|w|` for corners behind the
  /// camera.
  pub clip: [Vec4; 4],
  /// `clip.xyz / clip.w`.
  pub screen: [Vec3; 4],
  /// Number of corners whose raw clip `w` was negative.
  pub behind_count: u8,
}

impl ProjectedQuad {
  /// Project ground-plane corners (z = 0) by `view_projection`.
  pub fn project(view_projection: &Mat4, corners: &[Vec2; 4]) -> Self {
    let mut clip = [Vec4::ZERO; 4];
    let mut behind_count = 0u8;

    for (out, corner) in clip.iter_mut().zip(corners) {
      let mut projected = *view_projection * Vec4::new(corner.x, corner.y, 0.0, 1.0);
      if projected.w < 0.0 {
        behind_count += 1;
        projected.w = projected.w.abs();
      }
      *out = projected;
    }

    let screen = clip.map(|c| c.truncate() / c.w);

    Self {
      clip,
      screen,
      behind_count,
    }
  }

  /// Whether every corner was behind the camera.
  #[inline]
  pub fn all_behind(&self) -> bool {
    self.behind_count == 4
  }

  /// All corners past the far plane, or every `w` non-positive.
  pub fn beyond_far(&self) -> bool {
    self.screen.iter().all(|s| s.z >= 1.0) || self.clip.iter().all(|c| c.w <= 0.0)
  }

  /// All corners on the same outside side of the x or y clip range.
  pub fn outside_xy(&self) -> bool {
    (0..2).any(|axis| {
      self.screen.iter().all(|s| s[axis] >= 1.0) || self.screen.iter().all(|s| s[axis] <= -1.0)
    })
  }

  /// Screen-space lengths of the four edges (x and y only).
  pub fn edge_lengths(&self) -> [f32; 4] {
    EDGE_CORNERS.map(|(from, to)| {
      let edge = self.screen[from] - self.screen[to];
      Vec2::new(edge.x, edge.y).length()
    })
  }

  /// Frustum rejection, without the behind-camera test.
  pub fn frustum_rejection(&self) -> Option<Rejection> {
    if self.beyond_far() {
      Some(Rejection::BeyondFar)
    } else if self.outside_xy() {
      Some(Rejection::OutsideXY)
    } else {
      None
    }
  }
}

/// Behind-camera test for `policy`.
///
/// `corners` are the world-space quad corners and `camera_position` the
/// current eye, both only consulted by
/// [`CullingPolicy::CameraBoundsFallback`].
pub fn is_behind(
  policy: CullingPolicy,
  projected: &ProjectedQuad,
  corners: &[Vec2; 4],
  camera_position: Vec3,
) -> bool {
  if projected.all_behind() {
    return true;
  }

  match policy {
    CullingPolicy::AllCornersBehind => false,
    CullingPolicy::CameraBoundsFallback => {
      projected.behind_count > 1 && !bounds_contain(corners, camera_position.truncate())
    }
  }
}

fn bounds_contain(corners: &[Vec2; 4], point: Vec2) -> bool {
  let min = corners[0].min(corners[2]);
  let max = corners[0].max(corners[2]);
  point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

#[cfg(test)]
#[path = "culling_test.rs"]
mod culling_test;
