//! Screen-space adaptive subdivision of the ground quad.
//!
//! A quad is projected, culled against the view volume, and split into four
//! quadrants until every projected edge fits the detail budget or the depth
//! ceiling is hit. Near the viewer tiles end up small in world space; far
//! away they stay coarse.
//!
//! # Shared-Edge Shortcut
//!
//! After projecting a parent, each of its four edges is compared against the
//! budget. A quadrant bordered only by short edges is emitted directly as a
//! leaf instead of being projected and culled again. The cost is that a few
//! quadrants right at the frustum boundary are drawn on their parent's
//! verdict even though their own test would have rejected them.
//!
//! # Degenerate Geometry
//!
//! Corners with `w == 0` produce non-finite screen coordinates. Such edges
//! never satisfy the budget, so the quad keeps splitting until the depth
//! ceiling emits it.

pub mod culling;
pub mod stats;

pub use culling::{quad_corners, CullingPolicy, ProjectedQuad, Rejection};
pub use stats::SubdivisionStats;

use glam::{Mat4, Vec2, Vec3};

use crate::constants::EDGE_QUADRANTS;
use crate::tile::{max_depth_color, tile_color, Tile};

/// Inputs consulted by every `subdivide` call of one pass.
#[derive(Clone, Copy, Debug)]
pub struct SubdivisionParams {
  pub view_projection: Mat4,
  /// Screen-space edge budget (normalized device units).
  pub detail: f32,
  /// Depth at which recursion stops unconditionally.
  pub max_depth: u32,
  pub culling_policy: CullingPolicy,
  /// Eye position, used by [`CullingPolicy::CameraBoundsFallback`].
  pub camera_position: Vec3,
}

/// Input for a full pass over a root quad.
pub struct SubdivisionInput {
  pub params: SubdivisionParams,
  pub corner1: Vec2,
  pub corner2: Vec2,
}

/// Output from a full pass.
pub struct SubdivisionOutput {
  /// Tiles in emission order.
  pub tiles: Vec<Tile>,
  /// Whether the recursion reported a visible descendant.
  pub visible: bool,
  pub stats: SubdivisionStats,
}

/// Run a pass from depth 0 into a fresh tile list.
pub fn generate(input: SubdivisionInput) -> SubdivisionOutput {
  let mut tiles = Vec::new();
  let (visible, stats) = generate_into(&input, &mut tiles);
  SubdivisionOutput {
    tiles,
    visible,
    stats,
  }
}

/// Run a pass from depth 0, appending to `tiles`.
///
/// Returns the recursion's visibility flag and the pass statistics.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "subdivision::generate"))]
pub fn generate_into(input: &SubdivisionInput, tiles: &mut Vec<Tile>) -> (bool, SubdivisionStats) {
  let mut stats = SubdivisionStats::default();
  let visible = subdivide(
    &input.params,
    input.corner1,
    input.corner2,
    0,
    tiles,
    &mut stats,
  );

  #[cfg(feature = "tracing")]
  tracing::debug!(
    tiles = stats.total_tiles(),
    visited = stats.nodes_visited,
    culled = stats.total_culled(),
    max_depth = stats.max_depth_reached,
    detail = input.params.detail,
    "subdivision pass complete"
  );

  (visible, stats)
}

/// Recursively cull and split the quad spanned by `p1` and `p2`, appending
/// leaves to `tiles`.
///
/// Returns true if this call or a recursive descendant reached the depth
/// ceiling. Leaves emitted because they are fine enough, and shortcut
/// quadrants, do not count.
pub fn subdivide(
  params: &SubdivisionParams,
  p1: Vec2,
  p2: Vec2,
  depth: u32,
  tiles: &mut Vec<Tile>,
  stats: &mut SubdivisionStats,
) -> bool {
  stats.visit(depth);

  if depth >= params.max_depth {
    tiles.push(Tile::new(p1, p2, depth, max_depth_color()));
    stats.max_depth_leaves += 1;
    return true;
  }

  let corners = quad_corners(p1, p2);
  let projected = ProjectedQuad::project(&params.view_projection, &corners);

  if culling::is_behind(
    params.culling_policy,
    &projected,
    &corners,
    params.camera_position,
  ) {
    stats.record_rejection(Rejection::Behind);
    return false;
  }

  // The root is always potentially visible
  if depth > 0 {
    if let Some(rejection) = projected.frustum_rejection() {
      stats.record_rejection(rejection);
      return false;
    }
  }

  let lengths = projected.edge_lengths();
  let detail = params.detail;

  if lengths.iter().all(|&len| len <= detail) {
    let min_len = lengths.iter().copied().fold(f32::INFINITY, f32::min);
    tiles.push(Tile::new(
      p1,
      p2,
      depth,
      tile_color(depth, min_len, detail, params.max_depth),
    ));
    stats.detail_leaves += 1;
    return false;
  }

  let mut marked = [false; 4];
  for (edge, &len) in lengths.iter().enumerate() {
    // NaN lengths fall through to a split
    if !(len <= detail) {
      let (a, b) = EDGE_QUADRANTS[edge];
      marked[a] = true;
      marked[b] = true;
    }
  }

  let center = (p1 + p2) * 0.5;
  let child_depth = depth + 1;
  let mut visible = false;

  for (quadrant, &corner) in corners.iter().enumerate() {
    if marked[quadrant] {
      visible |= subdivide(params, corner, center, child_depth, tiles, stats);
    } else {
      tiles.push(Tile::new(
        corner,
        center,
        child_depth,
        tile_color(child_depth, lengths[quadrant], detail, params.max_depth),
      ));
      stats.shortcut_leaves += 1;
    }
  }

  visible
}
