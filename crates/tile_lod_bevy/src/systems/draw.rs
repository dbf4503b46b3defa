//! Gizmo draw pass for the generated tiles.

use bevy::color::palettes::basic;
use bevy::prelude::*;
use tile_lod::Tile;

use crate::resources::TileLodView;

/// Closed outline of a tile on the ground plane.
pub fn tile_outline(tile: &Tile) -> [Vec3; 5] {
  let [a, b, c, d] = tile.world_corners();
  [a, b, c, d, a]
}

/// Camera → focus → ground point below the camera → camera.
pub fn camera_triangle(camera_position: Vec3, focus: Vec3) -> [Vec3; 4] {
  let ground = camera_position.with_z(0.0);
  [camera_position, focus, ground, camera_position]
}

/// System drawing every stored tile as a colored outline.
///
/// Runs every tick: gizmos are immediate mode, so idle frames redraw the
/// tiles of the last regeneration.
pub fn draw_tiles(view: Res<TileLodView>, mut gizmos: Gizmos) {
  for tile in view.tiles() {
    let [r, g, b, a] = tile.color.to_array();
    gizmos.linestrip(tile_outline(tile), Color::srgba(r, g, b, a));
  }

  if view.debug_camera() {
    let camera = view.camera();
    gizmos.linestrip(camera_triangle(camera.position(), camera.focus()), basic::GREEN);
  }
}
