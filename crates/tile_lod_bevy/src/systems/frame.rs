//! Per-tick frame driving and camera sync.

use bevy::prelude::*;
use tile_lod::camera::debug_camera_matrices;
use tile_lod::constants::WORLD_UP;
use tile_lod::OrbitCamera;

use crate::components::OrbitViewCamera;
use crate::resources::TileLodView;

/// Where the Bevy camera should be and how it projects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
  pub position: Vec3,
  pub focus: Vec3,
  pub fov_y: f32,
  pub near: f32,
  pub far: f32,
}

impl CameraPose {
  /// Pose of the orbiting camera, or of the fixed observer in debug mode.
  pub fn select(camera: &OrbitCamera, debug_camera: bool) -> Self {
    if debug_camera {
      let debug = debug_camera_matrices(camera.aspect());
      Self {
        position: debug.position,
        focus: debug.focus,
        fov_y: debug.fov_y,
        near: debug.near,
        far: debug.far,
      }
    } else {
      Self {
        position: camera.position(),
        focus: camera.focus(),
        fov_y: camera.fov_y(),
        near: camera.near_clip(),
        far: camera.far_clip(),
      }
    }
  }

  pub fn transform(&self) -> Transform {
    Transform::from_translation(self.position).looking_at(self.focus, WORLD_UP)
  }

  pub fn projection(&self) -> Projection {
    Projection::Perspective(PerspectiveProjection {
      fov: self.fov_y,
      near: self.near,
      far: self.far,
      ..default()
    })
  }
}

/// System that ticks the view and, when tiles were regenerated, moves the
/// camera entity to match.
pub fn drive_frame(
  mut view: ResMut<TileLodView>,
  mut cameras: Query<(&mut Transform, &mut Projection), With<OrbitViewCamera>>,
) {
  let Some(frame) = view.tick() else {
    return;
  };
  let debug_camera = frame.debug_camera;
  debug!(
    "Regenerated {} tiles (visited {}, culled {}), debug camera: {}",
    frame.tiles.len(),
    frame.stats.nodes_visited,
    frame.stats.total_culled(),
    debug_camera
  );

  let pose = CameraPose::select(view.camera(), debug_camera);
  for (mut transform, mut projection) in &mut cameras {
    *transform = pose.transform();
    *projection = pose.projection();
  }
}
