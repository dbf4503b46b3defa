use super::*;

fn default_camera() -> OrbitCamera {
  OrbitCamera::new(&ViewConfig::default())
}

// =========================================================================
// Construction
// =========================================================================

/// Pointer starts centered: half a turn of heading, mid elevation.
#[test]
fn test_new_centers_pointer() {
  let camera = default_camera();
  assert!((camera.orbit_xz() - 0.5).abs() < 1e-6);
  assert!((camera.orbit_yz() - 0.5).abs() < 1e-6);
  assert_eq!(camera.distance(), 10.0);
  assert_eq!(camera.detail(), 0.2);
}

#[test]
fn test_new_camera_is_moved() {
  assert!(default_camera().is_moved(), "First frame must regenerate");
}

#[test]
fn test_position_at_distance_from_focus() {
  let camera = default_camera();
  assert_eq!(camera.focus(), Vec3::ZERO);
  assert!((camera.position().length() - 10.0).abs() < 1e-4);
  assert!(camera.position().z > 0.0, "Camera should be above the ground");
}

// =========================================================================
// Orbit
// =========================================================================

#[test]
fn test_set_orbit_normalizes_heading() {
  let mut camera = default_camera();
  camera.set_orbit(320.0, 360.0);
  assert!((camera.orbit_xz() - 0.25).abs() < 1e-6);
}

#[test]
fn test_set_orbit_clamps_elevation() {
  let mut camera = default_camera();

  camera.set_orbit(0.0, 0.0);
  assert!((camera.orbit_yz() - 0.05).abs() < 1e-6, "Top edge clamps to min");

  camera.set_orbit(0.0, 720.0);
  assert!((camera.orbit_yz() - 0.95).abs() < 1e-6, "Bottom edge clamps to max");

  camera.set_orbit(0.0, 10_000.0);
  assert!((camera.orbit_yz() - 0.95).abs() < 1e-6);
}

/// Elevation at either clamp boundary keeps a usable right vector.
#[test]
fn test_clamped_elevation_keeps_view_basis() {
  let mut camera = default_camera();
  for y in [0.0, -50.0, 720.0, 5000.0] {
    for x in [0.0, 333.0, 640.0, 1279.0] {
      camera.set_orbit(x, y);
      let forward = (camera.position() - camera.focus()).normalize();
      let cross = forward.cross(Vec3::Z);
      assert!(
        cross.length() > 0.05,
        "cross(forward, up) degenerate at ({}, {}): {:?}",
        x,
        y,
        cross
      );
      assert!(camera.view().is_finite(), "View matrix not finite at ({}, {})", x, y);
    }
  }
}

// =========================================================================
// Distance and detail
// =========================================================================

#[test]
fn test_adjust_distance_multiplies() {
  let mut camera = default_camera();
  camera.adjust_distance(0.5);
  assert!((camera.distance() - 5.0).abs() < 1e-6);
}

#[test]
fn test_adjust_distance_clamps_to_range() {
  let mut camera = default_camera();
  camera.adjust_distance(100.0);
  assert_eq!(camera.distance(), 20.0);

  camera.adjust_distance(0.0);
  assert_eq!(camera.distance(), 0.00001);
  assert!(camera.view_projection().is_finite(), "Floor distance stays numeric");
}

#[test]
fn test_set_detail_clamps_to_range() {
  let mut camera = default_camera();
  camera.set_detail(1000.0);
  assert_eq!(camera.detail(), 1.5);
  camera.set_detail(0.0);
  assert_eq!(camera.detail(), 0.05);
  camera.set_detail(0.7);
  assert_eq!(camera.detail(), 0.7);
}

// =========================================================================
// Derived state
// =========================================================================

#[test]
fn test_clip_planes_follow_distance() {
  let mut camera = default_camera();
  assert!((camera.near_clip() - 0.5).abs() < 1e-6);
  assert!((camera.far_clip() - 50.0).abs() < 1e-4);

  camera.adjust_distance(2.0);
  assert!((camera.near_clip() - 1.0).abs() < 1e-6, "Near clip caps at 1");
  assert!((camera.far_clip() - 100.0).abs() < 1e-4);
}

#[test]
fn test_view_projection_is_product() {
  let camera = default_camera();
  let expected = camera.projection() * camera.view();
  assert!(camera.view_projection().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_focus_projects_to_screen_center() {
  let camera = default_camera();
  let clip = camera.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
  assert!(clip.w > 0.0);
  assert!((clip.x / clip.w).abs() < 1e-5);
  assert!((clip.y / clip.w).abs() < 1e-5);
}

#[test]
fn test_every_setter_marks_moved() {
  let mut camera = default_camera();

  camera.clear_moved();
  camera.set_orbit(10.0, 10.0);
  assert!(camera.is_moved(), "set_orbit");

  camera.clear_moved();
  camera.adjust_distance(1.0);
  assert!(camera.is_moved(), "adjust_distance");

  camera.clear_moved();
  camera.set_detail(0.3);
  assert!(camera.is_moved(), "set_detail");
}

#[test]
fn test_basis_matches_position() {
  let camera = default_camera();
  let basis = camera.basis();
  assert!(basis
    .forward
    .abs_diff_eq(camera.position().normalize(), 1e-5));
}
