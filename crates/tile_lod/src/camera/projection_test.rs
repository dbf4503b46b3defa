use super::*;

const EPS: f32 = 1e-5;

// =========================================================================
// Orbit direction
// =========================================================================

#[test]
fn test_orbit_zero_elevation_is_straight_up() {
  let dir = orbit_direction(0.3, 0.0);
  assert!(dir.abs_diff_eq(Vec3::Z, EPS), "got {:?}", dir);
}

#[test]
fn test_orbit_full_elevation_lies_on_ground() {
  let dir = orbit_direction(0.0, 1.0);
  assert!(dir.abs_diff_eq(Vec3::Y, EPS), "got {:?}", dir);
}

#[test]
fn test_orbit_half_turn_flips_heading() {
  let dir = orbit_direction(0.5, 1.0);
  assert!(dir.abs_diff_eq(Vec3::NEG_Y, EPS), "got {:?}", dir);
}

#[test]
fn test_orbit_direction_is_unit_length() {
  for &(xz, yz) in &[(0.0, 0.05), (0.25, 0.5), (0.9, 0.95), (1.7, 0.3)] {
    let len = orbit_direction(xz, yz).length();
    assert!((len - 1.0).abs() < EPS, "({}, {}) gave length {}", xz, yz, len);
  }
}

// =========================================================================
// look_at
// =========================================================================

#[test]
fn test_look_at_maps_eye_to_origin() {
  let eye = Vec3::new(3.0, -4.0, 5.0);
  let view = look_at(eye, Vec3::ZERO, Vec3::Z);
  let mapped = view.transform_point3(eye);
  assert!(mapped.abs_diff_eq(Vec3::ZERO, EPS), "got {:?}", mapped);
}

#[test]
fn test_look_at_places_focus_on_negative_z() {
  let eye = Vec3::new(3.0, -4.0, 5.0);
  let view = look_at(eye, Vec3::ZERO, Vec3::Z);
  let mapped = view.transform_point3(Vec3::ZERO);
  let expected = Vec3::new(0.0, 0.0, -eye.length());
  assert!(mapped.abs_diff_eq(expected, 1e-4), "got {:?}", mapped);
}

#[test]
fn test_look_at_basis_is_orthonormal() {
  let basis = CameraBasis::new(Vec3::new(1.0, 2.0, 6.0), Vec3::ZERO, Vec3::Z);
  assert!((basis.forward.length() - 1.0).abs() < EPS);
  assert!((basis.right.length() - 1.0).abs() < EPS);
  assert!((basis.up.length() - 1.0).abs() < EPS);
  assert!(basis.forward.dot(basis.right).abs() < EPS);
  assert!(basis.forward.dot(basis.up).abs() < EPS);
  assert!(basis.right.dot(basis.up).abs() < EPS);
}

#[test]
fn test_look_at_is_rigid() {
  let view = look_at(Vec3::new(-2.0, 7.0, 3.0), Vec3::ZERO, Vec3::Z);
  let a = Vec3::new(1.0, 1.0, 0.0);
  let b = Vec3::new(-3.0, 2.0, 0.0);
  let before = a.distance(b);
  let after = view.transform_point3(a).distance(view.transform_point3(b));
  assert!((before - after).abs() < 1e-4);
}

// =========================================================================
// perspective
// =========================================================================

#[test]
fn test_perspective_matches_glam_right_handed() {
  let fov = 45_f32.to_radians();
  let ours = perspective(fov, 16.0 / 9.0, 0.5, 50.0);
  let glam = Mat4::perspective_rh(fov, 16.0 / 9.0, 0.5, 50.0);
  assert!(ours.abs_diff_eq(glam, 1e-5), "ours {:?} glam {:?}", ours, glam);
}

#[test]
fn test_perspective_maps_near_and_far_to_unit_depth() {
  let projection = perspective(1.0, 1.0, 0.5, 50.0);

  let near = projection * Vec4::new(0.0, 0.0, -0.5, 1.0);
  assert!((near.z / near.w).abs() < EPS, "near depth {}", near.z / near.w);

  let far = projection * Vec4::new(0.0, 0.0, -50.0, 1.0);
  assert!(((far.z / far.w) - 1.0).abs() < EPS, "far depth {}", far.z / far.w);
}

#[test]
fn test_perspective_w_positive_in_front() {
  let projection = perspective(1.0, 1.0, 0.5, 50.0);
  let clip = projection * Vec4::new(0.0, 0.0, -3.0, 1.0);
  assert!((clip.w - 3.0).abs() < EPS);
  let behind = projection * Vec4::new(0.0, 0.0, 3.0, 1.0);
  assert!(behind.w < 0.0);
}

// =========================================================================
// Debug camera
// =========================================================================

#[test]
fn test_debug_camera_looks_at_origin() {
  let matrices = debug_camera_matrices(16.0 / 9.0);
  let clip = matrices.projection * matrices.view * Vec4::new(0.0, 0.0, 0.0, 1.0);
  assert!(clip.w > 0.0);
  assert!((clip.x / clip.w).abs() < EPS);
  assert!((clip.y / clip.w).abs() < EPS);
}
