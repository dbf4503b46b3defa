use super::*;
use crate::camera::OrbitCamera;
use crate::config::ViewConfig;

/// Default camera: heading 0.5, elevation 0.5, distance 10.
/// Eye sits at (0, -7.07, 7.07); ground points with y < -14.14 are behind it.
fn default_camera() -> OrbitCamera {
  OrbitCamera::new(&ViewConfig::default())
}

fn project(camera: &OrbitCamera, p1: Vec2, p2: Vec2) -> ([Vec2; 4], ProjectedQuad) {
  let corners = quad_corners(p1, p2);
  let projected = ProjectedQuad::project(&camera.view_projection(), &corners);
  (corners, projected)
}

// =========================================================================
// Corners
// =========================================================================

#[test]
fn test_quad_corners_winding() {
  let corners = quad_corners(Vec2::new(5.0, 5.0), Vec2::new(-5.0, -5.0));
  assert_eq!(
    corners,
    [
      Vec2::new(5.0, 5.0),
      Vec2::new(-5.0, 5.0),
      Vec2::new(-5.0, -5.0),
      Vec2::new(5.0, -5.0),
    ]
  );
}

// =========================================================================
// Projection
// =========================================================================

#[test]
fn test_quad_in_front_has_no_behind_corners() {
  let camera = default_camera();
  let (_, projected) = project(&camera, Vec2::splat(-1.0), Vec2::splat(1.0));
  assert_eq!(projected.behind_count, 0);
  assert!(projected.clip.iter().all(|c| c.w > 0.0));
}

#[test]
fn test_quad_behind_camera_counts_all_corners() {
  let camera = default_camera();
  let (_, projected) = project(&camera, Vec2::new(-5.0, -30.0), Vec2::new(5.0, -20.0));
  assert_eq!(projected.behind_count, 4);
  assert!(projected.all_behind());
  assert!(
    projected.clip.iter().all(|c| c.w > 0.0),
    "Behind corners keep |w|"
  );
}

#[test]
fn test_straddling_quad_counts_partial() {
  let camera = default_camera();
  let (_, projected) = project(&camera, Vec2::new(20.0, -20.0), Vec2::new(30.0, -10.0));
  assert_eq!(projected.behind_count, 2);
  assert!(!projected.all_behind());
}

#[test]
fn test_screen_is_perspective_divided() {
  let camera = default_camera();
  let (_, projected) = project(&camera, Vec2::new(0.5, 0.5), Vec2::new(1.5, 2.0));
  for (clip, screen) in projected.clip.iter().zip(&projected.screen) {
    assert!((screen.x - clip.x / clip.w).abs() < 1e-6);
    assert!((screen.y - clip.y / clip.w).abs() < 1e-6);
    assert!((screen.z - clip.z / clip.w).abs() < 1e-6);
  }
}

// =========================================================================
// Frustum rejection
// =========================================================================

#[test]
fn test_centered_quad_is_not_rejected() {
  let camera = default_camera();
  let (_, projected) = project(&camera, Vec2::splat(-0.5), Vec2::splat(0.5));
  assert_eq!(projected.frustum_rejection(), None);
}

#[test]
fn test_quad_far_to_the_side_is_outside_xy() {
  let camera = default_camera();
  let (_, projected) = project(&camera, Vec2::new(100.0, -1.0), Vec2::new(110.0, 1.0));
  assert!(projected.outside_xy());
  assert_eq!(projected.frustum_rejection(), Some(Rejection::OutsideXY));
}

#[test]
fn test_quad_past_far_plane_is_beyond_far() {
  let camera = default_camera();
  // Depth along the view axis is 0.707 * y + 10, far plane at 50
  let (_, projected) = project(&camera, Vec2::new(-1.0, 60.0), Vec2::new(1.0, 80.0));
  assert!(projected.beyond_far());
  assert_eq!(projected.frustum_rejection(), Some(Rejection::BeyondFar));
}

/// A quad spanning the whole view straddles every boundary.
#[test]
fn test_straddling_quad_survives_frustum_test() {
  let camera = default_camera();
  let (_, projected) = project(&camera, Vec2::splat(-5.0), Vec2::splat(5.0));
  assert!(!projected.outside_xy());
  assert!(!projected.beyond_far());
}

// =========================================================================
// Edge lengths
// =========================================================================

#[test]
fn test_edge_lengths_are_positive_for_visible_quad() {
  let camera = default_camera();
  let (_, projected) = project(&camera, Vec2::splat(-1.0), Vec2::splat(1.0));
  for len in projected.edge_lengths() {
    assert!(len.is_finite() && len > 0.0, "length {}", len);
  }
}

#[test]
fn test_edge_lengths_ignore_depth() {
  let quad = ProjectedQuad {
    clip: [Vec4::ONE; 4],
    screen: [
      Vec3::new(0.0, 0.0, 0.1),
      Vec3::new(0.3, 0.0, 0.9),
      Vec3::new(0.3, 0.4, 0.2),
      Vec3::new(0.0, 0.4, 0.5),
    ],
    behind_count: 0,
  };
  let lengths = quad.edge_lengths();
  let expected = [0.3, 0.4, 0.3, 0.4];
  for (len, exp) in lengths.iter().zip(expected) {
    assert!((len - exp).abs() < 1e-6, "{} vs {}", len, exp);
  }
}

// =========================================================================
// Behind-camera policies
// =========================================================================

#[test]
fn test_all_corners_policy_keeps_partial_quads() {
  let camera = default_camera();
  let (corners, projected) = project(&camera, Vec2::new(20.0, -20.0), Vec2::new(30.0, -10.0));
  assert!(!is_behind(
    CullingPolicy::AllCornersBehind,
    &projected,
    &corners,
    camera.position()
  ));
}

#[test]
fn test_bounds_fallback_prunes_partial_quad_away_from_camera() {
  let camera = default_camera();
  let (corners, projected) = project(&camera, Vec2::new(20.0, -20.0), Vec2::new(30.0, -10.0));
  assert!(is_behind(
    CullingPolicy::CameraBoundsFallback,
    &projected,
    &corners,
    camera.position()
  ));
}

#[test]
fn test_bounds_fallback_keeps_partial_quad_under_camera() {
  let camera = default_camera();
  let (corners, projected) = project(&camera, Vec2::new(-5.0, -20.0), Vec2::new(5.0, -5.0));
  assert_eq!(projected.behind_count, 2);
  assert!(!is_behind(
    CullingPolicy::CameraBoundsFallback,
    &projected,
    &corners,
    camera.position()
  ));
}

#[test]
fn test_both_policies_prune_fully_behind() {
  let camera = default_camera();
  let (corners, projected) = project(&camera, Vec2::new(-5.0, -30.0), Vec2::new(5.0, -20.0));
  for policy in [CullingPolicy::AllCornersBehind, CullingPolicy::CameraBoundsFallback] {
    assert!(
      is_behind(policy, &projected, &corners, camera.position()),
      "{:?}",
      policy
    );
  }
}

#[test]
fn test_bounds_fallback_ignores_single_behind_corner() {
  let quad = ProjectedQuad {
    clip: [Vec4::ONE; 4],
    screen: [Vec3::ZERO; 4],
    behind_count: 1,
  };
  let corners = quad_corners(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
  assert!(!is_behind(
    CullingPolicy::CameraBoundsFallback,
    &quad,
    &corners,
    Vec3::new(0.0, 0.0, 5.0)
  ));
}

#[test]
fn test_default_policy_is_all_corners() {
  assert_eq!(CullingPolicy::default(), CullingPolicy::AllCornersBehind);
}
