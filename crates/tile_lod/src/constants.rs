//! Fixed constants shared by the camera model and the subdivision engine.
//!
//! # Quad Winding
//!
//! Every quad is handled through its four corners in a fixed order, with
//! edge `i` running from corner `i` to corner `(i + 1) % 4`:
//!
//! ```text
//!              edge 0
//!   P1 = 0 +-----------+ 1 = (P2.x, P1.y)
//!          |     |     |
//!   edge 3 |  0  |  1  | edge 1
//!          |-----c-----|
//!          |  3  |  2  |
//!          |     |     |
//!        3 +-----------+ 2 = P2
//!   (P1.x, P2.y)  edge 2
//! ```
//!
//! Quadrant `i` spans corner `i` to the center `c`. Edge `i` borders
//! quadrants `i` and `(i + 1) % 4`.

use glam::{Vec3, Vec4};

/// Largest subdivision depth a configuration may request.
///
/// Bounds the worst case at `4^15` leaves and sizes the depth histogram.
pub const MAX_SUPPORTED_DEPTH: u32 = 15;

/// Number of histogram buckets (one per depth, 0 through
/// [`MAX_SUPPORTED_DEPTH`]).
pub const DEPTH_BUCKETS: usize = MAX_SUPPORTED_DEPTH as usize + 1;

/// World up axis. The ground plane is `z = 0`.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Point the orbit camera always looks at.
pub const FOCUS_POINT: Vec3 = Vec3::ZERO;

/// Near clip plane as a fraction of the orbit distance.
pub const NEAR_CLIP_DISTANCE_RATIO: f32 = 0.05;

/// Upper bound for the near clip plane.
pub const NEAR_CLIP_MAX: f32 = 1.0;

/// Far clip plane as a multiple of the near clip plane.
pub const FAR_CLIP_RATIO: f32 = 100.0;

/// Color of tiles emitted at the depth ceiling.
pub const MAX_DEPTH_COLOR: Vec4 = Vec4::ONE;

/// Fixed observer used by the debug camera overlay.
pub const DEBUG_CAMERA_POSITION: Vec3 = Vec3::new(10.0, 0.0, 10.0);
pub const DEBUG_CAMERA_FOV_DEGREES: f32 = 45.0;
pub const DEBUG_CAMERA_NEAR: f32 = 1.0;
pub const DEBUG_CAMERA_FAR: f32 = 100.0;

/// Corner index pairs for the four quad edges.
pub const EDGE_CORNERS: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];

/// The two quadrants each edge borders.
pub const EDGE_QUADRANTS: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 3), (3, 0)];

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
