//! Bevy components for tile rendering.

use bevy::prelude::*;

/// Marker for the camera entity that follows the orbit camera.
///
/// The drive system rewrites its `Transform` and `Projection` whenever a
/// frame is regenerated.
///
/// # Example
/// ```ignore
/// commands.spawn((Camera3d::default(), OrbitViewCamera));
/// ```
#[derive(Component, Default)]
pub struct OrbitViewCamera;
