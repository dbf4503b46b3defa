//! tile_lod - Engine independent screen-space adaptive ground tiles
//!
//! A flat ground quad is split recursively until every leaf's projected
//! edges fit a screen-space budget, while quads outside the view volume are
//! pruned early. Tiles come out fine near an orbiting viewer and coarse in
//! the distance.
//!
//! # Features
//!
//! - **Orbit camera**: two normalized angles and a distance around the
//!   origin, with look-at and perspective matrices rebuilt on every change
//! - **Adaptive subdivision**: all-corners frustum rejection, screen-space
//!   edge metric and a shared-edge shortcut for cheap quadrants
//! - **Frame driver**: dirty-flag regeneration into a reused tile list
//! - **Metrics**: depth histogram and rolling pass timings
//!
//! # Optional cargo features
//!
//! - `serde`: (de)serialize [`ViewConfig`] and [`CullingPolicy`]
//! - `tracing`: spans and events around each subdivision pass
//!
//! # Example
//!
//! ```
//! use tile_lod::{TerrainView, ViewConfig};
//!
//! let mut view = TerrainView::try_new(ViewConfig::default()).unwrap();
//! view.on_pointer_move(640.0, 360.0);
//!
//! if let Some(frame) = view.tick() {
//!   assert!(!frame.tiles.is_empty());
//! }
//! ```

pub mod camera;
pub mod config;
pub mod constants;
pub mod frame;
pub mod input;
pub mod metrics;
pub mod subdivision;
pub mod tile;

// Re-export commonly used items
pub use camera::{CameraMatrices, OrbitCamera};
pub use config::{ConfigError, ViewConfig};
pub use frame::{Frame, TerrainView};
pub use input::{ButtonState, InputMapper, PointerButton};
pub use metrics::{DepthHistogram, RollingWindow, TileMetrics};
pub use subdivision::{
  CullingPolicy, SubdivisionInput, SubdivisionOutput, SubdivisionParams, SubdivisionStats,
};
pub use tile::Tile;
