//! Bevy resources for tile generation.

use std::ops::{Deref, DerefMut};

use bevy::prelude::*;
use tile_lod::{TerrainView, ViewConfig};

/// Resource owning the terrain view: camera, held buttons and the tiles of
/// the last regenerated frame.
#[derive(Resource)]
pub struct TileLodView(pub TerrainView);

impl TileLodView {
  pub fn new(config: ViewConfig) -> Self {
    Self(TerrainView::new(config))
  }
}

impl Default for TileLodView {
  fn default() -> Self {
    Self::new(ViewConfig::default())
  }
}

impl Deref for TileLodView {
  type Target = TerrainView;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for TileLodView {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}
