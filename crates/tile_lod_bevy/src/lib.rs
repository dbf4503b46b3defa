//! Bevy presentation layer for tile_lod.
//!
//! This crate bridges the engine-independent tile generator with Bevy:
//! window input is forwarded to the [`TerrainView`](tile_lod::TerrainView),
//! the camera entity follows the orbit (or debug) camera, and tiles are
//! drawn as gizmo outlines.

pub mod components;
#[cfg(feature = "debug_ui")]
pub mod debug_ui;
pub mod input;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
pub use components::*;
pub use resources::*;
use tile_lod::ViewConfig;

/// Ordering of the per-tick work in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileLodSet {
	/// Window input forwarded to the view.
	Input,
	/// Held zoom, regeneration and camera sync.
	Drive,
	/// Gizmo outlines.
	Draw,
}

/// Bevy plugin for screen-space adaptive ground tiles.
#[derive(Default)]
pub struct TileLodPlugin {
	pub config: ViewConfig,
}

impl TileLodPlugin {
	pub fn new(config: ViewConfig) -> Self {
		Self { config }
	}
}

impl Plugin for TileLodPlugin {
	fn build(&self, app: &mut App) {
		app.insert_resource(TileLodView::new(self.config.clone()))
			.configure_sets(
				Update,
				(TileLodSet::Input, TileLodSet::Drive, TileLodSet::Draw).chain(),
			)
			.add_systems(Update, input::map_pointer_input.in_set(TileLodSet::Input))
			.add_systems(Update, systems::frame::drive_frame.in_set(TileLodSet::Drive))
			.add_systems(Update, systems::draw::draw_tiles.in_set(TileLodSet::Draw));

		#[cfg(feature = "debug_ui")]
		app.add_systems(
			bevy_egui::EguiPrimaryContextPass,
			debug_ui::tile_lod_debug_window,
		);
	}
}
