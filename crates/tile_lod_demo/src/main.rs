//! tile_lod_demo - Orbit camera over screen-space adaptive ground tiles
//!
//! Controls:
//! - Move the pointer: orbit (horizontal = heading, vertical = elevation)
//! - Hold left: zoom in
//! - Hold right: zoom out
//! - Hold left + right: view from the fixed debug camera
//! - Wheel up / down: finer / coarser detail

mod cli;

use anyhow::Result;
use bevy::prelude::*;
use clap::Parser;
use tile_lod::ViewConfig;
use tile_lod_bevy::{OrbitViewCamera, TileLodPlugin};

use cli::Args;

fn main() -> Result<()> {
  let args = Args::parse();
  let config = args.view_config()?;
  run(config);
  Ok(())
}

fn run(config: ViewConfig) {
  let resolution = (config.viewport_width as u32, config.viewport_height as u32);

  let mut app = App::new();
  app
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        title: "Tile LOD - Orbit Demo".into(),
        resolution: resolution.into(),
        // Pointer orbit is normalized against the configured viewport
        resizable: false,
        ..default()
      }),
      ..default()
    }))
    .insert_resource(ClearColor(Color::BLACK));

  #[cfg(feature = "debug_ui")]
  app.add_plugins(bevy_egui::EguiPlugin::default());

  app
    .add_plugins(TileLodPlugin::new(config))
    .add_systems(Startup, spawn_orbit_camera)
    .run();
}

/// Spawn the camera; its pose is set by the first regenerated frame.
fn spawn_orbit_camera(mut commands: Commands) {
  commands.spawn((Camera3d::default(), OrbitViewCamera));
  info!("Orbit camera spawned");
}
