//! Command line arguments and configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tile_lod::ViewConfig;

/// Orbit camera demo for screen-space adaptive ground tiles.
#[derive(Parser, Debug)]
#[command(name = "tile_lod_demo")]
#[command(about = "Subdivides a ground quad around an orbiting camera")]
pub struct Args {
	/// Path to a configuration TOML file (defaults when omitted).
	#[arg(short, long)]
	pub config: Option<PathBuf>,

	/// Override the maximum subdivision depth.
	#[arg(long)]
	pub max_depth: Option<u32>,

	/// Override the initial screen-space detail budget.
	#[arg(long)]
	pub detail: Option<f32>,
}

impl Args {
	/// Assemble the startup configuration and validate it.
	pub fn view_config(&self) -> Result<ViewConfig> {
		let mut config = match &self.config {
			Some(path) => load_config(path)?,
			None => ViewConfig::default(),
		};

		if let Some(max_depth) = self.max_depth {
			config.max_depth = max_depth;
		}
		if let Some(detail) = self.detail {
			config.initial_detail = detail;
		}

		config.validate().context("Invalid view configuration")?;
		Ok(config)
	}
}

/// Load a configuration from a TOML file. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<ViewConfig> {
	let content = std::fs::read_to_string(path)
		.with_context(|| format!("Failed to read config file: {}", path.display()))?;
	parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<ViewConfig> {
	toml::from_str(content).with_context(|| "Failed to parse config TOML")
}
