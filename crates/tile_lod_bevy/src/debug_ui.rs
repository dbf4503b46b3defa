//! egui debug panel for the tile generator.
//!
//! The widgets take plain core types so they can be embedded in any egui
//! context; [`tile_lod_debug_window`] is the Bevy system that hosts them.
//!
//! # Usage
//!
//! ```ignore
//! use tile_lod_bevy::debug_ui::tile_metrics_ui;
//!
//! egui::Window::new("Tiles").show(ctx, |ui| {
//!     tile_metrics_ui(ui, &view);
//! });
//! ```

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use egui::{Color32, RichText, Ui};
use tile_lod::{DepthHistogram, RollingWindow, TerrainView};

use crate::resources::TileLodView;

/// Render recent timings as a bar chart with average, min and max.
fn render_timings(ui: &mut Ui, timings: &RollingWindow<u64>, label: &str) {
    let Some((min, max)) = timings.min_max() else {
        ui.label(format!("{}: No data", label));
        return;
    };
    let avg = timings.average();

    ui.horizontal(|ui| {
        ui.label(format!("{}: ", label));
        ui.label(
            RichText::new(format!("{:.0}µs", avg))
                .color(Color32::LIGHT_GREEN)
                .strong(),
        );
        ui.label(format!("(min: {}µs, max: {}µs)", min, max));
    });

    let height = 40.0;
    let width = ui.available_width().min(300.0);
    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
    let rect = response.rect;

    let bar_width = width / timings.len() as f32;
    let range = (max - min).max(1) as f32;

    for (i, &value) in timings.iter().enumerate() {
        let normalized = (value - min) as f32 / range;
        let bar_height = normalized * height * 0.9 + height * 0.1;

        // Green = fast, red = slow, relative to the average
        let ratio = if avg > 0.0 { value as f64 / avg } else { 1.0 };
        let color = if ratio < 0.5 {
            Color32::from_rgb(100, 200, 100)
        } else if ratio < 1.5 {
            Color32::from_rgb(200, 200, 100)
        } else {
            Color32::from_rgb(200, 100, 100)
        };

        let x = rect.left() + i as f32 * bar_width;
        let bar_rect = egui::Rect::from_min_max(
            egui::pos2(x, rect.bottom() - bar_height),
            egui::pos2(x + bar_width - 1.0, rect.bottom()),
        );
        painter.rect_filled(bar_rect, 0.0, color);
    }
}

/// Tile count per depth, one row per populated depth.
fn render_depth_histogram(ui: &mut Ui, histogram: &DepthHistogram) {
    let (Some(first), Some(last)) = (histogram.min_depth(), histogram.max_depth()) else {
        ui.label("No tiles");
        return;
    };
    let total = histogram.total();
    let peak = histogram.counts.iter().copied().max().unwrap_or(1).max(1);

    ui.label(format!("Mean depth: {:.2}", histogram.mean_depth()));

    egui::Grid::new("depth_grid")
        .num_columns(3)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Depth").strong());
            ui.label(RichText::new("Tiles").strong());
            ui.label("");
            ui.end_row();

            for depth in first..=last {
                let count = histogram.counts[depth as usize];
                let pct = count as f32 / total as f32;
                let color = if pct > 0.3 {
                    Color32::from_rgb(200, 150, 100)
                } else if pct > 0.1 {
                    Color32::from_rgb(150, 180, 150)
                } else {
                    Color32::LIGHT_GRAY
                };

                ui.label(RichText::new(format!("{}", depth)).color(color));
                ui.label(RichText::new(format!("{}", count)).color(color));

                let width = 120.0 * count as f32 / peak as f32;
                let (response, painter) =
                    ui.allocate_painter(egui::vec2(120.0, 10.0), egui::Sense::hover());
                let bar = egui::Rect::from_min_size(response.rect.min, egui::vec2(width, 10.0));
                painter.rect_filled(bar, 0.0, color);
                ui.end_row();
            }
        });
}

/// Camera parameters, tile counts, depth distribution and pass timings.
pub fn tile_metrics_ui(ui: &mut Ui, view: &TerrainView) {
    let camera = view.camera();
    let stats = view.stats();
    let metrics = view.metrics();

    ui.horizontal(|ui| {
        ui.label("Tiles:");
        ui.label(
            RichText::new(format!("{}", view.tiles().len()))
                .color(Color32::LIGHT_BLUE)
                .strong(),
        );
        ui.separator();
        ui.label("Detail:");
        ui.label(
            RichText::new(format!("{:.3}", camera.detail()))
                .color(Color32::LIGHT_BLUE)
                .strong(),
        );
        ui.separator();
        ui.label("Distance:");
        ui.label(
            RichText::new(format!("{:.2}", camera.distance()))
                .color(Color32::LIGHT_BLUE)
                .strong(),
        );
    });

    if view.debug_camera() {
        ui.label(RichText::new("Debug camera").color(Color32::LIGHT_GREEN));
    }

    ui.separator();

    egui::CollapsingHeader::new("Timing")
        .default_open(true)
        .show(ui, |ui| {
            render_timings(ui, &metrics.subdivide_timings, "Subdivide");
            ui.label(format!(
                "Last: {}µs, frames: {}",
                metrics.last_subdivide_us, metrics.frames_generated
            ));
        });

    egui::CollapsingHeader::new("Depth Distribution")
        .default_open(true)
        .show(ui, |ui| {
            render_depth_histogram(ui, &metrics.histogram);
        });

    egui::CollapsingHeader::new("Culling")
        .default_open(false)
        .show(ui, |ui| {
            ui.label(format!("Visited: {}", stats.nodes_visited));
            ui.label(format!(
                "Culled: {} behind, {} beyond far, {} outside",
                stats.culled_behind, stats.culled_beyond_far, stats.culled_outside
            ));
            ui.label(format!(
                "Leaves: {} detail, {} shortcut, {} at max depth",
                stats.detail_leaves, stats.shortcut_leaves, stats.max_depth_leaves
            ));
        });
}

/// System hosting [`tile_metrics_ui`] in a window on the primary context.
pub fn tile_lod_debug_window(mut contexts: EguiContexts, view: Res<TileLodView>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Tiles")
        .default_pos(egui::pos2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            tile_metrics_ui(ui, &view);
        });
}
