//! Engine-agnostic metrics for the tile generator.
//!
//! Nothing here influences subdivision; the debug panel and the regression
//! tests read it.
//!
//! # Usage
//!
//! ```ignore
//! use tile_lod::metrics::TileMetrics;
//!
//! let mut metrics = TileMetrics::default();
//! metrics.record_frame(&tiles, &stats, elapsed_us);
//!
//! println!("mean depth {:.2}", metrics.histogram.mean_depth());
//! ```

use std::collections::VecDeque;

use crate::constants::DEPTH_BUCKETS;
use crate::subdivision::SubdivisionStats;
use crate::tile::Tile;

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// Create a new rolling window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over values (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Most recent value.
    pub fn last(&self) -> Option<&T> {
        self.buffer.back()
    }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
    pub fn sum(&self) -> T {
        self.buffer.iter().copied().fold(T::default(), |acc, x| acc + x)
    }
}

impl RollingWindow<u64> {
    pub fn average(&self) -> f64 {
        if self.buffer.is_empty() {
            0.0
        } else {
            self.sum() as f64 / self.buffer.len() as f64
        }
    }

    pub fn min_max(&self) -> Option<(u64, u64)> {
        let min = self.buffer.iter().copied().min()?;
        let max = self.buffer.iter().copied().max()?;
        Some((min, max))
    }
}

impl Default for RollingWindow<u64> {
    fn default() -> Self {
        Self::new(128)
    }
}

/// Tile count per depth for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthHistogram {
    /// Index = depth.
    pub counts: [u32; DEPTH_BUCKETS],
}

impl DepthHistogram {
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut histogram = Self::default();
        for tile in tiles {
            // Depths beyond the supported range share the last bucket
            let bucket = (tile.depth as usize).min(DEPTH_BUCKETS - 1);
            histogram.counts[bucket] += 1;
        }
        histogram
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Shallowest depth with at least one tile.
    pub fn min_depth(&self) -> Option<u32> {
        self.counts.iter().position(|&c| c > 0).map(|d| d as u32)
    }

    /// Deepest depth with at least one tile.
    pub fn max_depth(&self) -> Option<u32> {
        self.counts.iter().rposition(|&c| c > 0).map(|d| d as u32)
    }

    /// Count-weighted mean depth, 0 for an empty histogram.
    pub fn mean_depth(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weighted: u64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(depth, &count)| depth as u64 * count as u64)
            .sum();
        weighted as f32 / total as f32
    }
}

/// Session metrics updated on every regenerated frame.
#[derive(Debug, Clone, Default)]
pub struct TileMetrics {
    /// Depth distribution of the last frame.
    pub histogram: DepthHistogram,
    /// Statistics of the last pass.
    pub last_stats: SubdivisionStats,
    /// Rolling window of subdivision times in microseconds.
    pub subdivide_timings: RollingWindow<u64>,
    /// Last subdivision time in microseconds.
    pub last_subdivide_us: u64,
    /// Frames regenerated this session.
    pub frames_generated: u64,
}

impl TileMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one regenerated frame.
    pub fn record_frame(&mut self, tiles: &[Tile], stats: &SubdivisionStats, micros: u64) {
        self.histogram = DepthHistogram::from_tiles(tiles);
        self.last_stats = *stats;
        self.subdivide_timings.push(micros);
        self.last_subdivide_us = micros;
        self.frames_generated += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
