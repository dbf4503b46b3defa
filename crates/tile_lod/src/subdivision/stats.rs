//! Per-pass counters for the subdivision engine.
//!
//! Purely diagnostic: nothing here feeds back into culling or splitting.

use super::culling::Rejection;

/// Statistics from one subdivision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubdivisionStats {
	/// Number of `subdivide` calls, including pruned ones.
	pub nodes_visited: usize,
	/// Deepest recursion level entered this pass.
	pub max_depth_reached: u32,
	/// Quads pruned as behind the camera.
	pub culled_behind: usize,
	/// Quads pruned past the far plane.
	pub culled_beyond_far: usize,
	/// Quads pruned outside the x/y clip range.
	pub culled_outside: usize,
	/// Leaves emitted because every edge met the detail budget.
	pub detail_leaves: usize,
	/// Quadrants emitted without recursion, via the shared-edge shortcut.
	pub shortcut_leaves: usize,
	/// Leaves emitted at the depth ceiling.
	pub max_depth_leaves: usize,
}

impl SubdivisionStats {
	#[inline]
	pub(crate) fn visit(&mut self, depth: u32) {
		self.nodes_visited += 1;
		self.max_depth_reached = self.max_depth_reached.max(depth);
	}

	#[inline]
	pub(crate) fn record_rejection(&mut self, rejection: Rejection) {
		match rejection {
			Rejection::Behind => self.culled_behind += 1,
			Rejection::BeyondFar => self.culled_beyond_far += 1,
			Rejection::OutsideXY => self.culled_outside += 1,
		}
	}

	/// Total tiles emitted.
	#[inline]
	pub fn total_tiles(&self) -> usize {
		self.detail_leaves + self.shortcut_leaves + self.max_depth_leaves
	}

	/// Total quads pruned.
	#[inline]
	pub fn total_culled(&self) -> usize {
		self.culled_behind + self.culled_beyond_far + self.culled_outside
	}
}
