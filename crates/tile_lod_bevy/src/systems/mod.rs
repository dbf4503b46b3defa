//! Bevy systems for tile generation.

pub mod draw;
pub mod frame;
