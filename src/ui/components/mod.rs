//! # UI Components Module
//!
//! This module organizes the UI components of the crate.
//!
//! ## Module Organization:
//! - `stats_ring` - the animated circular statistics widget
//! - `styling` - color constants and global style setup for the demo window

pub mod stats_ring;
pub mod styling;

pub use stats_ring::{FillMode, StatsRing, StatsRingConfig};
pub use styling::setup_demo_style;
