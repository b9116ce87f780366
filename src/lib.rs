//! # Stats Ring
//!
//! An animated circular statistics widget for egui. The ring shows a set of
//! proportional segments ("pie slices") as stroked arcs, animates their fill
//! with one of four strategies, and centers the aggregate percentage as text.
//!
//! The widget only needs an `egui::Ui` to paint into; the demo binary in this
//! crate hosts it in an eframe window.

pub mod ui;

pub use ui::components::stats_ring::{
    AnimationDriver, FillMode, StageProgress, StatsRing, StatsRingConfig,
};
