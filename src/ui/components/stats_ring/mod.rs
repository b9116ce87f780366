//! # Stats Ring Widget
//!
//! A circular statistics widget: proportional segments drawn as stroked arcs
//! inside a neutral ring, with the aggregate percentage centered as text.
//! Assigning data starts a looping fill animation in one of four modes; the
//! mode is fixed for the widget's lifetime.
//!
//! ## Key Components:
//! - `geometry` - viewport layout math (center, radius, bounding square)
//! - `segments` - proportion data and per-segment color resolution
//! - `animation` - the time-driven fill state machine
//! - `renderer` - frame planning and egui painting
//!
//! ## Usage:
//! ```no_run
//! # use stats_ring::{StatsRing, StatsRingConfig};
//! # fn show(ui: &mut egui::Ui) {
//! let mut ring = StatsRing::new(StatsRingConfig::default());
//! ring.set_data(vec![0.25, 0.25, 0.25], ui.input(|i| i.time));
//! ring.show(ui, egui::vec2(320.0, 320.0));
//! # }
//! ```

pub mod animation;
pub mod geometry;
pub mod renderer;
pub mod segments;

pub use animation::{AnimationDriver, FillMode, StageProgress, FILL_DURATION, START_DELAY};
pub use geometry::RingGeometry;
pub use renderer::{ArcSpec, FramePlan, RingStyle};
pub use segments::{RandomColorSource, SegmentColorSource, SegmentPalette};

use eframe::egui;
use egui::Color32;
use log::debug;

use crate::ui::components::styling::colors;

/// Construction-time configuration, all fields optional via [`Default`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRingConfig {
    /// Stroke thickness of the track and segment arcs, logical points.
    pub stroke_width: f32,
    /// Font size of the centered percentage label.
    pub text_size: f32,
    /// Configured segment colors; unset slots get a random color once at
    /// construction.
    pub segment_colors: [Option<Color32>; segments::PALETTE_SLOTS],
    /// Animation strategy, fixed for the widget's lifetime.
    pub fill_mode: FillMode,
}

impl Default for StatsRingConfig {
    fn default() -> Self {
        Self {
            stroke_width: 15.0,
            text_size: 40.0,
            segment_colors: [None; segments::PALETTE_SLOTS],
            fill_mode: FillMode::Parallel,
        }
    }
}

/// The widget. Owns its data, resolved styling, and animation state.
///
/// All state is instance-local; nothing is shared across widget instances.
pub struct StatsRing {
    style: RingStyle,
    palette: SegmentPalette,
    color_source: Box<dyn SegmentColorSource>,
    driver: AnimationDriver,
    data: Vec<f32>,
}

impl StatsRing {
    /// Build with the production random color source.
    pub fn new(config: StatsRingConfig) -> Self {
        Self::with_color_source(config, Box::new(RandomColorSource))
    }

    /// Build with an injected color source (deterministic in tests).
    pub fn with_color_source(
        config: StatsRingConfig,
        mut color_source: Box<dyn SegmentColorSource>,
    ) -> Self {
        let palette = SegmentPalette::resolve(config.segment_colors, color_source.as_mut());
        debug!("stats ring created, fill mode {:?}", config.fill_mode);

        Self {
            style: RingStyle {
                stroke_width: config.stroke_width,
                text_size: config.text_size,
                track_color: colors::RING_TRACK,
                label_color: colors::RING_LABEL,
            },
            palette,
            color_source,
            driver: AnimationDriver::new(config.fill_mode),
            data: Vec::new(),
        }
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn fill_mode(&self) -> FillMode {
        self.driver.mode()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    /// Progress scalars the renderer would use at host-clock time `now`.
    pub fn progress_at(&self, now: f64) -> StageProgress {
        self.driver.sample(now)
    }

    /// Replace the data wholesale.
    ///
    /// The previous run is torn down first. Non-empty data starts a fresh run
    /// at progress zero anchored at `now` (host-clock seconds); empty data
    /// leaves the widget idle.
    pub fn set_data(&mut self, data: Vec<f32>, now: f64) {
        debug!("segment data replaced: {} segments", data.len());
        self.data = data;
        if self.data.is_empty() {
            self.driver.stop();
        } else {
            self.driver.restart(now);
        }
    }

    /// Paint the widget into `desired_size` of the current layout.
    ///
    /// Samples the frame clock, updates nothing but the frame plan, paints,
    /// and requests a repaint while a run is active. The response senses
    /// clicks so hosts can wire tap-to-restart.
    pub fn show(&mut self, ui: &mut egui::Ui, desired_size: egui::Vec2) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());
        let geometry = RingGeometry::from_rect(rect, self.style.stroke_width);

        let now = ui.input(|i| i.time);
        let progress = self.driver.sample(now);
        let plan = renderer::plan_frame(
            &self.data,
            progress,
            self.driver.mode(),
            &self.palette,
            self.color_source.as_mut(),
            geometry.is_drawable(),
        );
        renderer::paint_frame(ui.painter(), geometry, &self.style, &plan);

        if self.driver.is_running() {
            ui.ctx().request_repaint();
        }
        response
    }
}
