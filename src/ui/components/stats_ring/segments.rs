//! # Segment Model
//!
//! Proportional segment data and per-segment color resolution. Data is an
//! ordered sequence of fractions of a whole; order determines draw order and
//! angular position. Values are taken as-is, without validation or clamping.

use eframe::egui::Color32;
use rand::Rng;

/// Number of color slots resolved from configuration.
pub const PALETTE_SLOTS: usize = 4;

/// Source of colors for segments with no configured color.
///
/// Injected so tests can substitute a deterministic stub. The production
/// source draws a fresh random opaque color on every call, which makes
/// overflow segments (index past the palette) non-reproducible between
/// frames.
pub trait SegmentColorSource {
    fn next_color(&mut self) -> Color32;
}

/// Production color source backed by the thread RNG.
#[derive(Debug, Default)]
pub struct RandomColorSource;

impl SegmentColorSource for RandomColorSource {
    fn next_color(&mut self) -> Color32 {
        let mut rng = rand::thread_rng();
        Color32::from_rgb(rng.gen(), rng.gen(), rng.gen())
    }
}

/// Per-slot segment colors, fixed for the widget's lifetime.
///
/// Configured slots keep their color; unconfigured slots are filled once at
/// resolution time. Only indices past the palette fall through to the color
/// source again, with a fresh pick per lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPalette {
    colors: [Color32; PALETTE_SLOTS],
}

impl SegmentPalette {
    pub fn resolve(
        configured: [Option<Color32>; PALETTE_SLOTS],
        source: &mut dyn SegmentColorSource,
    ) -> Self {
        Self {
            colors: configured.map(|slot| slot.unwrap_or_else(|| source.next_color())),
        }
    }

    pub fn color_at(&self, index: usize, source: &mut dyn SegmentColorSource) -> Color32 {
        self.colors
            .get(index)
            .copied()
            .unwrap_or_else(|| source.next_color())
    }
}

/// Sum of all proportions: the fraction of the whole the data covers.
pub fn total_share(data: &[f32]) -> f32 {
    data.iter().sum()
}

/// Center label text: the aggregate share as a percentage.
pub fn share_label(data: &[f32]) -> String {
    format!("{:.2}%", total_share(data) * 100.0)
}
