//! # Frame Renderer
//!
//! Turns segment data plus animation progress into a frame plan, then paints
//! the plan through egui. Planning is pure so the angular output of every
//! fill mode can be tested without a paint surface.
//!
//! Angles are degrees in the usual screen convention: 0 at 3 o'clock,
//! positive sweeps clockwise, so -90 is 12 o'clock.

use eframe::egui;
use egui::{Color32, Pos2, Stroke};

use super::animation::{FillMode, StageProgress, STAGE_COUNT};
use super::geometry::RingGeometry;
use super::segments::{self, SegmentColorSource, SegmentPalette};

/// One stroked arc of the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    /// Degrees; -90 is 12 o'clock.
    pub start_angle: f32,
    /// Degrees; negative sweeps run counterclockwise.
    pub sweep: f32,
    pub color: Color32,
}

/// Everything one frame draws, in draw order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FramePlan {
    /// Neutral full-circle track under the segment arcs.
    pub ring: bool,
    pub arcs: Vec<ArcSpec>,
    /// Aggregate percentage text; absent while there is no data.
    pub label: Option<String>,
}

impl FramePlan {
    pub fn is_empty(&self) -> bool {
        !self.ring && self.arcs.is_empty() && self.label.is_none()
    }
}

/// Paint styling resolved once at widget construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RingStyle {
    pub stroke_width: f32,
    pub text_size: f32,
    pub track_color: Color32,
    pub label_color: Color32,
}

/// Plan one frame.
///
/// Undrawable geometry yields an empty plan. With drawable geometry the
/// track ring is always planned; arcs and the label need data.
pub fn plan_frame(
    data: &[f32],
    progress: StageProgress,
    mode: FillMode,
    palette: &SegmentPalette,
    colors: &mut dyn SegmentColorSource,
    drawable: bool,
) -> FramePlan {
    if !drawable {
        return FramePlan::default();
    }

    let mut plan = FramePlan {
        ring: true,
        arcs: Vec::new(),
        label: None,
    };
    if data.is_empty() {
        return plan;
    }

    plan.arcs = match mode {
        FillMode::Parallel => parallel_arcs(data, progress.primary(), palette, colors),
        FillMode::Sequential => sequential_arcs(data, progress, palette, colors),
        FillMode::Bidirectional => bidirectional_arcs(data, progress.primary(), palette, colors),
        FillMode::Rotating => rotating_arcs(data, progress.primary(), palette, colors),
    };
    plan.label = Some(segments::share_label(data));
    plan
}

/// Segments laid end to end from 12 o'clock, every sweep scaled by the
/// shared scalar. Start angles advance by the full sweep so segments keep
/// their final positions while they grow.
fn parallel_arcs(
    data: &[f32],
    progress: f32,
    palette: &SegmentPalette,
    colors: &mut dyn SegmentColorSource,
) -> Vec<ArcSpec> {
    let mut start_angle = -90.0;
    let mut arcs = Vec::with_capacity(data.len());
    for (index, share) in data.iter().enumerate() {
        let full_sweep = share * 360.0;
        arcs.push(ArcSpec {
            start_angle,
            sweep: full_sweep * progress,
            color: palette.color_at(index, colors),
        });
        start_angle += full_sweep;
    }
    arcs
}

/// One fixed 90-degree quadrant per stage. Quadrants without a segment stay
/// undrawn and data past the four stages is ignored.
fn sequential_arcs(
    data: &[f32],
    progress: StageProgress,
    palette: &SegmentPalette,
    colors: &mut dyn SegmentColorSource,
) -> Vec<ArcSpec> {
    (0..data.len().min(STAGE_COUNT))
        .map(|index| ArcSpec {
            start_angle: -90.0 + index as f32 * 90.0,
            sweep: 90.0 * progress.stages[index],
            color: palette.color_at(index, colors),
        })
        .collect()
}

/// 90-degree slots starting at -45. Each segment's share is scaled against a
/// half circle and grows out of both sides of its slot start, one arc per
/// direction.
fn bidirectional_arcs(
    data: &[f32],
    progress: f32,
    palette: &SegmentPalette,
    colors: &mut dyn SegmentColorSource,
) -> Vec<ArcSpec> {
    let mut start_angle = -45.0;
    let mut arcs = Vec::with_capacity(data.len() * 2);
    for (index, share) in data.iter().enumerate() {
        let sweep = share * 180.0 * progress;
        let color = palette.color_at(index, colors);
        arcs.push(ArcSpec {
            start_angle,
            sweep,
            color,
        });
        arcs.push(ArcSpec {
            start_angle,
            sweep: -sweep,
            color,
        });
        start_angle += 90.0;
    }
    arcs
}

/// Like parallel, but the zero reference itself advances with progress so
/// the whole ring rotates while it grows.
fn rotating_arcs(
    data: &[f32],
    progress: f32,
    palette: &SegmentPalette,
    colors: &mut dyn SegmentColorSource,
) -> Vec<ArcSpec> {
    let mut start_angle = -90.0 + progress * 360.0;
    let mut arcs = Vec::with_capacity(data.len());
    for (index, share) in data.iter().enumerate() {
        let full_sweep = share * 360.0;
        arcs.push(ArcSpec {
            start_angle,
            sweep: full_sweep * progress,
            color: palette.color_at(index, colors),
        });
        start_angle += full_sweep;
    }
    arcs
}

/// Execute a plan against the painter.
pub fn paint_frame(
    painter: &egui::Painter,
    geometry: RingGeometry,
    style: &RingStyle,
    plan: &FramePlan,
) {
    if plan.ring {
        painter.circle_stroke(
            geometry.center,
            geometry.radius,
            Stroke::new(style.stroke_width, style.track_color),
        );
    }

    for arc in &plan.arcs {
        stroke_arc(painter, geometry, arc, style.stroke_width);
    }

    if let Some(text) = &plan.label {
        // Baseline sits a third of the font size below center
        let baseline = egui::pos2(
            geometry.center.x,
            geometry.center.y + style.text_size / 3.0,
        );
        painter.text(
            baseline,
            egui::Align2::CENTER_BOTTOM,
            text,
            egui::FontId::proportional(style.text_size),
            style.label_color,
        );
    }
}

/// egui has no native arc shape, so stroke one as a polyline with filled
/// circles as round end caps.
fn stroke_arc(painter: &egui::Painter, geometry: RingGeometry, arc: &ArcSpec, stroke_width: f32) {
    if arc.sweep == 0.0 {
        return;
    }

    let points = arc_points(geometry.center, geometry.radius, arc.start_angle, arc.sweep);
    let cap_radius = stroke_width / 2.0;
    painter.circle_filled(points[0], cap_radius, arc.color);
    painter.circle_filled(points[points.len() - 1], cap_radius, arc.color);
    painter.add(egui::Shape::line(points, Stroke::new(stroke_width, arc.color)));
}

/// Polyline approximation of an arc, roughly one point every three pixels of
/// circumference, bounded for very short and very long arcs.
fn arc_points(center: Pos2, radius: f32, start_angle: f32, sweep: f32) -> Vec<Pos2> {
    let start = start_angle.to_radians();
    let sweep = sweep.to_radians();

    let arc_length = sweep.abs() * radius;
    let segment_count = ((arc_length / 3.0).ceil() as usize).clamp(8, 100);

    (0..=segment_count)
        .map(|i| {
            let angle = start + sweep * i as f32 / segment_count as f32;
            egui::pos2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::stats_ring::segments::PALETTE_SLOTS;

    const EPS: f32 = 1e-3;

    /// Deterministic overflow colors for plan assertions.
    struct StubColorSource {
        calls: usize,
    }

    impl SegmentColorSource for StubColorSource {
        fn next_color(&mut self) -> Color32 {
            self.calls += 1;
            Color32::from_rgb(self.calls as u8, 0, 0)
        }
    }

    const PALETTE_COLORS: [Color32; PALETTE_SLOTS] =
        [Color32::RED, Color32::GREEN, Color32::BLUE, Color32::GOLD];

    fn palette() -> SegmentPalette {
        let mut source = StubColorSource { calls: 0 };
        SegmentPalette::resolve(PALETTE_COLORS.map(Some), &mut source)
    }

    fn plan(data: &[f32], progress: StageProgress, mode: FillMode) -> FramePlan {
        let mut source = StubColorSource { calls: 0 };
        plan_frame(data, progress, mode, &palette(), &mut source, true)
    }

    fn full() -> StageProgress {
        StageProgress { stages: [1.0; 4] }
    }

    fn half_primary() -> StageProgress {
        StageProgress {
            stages: [0.5, 0.0, 0.0, 0.0],
        }
    }

    #[test]
    fn undrawable_geometry_plans_nothing() {
        let mut source = StubColorSource { calls: 0 };
        let plan = plan_frame(
            &[0.25, 0.25],
            full(),
            FillMode::Parallel,
            &palette(),
            &mut source,
            false,
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn empty_data_plans_only_the_ring() {
        let plan = plan(&[], full(), FillMode::Parallel);
        assert!(plan.ring);
        assert!(plan.arcs.is_empty());
        assert_eq!(plan.label, None);
    }

    #[test]
    fn parallel_arcs_fill_proportionally() {
        let plan = plan(&[0.25, 0.25, 0.25], full(), FillMode::Parallel);

        let starts: Vec<f32> = plan.arcs.iter().map(|a| a.start_angle).collect();
        let sweeps: Vec<f32> = plan.arcs.iter().map(|a| a.sweep).collect();
        assert_eq!(starts, vec![-90.0, 0.0, 90.0]);
        assert_eq!(sweeps, vec![90.0, 90.0, 90.0]);
        assert_eq!(plan.arcs[1].color, Color32::GREEN);
        assert_eq!(plan.label.as_deref(), Some("75.00%"));
    }

    #[test]
    fn parallel_total_sweep_matches_data_share() {
        let data = [0.1, 0.2, 0.3, 0.15];
        let plan = plan(&data, full(), FillMode::Parallel);

        let total: f32 = plan.arcs.iter().map(|a| a.sweep).sum();
        let expected = 360.0 * data.iter().sum::<f32>();
        assert!((total - expected).abs() < EPS);
    }

    #[test]
    fn parallel_midway_keeps_final_start_angles() {
        let plan = plan(&[0.25, 0.25], half_primary(), FillMode::Parallel);

        // Sweeps shrink with progress but each segment starts where it will
        // end up at full fill
        assert_eq!(plan.arcs[0].start_angle, -90.0);
        assert_eq!(plan.arcs[1].start_angle, 0.0);
        assert!((plan.arcs[0].sweep - 45.0).abs() < EPS);
        assert!((plan.arcs[1].sweep - 45.0).abs() < EPS);
    }

    #[test]
    fn sequential_arcs_occupy_fixed_quadrants() {
        let progress = StageProgress {
            stages: [1.0, 0.5, 0.0, 0.0],
        };
        let plan = plan(&[0.25, 0.25, 0.25, 0.25], progress, FillMode::Sequential);

        let starts: Vec<f32> = plan.arcs.iter().map(|a| a.start_angle).collect();
        let sweeps: Vec<f32> = plan.arcs.iter().map(|a| a.sweep).collect();
        assert_eq!(starts, vec![-90.0, 0.0, 90.0, 180.0]);
        assert_eq!(sweeps, vec![90.0, 45.0, 0.0, 0.0]);
    }

    #[test]
    fn sequential_skips_quadrants_without_segments_and_extra_data() {
        let short = plan(&[0.25, 0.25], full(), FillMode::Sequential);
        assert_eq!(short.arcs.len(), 2);

        let long = plan(&[0.1; 6], full(), FillMode::Sequential);
        assert_eq!(long.arcs.len(), 4);
    }

    #[test]
    fn bidirectional_grows_both_ways_from_slot_starts() {
        let plan = plan(&[0.25, 0.5], full(), FillMode::Bidirectional);

        assert_eq!(plan.arcs.len(), 4);
        // Segment 0: 0.25 of a half circle is 45 degrees each way from -45
        assert_eq!(plan.arcs[0].start_angle, -45.0);
        assert!((plan.arcs[0].sweep - 45.0).abs() < EPS);
        assert!((plan.arcs[1].sweep + 45.0).abs() < EPS);
        // Segment 1: next slot, 90 degrees each way
        assert_eq!(plan.arcs[2].start_angle, 45.0);
        assert!((plan.arcs[2].sweep - 90.0).abs() < EPS);
        assert!((plan.arcs[3].sweep + 90.0).abs() < EPS);
        // Both directions of a segment share its color
        assert_eq!(plan.arcs[0].color, plan.arcs[1].color);
    }

    #[test]
    fn rotating_start_angle_advances_with_progress() {
        let plan = plan(&[0.5], half_primary(), FillMode::Rotating);

        assert!((plan.arcs[0].start_angle - 90.0).abs() < EPS);
        assert!((plan.arcs[0].sweep - 90.0).abs() < EPS);
    }

    #[test]
    fn rotating_total_sweep_matches_parallel_at_full() {
        let data = [0.25, 0.25, 0.25, 0.25];
        let rotating = plan(&data, full(), FillMode::Rotating);

        let total: f32 = rotating.arcs.iter().map(|a| a.sweep).sum();
        assert!((total - 360.0).abs() < EPS);
        assert_eq!(rotating.label.as_deref(), Some("100.00%"));
    }

    #[test]
    fn overflow_segments_get_source_colors() {
        let data = [0.1, 0.1, 0.1, 0.1, 0.1, 0.1];
        let mut source = StubColorSource { calls: 0 };
        let plan = plan_frame(
            &data,
            full(),
            FillMode::Parallel,
            &palette(),
            &mut source,
            true,
        );

        assert_eq!(plan.arcs[3].color, Color32::GOLD);
        assert_eq!(plan.arcs[4].color, Color32::from_rgb(1, 0, 0));
        assert_eq!(plan.arcs[5].color, Color32::from_rgb(2, 0, 0));
        assert_eq!(source.calls, 2);
    }

    #[test]
    fn planning_is_deterministic_for_identical_inputs() {
        let data = [0.2, 0.3, 0.1];
        let first = plan(&data, half_primary(), FillMode::Bidirectional);
        let second = plan(&data, half_primary(), FillMode::Bidirectional);
        assert_eq!(first, second);
    }

    #[test]
    fn arc_points_span_the_requested_angles() {
        let center = egui::pos2(0.0, 0.0);
        let points = arc_points(center, 100.0, -90.0, 90.0);

        let first = points[0];
        let last = points[points.len() - 1];
        // -90 degrees is 12 o'clock in screen coordinates
        assert!((first.x - 0.0).abs() < 1e-3 && (first.y + 100.0).abs() < 1e-3);
        // A 90 degree clockwise sweep ends at 3 o'clock
        assert!((last.x - 100.0).abs() < 1e-3 && (last.y - 0.0).abs() < 1e-3);
    }
}
