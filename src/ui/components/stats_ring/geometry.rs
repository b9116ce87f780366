//! # Ring Geometry
//!
//! Viewport-to-layout math for the stats ring. Pure functions of the current
//! bounds and stroke thickness; recomputed whenever the widget's bounds
//! change, with no history kept.

use eframe::egui;

/// Layout derived from the widget's viewport and stroke thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Center of the ring.
    pub center: egui::Pos2,
    /// Outer radius; the stroke is centered on this circle so it fits inside
    /// the viewport.
    pub radius: f32,
    /// Square of side `2 * radius` centered on `center`.
    pub bounds: egui::Rect,
}

impl RingGeometry {
    /// Layout for a viewport of `width` x `height` logical points.
    pub fn from_viewport(width: f32, height: f32, stroke_width: f32) -> Self {
        let radius = width.min(height) / 2.0 - stroke_width / 2.0;
        Self::around(egui::pos2(width / 2.0, height / 2.0), radius)
    }

    /// Layout for the screen rect the widget was allocated.
    pub fn from_rect(rect: egui::Rect, stroke_width: f32) -> Self {
        let radius = rect.width().min(rect.height()) / 2.0 - stroke_width / 2.0;
        Self::around(rect.center(), radius)
    }

    fn around(center: egui::Pos2, radius: f32) -> Self {
        let bounds = egui::Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0));
        Self {
            center,
            radius,
            bounds,
        }
    }

    /// A collapsed viewport yields a non-positive radius and nothing drawable.
    pub fn is_drawable(&self) -> bool {
        self.radius > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_for_square_viewport() {
        let geometry = RingGeometry::from_viewport(300.0, 300.0, 15.0);

        assert_eq!(geometry.radius, 142.5);
        assert_eq!(geometry.center, egui::pos2(150.0, 150.0));
        assert_eq!(geometry.bounds.min, egui::pos2(7.5, 7.5));
        assert_eq!(geometry.bounds.max, egui::pos2(292.5, 292.5));
        assert!(geometry.is_drawable());
    }

    #[test]
    fn layout_uses_smaller_dimension() {
        let geometry = RingGeometry::from_viewport(400.0, 300.0, 15.0);

        assert_eq!(geometry.radius, 142.5);
        assert_eq!(geometry.center, egui::pos2(200.0, 150.0));
    }

    #[test]
    fn collapsed_viewport_is_not_drawable() {
        assert!(!RingGeometry::from_viewport(0.0, 0.0, 15.0).is_drawable());
        assert!(!RingGeometry::from_viewport(0.0, 300.0, 15.0).is_drawable());
        // Stroke wider than the viewport leaves no room for the ring either
        assert!(!RingGeometry::from_viewport(10.0, 10.0, 15.0).is_drawable());
    }

    #[test]
    fn rect_adapter_matches_viewport_math() {
        let rect = egui::Rect::from_min_size(egui::pos2(50.0, 20.0), egui::vec2(300.0, 300.0));
        let geometry = RingGeometry::from_rect(rect, 15.0);

        assert_eq!(geometry.radius, 142.5);
        assert_eq!(geometry.center, egui::pos2(200.0, 170.0));
    }
}
