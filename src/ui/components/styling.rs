//! # Styling Module
//!
//! Color constants for the stats ring and its demo window, plus the global
//! style setup applied at startup. Centralizing the palette here keeps the
//! widget chrome and the demo's configured segment colors in one place.

use eframe::egui;

/// Configure the demo window's base style.
pub fn setup_demo_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.spacing.item_spacing = egui::vec2(8.0, 12.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Color constants for the stats ring theme
pub mod colors {
    use eframe::egui::Color32;

    // Widget chrome
    pub const RING_TRACK: Color32 = Color32::from_rgb(211, 211, 211); // Light gray track
    pub const RING_LABEL: Color32 = Color32::from_rgb(60, 60, 60);    // Percentage label

    // Segment palette passed by the demo as its configured colors
    pub const SEGMENT_ROSE: Color32 = Color32::from_rgb(229, 115, 115);
    pub const SEGMENT_TEAL: Color32 = Color32::from_rgb(77, 182, 172);
    pub const SEGMENT_INDIGO: Color32 = Color32::from_rgb(121, 134, 203);
    pub const SEGMENT_AMBER: Color32 = Color32::from_rgb(255, 183, 77);
}
