//! # Demo App
//!
//! Hosts the stats ring in an eframe window, standing in for the stats
//! screen of a larger application: sample data is assigned at startup,
//! clicking the ring re-assigns it (restarting the fill animation), and a
//! selector picks the fill mode. The mode is fixed per widget instance, so
//! changing it rebuilds the widget; the selection is persisted across runs.

use anyhow::Result;
use eframe::egui;
use log::info;

use stats_ring::ui::components::styling::{self, colors};
use stats_ring::{FillMode, StatsRing, StatsRingConfig};

/// Shares shown by the demo; three quarters of the whole.
const DEMO_SHARES: [f32; 3] = [0.25, 0.25, 0.25];

const RING_SIZE: f32 = 360.0;

const FILL_MODE_KEY: &str = "stats_ring_fill_mode";

pub struct StatsRingDemoApp {
    ring: StatsRing,
    fill_mode: FillMode,
    needs_data: bool,
}

impl StatsRingDemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        styling::setup_demo_style(&cc.egui_ctx);

        // Restore the previously selected fill mode if the host persisted it
        let fill_mode = cc
            .storage
            .and_then(|storage| eframe::get_value::<FillMode>(storage, FILL_MODE_KEY))
            .unwrap_or_default();
        info!("starting stats ring demo with fill mode {:?}", fill_mode);

        Ok(Self {
            ring: build_ring(fill_mode),
            fill_mode,
            needs_data: true,
        })
    }
}

fn build_ring(fill_mode: FillMode) -> StatsRing {
    StatsRing::new(StatsRingConfig {
        segment_colors: [
            Some(colors::SEGMENT_ROSE),
            Some(colors::SEGMENT_TEAL),
            Some(colors::SEGMENT_INDIGO),
            Some(colors::SEGMENT_AMBER),
        ],
        fill_mode,
        ..StatsRingConfig::default()
    })
}

impl eframe::App for StatsRingDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading("Stats Ring");

                let mut selected = self.fill_mode;
                egui::ComboBox::from_label("Fill mode")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for mode in FillMode::ALL {
                            ui.selectable_value(&mut selected, mode, mode.label());
                        }
                    });
                if selected != self.fill_mode {
                    self.fill_mode = selected;
                    self.ring = build_ring(selected);
                    self.needs_data = true;
                }

                // Initial data assignment happens on the first frame, once
                // the frame clock is available to anchor the run
                if self.needs_data {
                    let now = ui.input(|i| i.time);
                    self.ring.set_data(DEMO_SHARES.to_vec(), now);
                    self.needs_data = false;
                }

                ui.add_space(8.0);
                let response = self.ring.show(ui, egui::vec2(RING_SIZE, RING_SIZE));
                if response.clicked() {
                    let now = ui.input(|i| i.time);
                    self.ring.set_data(DEMO_SHARES.to_vec(), now);
                }

                ui.label("Click the ring to replay the animation");
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, FILL_MODE_KEY, &self.fill_mode);
    }
}
