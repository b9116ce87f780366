use eframe::egui;
use log::{error, info};

mod app;

use app::StatsRingDemoApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting stats ring demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([360.0, 460.0])
            .with_title("Stats Ring")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Stats Ring",
        options,
        Box::new(|cc| match StatsRingDemoApp::new(cc) {
            Ok(app) => Ok(Box::new(app)),
            Err(e) => {
                error!("Failed to initialize demo: {}", e);
                Err(format!("Failed to initialize demo: {}", e).into())
            }
        }),
    )
}
