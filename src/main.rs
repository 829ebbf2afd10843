use eframe::egui;
use log::{error, info};

mod domain;
mod ui;

use domain::device;
use ui::app_state::DaysCounterApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Days Counter egui application");

    // Device class is detected exactly once, before the app exists, and
    // injected into it. The identity string never changes mid-session.
    let identity = device::runtime_identity();
    let device_class = device::classify(&identity);
    info!(
        "📱 Device identity \"{}\" classified as {:?}",
        identity, device_class
    );

    // Create window options sized for a single compact form
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 520.0]) // Two pickers, count line, reset button
            .with_min_inner_size([360.0, 400.0]) // Minimum usable size
            .with_title("Days counter v2")
            .with_resizable(true),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        "Days counter v2",
        options,
        Box::new(move |cc| {
            // Initialize the app
            match DaysCounterApp::new(cc, device_class) {
                Ok(app) => {
                    info!("Successfully initialized Days Counter app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
