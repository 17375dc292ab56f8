use eframe::egui;
use log::{error, info};

mod api;
mod ui;

use ui::app_state::SchedulerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Appointment Scheduler egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0]) // Good size for calendar + dashboard
            .with_min_inner_size([800.0, 600.0]) // Minimum usable size
            .with_title("Appointment Scheduler")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Appointment Scheduler",
        options,
        Box::new(|cc| {
            // Enable persistence for window state
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            match SchedulerApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Appointment Scheduler app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
