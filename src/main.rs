#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based federation dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use fedboard::config;
use fedboard::dashboard::ui::MIN_VIEWPORT_SIZE;
use fedboard::dashboard::{DashboardApp, DashboardController};
use fedboard::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::Vec2::new(920.0, 560.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Fedboard",
        native_options,
        Box::new(move |_cc| match build_app() {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => Ok(Box::new(StartupError { message: err })),
        }),
    )?;
    Ok(())
}

fn build_app() -> Result<DashboardApp, String> {
    let config =
        config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
    Ok(DashboardApp::new(DashboardController::new(config)))
}

/// Minimal fallback app to display initialization errors.
struct StartupError {
    message: String,
}

impl eframe::App for StartupError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start dashboard");
                ui.label(&self.message);
            });
        });
    }
}
