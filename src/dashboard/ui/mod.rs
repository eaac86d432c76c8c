//! egui renderer for the dashboard UI.

mod activity_panel;
mod chrome;
mod launch_panel;
mod style;

use eframe::egui;

use crate::dashboard::controller::DashboardController;

/// Smallest window size that keeps all panels usable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(760.0, 420.0);

/// Renders the egui UI using the shared controller state.
pub struct DashboardApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl DashboardApp {
    /// Wrap a prepared controller and queue the startup banner probe.
    pub fn new(mut controller: DashboardController) -> Self {
        controller.maybe_probe_server_on_startup();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_panels(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::SidePanel::right("activity")
            .resizable(true)
            .default_width(260.0)
            .min_width(220.0)
            .max_width(420.0)
            .show(ctx, |ui| self.render_activity_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.render_launch_panel(ui));
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.tick();
        self.render_panels(ctx);
        ctx.request_repaint();
    }
}
