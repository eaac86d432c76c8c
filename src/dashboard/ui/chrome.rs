use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

use super::DashboardApp;
use super::style;
use crate::dashboard::state::ProbeState;

impl DashboardApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let server_url = self.controller.server_url().to_string();
        let probing = self.controller.ui.server.probe == ProbeState::Checking;
        let banner = self.controller.ui.server.banner.clone();
        let probe_error = self.controller.ui.server.error.clone();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Federation Dashboard")
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.separator();
                    ui.label(RichText::new(server_url).color(palette.text_muted));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Open in browser").clicked() {
                            self.controller.open_server_page();
                        }
                        let refresh_label = if probing { "Checking…" } else { "Refresh" };
                        if ui
                            .add_enabled(!probing, egui::Button::new(refresh_label))
                            .clicked()
                        {
                            self.controller.probe_server_now();
                        }
                        ui.add_space(6.0);
                        if let Some(err) = probe_error {
                            ui.label(RichText::new(err).color(palette.warning));
                        } else if let Some(banner) = banner {
                            ui.label(RichText::new(banner).color(palette.success));
                        }
                    });
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let text = self.controller.ui.status.text.clone();
        let tone = self.controller.ui.status.tone;
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(badge_rect, 0.0, style::status_badge_color(tone));
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::inner_border(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(style::status_badge_label(tone)).color(palette.text_primary),
                    );
                    ui.separator();
                    ui.label(RichText::new(text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
                        ui.label(RichText::new(APP_VERSION).color(palette.text_muted));
                        ui.add_space(6.0);
                    });
                });
            });
    }
}
