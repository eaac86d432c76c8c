use eframe::egui::{self, RichText};
use time::{format_description::FormatItem, macros::format_description};

use super::DashboardApp;
use super::style;
use crate::dashboard::state::ActivityKind;

const STAMP_FORMAT: &[FormatItem<'_>] = format_description!("[hour]:[minute]:[second]");

impl DashboardApp {
    pub(super) fn render_activity_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(
            RichText::new("Activity")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(6.0);
        if self.controller.ui.activity.entries().is_empty() {
            ui.label(RichText::new("No events yet").color(palette.text_muted));
            return;
        }
        egui::ScrollArea::vertical()
            .id_salt("activity_scroll")
            .show(ui, |ui| {
                for entry in self.controller.ui.activity.entries() {
                    let stamp = entry.at.format(STAMP_FORMAT).unwrap_or_default();
                    let color = match entry.kind {
                        ActivityKind::Info => palette.success,
                        ActivityKind::Warning => palette.warning,
                    };
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(stamp).color(palette.text_muted).monospace());
                        ui.label(RichText::new(&entry.text).color(color));
                    });
                    ui.add_space(2.0);
                }
            });
    }
}
