use eframe::egui::{self, RichText};

use super::DashboardApp;
use super::style;

impl DashboardApp {
    pub(super) fn render_launch_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(
            RichText::new("Training runs")
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(6.0);
        let triggers = self.controller.ui.triggers.clone();
        egui::ScrollArea::vertical()
            .id_salt("launch_scroll")
            .show(ui, |ui| {
                for trigger in &triggers {
                    ui.push_id(trigger.id.as_str(), |ui| {
                        ui.horizontal(|ui| {
                            let button = egui::Button::new(
                                RichText::new(&trigger.label).color(palette.text_primary),
                            )
                            .min_size(egui::vec2(220.0, 28.0));
                            if ui.add_enabled(!trigger.disabled, button).clicked() {
                                self.controller.launch_training(&trigger.id);
                            }
                            if trigger.disabled {
                                ui.label(RichText::new("Launching…").color(palette.text_muted));
                            } else if let Some(job) = &trigger.job {
                                ui.label(RichText::new(job.as_str()).color(palette.text_muted));
                            }
                        });
                        if let Some(error) = &trigger.last_error {
                            ui.label(RichText::new(error).color(palette.warning));
                        }
                        ui.add_space(4.0);
                    });
                }
            });
    }
}
