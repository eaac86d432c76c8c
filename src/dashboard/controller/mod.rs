//! Dashboard controller: owns UI state and coordinates background jobs.

mod background_jobs;
mod jobs;
mod launches;
mod server_probe;
#[cfg(test)]
mod tests;

use crate::config::DashboardConfig;
use crate::dashboard::state::*;

use jobs::ControllerJobs;

/// Maintains dashboard state and bridges launch actions to the egui UI.
pub struct DashboardController {
    pub ui: UiState,
    config: DashboardConfig,
    jobs: ControllerJobs,
}

impl DashboardController {
    /// Build a controller from validated configuration.
    pub fn new(config: DashboardConfig) -> Self {
        let triggers = config
            .triggers
            .iter()
            .map(|spec| {
                TriggerUiState::new(
                    spec.id.clone(),
                    spec.label.clone(),
                    spec.training_type.clone(),
                )
            })
            .collect();
        Self {
            ui: UiState {
                triggers,
                ..UiState::default()
            },
            config,
            jobs: ControllerJobs::new(),
        }
    }

    /// Per-frame upkeep: fold settled background jobs into UI state.
    pub fn tick(&mut self) {
        self.poll_background_jobs();
    }

    /// Base URL of the coordinator this dashboard talks to.
    pub fn server_url(&self) -> &str {
        &self.config.server_url
    }

    /// Open the coordinator page in the OS browser.
    pub fn open_server_page(&mut self) {
        if let Err(err) = open::that(&self.config.server_url) {
            self.set_status(
                format!("Could not open coordinator page: {err}"),
                StatusTone::Error,
            );
        }
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }

    fn trigger_label(&self, trigger_id: &TriggerId) -> String {
        self.ui
            .trigger(trigger_id)
            .map(|trigger| trigger.label.clone())
            .unwrap_or_else(|| trigger_id.to_string())
    }
}
