use tracing::{info, warn};

use super::*;
use crate::training_gateway;

impl DashboardController {
    /// Probe the coordinator banner once at startup when configured to.
    pub fn maybe_probe_server_on_startup(&mut self) {
        if !self.config.probe_on_startup {
            return;
        }
        if self.ui.server.probe != ProbeState::Idle {
            return;
        }
        self.probe_server_now();
    }

    /// Refresh the coordinator banner regardless of settings.
    pub fn probe_server_now(&mut self) {
        if self.jobs.server_probe_in_progress() {
            return;
        }
        self.ui.server.probe = ProbeState::Checking;
        self.jobs.begin_server_probe(self.config.server_url.clone());
    }

    pub(super) fn apply_server_banner(&mut self, banner: String) {
        info!("Coordinator reachable: {banner}");
        self.ui.server.error = None;
        self.ui.server.banner = Some(banner);
    }

    pub(super) fn apply_server_probe_error(&mut self, err: String) {
        warn!("Coordinator probe failed: {err}");
        self.ui.server.error = Some(err.clone());
        self.ui.activity.record(
            ActivityKind::Warning,
            format!("Coordinator unreachable: {err}"),
        );
        self.set_status("Coordinator unreachable", StatusTone::Warning);
    }
}

pub(in crate::dashboard::controller) fn run_server_probe(
    server_url: &str,
) -> Result<String, String> {
    training_gateway::fetch_server_banner(server_url).map_err(|err| err.to_string())
}
