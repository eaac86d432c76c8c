use std::sync::mpsc::TryRecvError;

use super::jobs::{JobMessage, LaunchSettled, ServerProbeResult};
use super::*;

impl DashboardController {
    pub(in crate::dashboard::controller) fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::TrainingLaunched(message) => handle_training_launched(self, message),
                JobMessage::ServerProbed(message) => handle_server_probed(self, message),
            }
        }
    }
}

fn handle_training_launched(controller: &mut DashboardController, message: LaunchSettled) {
    // Clear the in-flight entry and re-enable before branching; every
    // settlement path passes through here exactly once.
    controller.jobs.clear_launch(&message.trigger_id);
    if let Some(trigger) = controller.ui.trigger_mut(&message.trigger_id) {
        trigger.disabled = false;
    }
    match message.result {
        Ok(outcome) => {
            controller.apply_launch_outcome(&message.trigger_id, message.launch_id, outcome)
        }
        Err(detail) => {
            controller.apply_launch_transport_error(&message.trigger_id, message.launch_id, detail)
        }
    }
}

fn handle_server_probed(controller: &mut DashboardController, message: ServerProbeResult) {
    controller.jobs.clear_server_probe();
    controller.ui.server.probe = ProbeState::Idle;
    match message.result {
        Ok(banner) => controller.apply_server_banner(banner),
        Err(err) => controller.apply_server_probe_error(err),
    }
}
