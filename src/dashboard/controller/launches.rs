use tracing::{debug, info, warn};

use super::*;
use crate::config::NonSuccessPolicy;
use crate::training_gateway::{self, LaunchId, LaunchOutcome};

use super::jobs::LaunchJob;

impl DashboardController {
    /// Launch the training workload bound to `trigger_id`.
    ///
    /// The trigger is disabled before the request is dispatched and re-enabled
    /// exactly once when it settles, whatever the outcome. A trigger with a
    /// launch already in flight is left untouched.
    pub fn launch_training(&mut self, trigger_id: &TriggerId) {
        if self.jobs.launch_in_flight(trigger_id) {
            return;
        }
        let Some(trigger) = self.ui.trigger_mut(trigger_id) else {
            warn!("Ignoring launch for unknown trigger {trigger_id}");
            return;
        };
        trigger.disabled = true;
        trigger.last_error = None;
        let label = trigger.label.clone();
        let job = trigger.job.clone();
        let launch_id = LaunchId::new();
        match &job {
            Some(job) => info!(
                "Dispatching training request (launch_id={launch_id}, trigger={trigger_id}, training_type={job})"
            ),
            None => {
                info!("Dispatching training request (launch_id={launch_id}, trigger={trigger_id})")
            }
        }
        self.set_status(format!("Launching {label}…"), StatusTone::Busy);
        self.jobs.begin_launch(LaunchJob {
            launch_id,
            trigger_id: trigger_id.clone(),
            server_url: self.config.server_url.clone(),
            job,
        });
    }

    pub(super) fn apply_launch_outcome(
        &mut self,
        trigger_id: &TriggerId,
        launch_id: LaunchId,
        outcome: LaunchOutcome,
    ) {
        match outcome {
            LaunchOutcome::Started => {
                info!("Training started (launch_id={launch_id}, trigger={trigger_id})");
                let label = self.trigger_label(trigger_id);
                self.ui
                    .activity
                    .record(ActivityKind::Info, format!("Training started: {label}"));
                self.set_status("Training started", StatusTone::Info);
            }
            LaunchOutcome::Rejected { status } => {
                self.apply_launch_rejected(trigger_id, launch_id, status)
            }
        }
    }

    fn apply_launch_rejected(&mut self, trigger_id: &TriggerId, launch_id: LaunchId, status: u16) {
        match self.config.non_success_policy {
            NonSuccessPolicy::Silent => {
                debug!(
                    "Training request settled with status {status} (launch_id={launch_id}, trigger={trigger_id})"
                );
                self.set_status("Ready", StatusTone::Idle);
            }
            NonSuccessPolicy::Error => {
                warn!(
                    "Training request rejected with status {status} (launch_id={launch_id}, trigger={trigger_id})"
                );
                let label = self.trigger_label(trigger_id);
                self.ui.activity.record(
                    ActivityKind::Warning,
                    format!("Training request rejected (HTTP {status}): {label}"),
                );
                self.set_status(
                    format!("Training request rejected (HTTP {status})"),
                    StatusTone::Warning,
                );
            }
        }
    }

    pub(super) fn apply_launch_transport_error(
        &mut self,
        trigger_id: &TriggerId,
        launch_id: LaunchId,
        detail: String,
    ) {
        warn!("Training request failed (launch_id={launch_id}, trigger={trigger_id}): {detail}");
        if let Some(trigger) = self.ui.trigger_mut(trigger_id) {
            trigger.last_error = Some(detail.clone());
        }
        let label = self.trigger_label(trigger_id);
        self.ui.activity.record(
            ActivityKind::Warning,
            format!("Launch failed for {label}: {detail}"),
        );
        self.set_status(format!("Launch failed: {detail}"), StatusTone::Warning);
    }
}

pub(in crate::dashboard::controller) fn run_launch(
    job: &LaunchJob,
) -> Result<LaunchOutcome, String> {
    training_gateway::request_training(&job.server_url, job.job.as_ref())
        .map_err(|err| err.to_string())
}
