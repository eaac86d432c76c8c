use std::{
    collections::BTreeSet,
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};

use crate::dashboard::state::TriggerId;
use crate::training_gateway::{JobType, LaunchId, LaunchOutcome};

pub(crate) enum JobMessage {
    TrainingLaunched(LaunchSettled),
    ServerProbed(ServerProbeResult),
}

/// Worker input for one training launch.
#[derive(Debug)]
pub(crate) struct LaunchJob {
    pub(crate) launch_id: LaunchId,
    pub(crate) trigger_id: TriggerId,
    pub(crate) server_url: String,
    pub(crate) job: Option<JobType>,
}

/// Settlement of one training launch.
#[derive(Debug)]
pub(crate) struct LaunchSettled {
    pub(crate) launch_id: LaunchId,
    pub(crate) trigger_id: TriggerId,
    pub(crate) result: Result<LaunchOutcome, String>,
}

#[derive(Debug)]
pub(crate) struct ServerProbeResult {
    pub(crate) result: Result<String, String>,
}

/// Background-job registry: one message channel, one worker thread per job.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    launches_in_flight: BTreeSet<TriggerId>,
    server_probe_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            launches_in_flight: BTreeSet::new(),
            server_probe_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn launch_in_flight(&self, trigger_id: &TriggerId) -> bool {
        self.launches_in_flight.contains(trigger_id)
    }

    /// Spawn the worker for one launch; refuses re-entry per trigger.
    pub(super) fn begin_launch(&mut self, job: LaunchJob) {
        if self.launches_in_flight.contains(&job.trigger_id) {
            return;
        }
        self.launches_in_flight.insert(job.trigger_id.clone());
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = super::launches::run_launch(&job);
            let _ = tx.send(JobMessage::TrainingLaunched(LaunchSettled {
                launch_id: job.launch_id,
                trigger_id: job.trigger_id,
                result,
            }));
        });
    }

    pub(super) fn clear_launch(&mut self, trigger_id: &TriggerId) {
        self.launches_in_flight.remove(trigger_id);
    }

    pub(super) fn server_probe_in_progress(&self) -> bool {
        self.server_probe_in_progress
    }

    pub(super) fn begin_server_probe(&mut self, server_url: String) {
        if self.server_probe_in_progress {
            return;
        }
        self.server_probe_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = super::server_probe::run_server_probe(&server_url);
            let _ = tx.send(JobMessage::ServerProbed(ServerProbeResult { result }));
        });
    }

    pub(super) fn clear_server_probe(&mut self) {
        self.server_probe_in_progress = false;
    }
}
