//! Per-trigger launch state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::training_gateway::JobType;

/// Stable identifier naming one launch trigger, as declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(String);

impl TriggerId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render state for one launch trigger.
#[derive(Debug, Clone)]
pub struct TriggerUiState {
    pub id: TriggerId,
    pub label: String,
    /// Workload sent with the launch; `None` dispatches a bare request.
    pub job: Option<JobType>,
    /// `true` from dispatch until the request settles.
    pub disabled: bool,
    /// Detail of the most recent transport failure, cleared on the next dispatch.
    pub last_error: Option<String>,
}

impl TriggerUiState {
    pub fn new(id: TriggerId, label: impl Into<String>, job: Option<JobType>) -> Self {
        Self {
            id,
            label: label.into(),
            job,
            disabled: false,
            last_error: None,
        }
    }
}
