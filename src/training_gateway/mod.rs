//! Wire gateway for the federated-learning coordinator.
//!
//! One POST starts a training round; a GET against the coordinator root
//! fetches its human-readable status banner. Nothing here retries and nothing
//! inspects response bodies on the launch path; a received status is an
//! outcome, a failure to reach the coordinator is an error.

mod api;

pub use api::{fetch_server_banner, request_training};

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Server-defined token naming a training workload (e.g. `MNIST`,
/// `CHEST_X_RAY_PNEUMONIA`).
///
/// The coordinator owns the value set and new workloads appear without client
/// changes, so this is a validated string rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobType(String);

impl JobType {
    /// Wrap a workload token verbatim.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The token as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Rejection for blank workload tokens in configuration.
#[derive(Debug, Error)]
#[error("Training type may not be empty")]
pub struct EmptyJobType;

impl TryFrom<String> for JobType {
    type Error = EmptyJobType;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if raw.trim().is_empty() {
            return Err(EmptyJobType);
        }
        Ok(Self(raw))
    }
}

impl From<JobType> for String {
    fn from(job: JobType) -> Self {
        job.0
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Correlation id minted once per dispatched launch.
///
/// Ties the dispatch and settlement log events of one request together; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchId(Uuid);

impl LaunchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LaunchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LaunchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Terminal outcome of a training request the coordinator answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The coordinator acknowledged the launch with HTTP 200.
    Started,
    /// The coordinator answered with a status other than 200.
    Rejected { status: u16 },
}

/// Errors raised while talking to the coordinator.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request body could not be encoded.
    #[error("Failed to encode training request: {0}")]
    Encode(#[from] serde_json::Error),
    /// The coordinator could not be reached.
    #[error("Network error: {0}")]
    Transport(String),
    /// The banner endpoint answered with an unexpected status.
    #[error("Coordinator answered with status {status}")]
    UnexpectedStatus { status: u16 },
    /// The banner body could not be read.
    #[error("Failed to read coordinator response: {0}")]
    Read(#[from] std::io::Error),
}
