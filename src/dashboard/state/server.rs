//! Coordinator banner probe state.

/// Progress of the banner probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeState {
    #[default]
    Idle,
    Checking,
}

/// What the dashboard currently knows about the coordinator.
#[derive(Debug, Default)]
pub struct ServerUiState {
    pub probe: ProbeState,
    /// Last banner text received from the coordinator root.
    pub banner: Option<String>,
    /// Last probe failure, cleared when a probe succeeds.
    pub error: Option<String>,
}
