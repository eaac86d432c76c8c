//! UI state owned by the dashboard controller.
//!
//! Everything the renderer reads lives here; mutation happens on the UI
//! thread only, either from user actions or from drained job messages.

mod activity;
mod server;
mod status;
mod triggers;

pub use activity::{ActivityEntry, ActivityFeed, ActivityKind};
pub use server::{ProbeState, ServerUiState};
pub use status::{StatusBarState, StatusTone};
pub use triggers::{TriggerId, TriggerUiState};

/// Aggregated state rendered by the dashboard each frame.
#[derive(Debug, Default)]
pub struct UiState {
    /// One entry per configured trigger, in declared order.
    pub triggers: Vec<TriggerUiState>,
    /// Coordinator banner probe state.
    pub server: ServerUiState,
    /// Recent launch and probe events, newest first.
    pub activity: ActivityFeed,
    /// Bottom status bar.
    pub status: StatusBarState,
}

impl UiState {
    /// Find a trigger by id.
    pub fn trigger(&self, id: &TriggerId) -> Option<&TriggerUiState> {
        self.triggers.iter().find(|trigger| trigger.id == *id)
    }

    pub(crate) fn trigger_mut(&mut self, id: &TriggerId) -> Option<&mut TriggerUiState> {
        self.triggers.iter_mut().find(|trigger| trigger.id == *id)
    }
}
