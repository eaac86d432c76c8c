//! Bottom status bar state.

/// Tone used to pick the status badge label and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

/// Message and tone shown in the bottom status bar.
#[derive(Debug)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            text: "Ready".to_string(),
            tone: StatusTone::Idle,
        }
    }
}

impl StatusBarState {
    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.text = text.into();
        self.tone = tone;
    }
}
