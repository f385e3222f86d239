use serde::{Deserialize, Serialize};

/// Process and status-line messages handled by `SystemState`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    /// Leave the terminal and stop the process until it is resumed.
    Suspend,
    Resume,
    Resize(u16, u16),

    /// Replace the status line text, e.g. "Analyzing TSLA...".
    SetStatus(String),
    ClearStatus,
    /// Show an error on the status line and log it.
    ShowError(String),
}

impl SystemMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Resize(..))
    }
}
