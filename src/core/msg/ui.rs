use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::state::ui::Tab;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    SelectTab(Tab),
    NextTab,
    PrevTab,

    FocusSearch,
    CancelSearch,
    /// Editing keys for the search box, applied through the textarea engine.
    ProcessSearchInput(KeyEvent),
    PasteSearch(String),
    SubmitSearch,

    CycleResolution,
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, UiMsg::ProcessSearchInput(_))
    }
}
