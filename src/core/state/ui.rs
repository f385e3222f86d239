use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::{history::Resolution, ticker::Ticker},
};

/// Panels of the tabbed area
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Tab {
    #[default]
    #[strum(to_string = "AI Intel")]
    Intel,
    #[strum(to_string = "Situation Room")]
    SituationRoom,
    Perspectives,
    Accuracy,
    Analysis,
}

impl Tab {
    pub fn index(self) -> usize {
        Tab::iter().position(|tab| tab == self).unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Tab::iter().cycle().nth(self.index() + 1).unwrap_or_default()
    }

    pub fn prev(self) -> Self {
        let count = Tab::iter().count();
        Tab::iter()
            .nth((self.index() + count - 1) % count)
            .unwrap_or_default()
    }
}

/// Single-line search buffer. `cursor` counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchInput {
    pub content: String,
    pub cursor: usize,
}

impl SearchInput {
    pub fn new(content: impl Into<String>, cursor: usize) -> Self {
        Self {
            content: content.into(),
            cursor,
        }
    }

    /// Normalized ticker, or `None` when the buffer is blank.
    pub fn ticker(&self) -> Option<Ticker> {
        Ticker::parse(&self.content)
    }

    /// Insert `text` at the cursor, dropping line breaks.
    pub fn insert_str(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        let byte_idx = self
            .content
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.content.len());
        self.content.insert_str(byte_idx, &text);
        self.cursor += text.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub active_tab: Tab,
    pub search: SearchInput,
    pub search_focused: bool,
    /// A submitted search is waiting for its delayed ticker change.
    pub search_loading: bool,
    pub resolution: Resolution,
}

impl UiState {
    pub fn is_searching(&self) -> bool {
        self.search_focused
    }

    /// UI-specific update function
    /// Search submission and key editing need config and the textarea engine,
    /// so they are resolved by the coordinator in `update`.
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::SelectTab(tab) => {
                self.active_tab = tab;
                vec![]
            }
            UiMsg::NextTab => {
                self.active_tab = self.active_tab.next();
                vec![]
            }
            UiMsg::PrevTab => {
                self.active_tab = self.active_tab.prev();
                vec![]
            }
            UiMsg::FocusSearch => {
                self.search_focused = true;
                vec![]
            }
            UiMsg::CancelSearch => {
                self.search_focused = false;
                self.search.clear();
                vec![]
            }
            UiMsg::PasteSearch(text) => {
                if self.search_focused {
                    self.search.insert_str(&text);
                }
                vec![]
            }
            UiMsg::CycleResolution => {
                self.resolution = self.resolution.next();
                vec![]
            }
            UiMsg::ProcessSearchInput(_) | UiMsg::SubmitSearch => vec![],
        }
    }

    /// Mark a submitted search as pending and leave the input.
    pub fn begin_search(&mut self) {
        self.search_loading = true;
        self.search_focused = false;
    }

    /// The delayed ticker change has landed.
    pub fn finish_search(&mut self) {
        self.search_loading = false;
        self.search.clear();
    }
}
