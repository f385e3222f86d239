//! Key hints and the latest status message.

use ratatui::{prelude::*, widgets::Clear};

use crate::{
    core::state::AppState,
    presentation::{components::style, widgets::StatusBarWidget},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let message = self.message(state);
        let widget = StatusBarWidget::new(&state.config.config.keybindings, message.as_deref())
            .style(style(state, "status_bar"));
        frame.render_widget(widget, area);
    }

    /// Status message, or a loading notice while a fetch is running.
    pub fn message(&self, state: &AppState) -> Option<String> {
        if let Some(message) = &state.system.status_message {
            return Some(message.clone());
        }
        if state.ui.search_loading {
            return Some("Resolving ticker...".to_owned());
        }
        state
            .intel
            .is_loading
            .then(|| format!("Fetching live intel for {}...", state.ticker()))
    }
}
