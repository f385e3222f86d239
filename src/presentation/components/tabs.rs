//! Tabbed panel on the right-hand side.

use ratatui::prelude::*;

use crate::{
    core::state::{ui::Tab, AppState},
    presentation::{components::style, widgets::TabBarWidget},
};

pub mod accuracy;
pub mod analysis;
pub mod intel;
pub mod perspectives;
pub mod situation_room;

pub use accuracy::AccuracyTab;
pub use analysis::AnalysisTab;
pub use intel::IntelTab;
pub use perspectives::PerspectivesTab;
pub use situation_room::SituationRoomTab;

#[derive(Debug, Clone, Default)]
pub struct TabsComponent {
    intel: IntelTab,
    situation_room: SituationRoomTab,
    perspectives: PerspectivesTab,
    accuracy: AccuracyTab,
    analysis: AnalysisTab,
}

impl TabsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [bar, content] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        frame.render_widget(
            TabBarWidget::new(state.ui.active_tab)
                .styles(style(state, "tab_inactive"), style(state, "tab_active")),
            bar,
        );

        match state.ui.active_tab {
            Tab::Intel => self.intel.view(state, frame, content),
            Tab::SituationRoom => self.situation_room.view(state, frame, content),
            Tab::Perspectives => self.perspectives.view(state, frame, content),
            Tab::Accuracy => self.accuracy.view(state, frame, content),
            Tab::Analysis => self.analysis.view(state, frame, content),
        }
    }
}
