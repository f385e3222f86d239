//! Title bar with the ticker search box and the live-data badge.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    core::state::AppState,
    presentation::{
        components::style,
        widgets::{Badge, SearchBox},
    },
};

pub const TITLE: &str = "WorldAware";
pub const SUBTITLE: &str = "Intelligence Room";
const SEARCH_WIDTH: u16 = 44;

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let live = Badge::Live {
            active: state.intel.is_live,
        };
        let [title, search, badge] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(SEARCH_WIDTH),
            Constraint::Length(live.width() + 2),
        ])
        .areas(area);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(style(state, "border"));
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(TITLE, style(state, "title")),
                Span::styled(" · ", style(state, "muted")),
                Span::styled(SUBTITLE, style(state, "muted")),
            ]))
            .block(block.clone()),
            title,
        );

        let search_box = SearchBox::new(&state.ui.search)
            .focused(state.ui.search_focused)
            .loading(state.ui.search_loading)
            .styles(
                style(state, "search"),
                style(state, "search_focused"),
                style(state, "muted"),
            );
        if let Some(position) = search_box.cursor_position(search) {
            frame.set_cursor_position(position);
        }
        frame.render_widget(search_box, search);

        frame.render_widget(
            Paragraph::new(live.span(style(state, live.style_key())))
                .alignment(Alignment::Right)
                .block(block),
            badge,
        );
    }
}
