//! Component collection
//!
//! Components are stateless renderers that receive `AppState` during render.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{core::state::AppState, presentation::widgets::Badge};

pub mod header;
pub mod market;
pub mod status_bar;
pub mod tabs;

pub use header::HeaderComponent;
pub use market::MarketComponent;
pub use status_bar::StatusBarComponent;
pub use tabs::TabsComponent;

/// Width of the left column
const MARKET_WIDTH: u16 = 40;

/// Style registered under `key` in the user config.
pub(crate) fn style(state: &AppState, key: &str) -> Style {
    state.config.config.styles.get_or_default(key)
}

/// Rounded panel with a bold title.
pub(crate) fn panel<'a>(state: &AppState, title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style(state, "border"))
        .title(title.into().style(style(state, "title")))
}

/// Badge drawn right-aligned in a panel's top border.
pub(crate) fn badge_title(state: &AppState, badge: Badge) -> Line<'static> {
    Line::from(badge.span(style(state, badge.style_key()))).right_aligned()
}

/// Centered one-line message used for loading and empty states.
pub(crate) fn render_placeholder(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(message.to_owned(), style)).alignment(Alignment::Center),
        middle,
    );
}

/// Collection of all components
pub struct Components {
    pub header: HeaderComponent,
    pub market: MarketComponent,
    pub tabs: TabsComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            header: HeaderComponent::new(),
            market: MarketComponent::new(),
            tabs: TabsComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Main rendering entry point
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(frame.area());

        self.header.view(state, frame, header);

        let [left, right] =
            Layout::horizontal([Constraint::Length(MARKET_WIDTH), Constraint::Min(0)]).areas(body);
        self.market.view(state, frame, left);
        self.tabs.view(state, frame, right);

        self.status_bar.view(state, frame, status);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
