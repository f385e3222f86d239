use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::core::state::ui::SearchInput;

pub const PLACEHOLDER: &str = "Analyze Ticker (e.g. NVDA, TSLA)...";
const SPINNER: &str = "~ ";
const PROMPT: &str = "> ";

/// Ticker search input shown in the header
#[derive(Debug, Clone)]
pub struct SearchBox<'a> {
    input: &'a SearchInput,
    focused: bool,
    loading: bool,
    style: Style,
    focused_style: Style,
    muted: Style,
}

impl<'a> SearchBox<'a> {
    pub fn new(input: &'a SearchInput) -> Self {
        Self {
            input,
            focused: false,
            loading: false,
            style: Style::default(),
            focused_style: Style::default(),
            muted: Style::default(),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn styles(mut self, style: Style, focused_style: Style, muted: Style) -> Self {
        self.style = style;
        self.focused_style = focused_style;
        self.muted = muted;
        self
    }

    fn prefix(&self) -> &'static str {
        if self.loading {
            SPINNER
        } else {
            PROMPT
        }
    }

    /// Terminal cursor for the inner `area`, or `None` when unfocused.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let before: String = self.input.content.chars().take(self.input.cursor).collect();
        let offset = self.prefix().width() + before.width();
        let x = inner
            .x
            .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
            .min(inner.right().saturating_sub(1));
        Some(Position::new(x, inner.y))
    }
}

impl<'a> Widget for SearchBox<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = if self.focused {
            self.focused_style
        } else {
            self.style
        };
        let content = if self.input.content.is_empty() && !self.focused {
            Span::styled(PLACEHOLDER, self.muted)
        } else {
            Span::raw(self.input.content.to_uppercase())
        };

        Paragraph::new(Line::from(vec![
            Span::styled(self.prefix(), self.muted),
            content,
        ]))
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .render(area, buf);
    }
}
