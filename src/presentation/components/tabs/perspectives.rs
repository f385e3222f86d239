use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    core::state::AppState,
    domain::{
        intel::{NewsSourceItem, Sentiment},
        text::ellipsize,
    },
    presentation::{
        components::{badge_title, panel, render_placeholder, style},
        widgets::{Badge, ShrinkText},
    },
};

pub const TITLE: &str = "Outlet Perspective Breakdown";
pub const LOADING: &str = "Parsing global headlines...";
pub const EMPTY: &str = "No specific outlet breakdown available yet.";
const CARD_HEIGHT: u16 = 5;

pub fn sentiment_style_key(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "positive",
        Sentiment::Neutral => "neutral",
        Sentiment::Negative => "negative",
    }
}

/// Per-outlet sentiment cards, two per row.
#[derive(Debug, Clone, Default)]
pub struct PerspectivesTab;

impl PerspectivesTab {
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = panel(state, format!(" {TITLE} ")).title_top(badge_title(
            state,
            Badge::Live {
                active: state.intel.is_live,
            },
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.intel.is_loading {
            render_placeholder(frame, inner, LOADING, style(state, "muted"));
            return;
        }
        if state.intel.sources.is_empty() {
            render_placeholder(frame, inner, EMPTY, style(state, "muted").italic());
            return;
        }

        let rows = state.intel.sources.chunks(2);
        let row_areas = Layout::vertical(rows.clone().map(|_| Constraint::Length(CARD_HEIGHT)))
            .split(inner);
        for (pair, row_area) in rows.zip(row_areas.iter()) {
            let columns =
                Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                    .split(*row_area);
            for (source, card) in pair.iter().zip(columns.iter()) {
                self.render_card(state, source, frame, *card);
            }
        }
    }

    fn render_card(&self, state: &AppState, source: &NewsSourceItem, frame: &mut Frame, area: Rect) {
        let sentiment = Span::styled(
            source.sentiment.to_string().to_uppercase(),
            style(state, sentiment_style_key(source.sentiment)).bold(),
        );
        let name_width = usize::from(area.width).saturating_sub(sentiment.width() + 6);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style(state, "border"))
            .title(Line::from(vec![
                Span::styled(format!(" {} ", source.icon.glyph()), style(state, "accent")),
                Span::styled(ellipsize(&source.name, name_width), style(state, "title")),
                Span::raw(" "),
            ]))
            .title_top(Line::from(vec![sentiment, Span::raw(" ")]).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let quoted = format!("\"{}\"", source.summary);
        let text = ShrinkText::new(
            quoted,
            usize::from(inner.width),
            usize::from(inner.height),
        );
        frame.render_widget(
            Paragraph::new(Text::from(text)).style(style(state, "muted").italic()),
            inner,
        );
    }
}
