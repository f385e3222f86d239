use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    core::state::AppState,
    domain::text::ellipsize,
    presentation::{
        components::{badge_title, panel, render_placeholder, style},
        widgets::Badge,
    },
};

pub const TITLE: &str = "Market Intelligence Summary";
pub const LOADING: &str = "Scanning financial nodes...";
pub const CITATIONS_TITLE: &str = "Grounding Citations";

/// Model summary and the citations it was grounded on.
#[derive(Debug, Clone, Default)]
pub struct IntelTab;

impl IntelTab {
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

        let citations = state.intel.visible_citations();
        let citation_rows = if citations.is_empty() {
            0
        } else {
            u16::try_from(citations.len() + 2).unwrap_or(u16::MAX)
        };
        let [summary, sources] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(citation_rows)]).areas(inner);

        frame.render_widget(
            Paragraph::new(state.intel.summary.as_str()).wrap(Wrap { trim: false }),
            summary,
        );

        if citations.is_empty() {
            return;
        }
        let width = usize::from(sources.width);
        let mut lines = vec![
            Line::default(),
            Line::styled(CITATIONS_TITLE.to_uppercase(), style(state, "muted").bold()),
        ];
        lines.extend(citations.iter().map(|citation| {
            let title = ellipsize(&citation.title, width.saturating_sub(2) / 2);
            let uri_width = width.saturating_sub(title.chars().count() + 3);
            Line::from(vec![
                Span::styled("› ", style(state, "accent")),
                Span::raw(title),
                Span::raw(" "),
                Span::styled(ellipsize(&citation.uri, uri_width), style(state, "muted")),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), sources);
    }
}
