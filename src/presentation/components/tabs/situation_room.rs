use std::str::FromStr;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Sparkline},
};

use crate::{
    core::state::AppState,
    domain::{
        bands::Outlook,
        intel::{FeedKind, IntelFeedItem},
        situation::SituationalMetric,
        text::ellipsize,
    },
    presentation::components::{panel, render_placeholder, style},
};

pub const EMPTY_FEED: &str = "Decrypting signals...";
pub const LEDGER_TITLE: &str = "Tactical Event Ledger";
const METRIC_HEIGHT: u16 = 4;
const FEED_HEIGHT: u16 = 3;
const HORIZON_WIDTH: u16 = 10;
const SPARKLINE_WIDTH: u16 = 9;
const HORIZONS: [&str; 3] = ["7 Days", "30 Days", "1 Year"];

pub fn loading_message(ticker: &str) -> String {
    format!("Synthesizing Tactical Intelligence for {ticker}...")
}

pub fn outlook_style_key(outlook: Outlook) -> &'static str {
    match outlook {
        Outlook::Bullish => "positive",
        Outlook::NeutralUp => "accent",
        Outlook::NeutralDown => "warning",
        Outlook::Bearish => "negative",
    }
}

/// Simulated indicator grid above the live tactical event ledger.
#[derive(Debug, Clone, Default)]
pub struct SituationRoomTab;

impl SituationRoomTab {
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let title = format!(" SITUATION ROOM: {} ", state.ticker());
        let block = panel(state, title).title_top(
            Line::styled("● Live Tactical Stream Active ", style(state, "live")).right_aligned(),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.intel.is_loading {
            render_placeholder(
                frame,
                inner,
                &loading_message(state.ticker().as_str()),
                style(state, "muted"),
            );
            return;
        }

        let metric_rows = u16::try_from(state.market.metrics.len().div_ceil(2)).unwrap_or(0);
        let [grid, ledger] = Layout::vertical([
            Constraint::Length(metric_rows * METRIC_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(inner);

        self.render_metrics(state, frame, grid);
        self.render_ledger(state, frame, ledger);
    }

    fn render_metrics(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let rows = state.market.metrics.chunks(2);
        let row_areas =
            Layout::vertical(rows.clone().map(|_| Constraint::Length(METRIC_HEIGHT))).split(area);
        for (pair, row_area) in rows.zip(row_areas.iter()) {
            let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .spacing(1)
                .split(*row_area);
            for (metric, cell) in pair.iter().zip(columns.iter()) {
                self.render_metric(state, metric, frame, *cell);
            }
        }
    }

    fn render_metric(
        &self,
        state: &AppState,
        metric: &SituationalMetric,
        frame: &mut Frame,
        area: Rect,
    ) {
        let color = Color::from_str(&metric.color).unwrap_or(Color::Gray);
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_row, subtitle_row, impact_row, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let headline = Span::styled(metric.headline().to_owned(), Style::default().fg(color).bold());
        let title_width = usize::from(inner.width).saturating_sub(headline.width() + 3);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", metric.icon), Style::default().fg(color)),
                Span::styled(ellipsize(&metric.title, title_width), style(state, "title")),
            ])),
            title_row,
        );
        frame.render_widget(Paragraph::new(headline).alignment(Alignment::Right), title_row);

        let [subtitle, sparkline] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(SPARKLINE_WIDTH)])
                .areas(subtitle_row);
        frame.render_widget(
            Paragraph::new(Span::styled(
                ellipsize(&metric.subtitle.to_uppercase(), usize::from(subtitle.width)),
                style(state, "muted"),
            )),
            subtitle,
        );
        let trend = metric.normalized_trend(8);
        frame.render_widget(
            Sparkline::default()
                .data(&trend)
                .max(8)
                .style(Style::default().fg(color)),
            sparkline,
        );

        let label = "IMPACT: ";
        let impact_width = usize::from(impact_row.width).saturating_sub(label.len());
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(label, style(state, "muted").bold()),
                Span::styled(
                    ellipsize(&metric.impact, impact_width),
                    style(state, "muted").italic(),
                ),
            ])),
            impact_row,
        );
    }

    fn render_ledger(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [header, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(style(state, "border"));
        let header_inner = block.inner(header);
        frame.render_widget(block, header);
        let [title, horizons] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(HORIZON_WIDTH * 3),
        ])
        .areas(header_inner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                LEDGER_TITLE.to_uppercase(),
                style(state, "muted").bold(),
            )),
            title,
        );
        let labels: String = HORIZONS
            .iter()
            .map(|h| format!("{h:^width$}", width = usize::from(HORIZON_WIDTH)))
            .collect();
        frame.render_widget(
            Paragraph::new(Span::styled(labels, style(state, "muted"))),
            horizons,
        );

        if state.intel.feed.is_empty() {
            render_placeholder(frame, body, EMPTY_FEED, style(state, "muted").bold());
            return;
        }

        let row_areas = Layout::vertical(
            state
                .intel
                .feed
                .iter()
                .map(|_| Constraint::Length(FEED_HEIGHT)),
        )
        .split(body);
        for (item, row) in state.intel.feed.iter().zip(row_areas.iter()) {
            self.render_feed_item(state, item, frame, *row);
        }
    }

    fn render_feed_item(
        &self,
        state: &AppState,
        item: &IntelFeedItem,
        frame: &mut Frame,
        area: Rect,
    ) {
        let [details, horizons] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(HORIZON_WIDTH * 3),
        ])
        .areas(area);

        let category_style = if item.kind == FeedKind::Intel {
            style(state, "positive")
        } else {
            style(state, "neutral")
        };
        let mut heading = vec![
            Span::styled(format!("[{}]", item.category), category_style.bold()),
            Span::styled(format!(" {} ", item.time), style(state, "muted")),
        ];
        if let Some(current) = &item.current_price {
            heading.push(Span::styled(current.clone(), style(state, "neutral")));
            heading.push(Span::styled(" → ", style(state, "muted")));
            heading.push(Span::styled(
                item.target_price.clone().unwrap_or_default(),
                style(state, "accent").bold(),
            ));
        }
        let text = ellipsize(&item.text, usize::from(details.width.saturating_sub(1)));
        frame.render_widget(
            Paragraph::new(vec![Line::from(heading), Line::from(text)]),
            details,
        );

        let cells = Layout::horizontal([Constraint::Length(HORIZON_WIDTH); 3]).split(horizons);
        let probs = [
            item.short_term_prob,
            item.medium_term_prob,
            item.long_term_prob,
        ];
        for (prob, cell) in probs.into_iter().zip(cells.iter()) {
            let outlook = Outlook::classify(prob);
            let cell_style = style(state, outlook_style_key(outlook));
            frame.render_widget(
                Paragraph::new(vec![
                    Line::styled(format!("{prob}%"), cell_style.bold()),
                    Line::styled(outlook.to_string().to_uppercase(), cell_style),
                ])
                .alignment(Alignment::Center),
                *cell,
            );
        }
    }
}
