//! Left column: ticker heading, sentiment gauge and the signal waterfall.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::AppState,
    domain::text::ellipsize,
    presentation::{
        components::{panel, style},
        widgets::{
            probability_gauge::band_style_key, Badge, BadgeWidget, ProbabilityGauge,
            SignalWaterfall,
        },
    },
};

pub const GAUGE_CAPTION: &str = "Live Sentiment Score";
pub const GAUGE_NOTE: &str = "Synthesized via real-time global news streams.";
pub const SIGNALS_TITLE: &str = "Signal Components";

#[derive(Debug, Clone, Default)]
pub struct MarketComponent;

impl MarketComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [sentiment, signals] =
            Layout::vertical([Constraint::Length(10), Constraint::Min(0)]).areas(area);

        self.render_sentiment(state, frame, sentiment);
        self.render_signals(state, frame, signals);
    }

    fn render_sentiment(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let live = Badge::Live {
            active: state.intel.is_live,
        };
        let block = panel(state, "");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [heading, name, gauge, note] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                state.ticker().to_string(),
                style(state, "title"),
            )),
            heading,
        );
        frame.render_widget(BadgeWidget::new(live, style(state, live.style_key())), heading);
        frame.render_widget(
            Paragraph::new(Span::styled(
                ellipsize(&state.ticker().caption(), usize::from(name.width)),
                style(state, "muted"),
            )),
            name,
        );

        let gauge_widget = ProbabilityGauge::new(state.intel.probability, GAUGE_CAPTION);
        let band_style = style(state, band_style_key(gauge_widget.band()));
        frame.render_widget(
            gauge_widget
                .band_style(band_style)
                .muted(style(state, "muted")),
            gauge,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                ellipsize(GAUGE_NOTE, usize::from(note.width)),
                style(state, "muted").italic(),
            ))
            .alignment(Alignment::Center),
            note,
        );

        // The live panel fades while either request is in flight.
        if state.is_busy() {
            frame
                .buffer_mut()
                .set_style(area, Style::default().add_modifier(Modifier::DIM));
        }
    }

    fn render_signals(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = panel(state, format!(" {} ", SIGNALS_TITLE.to_uppercase()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [badge, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        frame.render_widget(
            BadgeWidget::new(Badge::Simulated, style(state, Badge::Simulated.style_key())),
            badge,
        );

        let waterfall = SignalWaterfall::new(&state.market.probability.signals).styles(
            style(state, "positive"),
            style(state, "negative"),
            style(state, "border"),
            style(state, "muted"),
        );
        frame.render_widget(waterfall, body);
    }
}
