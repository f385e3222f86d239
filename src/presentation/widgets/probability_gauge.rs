use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph},
};

use crate::domain::bands::GaugeBand;

/// Style key registered for each gauge band.
pub fn band_style_key(band: GaugeBand) -> &'static str {
    match band {
        GaugeBand::Red => "gauge_red",
        GaugeBand::Orange => "gauge_orange",
        GaugeBand::Lime => "gauge_lime",
        GaugeBand::Green => "gauge_green",
    }
}

/// Horizontal rendition of the probability dial: the figure, a bar and a 0-100 scale.
#[derive(Debug, Clone)]
pub struct ProbabilityGauge<'a> {
    value: u32,
    caption: &'a str,
    band_style: Style,
    muted: Style,
}

impl<'a> ProbabilityGauge<'a> {
    pub fn new(value: u32, caption: &'a str) -> Self {
        Self {
            value: value.min(100),
            caption,
            band_style: Style::default(),
            muted: Style::default(),
        }
    }

    pub fn band(&self) -> GaugeBand {
        GaugeBand::classify(self.value)
    }

    pub fn band_style(mut self, style: Style) -> Self {
        self.band_style = style;
        self
    }

    pub fn muted(mut self, style: Style) -> Self {
        self.muted = style;
        self
    }
}

impl<'a> Widget for ProbabilityGauge<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // figure
                Constraint::Length(1), // bar
                Constraint::Length(1), // scale
                Constraint::Length(1), // caption
            ],
        )
        .split(area);

        Paragraph::new(Span::styled(
            format!("{}%", self.value),
            self.band_style.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(layout[0], buf);

        Gauge::default()
            .gauge_style(self.band_style)
            .ratio(f64::from(self.value) / 100.0)
            .label("")
            .use_unicode(true)
            .render(layout[1], buf);

        let width = usize::from(layout[2].width);
        let scale = format!("0%{:>pad$}", "100%", pad = width.saturating_sub(2));
        Paragraph::new(Span::styled(scale, self.muted)).render(layout[2], buf);

        Paragraph::new(Span::styled(
            self.caption.to_uppercase(),
            self.muted.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(layout[3], buf);
    }
}
