use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::history::{ForecastPoint, Resolution, GOOD_ACCURACY},
    presentation::{
        components::{badge_title, panel, style},
        widgets::Badge,
    },
};

const LOWER_BAND: f64 = 40.0;
const UPPER_BAND: f64 = 60.0;

/// Actual return mapped onto the 0-100 probability axis.
pub fn return_on_probability_axis(actual_return: f64) -> f64 {
    (50.0 + actual_return * 10.0).clamp(0.0, 100.0)
}

pub fn accuracy_label(accuracy: f64) -> String {
    format!("{accuracy:.1}%")
}

pub fn accuracy_style_key(accuracy: f64) -> &'static str {
    if accuracy > GOOD_ACCURACY {
        "positive"
    } else {
        "warning"
    }
}

fn series(points: &[ForecastPoint], f: impl Fn(&ForecastPoint) -> f64) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f(p)))
        .collect()
}

/// Simulated forecast history against what actually happened.
#[derive(Debug, Clone, Default)]
pub struct AccuracyTab;

impl AccuracyTab {
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let resolution = state.ui.resolution;
        let title = format!(" Performance Accuracy ({resolution}) ");
        let block = panel(state, title).title_top(badge_title(state, Badge::Simulated));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [toolbar, chart, legend] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_toolbar(state, frame, toolbar);
        self.render_chart(state, frame, chart);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("━ Probability Prediction  ", style(state, "accent")),
                Span::styled("┄ Actual Return (50 + 10×r)  ", style(state, "neutral")),
                Span::styled("• hit  ", style(state, "positive")),
                Span::styled("• miss", style(state, "negative")),
            ])),
            legend,
        );
    }

    fn render_toolbar(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [selector, score] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(area);

        let mut spans = vec![];
        for resolution in Resolution::iter() {
            let label = format!(" {resolution} ");
            if resolution == state.ui.resolution {
                spans.push(Span::styled(label, style(state, "tab_active")));
            } else {
                spans.push(Span::styled(label, style(state, "tab_inactive")));
            }
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), selector);

        let accuracy = state.market.accuracy();
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled("Avg. Accuracy", style(state, "muted")),
                Line::styled(
                    accuracy_label(accuracy),
                    style(state, accuracy_style_key(accuracy)).bold(),
                ),
            ])
            .alignment(Alignment::Right),
            score,
        );
    }

    fn render_chart(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let points = state.market.visible_history(state.ui.resolution);
        if points.is_empty() {
            return;
        }
        let last = (points.len() - 1) as f64;

        let predictions = series(points, |p| p.prob_up);
        let returns = series(points, |p| return_on_probability_axis(p.actual_return));
        let (hits, misses): (Vec<_>, Vec<_>) = predictions
            .iter()
            .zip(points)
            .partition(|(_, point)| point.hit);
        let hits: Vec<(f64, f64)> = hits.into_iter().map(|(xy, _)| *xy).collect();
        let misses: Vec<(f64, f64)> = misses.into_iter().map(|(xy, _)| *xy).collect();
        let lower = [(0.0, LOWER_BAND), (last, LOWER_BAND)];
        let upper = [(0.0, UPPER_BAND), (last, UPPER_BAND)];

        let datasets = vec![
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(style(state, "border"))
                .data(&lower),
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(style(state, "border"))
                .data(&upper),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style(state, "neutral"))
                .data(&returns),
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style(state, "accent"))
                .data(&predictions),
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(style(state, "positive"))
                .data(&hits),
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(style(state, "negative"))
                .data(&misses),
        ];

        let first_label = points.first().map(ForecastPoint::short_date).unwrap_or_default();
        let middle_label = points[points.len() / 2].short_date();
        let last_label = points.last().map(ForecastPoint::short_date).unwrap_or_default();

        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .style(style(state, "muted"))
                    .bounds([0.0, last.max(1.0)])
                    .labels([first_label, middle_label, last_label]),
            )
            .y_axis(
                Axis::default()
                    .style(style(state, "muted"))
                    .bounds([0.0, 100.0])
                    .labels(["0%", "50%", "100%"]),
            );
        frame.render_widget(chart, area);
    }
}
