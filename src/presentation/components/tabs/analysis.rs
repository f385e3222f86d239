use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    core::state::AppState,
    domain::analysis::WeightingFactor,
    presentation::{
        components::{badge_title, panel, style},
        widgets::Badge,
    },
};

pub const TITLE: &str = "Retrospective Miss Post-Mortem";
pub const DISCLAIMER: &str =
    "THE FOLLOWING TEXTS ARE SIMULATED TO DEMONSTRATE THE ANALYSIS CHARACTERISTICS";
pub const ROADMAP_TITLE: &str = "Optimization Roadmap (Next Steps)";

/// Simulated post-mortem of the latest missed forecast.
#[derive(Debug, Clone, Default)]
pub struct AnalysisTab;

impl AnalysisTab {
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = panel(state, format!(" {TITLE} ")).title_top(badge_title(state, Badge::Simulated));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [disclaimer, factors, roadmap] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(6),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(DISCLAIMER, style(state, "warning").bold()))
                .wrap(Wrap { trim: true }),
            disclaimer,
        );

        let analysis = &state.market.miss_analysis;
        let [over, under] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .spacing(1)
                .areas(factors);
        self.render_factor(
            state,
            "Overweighted Factors",
            &analysis.overweighted,
            style(state, "negative"),
            frame,
            over,
        );
        self.render_factor(
            state,
            "Underweighted Factors",
            &analysis.underweighted,
            style(state, "accent"),
            frame,
            under,
        );

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(style(state, "border"))
            .title(Span::styled(ROADMAP_TITLE, style(state, "title")));
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(analysis.roadmap(), Style::default().italic()),
                Line::default(),
                Line::styled(
                    format!("Learning status: {}", analysis.learning_status),
                    style(state, "muted"),
                ),
            ])
            .wrap(Wrap { trim: true })
            .block(block),
            roadmap,
        );
    }

    fn render_factor(
        &self,
        state: &AppState,
        heading: &str,
        factor: &WeightingFactor,
        accent: Style,
        frame: &mut Frame,
        area: Rect,
    ) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(accent)
            .title(Span::styled(heading.to_uppercase(), accent.bold()));
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(factor.signal.clone(), style(state, "title")),
                Line::styled(factor.impact.clone(), style(state, "muted")),
                Line::raw(factor.reason.clone()),
            ])
            .wrap(Wrap { trim: true })
            .block(block),
            area,
        );
    }
}
