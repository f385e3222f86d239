use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::{probability::SignalBreakdown, text::ellipsize};

/// Cells covered by a contribution bar: `(offset, len)` within `width`.
///
/// The bar grows right of the center for positive contributions and left of it
/// otherwise. Its length is `min(50, |c|)` percent of the full width.
pub fn bar_span(contribution: i32, width: u16) -> (u16, u16) {
    let half = width / 2;
    let percent = contribution.unsigned_abs().min(50);
    let len = u16::try_from((u32::from(width) * percent + 50) / 100).unwrap_or(half);

    if contribution > 0 {
        (half, len.min(width - half))
    } else {
        let len = len.min(half);
        (half - len, len)
    }
}

/// Signal components as a centered bar chart.
#[derive(Debug, Clone)]
pub struct SignalWaterfall<'a> {
    signals: &'a [SignalBreakdown],
    positive: Style,
    negative: Style,
    track: Style,
    muted: Style,
}

impl<'a> SignalWaterfall<'a> {
    pub fn new(signals: &'a [SignalBreakdown]) -> Self {
        Self {
            signals,
            positive: Style::default().fg(Color::Green),
            negative: Style::default().fg(Color::Red),
            track: Style::default(),
            muted: Style::default(),
        }
    }

    pub fn styles(mut self, positive: Style, negative: Style, track: Style, muted: Style) -> Self {
        self.positive = positive;
        self.negative = negative;
        self.track = track;
        self.muted = muted;
        self
    }

    /// Rows per signal: name + bar, plus the description when it fits.
    pub fn rows_per_signal(&self, height: u16) -> u16 {
        let count = u16::try_from(self.signals.len()).unwrap_or(u16::MAX).max(1);
        if height >= count.saturating_mul(3) {
            3
        } else {
            2
        }
    }

    fn render_signal(&self, signal: &SignalBreakdown, area: Rect, buf: &mut Buffer) {
        let style = if signal.is_positive() {
            self.positive
        } else {
            self.negative
        };
        let width = usize::from(area.width);

        // name ........ +12%
        let label = signal.signed_label();
        let name = ellipsize(&signal.name, width.saturating_sub(label.len() + 1));
        let gap = width.saturating_sub(name.chars().count() + label.len());
        Line::from(vec![
            Span::raw(name),
            Span::raw(" ".repeat(gap)),
            Span::styled(label, style),
        ])
        .render(Rect { height: 1, ..area }, buf);

        if area.height < 2 {
            return;
        }
        let bar_row = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        let (offset, len) = bar_span(signal.contribution, bar_row.width);
        for x in 0..bar_row.width {
            let in_bar = x >= offset && x < offset + len;
            let cell = &mut buf[(bar_row.x + x, bar_row.y)];
            if in_bar {
                cell.set_symbol("█").set_style(style);
            } else {
                cell.set_symbol("─").set_style(self.track);
            }
        }

        if area.height < 3 {
            return;
        }
        let description = format!("{} (Weight: {}%)", signal.description, signal.weight);
        Paragraph::new(Span::styled(
            ellipsize(&description, width),
            self.muted.add_modifier(Modifier::ITALIC),
        ))
        .render(
            Rect {
                y: area.y + 2,
                height: 1,
                ..area
            },
            buf,
        );
    }
}

impl<'a> Widget for SignalWaterfall<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let rows = self.rows_per_signal(area.height);
        for (i, signal) in self.signals.iter().enumerate() {
            let Ok(i) = u16::try_from(i) else { break };
            let y = area.y + i * rows;
            if y + 2 > area.bottom() {
                break;
            }
            let height = rows.min(area.bottom() - y);
            self.render_signal(signal, Rect { y, height, ..area }, buf);
        }
    }
}
