use ratatui::{prelude::*, widgets::Paragraph};

/// Provenance marker drawn in panel corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Content from the model call. `active` is false until a fetch succeeds.
    Live { active: bool },
    Simulated,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Live { active: true } => "● LIVE DATA",
            Badge::Live { active: false } => "○ LIVE DATA",
            Badge::Simulated => "● SIMULATED",
        }
    }

    /// Style key looked up in the configured styles.
    pub fn style_key(self) -> &'static str {
        match self {
            Badge::Live { active: true } => "live",
            Badge::Live { active: false } => "muted",
            Badge::Simulated => "simulated",
        }
    }

    pub fn width(self) -> u16 {
        u16::try_from(self.label().chars().count()).unwrap_or(u16::MAX)
    }

    pub fn span(self, style: Style) -> Span<'static> {
        Span::styled(self.label(), style)
    }
}

/// Right-aligned badge
pub struct BadgeWidget {
    badge: Badge,
    style: Style,
}

impl BadgeWidget {
    pub fn new(badge: Badge, style: Style) -> Self {
        Self { badge, style }
    }
}

impl Widget for BadgeWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(self.badge.span(self.style))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
