use ratatui::{prelude::*, widgets::Tabs};
use strum::IntoEnumIterator;

use crate::core::state::ui::Tab;

#[derive(Clone)]
pub struct TabBarWidget {
    active: Tab,
    style: Style,
    highlight_style: Style,
}

impl TabBarWidget {
    pub fn new(active: Tab) -> Self {
        Self {
            active,
            style: Style::default(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn styles(mut self, style: Style, highlight_style: Style) -> Self {
        self.style = style;
        self.highlight_style = highlight_style;
        self
    }

    /// Titles carry the number that selects the tab.
    pub fn titles() -> Vec<String> {
        Tab::iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {tab}", i + 1))
            .collect()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Tabs::new(Self::titles())
            .select(self.active.index())
            .style(self.style)
            .highlight_style(self.highlight_style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(
            TabBarWidget::titles(),
            vec![
                "1 AI Intel",
                "2 Situation Room",
                "3 Perspectives",
                "4 Accuracy",
                "5 Analysis"
            ]
        );
    }

    #[test]
    fn test_render_highlights_active_tab() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        TabBarWidget::new(Tab::Accuracy).render(area, &mut buf);

        let row: String = (0..80).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.contains("4 Accuracy"));
        let start = row.find("4 Accuracy").map(|i| row[..i].chars().count());
        let start = u16::try_from(start.unwrap_or_default()).unwrap_or_default();
        assert!(buf[(start, 0)].modifier.contains(Modifier::REVERSED));
    }
}
