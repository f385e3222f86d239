use ratatui::{prelude::*, widgets::Paragraph};

use crate::presentation::config::{Action, KeyBindings};

const HINTS: [(Action, &str); 6] = [
    (Action::FocusSearch, "search"),
    (Action::NextTab, "next tab"),
    (Action::Refresh, "refresh"),
    (Action::CycleResolution, "resolution"),
    (Action::Suspend, "suspend"),
    (Action::Quit, "quit"),
];

/// Key hints for the bound actions, e.g. `/ search  r refresh`.
pub fn key_hints(keybindings: &KeyBindings) -> String {
    HINTS
        .iter()
        .filter_map(|(action, label)| {
            keybindings
                .hint_for(*action)
                .map(|keys| format!("{keys} {label}"))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub struct StatusBarWidget<'a> {
    hints: String,
    message: Option<&'a str>,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(keybindings: &KeyBindings, message: Option<&'a str>) -> Self {
        Self {
            hints: key_hints(keybindings),
            message,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1), // key hints
                Constraint::Length(1), // status message
            ],
        )
        .split(area);

        Paragraph::new(Span::styled(self.hints, Style::default().italic()))
            .style(self.style)
            .render(layout[1], buf);

        Paragraph::new(self.message.unwrap_or_default()).render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bindings() -> color_eyre::Result<KeyBindings> {
        Ok(json5::from_str(
            r#"{ "<q>": "Quit", "<ctrl-c>": "Quit", "</>": "FocusSearch", "<r>": "Refresh" }"#,
        )?)
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_key_hints_skip_unbound_actions() -> color_eyre::Result<()> {
        assert_eq!(key_hints(&bindings()?), "/ search  r refresh  q quit");
        assert_eq!(key_hints(&KeyBindings::default()), "");
        Ok(())
    }

    #[test]
    fn test_render_with_message() -> color_eyre::Result<()> {
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(&bindings()?, Some("Error: offline")).render(area, &mut buf);

        assert!(row(&buf, 0).starts_with("/ search"));
        assert_eq!(row(&buf, 1).trim_end(), "Error: offline");
        Ok(())
    }

    #[test]
    fn test_render_without_message() {
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(&KeyBindings::default(), None).render(area, &mut buf);

        assert_eq!(row(&buf, 1).trim(), "");
    }
}
