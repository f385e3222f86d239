use std::borrow::Cow;

use ratatui::text::{Line, Text};

use crate::domain::text;

/// Text wrapped to `width` and cut to `max_height` lines.
#[derive(Clone, Debug, Default)]
pub struct ShrinkText<'a> {
    pub content: Cow<'a, str>,
    pub width: usize,
    pub max_height: usize,
}

impl<'a> ShrinkText<'a> {
    pub fn new<T>(content: T, width: usize, max_height: usize) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Self {
            content: content.into(),
            width,
            max_height,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        text::truncate_lines(
            text::wrap_text(&self.content, self.width),
            self.max_height,
        )
    }
}

impl<'a> From<ShrinkText<'a>> for Text<'a> {
    fn from(value: ShrinkText) -> Self {
        Text::from(value.lines().into_iter().map(Line::from).collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_shrink_text_wraps_and_truncates() {
        let shrink = ShrinkText::new("record demand for data center chips", 12, 2);
        assert_eq!(shrink.lines(), vec!["record", "demand for…"]);

        let text: Text = shrink.into();
        assert_eq!(text.lines.len(), 2);
    }

    #[test]
    fn test_shrink_text_fits() {
        let text: Text = ShrinkText::new("short", 12, 3).into();
        assert_eq!(text, Text::from("short"));
    }
}
