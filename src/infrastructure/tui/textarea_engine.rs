use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::{state::ui::SearchInput, textarea_engine::TextAreaEngine};

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies keys, then extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    fn restore_textarea_from_snapshot(textarea: &mut TextArea<'_>, snapshot: &SearchInput) {
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        let column = u16::try_from(snapshot.cursor).unwrap_or(u16::MAX);
        textarea.move_cursor(CursorMove::Jump(0, column));
    }

    /// The search box is single-line; collapse anything the textarea split.
    fn extract_snapshot(textarea: &TextArea<'_>) -> SearchInput {
        let (row, column) = textarea.cursor();
        let lines = textarea.lines();
        let cursor = lines
            .iter()
            .take(row)
            .map(|line| line.chars().count())
            .sum::<usize>()
            + column;
        SearchInput::new(lines.concat(), cursor)
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &SearchInput, keys: &[KeyEvent]) -> SearchInput {
        let mut textarea = TextArea::default();
        Self::restore_textarea_from_snapshot(&mut textarea, snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::extract_snapshot(&textarea)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn applies_basic_editing_with_left_and_char() {
        let engine = TuiTextAreaEngine;
        let snap = SearchInput::new("NDA", 3);

        let out = engine.apply_keys(
            &snap,
            &[key(KeyCode::Left), key(KeyCode::Left), key(KeyCode::Char('V'))],
        );

        assert_eq!(out, SearchInput::new("NVDA", 2));
        // original untouched
        assert_eq!(snap.content, "NDA");
    }

    #[test]
    fn applies_backspace() {
        let engine = TuiTextAreaEngine;
        let out = engine.apply_keys(&SearchInput::new("TSLAX", 5), &[key(KeyCode::Backspace)]);
        assert_eq!(out, SearchInput::new("TSLA", 4));
    }

    #[test]
    fn cursor_jump_is_clamped() {
        let engine = TuiTextAreaEngine;
        let out = engine.apply_keys(&SearchInput::new("ab", 99), &[key(KeyCode::Char('c'))]);
        assert_eq!(out, SearchInput::new("abc", 3));
    }

    #[test]
    fn newlines_are_collapsed() {
        let engine = TuiTextAreaEngine;
        let out = engine.apply_keys(
            &SearchInput::new("ab", 1),
            &[key(KeyCode::Enter), key(KeyCode::Char('x'))],
        );
        assert_eq!(out, SearchInput::new("axb", 2));
    }
}
