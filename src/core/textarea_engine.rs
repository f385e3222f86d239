use crossterm::event::KeyEvent;

use crate::core::state::ui::SearchInput;

/// Applies editing keys to the search box.
///
/// The update function only sees this trait, so it stays pure: the engine takes
/// a snapshot and returns the edited copy.
pub trait TextAreaEngine {
    fn apply_keys(&self, snapshot: &SearchInput, keys: &[KeyEvent]) -> SearchInput;
}

/// Ignores every key. Used by `update` when no engine is supplied.
pub struct ReadOnlyEngine;

impl TextAreaEngine for ReadOnlyEngine {
    fn apply_keys(&self, snapshot: &SearchInput, _keys: &[KeyEvent]) -> SearchInput {
        snapshot.clone()
    }
}
