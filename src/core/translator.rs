use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{intel::IntelMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{ui::Tab, AppState},
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => {
            if state.ui.is_searching() {
                vec![Msg::Ui(UiMsg::PasteSearch(text))]
            } else {
                vec![]
            }
        }

        // Intel service replies
        RawMsg::IntelFetched { request_id, result } => match result {
            Ok(report) => vec![Msg::Intel(IntelMsg::Loaded { request_id, report })],
            Err(error) => vec![Msg::Intel(IntelMsg::Failed { request_id, error })],
        },
        RawMsg::TickerReady(ticker) => vec![Msg::Intel(IntelMsg::ChangeTicker(ticker))],

        // System events
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::SetStatus(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.ui.is_searching() {
        translate_search_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the search box has focus
fn translate_search_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter => vec![Msg::Ui(UiMsg::SubmitSearch)],
        KeyCode::Esc => vec![Msg::Ui(UiMsg::CancelSearch)],
        // Everything else edits the buffer
        _ => vec![Msg::Ui(UiMsg::ProcessSearchInput(key))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(*action);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextTab => vec![Msg::Ui(UiMsg::NextTab)],
        Action::PrevTab => vec![Msg::Ui(UiMsg::PrevTab)],
        Action::ShowIntel => vec![Msg::Ui(UiMsg::SelectTab(Tab::Intel))],
        Action::ShowSituationRoom => vec![Msg::Ui(UiMsg::SelectTab(Tab::SituationRoom))],
        Action::ShowPerspectives => vec![Msg::Ui(UiMsg::SelectTab(Tab::Perspectives))],
        Action::ShowAccuracy => vec![Msg::Ui(UiMsg::SelectTab(Tab::Accuracy))],
        Action::ShowAnalysis => vec![Msg::Ui(UiMsg::SelectTab(Tab::Analysis))],
        Action::FocusSearch => vec![Msg::Ui(UiMsg::FocusSearch)],
        Action::Refresh => vec![Msg::Intel(IntelMsg::Refresh)],
        Action::CycleResolution => vec![Msg::Ui(UiMsg::CycleResolution)],
    }
}
