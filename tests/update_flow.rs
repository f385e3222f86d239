mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use worldaware::{
    core::{
        cmd::Cmd,
        msg::{intel::IntelMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{intel::AWAITING_CONNECTION, ui::Tab, AppState},
    },
    domain::{
        history::Resolution,
        intel::{IntelReport, ParsedIntel},
    },
    translate_raw_to_domain, update,
};

use common::{test_config, ticker};

fn key(c: char) -> RawMsg {
    RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

/// Translate and apply one raw message, collecting the commands.
fn feed(state: AppState, raw: RawMsg) -> (AppState, Vec<Cmd>) {
    let mut state = state;
    let mut commands = vec![];
    for msg in translate_raw_to_domain(raw, &state) {
        let (next, cmds) = update(msg, state);
        state = next;
        commands.extend(cmds);
    }
    (state, commands)
}

fn loaded(request_id: u64, probability: Option<u32>, summary: &str) -> Msg {
    Msg::Intel(IntelMsg::Loaded {
        request_id,
        report: IntelReport {
            parsed: ParsedIntel {
                probability,
                summary: summary.into(),
                ..Default::default()
            },
            citations: vec![],
        },
    })
}

#[test]
fn test_number_keys_select_tabs() {
    let state = AppState::new_with_config(ticker("NVDA"), test_config());

    let (state, _) = feed(state, key('4'));
    assert_eq!(state.ui.active_tab, Tab::Accuracy);

    let (state, _) = feed(state, key('t'));
    assert_eq!(state.ui.resolution, Resolution::Year);

    let (state, _) = feed(state, RawMsg::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
    assert_eq!(state.ui.active_tab, Tab::Analysis);
}

#[test]
fn test_submit_schedules_delayed_ticker_change() {
    let state = AppState::new_with_config(ticker("NVDA"), test_config());

    let (state, _) = feed(state, key('/'));
    assert!(state.ui.is_searching());
    let (state, _) = feed(state, RawMsg::Paste(" tsla ".into()));
    let (state, commands) = feed(
        state,
        RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
    );

    assert!(state.ui.search_loading);
    assert!(!state.ui.is_searching());
    assert_eq!(
        commands[0],
        Cmd::ScheduleTickerChange {
            ticker: ticker("TSLA"),
            delay_ms: 1
        }
    );

    let (state, commands) = feed(state, RawMsg::TickerReady(ticker("TSLA")));
    assert_eq!(state.ticker(), &ticker("TSLA"));
    assert_eq!(state.market.probability.ticker, ticker("TSLA"));
    assert!(!state.ui.search_loading);
    assert!(state.ui.search.content.is_empty());
    assert_eq!(
        commands,
        vec![Cmd::FetchIntel {
            ticker: ticker("TSLA"),
            request_id: 1
        }]
    );
}

#[test]
fn test_blank_submit_is_ignored() {
    let mut state = AppState::new_with_config(ticker("NVDA"), test_config());
    state.ui.search_focused = true;

    let (state, commands) = update(Msg::Ui(UiMsg::SubmitSearch), state);
    assert!(commands.is_empty());
    assert!(!state.ui.search_loading);
}

#[test]
fn test_rapid_ticker_changes_keep_latest_reply() {
    let state = AppState::default();
    let (state, _) = update(Msg::Intel(IntelMsg::ChangeTicker(ticker("AAPL"))), state);
    let (state, _) = update(Msg::Intel(IntelMsg::ChangeTicker(ticker("MSFT"))), state);

    // The AAPL reply lands after MSFT was requested.
    let (state, _) = update(loaded(1, Some(10), "apple"), state);
    assert!(state.intel.is_loading);
    assert_eq!(state.intel.probability, 50);

    let (state, _) = update(loaded(2, Some(77), "microsoft"), state);
    assert!(!state.intel.is_loading);
    assert_eq!(state.intel.probability, 77);
    assert_eq!(state.intel.summary, "microsoft");
}

#[test]
fn test_reply_without_probability_keeps_previous() {
    let state = AppState::default();
    let (state, _) = update(Msg::Intel(IntelMsg::ChangeTicker(ticker("NVDA"))), state);
    let (state, _) = update(loaded(1, Some(81), "first"), state);
    let (state, _) = update(Msg::Intel(IntelMsg::Refresh), state);
    let (state, _) = update(loaded(2, None, "second"), state);

    assert_eq!(state.intel.probability, 81);
    assert_eq!(state.intel.summary, "second");
}

#[test]
fn test_failure_resets_to_awaiting_connection() {
    let state = AppState::default();
    let (state, _) = update(Msg::Intel(IntelMsg::ChangeTicker(ticker("NVDA"))), state);
    let (state, _) = update(loaded(1, Some(90), "fine"), state);
    let (state, _) = update(Msg::Intel(IntelMsg::Refresh), state);
    let (state, commands) = update(
        Msg::Intel(IntelMsg::Failed {
            request_id: 2,
            error: "offline".into(),
        }),
        state,
    );

    assert_eq!(state.intel.summary, AWAITING_CONNECTION);
    assert_eq!(state.intel.probability, 50);
    assert!(!state.intel.is_loading);
    assert_eq!(
        commands,
        vec![Cmd::LogError {
            message: "Intel fetch failed: offline".into()
        }]
    );
}
