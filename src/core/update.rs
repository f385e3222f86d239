use crate::core::{
    cmd::Cmd,
    msg::{intel::IntelMsg, system::SystemMsg, ui::UiMsg, Msg},
    state::{AppState, MarketState},
    textarea_engine::{ReadOnlyEngine, TextAreaEngine},
};

/// Dependencies the pure update path may consult
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message.
/// Search editing keys are ignored; use `update_with_context` to apply them.
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static ENGINE: ReadOnlyEngine = ReadOnlyEngine;
    update_with_context(msg, state, &UpdateContext { text_area: &ENGINE })
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Ui(UiMsg::ProcessSearchInput(key)) => {
            if state.ui.is_searching() {
                state.ui.search = ctx.text_area.apply_keys(&state.ui.search, &[key]);
            }
            (state, vec![])
        }

        Msg::Ui(UiMsg::SubmitSearch) => {
            let Some(ticker) = state.ui.search.ticker() else {
                return (state, vec![]);
            };
            state.ui.begin_search();
            let status = state.system.update(SystemMsg::SetStatus(format!(
                "Analyzing {ticker}..."
            )));
            let mut commands = vec![Cmd::ScheduleTickerChange {
                ticker,
                delay_ms: state.config.config.search_delay_ms,
            }];
            commands.extend(status);
            (state, commands)
        }

        // Other UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }

        // A ticker change touches every view model
        Msg::Intel(IntelMsg::ChangeTicker(ticker)) => {
            log::info!("Switching ticker to {ticker}");
            state.market = MarketState::for_ticker(ticker.clone());
            state.ui.finish_search();
            let mut commands = state.system.update(SystemMsg::ClearStatus);
            commands.extend(state.intel.update(IntelMsg::ChangeTicker(ticker)));
            (state, commands)
        }

        // Fetch lifecycle (delegated to IntelState)
        Msg::Intel(intel_msg) => {
            let commands = state.intel.update(intel_msg);
            (state, commands)
        }
    }
}
