use serde::{Deserialize, Serialize};

use crate::domain::ticker::Ticker;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated by AppRunner through the render request channel.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network calls, timers, logging, etc.)
/// `Cmd` captures application intent; the services behind `CmdExecutor`
/// decide how it is carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Intel-related commands
    /// Ask the intel service for a fresh model reply about `ticker`.
    FetchIntel {
        ticker: Ticker,
        request_id: u64,
    },
    /// Deliver `RawMsg::TickerReady` after `delay_ms`.
    ScheduleTickerChange {
        ticker: Ticker,
        delay_ms: u64,
    },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via the render request channel and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Label used in the execution log
    pub fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::FetchIntel { ticker, request_id } => format!("FetchIntel({ticker}#{request_id})"),
            Cmd::ScheduleTickerChange { ticker, .. } => format!("ScheduleTickerChange({ticker})"),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::Tui(TuiCommand::Resize { width, height }) => format!("Resize({width}x{height})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn nvda() -> Ticker {
        Ticker::parse("nvda").expect("valid ticker")
    }

    #[rstest]
    #[case(Cmd::FetchIntel { ticker: nvda(), request_id: 3 }, "FetchIntel(NVDA#3)")]
    #[case(Cmd::ScheduleTickerChange { ticker: nvda(), delay_ms: 600 }, "ScheduleTickerChange(NVDA)")]
    #[case(Cmd::Tui(TuiCommand::Resize { width: 120, height: 40 }), "Resize(120x40)")]
    #[case(Cmd::Batch(vec![Cmd::None, Cmd::RequestRender]), "Batch(2)")]
    fn test_name(#[case] cmd: Cmd, #[case] expected: &str) {
        assert_eq!(cmd.name(), expected);
    }

    #[test]
    fn test_cmd_serialization() -> color_eyre::Result<()> {
        let cmd = Cmd::ScheduleTickerChange {
            ticker: nvda(),
            delay_ms: 600,
        };

        let serialized = serde_json::to_string(&cmd)?;
        let deserialized: Cmd = serde_json::from_str(&serialized)?;
        assert_eq!(cmd, deserialized);

        Ok(())
    }
}
