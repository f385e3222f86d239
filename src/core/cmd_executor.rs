use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    domain::ticker::Ticker,
    infrastructure::intel_service::IntelCommand,
};

/// Command executor that bridges Elm commands to the infrastructure services
#[derive(Clone, Default)]
pub struct CmdExecutor {
    intel_sender: Option<mpsc::UnboundedSender<IntelCommand>>,
    raw_sender: Option<mpsc::UnboundedSender<RawMsg>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
}

impl CmdExecutor {
    /// Create an executor with no services attached; commands are dropped with a warning
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_intel_sender(&mut self, sender: mpsc::UnboundedSender<IntelCommand>) {
        self.intel_sender = Some(sender);
    }

    /// Inject the raw message sender used to deliver delayed events.
    pub fn set_raw_sender(&mut self, sender: mpsc::UnboundedSender<RawMsg>) {
        self.raw_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command by routing it to the matching service
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::FetchIntel { ticker, request_id } => {
                if let Some(intel_sender) = &self.intel_sender {
                    log::info!("CmdExecutor: fetching intel for {ticker} (request {request_id})");
                    intel_sender.send(IntelCommand::Fetch {
                        ticker: ticker.clone(),
                        request_id: *request_id,
                    })?;
                } else {
                    log::warn!("FetchIntel ignored: IntelService not available");
                }
            }

            Cmd::ScheduleTickerChange { ticker, delay_ms } => {
                self.schedule_ticker_change(ticker.clone(), *delay_ms);
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    // A full channel already holds a pending render.
                    let _ = rtx.try_send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    fn schedule_ticker_change(&self, ticker: Ticker, delay_ms: u64) {
        let Some(raw_sender) = self.raw_sender.clone() else {
            log::warn!("ScheduleTickerChange ignored: raw message sender not available");
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    let _ = raw_sender.send(RawMsg::TickerReady(ticker));
                });
            }
            Err(_) => {
                log::warn!("No async runtime; applying ticker change for {ticker} immediately");
                let _ = raw_sender.send(RawMsg::TickerReady(ticker));
            }
        }
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_intel_sender: self.intel_sender.is_some(),
            is_intel_sender_closed: self.intel_sender.as_ref().map(|sender| sender.is_closed()),
            has_raw_sender: self.raw_sender.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_intel_sender: bool,
    pub is_intel_sender_closed: Option<bool>,
    pub has_raw_sender: bool,
}
