use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    domain::{intel::IntelReport, parser, ticker::Ticker},
    infrastructure::gemini::{IntelError, IntelProvider},
};

/// Operations accepted by the IntelService
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntelCommand {
    Fetch { ticker: Ticker, request_id: u64 },
    Shutdown,
}

/// IntelService runs model calls off the UI thread and reports back as RawMsg.
/// Every fetch runs in its own task so a slow reply never blocks a newer one.
pub struct IntelService {
    provider: Arc<dyn IntelProvider>,
    // Incoming channels
    cmd_rx: mpsc::UnboundedReceiver<IntelCommand>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewIntelService = (
    mpsc::UnboundedSender<IntelCommand>, // cmd_tx - fetches to run
    CancellationToken,                   // shutdown signal
    IntelService,
);

impl IntelService {
    pub fn new(
        provider: Arc<dyn IntelProvider>,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> NewIntelService {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            cmd_tx,
            cancel_token.clone(),
            Self {
                provider,
                cmd_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the IntelService in background task
    pub fn run(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run_service())
    }

    async fn run_service(mut self) {
        loop {
            tokio::select! {
                result = self.cmd_rx.recv() => {
                    match result {
                        Some(IntelCommand::Fetch { ticker, request_id }) => {
                            self.spawn_fetch(ticker, request_id);
                        }
                        Some(IntelCommand::Shutdown) | None => break,
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("IntelService received cancellation signal");
                    break;
                }
            }
        }

        // In-flight fetches share the token; their replies are dropped.
        self.cancel_token.cancel();
        log::info!("IntelService stopped");
    }

    fn spawn_fetch(&self, ticker: Ticker, request_id: u64) {
        let provider = Arc::clone(&self.provider);
        let raw_tx = self.raw_tx.clone();
        let cancel_token = self.cancel_token.child_token();

        tokio::spawn(async move {
            tokio::select! {
                result = fetch_report(provider.as_ref(), &ticker) => {
                    if let Err(e) = &result {
                        log::warn!("Intel fetch for {ticker} failed: {e}");
                    }
                    let _ = raw_tx.send(RawMsg::IntelFetched {
                        request_id,
                        result: result.map_err(|e| e.to_string()),
                    });
                }
                _ = cancel_token.cancelled() => {
                    log::debug!("Intel fetch {request_id} for {ticker} cancelled");
                }
            }
        });
    }
}

/// Call the provider and parse its free text into a report
pub async fn fetch_report(
    provider: &dyn IntelProvider,
    ticker: &Ticker,
) -> Result<IntelReport, IntelError> {
    let response = provider.fetch(ticker).await?;
    log::debug!(
        "Received {} bytes and {} citations for {ticker}",
        response.text.len(),
        response.citations.len()
    );

    Ok(IntelReport {
        parsed: parser::parse(&response.text),
        citations: response.citations,
    })
}
