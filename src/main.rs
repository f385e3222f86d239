use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use worldaware::{
    domain::ticker::Ticker,
    infrastructure::{
        cli::Cli,
        config::Config,
        gemini::{GeminiClient, IntelError, IntelProvider, OfflineProvider},
        tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

fn select_provider(offline: bool, config: &Config) -> Result<Arc<dyn IntelProvider>> {
    if offline {
        log::info!("Offline mode; live intel is disabled");
        return Ok(Arc::new(OfflineProvider::Requested));
    }
    match GeminiClient::from_config(&config.gemini) {
        Ok(client) => Ok(Arc::new(client)),
        Err(IntelError::MissingApiKey) => {
            log::warn!("No Gemini API key configured; live intel is disabled");
            Ok(Arc::new(OfflineProvider::MissingApiKey))
        }
        Err(e) => Err(e.into()),
    }
}

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;
    let ticker = args
        .ticker
        .as_deref()
        .and_then(Ticker::parse)
        .unwrap_or_else(|| config.initial_ticker());
    let provider = select_provider(args.offline, &config)?;

    let mut runner = {
        let tui = Arc::new(Mutex::new(
            RealTui::new()?
                .tick_rate(args.tick_rate)
                .frame_rate(args.frame_rate),
        ));
        AppRunner::new_with_real(config, tui, provider, ticker)
    };
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
