//! File logging through `tracing`.
//!
//! Call sites use the `log` macros; tracing-subscriber picks them up through
//! its `tracing-log` bridge.

use std::{fs::File, path::PathBuf};

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Quiet the HTTP stack unless asked otherwise.
fn default_filter() -> String {
    format!(
        "{}=info,reqwest=warn,hyper=warn,hyper_util=warn",
        env!("CARGO_CRATE_NAME")
    )
}

/// `RUST_LOG` wins over the app-specific variable, which wins over the default.
fn resolve_filter(rust_log: Option<String>, app_level: Option<String>) -> String {
    rust_log
        .or(app_level)
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(default_filter)
}

pub fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.as_str())
}

pub fn initialize_logging() -> Result<()> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;

    let directives = resolve_filter(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.as_str()).ok(),
    );
    let filter =
        EnvFilter::try_new(&directives).or_else(|_| EnvFilter::try_new(default_filter()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    log::info!("Logging to {} with `{directives}`", path.display());
    Ok(())
}

/// `std::dbg!` for the log file: emits a `tracing` event (DEBUG unless a
/// level is given) and returns the value.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}
