//! # WorldAware
//!
//! A terminal intelligence room: the probability that a stock's price goes up,
//! with a sentiment gauge, signal waterfall, forecast accuracy, per-outlet
//! sentiment and a tactical event ledger. Live content comes from one
//! search-grounded Gemini call; everything else is deterministic mock data
//! keyed by the ticker.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`, `core::raw_msg`): events that can change the state
//! - **Update** (`core::update`): pure state transitions
//! - **Command** (`core::cmd`): side effects, run by `core::cmd_executor`
//! - **View** (`presentation::components`): stateless rendering of the state
//!
//! ## Example Usage
//!
//! ```rust
//! use worldaware::{
//!     core::{
//!         cmd::Cmd,
//!         msg::{intel::IntelMsg, Msg},
//!         state::AppState,
//!         update::update,
//!     },
//!     domain::ticker::Ticker,
//! };
//!
//! let ticker = Ticker::parse("tsla").expect("valid ticker");
//! let (state, commands) = update(
//!     Msg::Intel(IntelMsg::ChangeTicker(ticker.clone())),
//!     AppState::default(),
//! );
//!
//! assert!(state.intel.is_loading);
//! assert_eq!(commands, vec![Cmd::FetchIntel { ticker, request_id: 1 }]);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
