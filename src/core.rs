//! The pure half of the app.
//!
//! Raw input is translated into messages, `update` folds a message into
//! `AppState` and returns commands, and the command executor hands those to
//! the services.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod textarea_engine;
pub mod translator;
pub mod update;
