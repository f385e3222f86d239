//! Integration layer
//!
//! - Runtime: state, message queues and the command executor
//! - AppRunner: the event loop around the runtime
//! - Renderer: draws the component tree through a `TuiLike`

pub mod app_runner;
pub mod renderer;
pub mod runtime;
