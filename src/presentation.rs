//! Presentation layer
//!
//! - Components: stateless views over `AppState`
//! - Widgets: reusable drawing blocks
//! - Configuration: styles and keybindings

pub mod components;
pub mod config;
pub mod widgets;
