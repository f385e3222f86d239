//! Reusable widgets
//!
//! Widgets are drawn from borrowed view data and know nothing about `AppState`.

pub mod badge;
pub mod probability_gauge;
pub mod search_box;
pub mod shrink_text;
pub mod status_bar;
pub mod tab_bar;
pub mod waterfall;

pub use badge::{Badge, BadgeWidget};
pub use probability_gauge::ProbabilityGauge;
pub use search_box::SearchBox;
pub use shrink_text::ShrinkText;
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;
pub use waterfall::SignalWaterfall;
