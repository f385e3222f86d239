//! Domain logic
//!
//! This module contains domain-specific business logic:
//! - Ticker normalization and company details
//! - Deterministic mock data keyed by the ticker
//! - The free-text response parser
//! - Probability band classification
//! - Text fitting helpers for the terminal

pub mod analysis;
pub mod bands;
pub mod history;
pub mod intel;
pub mod parser;
pub mod probability;
pub mod situation;
pub mod text;
pub mod ticker;
