//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The search-grounded model call and the service that runs it

pub mod cli;
pub mod config;
pub mod gemini;
pub mod intel_service;
pub mod tui;
