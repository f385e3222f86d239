#![allow(dead_code)]

use std::path::PathBuf;

use worldaware::{
    domain::{
        intel::{Citation, IntelResponse},
        ticker::Ticker,
    },
    infrastructure::{
        config::Config,
        gemini::{IntelError, IntelFuture, IntelProvider},
    },
};

pub const REPLY: &str = "1. PROBABILITY: 72
2. SUMMARY: Strong data-center demand keeps the outlook constructive.
3. SOURCE_BREAKDOWN:
   **Bloomberg**: Supply chain checks point to upside | positive
   - CNBC: Valuation worries linger | negative
4. TACTICAL_FEED:
   Reuters | New export license granted | ST_7D: 64 | MT_30D: 70 | LT_1Y: 81 | CURR_PRICE: $120.50 | TGT_PRICE: $135
";

/// Provider answering every fetch with the same reply.
pub struct CannedProvider {
    pub text: String,
}

impl CannedProvider {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }
}

impl IntelProvider for CannedProvider {
    fn fetch<'a>(&'a self, _ticker: &'a Ticker) -> IntelFuture<'a> {
        Box::pin(async move {
            Ok(IntelResponse {
                text: self.text.clone(),
                citations: vec![Citation {
                    title: "Reuters".into(),
                    uri: "https://reuters.example/nvda".into(),
                }],
            })
        })
    }
}

/// Provider whose every fetch fails.
pub struct FailingProvider;

impl IntelProvider for FailingProvider {
    fn fetch<'a>(&'a self, _ticker: &'a Ticker) -> IntelFuture<'a> {
        Box::pin(async { Err(IntelError::Offline) })
    }
}

pub fn ticker(s: &str) -> Ticker {
    Ticker::parse(s).expect("valid ticker")
}

/// Built-in defaults (keybindings and styles included) with a short search delay.
pub fn test_config() -> Config {
    let dir: PathBuf = std::env::temp_dir().join("worldaware-tests-no-config");
    let mut config = Config::load(&dir, |_| None).expect("embedded config loads");
    config.search_delay_ms = 1;
    config
}
