use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name used when a ticker has no entry in the details table.
pub const UNKNOWN_ASSET_NAME: &str = "Global Market Asset";

/// Stock symbol used as the lookup key for both mock and live data.
///
/// A `Ticker` is always trimmed, uppercased and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// Normalize free-text search input into a ticker.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_uppercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Static company details, if the ticker is one of the known symbols.
    pub fn details(&self) -> Option<&'static TickerDetails> {
        TICKER_DETAILS
            .iter()
            .find(|(symbol, _)| *symbol == self.0)
            .map(|(_, details)| details)
    }

    pub fn display_name(&self) -> &'static str {
        self.details()
            .map(|details| details.name)
            .unwrap_or(UNKNOWN_ASSET_NAME)
    }

    /// Company name followed by its sector when the sector is known.
    pub fn caption(&self) -> String {
        let name = self.display_name();
        match self.details() {
            Some(details) => format!("{name} · {}", details.sector),
            None => name.to_owned(),
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self("NVDA".to_owned())
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerDetails {
    pub name: &'static str,
    pub sector: &'static str,
}

const TICKER_DETAILS: [(&str, TickerDetails); 6] = [
    (
        "NVDA",
        TickerDetails {
            name: "NVIDIA Corporation",
            sector: "Semiconductors",
        },
    ),
    (
        "AAPL",
        TickerDetails {
            name: "Apple Inc.",
            sector: "Consumer Electronics",
        },
    ),
    (
        "GOOGL",
        TickerDetails {
            name: "Alphabet Inc.",
            sector: "Internet Services",
        },
    ),
    (
        "TSLA",
        TickerDetails {
            name: "Tesla, Inc.",
            sector: "Automotive & Energy",
        },
    ),
    (
        "MSFT",
        TickerDetails {
            name: "Microsoft Corporation",
            sector: "Software & Cloud",
        },
    ),
    (
        "AMZN",
        TickerDetails {
            name: "Amazon.com, Inc.",
            sector: "E-commerce & Cloud",
        },
    ),
];
