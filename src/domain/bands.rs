//! Threshold classification shared by the gauge and the event ledger.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Color band of the probability gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GaugeBand {
    Red,
    Orange,
    Lime,
    Green,
}

impl GaugeBand {
    pub fn classify(value: u32) -> Self {
        match value {
            v if v < 40 => GaugeBand::Red,
            v if v < 60 => GaugeBand::Orange,
            v if v < 80 => GaugeBand::Lime,
            _ => GaugeBand::Green,
        }
    }
}

/// Outlook label for a horizon probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Outlook {
    Bullish,
    #[strum(to_string = "Neutral+")]
    NeutralUp,
    #[strum(to_string = "Neutral-")]
    NeutralDown,
    Bearish,
}

impl Outlook {
    /// A probability of 0 is treated as "no data" and classified as 50.
    pub fn classify(prob: u32) -> Self {
        let prob = if prob == 0 { 50 } else { prob };
        match prob {
            p if p >= 70 => Outlook::Bullish,
            p if p >= 50 => Outlook::NeutralUp,
            p if p >= 40 => Outlook::NeutralDown,
            _ => Outlook::Bearish,
        }
    }
}
