use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::domain::ticker::Ticker;

const HISTORY_DAYS: u32 = 30;
/// Accuracy above this percentage is rendered as healthy.
pub const GOOD_ACCURACY: f64 = 60.0;

/// A past daily forecast and what actually happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: String,
    pub pred_for: String,
    pub prob_up: f64,
    pub actual_return: f64,
    pub hit: bool,
}

impl ForecastPoint {
    /// `MM/DD` label used on the chart axis.
    pub fn short_date(&self) -> String {
        self.date.split('-').skip(1).collect::<Vec<_>>().join("/")
    }
}

/// Window of the accuracy chart.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Resolution {
    #[strum(to_string = "7D")]
    Week,
    #[default]
    #[strum(to_string = "30D")]
    Month,
    #[strum(to_string = "365D")]
    Year,
}

impl Resolution {
    pub fn next(self) -> Self {
        match self {
            Resolution::Week => Resolution::Month,
            Resolution::Month => Resolution::Year,
            Resolution::Year => Resolution::Week,
        }
    }

    /// Points visible at this resolution. Only the weekly view trims the series.
    pub fn window(self, points: &[ForecastPoint]) -> &[ForecastPoint] {
        match self {
            Resolution::Week => &points[points.len().saturating_sub(7)..],
            Resolution::Month | Resolution::Year => points,
        }
    }
}

/// Hit rate over the whole series, in percent.
pub fn accuracy(points: &[ForecastPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let hits = points.iter().filter(|p| p.hit).count();
    hits as f64 / points.len() as f64 * 100.0
}

/// Thirty days of simulated forecasts, deterministic per ticker.
pub fn history(ticker: &Ticker) -> Vec<ForecastPoint> {
    let seed = ticker.as_str().chars().next().map_or(0, |c| c as u32);
    let mut rng = StdRng::seed_from_u64(noise_seed(ticker));

    (0..HISTORY_DAYS)
        .map(|i| {
            let prob_up = 30.0 + f64::from((seed + i) % 50) + rng.random::<f64>() * 10.0;
            let actual_return =
                (f64::from(seed + i) / 5.0).sin() * 3.0 + (rng.random::<f64>() - 0.5);
            ForecastPoint {
                date: format!("2024-05-{:02}", i + 1),
                pred_for: format!("2024-05-{:02}", i + 2),
                prob_up,
                actual_return,
                hit: is_hit(prob_up, actual_return),
            }
        })
        .collect()
}

fn is_hit(prob_up: f64, actual_return: f64) -> bool {
    (prob_up > 50.0 && actual_return > 0.0) || (prob_up <= 50.0 && actual_return <= 0.0)
}

// FNV-1a over the symbol bytes.
fn noise_seed(ticker: &Ticker) -> u64 {
    ticker
        .as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        })
}
