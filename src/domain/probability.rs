use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ticker::Ticker;

/// Baseline every signal contribution is added to.
const BASELINE: i32 = 50;
const PROB_FLOOR: i32 = 2;
const PROB_CEILING: i32 = 98;

/// One component of the simulated probability model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalBreakdown {
    pub name: String,
    /// Signed contribution in percentage points.
    pub contribution: i32,
    /// Weight in percent.
    pub weight: u32,
    pub description: String,
}

impl SignalBreakdown {
    fn new(name: &str, contribution: i32, weight: u32, description: &str) -> Self {
        Self {
            name: name.to_owned(),
            contribution,
            weight,
            description: description.to_owned(),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.contribution >= 0
    }

    /// Contribution formatted with an explicit sign for positive values.
    pub fn signed_label(&self) -> String {
        if self.contribution > 0 {
            format!("+{}%", self.contribution)
        } else {
            format!("{}%", self.contribution)
        }
    }
}

/// Simulated probability record for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockProbability {
    pub ticker: Ticker,
    pub prob_up: i32,
    pub conf_int: (i32, i32),
    pub as_of: DateTime<Utc>,
    pub signals: Vec<SignalBreakdown>,
}

impl StockProbability {
    pub fn for_ticker(ticker: &Ticker) -> Self {
        let signals = signals(ticker);
        let sum = signals
            .iter()
            .fold(BASELINE, |acc, signal| acc + signal.contribution);

        Self {
            ticker: ticker.clone(),
            prob_up: sum.clamp(PROB_FLOOR, PROB_CEILING),
            conf_int: (sum - 15, sum + 12),
            as_of: Utc::now(),
            signals,
        }
    }
}

/// Seven simulated signals, seeded by the ticker length.
pub fn signals(ticker: &Ticker) -> Vec<SignalBreakdown> {
    let seed = ticker.as_str().chars().count() as i32;

    vec![
        SignalBreakdown::new(
            "Fundamentals",
            10 + seed % 5,
            25,
            "Growth and margin metrics",
        ),
        SignalBreakdown::new(
            "Technical",
            2 + seed % 8,
            15,
            "Momentum and trend indicators",
        ),
        SignalBreakdown::new(
            "Sentiment",
            -5 + seed % 10,
            15,
            "Social and news sentiment score",
        ),
        SignalBreakdown::new(
            "Macro",
            5 + seed % 4,
            15,
            "Interest rate and inflation exposure",
        ),
        SignalBreakdown::new(
            "Commodity & Geo",
            10 - seed % 5,
            10,
            "Geopolitical risk factor",
        ),
        SignalBreakdown::new(
            "Alt-Data",
            4 + seed % 3,
            10,
            "Satellite and supply chain data",
        ),
        SignalBreakdown::new(
            "Risk",
            -2 - seed % 2,
            10,
            "Insider activity and compliance",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).expect("valid ticker")
    }

    #[test]
    fn test_signals_for_four_letter_ticker() {
        let contributions: Vec<i32> = signals(&ticker("NVDA"))
            .iter()
            .map(|s| s.contribution)
            .collect();
        // seed = 4
        assert_eq!(contributions, vec![14, 6, -1, 5, 6, 5, -2]);
    }

    #[test]
    fn test_weights_sum_to_one_hundred() {
        let total: u32 = signals(&ticker("AAPL")).iter().map(|s| s.weight).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_probability_sums_contributions_onto_baseline() {
        let prob = StockProbability::for_ticker(&ticker("NVDA"));
        // 50 + 14 + 6 - 1 + 5 + 6 + 5 - 2
        assert_eq!(prob.prob_up, 83);
        assert_eq!(prob.conf_int, (68, 95));
        assert_eq!(prob.signals.len(), 7);
    }

    #[test]
    fn test_probability_stays_within_bounds() {
        for len in 1..=40 {
            let prob = StockProbability::for_ticker(&ticker(&"X".repeat(len)));
            let sum: i32 = 50 + prob.signals.iter().map(|s| s.contribution).sum::<i32>();
            assert_eq!(prob.prob_up, sum.clamp(2, 98));
            assert!((2..=98).contains(&prob.prob_up));
            assert_eq!(prob.conf_int, (sum - 15, sum + 12));
        }
    }

    #[test]
    fn test_signed_label() {
        let signals = signals(&ticker("NVDA"));
        assert_eq!(signals[0].signed_label(), "+14%");
        assert_eq!(signals[2].signed_label(), "-1%");
        assert!(!signals[6].is_positive());
    }
}
