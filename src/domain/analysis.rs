use serde::{Deserialize, Serialize};

use crate::domain::ticker::Ticker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightingFactor {
    pub signal: String,
    pub impact: String,
    pub reason: String,
}

/// Retrospective on a missed forecast. The texts are simulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissAnalysis {
    pub overweighted: WeightingFactor,
    pub underweighted: WeightingFactor,
    pub future_adjustment: String,
    pub learning_status: String,
}

impl MissAnalysis {
    pub fn for_ticker(ticker: &Ticker) -> Self {
        match ticker.as_str() {
            "NVDA" => Self::build(
                (
                    "Geopolitical (China Exports)",
                    "High Negative Bias",
                    "I underestimated the company's ability to offset Chinese market loss with record-breaking demand for Data Centers in the US.",
                ),
                (
                    "Alt-Data (Supply Chain Imagery)",
                    "Low Positive Bias",
                    "Satellite data showed increased output at TSMC facilities for Blackwell chips, but the model gave this too low a weight.",
                ),
                "Increase Alt-Data weighting by 15% during new product launches and decrease short-term regulatory sensitivity.",
                "Model Patch v4.2.1 In-Progress",
            ),
            "TSLA" => Self::build(
                (
                    "Sentiment (Social Media Buzz)",
                    "High Volatility Bias",
                    "Social media noise regarding FSD was translated into a too-bullish forecast, while economic data showed a sales slowdown.",
                ),
                (
                    "Macro (Rate Sensitivity)",
                    "High Negative Exposure",
                    "The model failed to correctly evaluate the intensity of high interest rates on luxury vehicle purchasing power.",
                ),
                "Implement \"Auto Loan Delinquency\" variables into the automotive sector macro signals.",
                "Retraining Bayesian Layer",
            ),
            _ => Self::build(
                (
                    "Technical Momentum",
                    "Moderate",
                    "Gave too much weight to technical trends while ignoring saturation signs.",
                ),
                (
                    "Insider Trading",
                    "High",
                    "Insider selling was a better leading indicator that wasn't fully reflected.",
                ),
                "Rebalancing technical vs fundamental weighting.",
                "Analyzing divergence patterns",
            ),
        }
    }

    fn build(
        over: (&str, &str, &str),
        under: (&str, &str, &str),
        future_adjustment: &str,
        learning_status: &str,
    ) -> Self {
        let factor = |(signal, impact, reason): (&str, &str, &str)| WeightingFactor {
            signal: signal.to_owned(),
            impact: impact.to_owned(),
            reason: reason.to_owned(),
        };
        Self {
            overweighted: factor(over),
            underweighted: factor(under),
            future_adjustment: future_adjustment.to_owned(),
            learning_status: learning_status.to_owned(),
        }
    }

    /// Roadmap sentence shown under the factors.
    pub fn roadmap(&self) -> String {
        format!("\"Moving forward, {}\"", self.future_adjustment)
    }
}
