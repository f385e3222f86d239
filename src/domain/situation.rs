use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum MetricStatus {
    Normal,
    Marginal,
    Critical,
    Live,
}

/// A high-frequency indicator shown in the situation room grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationalMetric {
    pub id: String,
    pub title: String,
    /// Single-cell glyph drawn beside the title.
    pub icon: String,
    pub subtitle: String,
    /// Why the indicator matters.
    pub impact: String,
    pub value: String,
    pub percentage: Option<String>,
    pub status: MetricStatus,
    pub trend: Vec<u64>,
    /// Accent color as a hex string.
    pub color: String,
}

impl SituationalMetric {
    /// Headline figure: the percentage when present, the raw value otherwise.
    pub fn headline(&self) -> &str {
        self.percentage.as_deref().unwrap_or(&self.value)
    }

    /// Trend rescaled to `0..=height` using the series min/max.
    pub fn normalized_trend(&self, height: u64) -> Vec<u64> {
        let min = self.trend.iter().copied().min().unwrap_or(0);
        let max = self.trend.iter().copied().max().unwrap_or(0);
        let range = (max - min).max(1);
        self.trend
            .iter()
            .map(|v| (v - min) * height / range)
            .collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn metric(
    id: &str,
    title: &str,
    icon: &str,
    subtitle: &str,
    impact: &str,
    value: &str,
    percentage: &str,
    status: MetricStatus,
    trend: [u64; 7],
    color: &str,
) -> SituationalMetric {
    SituationalMetric {
        id: id.to_owned(),
        title: title.to_owned(),
        icon: icon.to_owned(),
        subtitle: subtitle.to_owned(),
        impact: impact.to_owned(),
        value: value.to_owned(),
        percentage: Some(percentage.to_owned()),
        status,
        trend: trend.to_vec(),
        color: color.to_owned(),
    }
}

/// The fixed indicator set. Values are simulated and do not depend on the ticker.
pub fn situational_metrics() -> Vec<SituationalMetric> {
    vec![
        metric(
            "dark-pool",
            "Dark Pool Flow",
            "◐",
            "Institutional off-exchange volume",
            "Detects hidden large-scale whale movements not visible on public charts. High flow suggests major institutional entry.",
            "42%",
            "42%",
            MetricStatus::Live,
            [30, 35, 32, 45, 48, 42, 42],
            "#3b82f6",
        ),
        metric(
            "gamma",
            "Gamma Exposure (GEX)",
            "∿",
            "Options dealer positioning delta",
            "Measures market maker hedging pressure. High positive GEX dampens volatility; negative GEX fuels explosive price swings.",
            "High",
            "88%",
            MetricStatus::Live,
            [60, 65, 75, 80, 85, 90, 88],
            "#10b981",
        ),
        metric(
            "insider",
            "Insider Velocity",
            "♜",
            "SEC Form 4 filing frequency",
            "Analyzes the rate of buy/sell filings by executives. A spike in buying velocity is a massive conviction signal.",
            "Low",
            "12%",
            MetricStatus::Live,
            [10, 15, 12, 8, 10, 14, 12],
            "#ef4444",
        ),
        metric(
            "social-buzz",
            "Sentiment Velocity",
            "✉",
            "Reddit/X mention acceleration",
            "Tracks the viral spread of ticker mentions. Useful for spotting retail-driven momentum shifts before price action starts.",
            "Extreme",
            "94%",
            MetricStatus::Critical,
            [20, 45, 60, 85, 95, 98, 94],
            "#f43f5e",
        ),
        metric(
            "whale-orders",
            "Whale Alert",
            "≋",
            "Block trades > $5M detected",
            "Single orders that shift supply/demand. Identifying repeated $5M+ orders indicates a large player is building a position.",
            "3 Items",
            "75%",
            MetricStatus::Live,
            [40, 30, 50, 60, 80, 70, 75],
            "#3b82f6",
        ),
        metric(
            "yield-curve",
            "Yield Delta",
            "↗",
            "10Y-2Y Spread pressure",
            "The macro \"Engine Room\". Changes in the yield curve spread affect equity valuations and risk-on/risk-off cycles.",
            "Stable",
            "24%",
            MetricStatus::Normal,
            [20, 22, 25, 23, 24, 25, 24],
            "#f59e0b",
        ),
    ]
}
