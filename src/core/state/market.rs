use crate::domain::{
    analysis::MissAnalysis,
    history::{self, ForecastPoint, Resolution},
    probability::StockProbability,
    situation::{situational_metrics, SituationalMetric},
    ticker::Ticker,
};

/// Mock view models derived from the ticker. Recomputed whenever the ticker changes.
#[derive(Debug, Clone)]
pub struct MarketState {
    pub ticker: Ticker,
    pub probability: StockProbability,
    pub history: Vec<ForecastPoint>,
    pub miss_analysis: MissAnalysis,
    pub metrics: Vec<SituationalMetric>,
}

impl MarketState {
    pub fn for_ticker(ticker: Ticker) -> Self {
        Self {
            probability: StockProbability::for_ticker(&ticker),
            history: history::history(&ticker),
            miss_analysis: MissAnalysis::for_ticker(&ticker),
            metrics: situational_metrics(),
            ticker,
        }
    }

    /// Hit rate over the full series, independent of the visible window.
    pub fn accuracy(&self) -> f64 {
        history::accuracy(&self.history)
    }

    pub fn visible_history(&self, resolution: Resolution) -> &[ForecastPoint] {
        resolution.window(&self.history)
    }
}

impl Default for MarketState {
    fn default() -> Self {
        Self::for_ticker(Ticker::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_for_ticker_is_consistent() {
        let ticker = Ticker::parse("AAPL").expect("valid ticker");
        let market = MarketState::for_ticker(ticker.clone());

        assert_eq!(market.probability.ticker, ticker);
        assert_eq!(market.history, history::history(&ticker));
        assert_eq!(market.metrics.len(), 6);
    }

    #[test]
    fn test_visible_history_follows_resolution() {
        let market = MarketState::default();
        assert_eq!(market.visible_history(Resolution::Week).len(), 7);
        assert_eq!(market.visible_history(Resolution::Month).len(), 30);
        assert_eq!(market.visible_history(Resolution::Year).len(), 30);
    }

    #[test]
    fn test_accuracy_uses_full_series() {
        let market = MarketState::default();
        assert_eq!(market.accuracy(), history::accuracy(&market.history));
    }
}
