pub mod intel;
pub mod market;
pub mod system;
pub mod ui;

use crate::{domain::ticker::Ticker, infrastructure::config::Config};

pub use intel::IntelState;
pub use market::MarketState;
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub market: MarketState,
    pub intel: IntelState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState showing the mock data for `ticker`
    pub fn new(ticker: Ticker) -> Self {
        Self {
            market: MarketState::for_ticker(ticker),
            ..Default::default()
        }
    }

    /// Initialize AppState with the specified ticker and config
    pub fn new_with_config(ticker: Ticker, config: Config) -> Self {
        Self {
            market: MarketState::for_ticker(ticker),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.market.ticker
    }

    /// Either the search round trip or the model call is in flight.
    pub fn is_busy(&self) -> bool {
        self.ui.search_loading || self.intel.is_loading
    }
}
