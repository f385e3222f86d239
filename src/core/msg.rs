use serde::{Deserialize, Serialize};

pub mod intel;
pub mod system;
pub mod ui;

use intel::IntelMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // UI operations (delegated to UiState)
    Ui(UiMsg),

    // Live intel operations (coordinated across MarketState, IntelState and UiState)
    Intel(IntelMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Ui(msg) => msg.is_frequent(),
            Msg::Intel(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::state::ui::Tab;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Ui(UiMsg::SelectTab(Tab::Accuracy)).is_frequent());
        assert!(!Msg::Intel(IntelMsg::Refresh).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(Msg::Ui(UiMsg::NextTab), Msg::Ui(UiMsg::PrevTab));
    }

    #[test]
    fn test_msg_serialization() -> color_eyre::Result<()> {
        let msg = Msg::System(SystemMsg::SetStatus("test".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
