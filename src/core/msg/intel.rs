use serde::{Deserialize, Serialize};

use crate::domain::{intel::IntelReport, ticker::Ticker};

/// Messages driving the live intel lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IntelMsg {
    /// Switch the dashboard to `ticker` and start a fetch.
    ChangeTicker(Ticker),
    /// Re-fetch the current ticker.
    Refresh,
    Loaded {
        request_id: u64,
        report: IntelReport,
    },
    Failed {
        request_id: u64,
        error: String,
    },
}

impl IntelMsg {
    /// Request id carried by a reply, if this is one.
    pub fn request_id(&self) -> Option<u64> {
        match self {
            IntelMsg::Loaded { request_id, .. } | IntelMsg::Failed { request_id, .. } => {
                Some(*request_id)
            }
            IntelMsg::ChangeTicker(_) | IntelMsg::Refresh => None,
        }
    }
}
