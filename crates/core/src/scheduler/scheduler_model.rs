use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::portfolio::summary::PortfolioView;

/// What started an update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateTrigger {
    /// Fixed-interval timer
    Periodic,
    /// `UpdateScheduler::refresh`
    Manual,
}

impl UpdateTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateTrigger::Periodic => "periodic",
            UpdateTrigger::Manual => "manual",
        }
    }
}

/// Session update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdatePhase {
    Idle,
    /// A cycle is in flight or a manual refresh is waiting for one.
    Loading,
}

/// Consistent read of the session: the derived view plus update status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(flatten)]
    pub view: PortfolioView,
    pub phase: UpdatePhase,
    pub is_loading: bool,
    /// `None` until the first cycle completes
    pub last_updated: Option<DateTime<Utc>>,
    pub completed_cycles: u64,
}
