//! Portfolio event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::portfolio::summary::PortfolioSummary;
use crate::scheduler::UpdateTrigger;

/// Events emitted by the update scheduler as cycles run.
///
/// A cycle's `UpdateStarted` and `UpdateCompleted` share one `cycle_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PortfolioEvent {
    /// A trigger was accepted and the session entered Loading.
    UpdateStarted {
        cycle_id: Uuid,
        trigger: UpdateTrigger,
        started_at: DateTime<Utc>,
    },

    /// New prices were applied and the holding list swapped in.
    UpdateCompleted {
        cycle_id: Uuid,
        trigger: UpdateTrigger,
        updated_at: DateTime<Utc>,
        summary: PortfolioSummary,
    },

    /// A trigger was dropped because another cycle was in flight.
    TriggerSkipped {
        trigger: UpdateTrigger,
        reason: String,
    },
}

impl PortfolioEvent {
    pub fn update_started(cycle_id: Uuid, trigger: UpdateTrigger) -> Self {
        Self::UpdateStarted {
            cycle_id,
            trigger,
            started_at: Utc::now(),
        }
    }

    pub fn update_completed(
        cycle_id: Uuid,
        trigger: UpdateTrigger,
        updated_at: DateTime<Utc>,
        summary: PortfolioSummary,
    ) -> Self {
        Self::UpdateCompleted {
            cycle_id,
            trigger,
            updated_at,
            summary,
        }
    }

    pub fn trigger_skipped(trigger: UpdateTrigger, reason: impl Into<String>) -> Self {
        Self::TriggerSkipped {
            trigger,
            reason: reason.into(),
        }
    }

    /// Canonical event name, e.g. for a broadcast bus.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateStarted { .. } => "portfolio:update-start",
            Self::UpdateCompleted { .. } => "portfolio:update-complete",
            Self::TriggerSkipped { .. } => "portfolio:trigger-skipped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_portfolio_event_serialization() {
        let cycle_id = Uuid::new_v4();
        let summary = PortfolioSummary {
            total_value: dec!(2100),
            ..Default::default()
        };
        let event =
            PortfolioEvent::update_completed(cycle_id, UpdateTrigger::Manual, Utc::now(), summary);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("update_completed"));
        assert!(json.contains("\"trigger\":\"manual\""));

        let deserialized: PortfolioEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            PortfolioEvent::UpdateCompleted {
                cycle_id: id,
                trigger,
                summary,
                ..
            } => {
                assert_eq!(id, cycle_id);
                assert_eq!(trigger, UpdateTrigger::Manual);
                assert_eq!(summary.total_value, dec!(2100));
            }
            _ => panic!("Expected UpdateCompleted"),
        }
    }

    #[test]
    fn test_event_names() {
        let skipped = PortfolioEvent::trigger_skipped(UpdateTrigger::Periodic, "busy");
        assert_eq!(skipped.name(), "portfolio:trigger-skipped");
        let started = PortfolioEvent::update_started(Uuid::new_v4(), UpdateTrigger::Periodic);
        assert_eq!(started.name(), "portfolio:update-start");
    }
}
