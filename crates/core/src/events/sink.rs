//! Portfolio event sink trait and implementations.

use std::sync::{Arc, Mutex, PoisonError};

use super::PortfolioEvent;

/// Receives portfolio events from the scheduler.
///
/// `emit()` is called from the scheduler's worker task and must not block.
/// A failing sink must not affect the update cycle.
pub trait PortfolioEventSink: Send + Sync {
    /// Emit a single portfolio event.
    fn emit(&self, event: PortfolioEvent);

    /// Emit multiple portfolio events.
    fn emit_batch(&self, events: Vec<PortfolioEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Discards every event.
#[derive(Clone, Default)]
pub struct NoOpPortfolioEventSink;

impl PortfolioEventSink for NoOpPortfolioEventSink {
    fn emit(&self, _event: PortfolioEvent) {}
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockPortfolioEventSink {
    events: Arc<Mutex<Vec<PortfolioEvent>>>,
}

impl MockPortfolioEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<PortfolioEvent> {
        self.lock().clone()
    }

    /// Returns only the completed-cycle events.
    pub fn completed(&self) -> Vec<PortfolioEvent> {
        self.lock()
            .iter()
            .filter(|e| matches!(e, PortfolioEvent::UpdateCompleted { .. }))
            .cloned()
            .collect()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<PortfolioEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PortfolioEventSink for MockPortfolioEventSink {
    fn emit(&self, event: PortfolioEvent) {
        self.lock().push(event);
    }
}
