//! Explicitly owned state of one portfolio session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::portfolio::allocation::SectorSummary;
use crate::portfolio::holdings::{Holding, HoldingStore};
use crate::portfolio::summary::{
    build_portfolio_view, PortfolioHighlights, PortfolioSummary, PortfolioView,
};
use crate::portfolio::valuation::{value_holdings, ValuedHolding};

use super::{PortfolioSnapshot, UpdatePhase};

#[derive(Debug, Default)]
struct CycleState {
    in_flight: bool,
    pending_refreshes: usize,
    last_updated: Option<DateTime<Utc>>,
    completed_cycles: u64,
}

impl CycleState {
    fn phase(&self) -> UpdatePhase {
        if self.in_flight || self.pending_refreshes > 0 {
            UpdatePhase::Loading
        } else {
            UpdatePhase::Idle
        }
    }
}

/// Holding store plus update status for one session.
///
/// Every derived figure is recomputed from the current holding list on read.
/// Lock order is cycle state, then store; a cycle swaps the list and stamps
/// the time under the cycle lock so a snapshot never mixes the two.
#[derive(Debug)]
pub struct PortfolioSession {
    store: HoldingStore,
    cycle: Mutex<CycleState>,
}

impl PortfolioSession {
    pub fn new(store: HoldingStore) -> Self {
        Self {
            store,
            cycle: Mutex::new(CycleState::default()),
        }
    }

    pub fn store(&self) -> &HoldingStore {
        &self.store
    }

    /// Raw holding list as last published.
    pub fn raw_holdings(&self) -> Arc<Vec<Holding>> {
        self.store.current()
    }

    pub fn holdings(&self) -> Vec<ValuedHolding> {
        value_holdings(&self.store.current())
    }

    pub fn portfolio_summary(&self) -> PortfolioSummary {
        self.view().summary
    }

    pub fn sector_summaries(&self) -> Vec<SectorSummary> {
        self.view().sectors
    }

    pub fn highlights(&self) -> PortfolioHighlights {
        self.view().highlights
    }

    pub fn view(&self) -> PortfolioView {
        build_portfolio_view(&self.store.current())
    }

    pub fn phase(&self) -> UpdatePhase {
        self.lock_cycle().phase()
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == UpdatePhase::Loading
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.lock_cycle().last_updated
    }

    pub fn completed_cycles(&self) -> u64 {
        self.lock_cycle().completed_cycles
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        let (holdings, phase, last_updated, completed_cycles) = {
            let cycle = self.lock_cycle();
            (
                self.store.current(),
                cycle.phase(),
                cycle.last_updated,
                cycle.completed_cycles,
            )
        };

        PortfolioSnapshot {
            view: build_portfolio_view(&holdings),
            phase,
            is_loading: phase == UpdatePhase::Loading,
            last_updated,
            completed_cycles,
        }
    }

    pub(crate) fn request_refresh(&self) {
        self.lock_cycle().pending_refreshes += 1;
    }

    pub(crate) fn withdraw_refresh(&self) {
        let mut cycle = self.lock_cycle();
        cycle.pending_refreshes = cycle.pending_refreshes.saturating_sub(1);
    }

    /// Enters Loading for a cycle that serves `refreshes` manual requests.
    pub(crate) fn begin_cycle(&self, refreshes: usize) {
        let mut cycle = self.lock_cycle();
        cycle.in_flight = true;
        cycle.pending_refreshes = cycle.pending_refreshes.saturating_sub(refreshes);
    }

    /// Publishes the new list and leaves the in-flight state.
    pub(crate) fn complete_cycle(&self, holdings: Vec<Holding>, updated_at: DateTime<Utc>) {
        let mut cycle = self.lock_cycle();
        self.store.replace(holdings);
        cycle.last_updated = Some(updated_at);
        cycle.completed_cycles += 1;
        cycle.in_flight = false;
    }

    fn lock_cycle(&self) -> MutexGuard<'_, CycleState> {
        self.cycle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
