//! Periodic and on-demand price update cycles.
//!
//! One worker task runs every cycle, so the holding list has a single writer.
//! A periodic tick that comes due while a cycle is in flight is dropped.
//! Manual refreshes that arrive during a cycle are coalesced into one
//! follow-up cycle.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use uuid::Uuid;

use crate::errors::Result;
use crate::events::{PortfolioEvent, PortfolioEventSink};
use crate::market::PriceSimulator;
use crate::portfolio::holdings::HoldingStore;
use crate::portfolio::summary::portfolio_summary;
use crate::portfolio::valuation::value_holdings;
use crate::settings::SchedulerSettings;

use super::{PortfolioSession, PortfolioSnapshot, UpdateTrigger};

#[derive(Debug)]
enum SchedulerCommand {
    Refresh,
    Shutdown,
}

/// Owns a portfolio session and drives its update cycles.
pub struct UpdateScheduler {
    session: Arc<PortfolioSession>,
    commands: mpsc::UnboundedSender<SchedulerCommand>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl UpdateScheduler {
    /// Starts the worker. Must be called from within a Tokio runtime.
    ///
    /// The first periodic tick fires one `tick_interval` after this call.
    pub fn start(
        store: HoldingStore,
        simulator: Arc<dyn PriceSimulator>,
        events: Arc<dyn PortfolioEventSink>,
        settings: SchedulerSettings,
    ) -> Result<Self> {
        settings.validate()?;

        let session = Arc::new(PortfolioSession::new(store));
        let (commands, rx) = mpsc::unbounded_channel();

        let mut ticker = time::interval_at(
            Instant::now() + settings.tick_interval,
            settings.tick_interval,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            "Update scheduler started: {} holdings, tick every {:?}",
            session.store().len(),
            settings.tick_interval
        );

        let worker = Worker {
            session: session.clone(),
            simulator,
            events,
            settings,
        };
        let handle = tokio::spawn(worker.run(rx, ticker));

        Ok(Self {
            session,
            commands,
            worker: Mutex::new(Some(handle)),
        })
    }

    pub fn session(&self) -> &Arc<PortfolioSession> {
        &self.session
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        self.session.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// Requests a manual refresh. The session reports Loading as soon as this
    /// returns; the result shows up on the read surface after the refresh
    /// latency.
    pub fn refresh(&self) {
        self.session.request_refresh();
        if self.commands.send(SchedulerCommand::Refresh).is_err() {
            self.session.withdraw_refresh();
            warn!("Manual refresh ignored: update scheduler is stopped");
        }
    }

    /// Stops the periodic timer and waits for the worker to exit.
    ///
    /// Manual refreshes requested before this call still complete.
    pub async fn shutdown(&self) {
        let handle = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(handle) = handle else {
            return;
        };

        let _ = self.commands.send(SchedulerCommand::Shutdown);
        if let Err(e) = handle.await {
            warn!("Update scheduler worker ended abnormally: {}", e);
        }
        info!("Update scheduler stopped");
    }
}

struct Worker {
    session: Arc<PortfolioSession>,
    simulator: Arc<dyn PriceSimulator>,
    events: Arc<dyn PortfolioEventSink>,
    settings: SchedulerSettings,
}

impl Worker {
    async fn run(self, mut rx: mpsc::UnboundedReceiver<SchedulerCommand>, mut ticker: Interval) {
        let mut last_cycle_end: Option<Instant> = None;

        loop {
            tokio::select! {
                biased;

                command = rx.recv() => match command {
                    Some(SchedulerCommand::Refresh) => {
                        let (coalesced, stop) = drain_refreshes(&mut rx);
                        self.run_cycle(UpdateTrigger::Manual, 1 + coalesced).await;
                        last_cycle_end = Some(Instant::now());
                        if stop {
                            break;
                        }
                    }
                    Some(SchedulerCommand::Shutdown) | None => break,
                },

                scheduled = ticker.tick() => {
                    if last_cycle_end.is_some_and(|end| scheduled < end) {
                        warn!("Periodic tick skipped: came due during an in-flight cycle");
                        self.events.emit(PortfolioEvent::trigger_skipped(
                            UpdateTrigger::Periodic,
                            "cycle in flight",
                        ));
                        continue;
                    }
                    self.run_cycle(UpdateTrigger::Periodic, 0).await;
                    last_cycle_end = Some(Instant::now());
                }
            }
        }

        // No new commands from here on; requests that made it in still run.
        rx.close();
        let (remaining, _) = drain_refreshes(&mut rx);
        if remaining > 0 {
            self.run_cycle(UpdateTrigger::Manual, remaining).await;
        }
        debug!("Update scheduler worker exiting");
    }

    /// Loading → sleep → simulate → swap → Idle.
    async fn run_cycle(&self, trigger: UpdateTrigger, refreshes: usize) {
        let cycle_id = Uuid::now_v7();
        self.session.begin_cycle(refreshes);
        self.events
            .emit(PortfolioEvent::update_started(cycle_id, trigger));
        debug!(
            "Cycle {} ({}) started, serving {} refresh request(s)",
            cycle_id,
            trigger.as_str(),
            refreshes
        );

        time::sleep(self.latency(trigger)).await;

        let current = self.session.raw_holdings();
        let updated = self.simulator.simulate_all(&current);
        let summary = portfolio_summary(&value_holdings(&updated));
        let updated_at = Utc::now();
        self.session.complete_cycle(updated, updated_at);

        debug!(
            "Cycle {} ({}) applied: total value {}",
            cycle_id,
            trigger.as_str(),
            summary.total_value
        );
        self.events.emit(PortfolioEvent::update_completed(
            cycle_id, trigger, updated_at, summary,
        ));
    }

    fn latency(&self, trigger: UpdateTrigger) -> std::time::Duration {
        match trigger {
            UpdateTrigger::Periodic => self.settings.tick_latency,
            UpdateTrigger::Manual => self.settings.refresh_latency,
        }
    }
}

/// Collects refresh commands already queued. Returns how many were found and
/// whether a shutdown was queued among them.
fn drain_refreshes(rx: &mut mpsc::UnboundedReceiver<SchedulerCommand>) -> (usize, bool) {
    let mut refreshes = 0;
    let mut stop = false;
    while let Ok(command) = rx.try_recv() {
        match command {
            SchedulerCommand::Refresh => refreshes += 1,
            SchedulerCommand::Shutdown => stop = true,
        }
    }
    (refreshes, stop)
}
