use std::sync::Arc;

use tickfolio_core::constants::DISPLAY_DECIMAL_PRECISION;
use tickfolio_core::market::RandomWalkSimulator;
use tickfolio_core::portfolio::{seed_holdings, HoldingStore};
use tickfolio_core::scheduler::UpdateScheduler;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::{ConsoleCommand, HELP};
use crate::config::Config;
use crate::events::EventBus;

/// Capacity of the event broadcast channel.
const EVENT_BUS_CAPACITY: usize = 64;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries command output.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_event_bus() -> EventBus {
    EventBus::new(EVENT_BUS_CAPACITY)
}

/// Seeds the session and starts its scheduler.
pub fn build_scheduler(config: &Config, bus: &EventBus) -> anyhow::Result<UpdateScheduler> {
    let store = HoldingStore::new(seed_holdings()?)?;
    tracing::info!("Seeded portfolio with {} holdings", store.len());

    let simulator = Arc::new(RandomWalkSimulator::new(&config.engine.simulator)?);
    let scheduler = UpdateScheduler::start(
        store,
        simulator,
        Arc::new(bus.clone()),
        config.engine.scheduler.clone(),
    )?;
    Ok(scheduler)
}

/// Logs every event published on the bus until it closes.
pub fn spawn_event_logger(bus: &EventBus) -> tokio::task::JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => tracing::info!(event = event.name, payload = %event.payload),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Event logger lagged, {} event(s) dropped", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

/// Waits for the event logger to drain. Returns `false` if it ended abnormally.
pub async fn join_event_logger(logger: tokio::task::JoinHandle<()>) -> bool {
    match logger.await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Event logger ended abnormally: {}", e);
            false
        }
    }
}

/// Reads commands from stdin until `quit`, end of input or Ctrl-C.
pub async fn run_console(scheduler: &UpdateScheduler) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", HELP);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("Input closed");
                    return Ok(());
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<ConsoleCommand>() {
                    Ok(ConsoleCommand::Quit) => return Ok(()),
                    Ok(command) => execute(scheduler, command)?,
                    Err(e) => eprintln!("{}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                return Ok(());
            }
        }
    }
}

fn execute(scheduler: &UpdateScheduler, command: ConsoleCommand) -> anyhow::Result<()> {
    match command {
        ConsoleCommand::Refresh => {
            scheduler.refresh();
            println!("refresh requested");
        }
        ConsoleCommand::Show => {
            println!("{}", serde_json::to_string_pretty(&scheduler.snapshot())?);
        }
        ConsoleCommand::Sectors => {
            let sectors = scheduler.session().sector_summaries();
            println!("{}", serde_json::to_string_pretty(&sectors)?);
        }
        ConsoleCommand::Status => {
            let snapshot = scheduler.snapshot();
            let last_updated = snapshot
                .last_updated
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "--:--:--".to_string());
            println!(
                "loading: {}  last update: {}  value: {}  P&L: {}%",
                snapshot.is_loading,
                last_updated,
                snapshot
                    .view
                    .summary
                    .total_value
                    .round_dp(DISPLAY_DECIMAL_PRECISION),
                snapshot
                    .view
                    .summary
                    .total_pnl_pct
                    .round_dp(DISPLAY_DECIMAL_PRECISION),
            );
        }
        ConsoleCommand::Help => println!("{}", HELP),
        ConsoleCommand::Quit => {}
    }
    Ok(())
}
