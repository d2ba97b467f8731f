mod commands;
mod config;
mod events;
mod main_lib;

use config::Config;
use main_lib::{
    build_event_bus, build_scheduler, init_tracing, join_event_logger, run_console,
    spawn_event_logger,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_format);

    let bus = build_event_bus();
    let logger = spawn_event_logger(&bus);
    let scheduler = build_scheduler(&config, &bus)?;

    let result = run_console(&scheduler).await;

    scheduler.shutdown().await;
    drop(scheduler);
    drop(bus);
    join_event_logger(logger).await;
    result
}
