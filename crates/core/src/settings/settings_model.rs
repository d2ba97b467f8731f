//! Tunable engine settings.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MIN_PRICE, DEFAULT_PRICE_NOISE_PCT, DEFAULT_REFRESH_LATENCY, DEFAULT_TICK_INTERVAL,
    DEFAULT_TICK_LATENCY, MAX_HOLDING_PRICE, MIN_HOLDING_PRICE,
};
use crate::errors::{Error, Result};

/// Timing of the two update triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerSettings {
    /// Time between periodic ticks. The first tick fires one interval after start.
    pub tick_interval: Duration,
    /// Simulated latency between a tick firing and prices being applied
    pub tick_latency: Duration,
    /// Simulated latency of a manual refresh
    pub refresh_latency: Duration,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            tick_latency: DEFAULT_TICK_LATENCY,
            refresh_latency: DEFAULT_REFRESH_LATENCY,
        }
    }
}

impl SchedulerSettings {
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            return Err(Error::InvalidConfigValue(
                "tick interval must be greater than zero".to_string(),
            ));
        }
        if self.tick_latency >= self.tick_interval {
            return Err(Error::InvalidConfigValue(format!(
                "tick latency {:?} must be shorter than the tick interval {:?}",
                self.tick_latency, self.tick_interval
            )));
        }
        Ok(())
    }
}

/// Shape of the simulated price noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorSettings {
    /// Largest absolute move per cycle, in percent. Moves are drawn uniformly
    /// from `[-max_change_pct, +max_change_pct]`.
    pub max_change_pct: Decimal,
    /// Prices never drop below this value.
    pub min_price: Decimal,
    /// Fixed seed for reproducible sessions. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            max_change_pct: DEFAULT_PRICE_NOISE_PCT,
            min_price: DEFAULT_MIN_PRICE,
            seed: None,
        }
    }
}

impl SimulatorSettings {
    pub fn validate(&self) -> Result<()> {
        if self.max_change_pct < Decimal::ZERO || self.max_change_pct >= dec!(100) {
            return Err(Error::InvalidConfigValue(format!(
                "price noise must be within [0, 100) percent, got {}",
                self.max_change_pct
            )));
        }
        if self.min_price < MIN_HOLDING_PRICE || self.min_price >= MAX_HOLDING_PRICE {
            return Err(Error::InvalidConfigValue(format!(
                "minimum price must be within [{}, {}), got {}",
                MIN_HOLDING_PRICE, MAX_HOLDING_PRICE, self.min_price
            )));
        }
        Ok(())
    }
}

/// Settings for one portfolio session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineSettings {
    pub scheduler: SchedulerSettings,
    pub simulator: SimulatorSettings,
}

impl EngineSettings {
    pub fn validate(&self) -> Result<()> {
        self.scheduler.validate()?;
        self.simulator.validate()
    }
}
