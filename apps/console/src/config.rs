use std::str::FromStr;
use std::time::Duration;

use tickfolio_core::settings::{EngineSettings, SchedulerSettings, SimulatorSettings};
use tickfolio_core::{Error, Result};

pub struct Config {
    pub engine: EngineSettings,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = EngineSettings::default();

        let scheduler = SchedulerSettings {
            tick_interval: millis_or(
                &lookup,
                "TF_TICK_INTERVAL_MS",
                defaults.scheduler.tick_interval,
            )?,
            tick_latency: millis_or(
                &lookup,
                "TF_TICK_LATENCY_MS",
                defaults.scheduler.tick_latency,
            )?,
            refresh_latency: millis_or(
                &lookup,
                "TF_REFRESH_LATENCY_MS",
                defaults.scheduler.refresh_latency,
            )?,
        };
        let simulator = SimulatorSettings {
            max_change_pct: parse_or(
                &lookup,
                "TF_PRICE_NOISE_PCT",
                defaults.simulator.max_change_pct,
            )?,
            min_price: parse_or(&lookup, "TF_MIN_PRICE", defaults.simulator.min_price)?,
            seed: parse_opt::<u64, _>(&lookup, "TF_SIM_SEED")?,
        };
        let engine = EngineSettings {
            scheduler,
            simulator,
        };
        engine.validate()?;

        let log_format = lookup("TF_LOG_FORMAT").unwrap_or_else(|| "text".to_string());
        Ok(Self { engine, log_format })
    }
}

fn millis_or<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_opt::<u64, _>(lookup, key)?
        .map(Duration::from_millis)
        .unwrap_or(default))
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

fn parse_opt<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::InvalidConfigValue(format!("{}={}: {}", key, raw, e))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.engine, EngineSettings::default());
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config(&[
            ("TF_TICK_INTERVAL_MS", "5000"),
            ("TF_REFRESH_LATENCY_MS", "250"),
            ("TF_PRICE_NOISE_PCT", "0.5"),
            ("TF_SIM_SEED", "99"),
            ("TF_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.engine.scheduler.tick_interval, Duration::from_secs(5));
        assert_eq!(config.engine.scheduler.refresh_latency, Duration::from_millis(250));
        assert_eq!(config.engine.simulator.max_change_pct, dec!(0.5));
        assert_eq!(config.engine.simulator.seed, Some(99));
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn test_unparseable_value_is_rejected() {
        let result = config(&[("TF_TICK_INTERVAL_MS", "soon")]);
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_invalid_combination_is_rejected() {
        let result = config(&[("TF_TICK_INTERVAL_MS", "100")]);
        assert!(result.is_err());
    }
}
