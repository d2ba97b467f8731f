use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Interval between periodic price ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(15);

/// Simulated feed latency applied to a periodic tick
pub const DEFAULT_TICK_LATENCY: Duration = Duration::from_millis(500);

/// Simulated feed latency applied to a manual refresh
pub const DEFAULT_REFRESH_LATENCY: Duration = Duration::from_millis(1000);

/// Maximum absolute price move per cycle, in percent
pub const DEFAULT_PRICE_NOISE_PCT: Decimal = dec!(2);

/// Floor applied to simulated prices
pub const DEFAULT_MIN_PRICE: Decimal = dec!(0.01);

/// Decimal places kept on simulated prices
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Resolution of a simulated price move: one step is 0.0001%.
pub const NOISE_STEPS_PER_PERCENT: i64 = 10_000;

/// Largest quantity a single holding may carry
pub const MAX_HOLDING_QUANTITY: u64 = 1_000_000_000_000;

/// Smallest accepted average or current price
pub const MIN_HOLDING_PRICE: Decimal = dec!(0.0001);

/// Largest accepted average or current price. Simulated prices are capped here.
pub const MAX_HOLDING_PRICE: Decimal = dec!(1000000000);
