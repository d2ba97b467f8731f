use std::sync::{Mutex, PoisonError};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{MAX_HOLDING_PRICE, NOISE_STEPS_PER_PERCENT, PRICE_DECIMAL_PLACES};
use crate::errors::{Error, Result};
use crate::portfolio::holdings::Holding;
use crate::settings::SimulatorSettings;
use crate::utils::math_utils::percent_of;

/// Produces the next simulated market state for a holding.
pub trait PriceSimulator: Send + Sync {
    /// Returns a moved copy of `holding`; the input is left as is.
    fn simulate(&self, holding: &Holding) -> Holding;

    fn simulate_all(&self, holdings: &[Holding]) -> Vec<Holding> {
        holdings.iter().map(|h| self.simulate(h)).collect()
    }
}

/// Moves a holding's price by `change_pct` percent.
///
/// The new price is rounded to paise, floored at `min_price` and capped at
/// [`MAX_HOLDING_PRICE`]. Day change
/// covers this move only; it replaces whatever the holding carried before.
pub fn apply_price_change(holding: &Holding, change_pct: Decimal, min_price: Decimal) -> Holding {
    let previous_price = holding.current_price;
    let moved = (previous_price * (Decimal::ONE + change_pct / dec!(100)))
        .round_dp(PRICE_DECIMAL_PLACES);
    let current_price = moved.max(min_price).min(MAX_HOLDING_PRICE);
    let day_change = current_price - previous_price;

    Holding {
        current_price,
        day_change,
        day_change_pct: percent_of(day_change, previous_price),
        ..holding.clone()
    }
}

/// Uniform random walk bounded by `SimulatorSettings::max_change_pct`.
pub struct RandomWalkSimulator {
    min_price: Decimal,
    max_steps: i64,
    rng: Mutex<StdRng>,
}

impl RandomWalkSimulator {
    pub fn new(settings: &SimulatorSettings) -> Result<Self> {
        settings.validate()?;
        let max_steps = (settings.max_change_pct * Decimal::from(NOISE_STEPS_PER_PERCENT))
            .trunc()
            .to_i64()
            .ok_or_else(|| {
                Error::InvalidConfigValue(format!(
                    "price noise {} is out of range",
                    settings.max_change_pct
                ))
            })?;
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(
            "Random walk simulator ready: ±{}% per cycle, floor {}, seeded: {}",
            settings.max_change_pct,
            settings.min_price,
            settings.seed.is_some()
        );

        Ok(Self {
            min_price: settings.min_price,
            max_steps,
            rng: Mutex::new(rng),
        })
    }

    /// Draws one move in percent.
    fn draw_change_pct(&self) -> Decimal {
        let steps = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(-self.max_steps..=self.max_steps);
        Decimal::from(steps) / Decimal::from(NOISE_STEPS_PER_PERCENT)
    }
}

impl PriceSimulator for RandomWalkSimulator {
    fn simulate(&self, holding: &Holding) -> Holding {
        let change_pct = self.draw_change_pct();
        apply_price_change(holding, change_pct, self.min_price)
    }
}
