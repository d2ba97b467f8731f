use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_HOLDING_PRICE, MAX_HOLDING_QUANTITY, MIN_HOLDING_PRICE};
use crate::errors::{Result, ValidationError};

/// Reference data shown next to a position. Never used in arithmetic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Fundamentals {
    /// Display label, e.g. "15.2L Cr"
    pub market_cap: String,
    pub pe_ratio: Decimal,
    /// Dividend yield in percent
    pub dividend: Decimal,
    pub beta: Decimal,
}

/// One stock position: identity, position data and the latest simulated
/// market state.
///
/// Value, P&L and weight are not stored. They are derived from this
/// struct by [`crate::portfolio::valuation::value_holdings`] on every read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    // Core identification
    pub id: String,
    pub symbol: String,
    pub company: String,
    pub sector: String,

    // Position data
    pub quantity: u64,
    pub avg_price: Decimal,

    // Market state
    pub current_price: Decimal,
    pub day_change: Decimal,
    pub day_change_pct: Decimal,

    pub fundamentals: Fundamentals,
}

impl Holding {
    /// Builds a validated holding with no day change yet.
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        company: impl Into<String>,
        sector: impl Into<String>,
        quantity: u64,
        avg_price: Decimal,
        current_price: Decimal,
    ) -> Result<Self> {
        let holding = Holding {
            id: id.into(),
            symbol: symbol.into(),
            company: company.into(),
            sector: sector.into(),
            quantity,
            avg_price,
            current_price,
            day_change: Decimal::ZERO,
            day_change_pct: Decimal::ZERO,
            fundamentals: Fundamentals::default(),
        };
        holding.validate()?;
        Ok(holding)
    }

    pub fn with_fundamentals(mut self, fundamentals: Fundamentals) -> Self {
        self.fundamentals = fundamentals;
        self
    }

    /// Seeds the day change, e.g. from the previous close in static data.
    pub fn with_day_change(mut self, day_change: Decimal, day_change_pct: Decimal) -> Self {
        self.day_change = day_change;
        self.day_change_pct = day_change_pct;
        self
    }

    /// Checks the preconditions the aggregation relies on.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.sector.trim().is_empty() {
            return Err(ValidationError::MissingField("sector".to_string()).into());
        }
        if self.quantity > MAX_HOLDING_QUANTITY {
            return Err(ValidationError::InvalidInput(format!(
                "Quantity for {} must be at most {}, got {}",
                self.symbol, MAX_HOLDING_QUANTITY, self.quantity
            ))
            .into());
        }
        check_price_range(&self.symbol, "Average", self.avg_price)?;
        check_price_range(&self.symbol, "Current", self.current_price)?;
        Ok(())
    }

    /// quantity × avg price
    pub fn invested(&self) -> Decimal {
        Decimal::from(self.quantity) * self.avg_price
    }

    /// quantity × current price
    pub fn market_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.current_price
    }
}

fn check_price_range(symbol: &str, label: &str, price: Decimal) -> Result<()> {
    if price < MIN_HOLDING_PRICE || price > MAX_HOLDING_PRICE {
        return Err(ValidationError::InvalidInput(format!(
            "{} price for {} must be within [{}, {}], got {}",
            label, symbol, MIN_HOLDING_PRICE, MAX_HOLDING_PRICE, price
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_holding_starts_without_day_change() {
        let holding = Holding::new("1", "TCS", "Tata Consultancy", "IT", 10, dec!(3200), dec!(3500))
            .unwrap();
        assert_eq!(holding.day_change, Decimal::ZERO);
        assert_eq!(holding.market_value(), dec!(35000));
        assert_eq!(holding.invested(), dec!(32000));
    }

    #[test]
    fn test_rejects_non_positive_avg_price() {
        let result = Holding::new("1", "TCS", "Tata Consultancy", "IT", 10, dec!(0), dec!(3500));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_rejects_non_positive_current_price() {
        let result = Holding::new("1", "TCS", "Tata Consultancy", "IT", 10, dec!(3200), dec!(-1));
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_rejects_blank_sector() {
        let result = Holding::new("1", "TCS", "Tata Consultancy", "  ", 10, dec!(3200), dec!(3500));
        match result {
            Err(Error::Validation(ValidationError::MissingField(field))) => {
                assert_eq!(field, "sector")
            }
            other => panic!("Expected missing sector, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_quantity_above_limit() {
        let result = Holding::new(
            "1",
            "TCS",
            "Tata Consultancy",
            "IT",
            u64::MAX,
            dec!(1),
            dec!(10000000000),
        );
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_rejects_prices_outside_range() {
        let tiny_avg = Decimal::new(1, 28);
        let tiny = Holding::new("1", "TCS", "Tata Consultancy", "IT", 1, tiny_avg, dec!(10));
        assert!(matches!(tiny, Err(Error::Validation(_))));

        let huge = Holding::new("1", "TCS", "Tata Consultancy", "IT", 1, dec!(10), dec!(1e20));
        assert!(matches!(huge, Err(Error::Validation(_))));
    }

    #[test]
    fn test_accepts_prices_on_the_limits() {
        let holding = Holding::new(
            "1",
            "TCS",
            "Tata Consultancy",
            "IT",
            MAX_HOLDING_QUANTITY,
            MIN_HOLDING_PRICE,
            MAX_HOLDING_PRICE,
        );
        assert!(holding.is_ok());
    }

    #[test]
    fn test_zero_quantity_is_allowed() {
        let holding =
            Holding::new("1", "TCS", "Tata Consultancy", "IT", 0, dec!(3200), dec!(3500)).unwrap();
        assert_eq!(holding.market_value(), Decimal::ZERO);
    }

    #[test]
    fn test_serializes_camel_case() {
        let holding =
            Holding::new("1", "TCS", "Tata Consultancy", "IT", 10, dec!(3200), dec!(3500)).unwrap();
        let json = serde_json::to_string(&holding).unwrap();
        assert!(json.contains("\"avgPrice\""));
        assert!(json.contains("\"dayChangePct\""));
    }
}
