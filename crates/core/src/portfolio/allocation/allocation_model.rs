//! Sector allocation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated figures for every holding that shares one sector label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSummary {
    /// Sector label as written on the holdings
    pub sector: String,
    /// Sum of member values
    pub total_value: Decimal,
    /// Sum of member P&L
    pub total_pnl: Decimal,
    /// P&L against the implied invested amount (value - P&L)
    pub total_pnl_pct: Decimal,
    pub stock_count: usize,
    /// Share of the portfolio value (0-100)
    pub weight: Decimal,
}

impl SectorSummary {
    /// Zeroed summary for a sector label.
    pub fn new(sector: &str) -> Self {
        Self {
            sector: sector.to_string(),
            total_value: Decimal::ZERO,
            total_pnl: Decimal::ZERO,
            total_pnl_pct: Decimal::ZERO,
            stock_count: 0,
            weight: Decimal::ZERO,
        }
    }

    /// Cost basis implied by the summed value and P&L.
    pub fn implied_invested(&self) -> Decimal {
        self.total_value - self.total_pnl
    }
}
