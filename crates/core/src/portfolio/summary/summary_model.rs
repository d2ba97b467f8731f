use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::SectorSummary;
use crate::portfolio::valuation::ValuedHolding;

/// Portfolio-wide totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub total_pnl: Decimal,
    pub total_pnl_pct: Decimal,
    /// Sum of day change × quantity
    pub day_change: Decimal,
    /// Day change against the implied prior value (total value - day change)
    pub day_change_pct: Decimal,
}

/// A single holding singled out by a highlight rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingHighlight {
    pub id: String,
    pub symbol: String,
    pub company: String,
    /// The figure the holding won on (P&L % or weight)
    pub metric: Decimal,
}

impl HoldingHighlight {
    pub(crate) fn from_valued(valued: &ValuedHolding, metric: Decimal) -> Self {
        Self {
            id: valued.holding.id.clone(),
            symbol: valued.holding.symbol.clone(),
            company: valued.holding.company.clone(),
            metric,
        }
    }
}

/// Headline figures shown above the holdings table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHighlights {
    /// Highest total P&L %
    pub best_performer: Option<HoldingHighlight>,
    /// Highest weight
    pub largest_position: Option<HoldingHighlight>,
    pub sector_count: usize,
    pub holding_count: usize,
}

/// Everything derived from one holding list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub holdings: Vec<ValuedHolding>,
    pub summary: PortfolioSummary,
    pub sectors: Vec<SectorSummary>,
    pub highlights: PortfolioHighlights,
}
