use rust_decimal::Decimal;

use crate::portfolio::allocation::{sector_summaries, SectorSummary};
use crate::portfolio::holdings::Holding;
use crate::portfolio::valuation::{value_holdings, ValuedHolding};
use crate::utils::math_utils::percent_of;

use super::{HoldingHighlight, PortfolioHighlights, PortfolioSummary, PortfolioView};

/// Runs the full aggregation over one holding list.
pub fn build_portfolio_view(holdings: &[Holding]) -> PortfolioView {
    let valued = value_holdings(holdings);
    let summary = portfolio_summary(&valued);
    let sectors = sector_summaries(&valued, summary.total_value);
    let highlights = portfolio_highlights(&valued, &sectors);

    PortfolioView {
        holdings: valued,
        summary,
        sectors,
        highlights,
    }
}

/// Totals across all valued holdings. Zeroed for an empty list.
pub fn portfolio_summary(holdings: &[ValuedHolding]) -> PortfolioSummary {
    let total_value: Decimal = holdings.iter().map(|v| v.total_value).sum();
    let total_invested: Decimal = holdings.iter().map(|v| v.invested).sum();
    let total_pnl = total_value - total_invested;
    let day_change: Decimal = holdings
        .iter()
        .map(|v| v.holding.day_change * Decimal::from(v.holding.quantity))
        .sum();

    PortfolioSummary {
        total_value,
        total_invested,
        total_pnl,
        total_pnl_pct: percent_of(total_pnl, total_invested),
        day_change,
        day_change_pct: percent_of(day_change, total_value - day_change),
    }
}

/// Best performer and largest position. Ties go to the earlier holding.
pub fn portfolio_highlights(
    holdings: &[ValuedHolding],
    sectors: &[SectorSummary],
) -> PortfolioHighlights {
    let best_performer = first_max_by(holdings, |v| v.total_pnl_pct)
        .map(|v| HoldingHighlight::from_valued(v, v.total_pnl_pct));
    let largest_position =
        first_max_by(holdings, |v| v.weight).map(|v| HoldingHighlight::from_valued(v, v.weight));

    PortfolioHighlights {
        best_performer,
        largest_position,
        sector_count: sectors.len(),
        holding_count: holdings.len(),
    }
}

fn first_max_by<F>(holdings: &[ValuedHolding], key: F) -> Option<&ValuedHolding>
where
    F: Fn(&ValuedHolding) -> Decimal,
{
    holdings.iter().fold(None, |best, candidate| match best {
        Some(current) if key(current) >= key(candidate) => Some(current),
        _ => Some(candidate),
    })
}
