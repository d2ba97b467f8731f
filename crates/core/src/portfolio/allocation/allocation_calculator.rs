//! Groups valued holdings into sector summaries.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use crate::portfolio::valuation::ValuedHolding;
use crate::utils::math_utils::percent_of;

use super::SectorSummary;

/// Builds one summary per distinct sector, largest sector first.
///
/// `portfolio_total_value` is the weight base. Sectors with equal value keep
/// the order in which their first holding appears in the list.
pub fn sector_summaries(
    holdings: &[ValuedHolding],
    portfolio_total_value: Decimal,
) -> Vec<SectorSummary> {
    let mut index_by_sector: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<SectorSummary> = Vec::new();

    for valued in holdings {
        let sector = valued.holding.sector.as_str();
        let idx = *index_by_sector.entry(sector).or_insert_with(|| {
            summaries.push(SectorSummary::new(sector));
            summaries.len() - 1
        });

        let summary = &mut summaries[idx];
        summary.total_value += valued.total_value;
        summary.total_pnl += valued.total_pnl;
        summary.stock_count += 1;
    }

    for summary in &mut summaries {
        summary.total_pnl_pct = percent_of(summary.total_pnl, summary.implied_invested());
        summary.weight = percent_of(summary.total_value, portfolio_total_value);
    }

    // Stable: ties keep first-occurrence order
    summaries.sort_by(|a, b| b.total_value.cmp(&a.total_value));

    debug!(
        "Aggregated {} holdings into {} sectors",
        holdings.len(),
        summaries.len()
    );
    summaries
}
