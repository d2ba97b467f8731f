use rust_decimal::Decimal;

use crate::portfolio::holdings::Holding;
use crate::utils::math_utils::percent_of;

use super::ValuedHolding;

/// Values every holding and assigns portfolio weights.
///
/// Weights are computed against the value total of this same list, so they
/// always sum to 100 for a non-empty portfolio with positive value. A
/// portfolio worth nothing gets zero weights.
pub fn value_holdings(holdings: &[Holding]) -> Vec<ValuedHolding> {
    let mut valued: Vec<ValuedHolding> = holdings.iter().map(value_holding).collect();

    let total_value: Decimal = valued.iter().map(|v| v.total_value).sum();
    for item in &mut valued {
        item.weight = percent_of(item.total_value, total_value);
    }
    valued
}

/// Values one holding. The weight is left at zero; it depends on the whole list.
pub fn value_holding(holding: &Holding) -> ValuedHolding {
    let total_value = holding.market_value();
    let invested = holding.invested();
    let total_pnl = total_value - invested;

    ValuedHolding {
        holding: holding.clone(),
        total_value,
        invested,
        total_pnl,
        total_pnl_pct: percent_of(total_pnl, invested),
        weight: Decimal::ZERO,
    }
}
