use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::Holding;

/// A holding together with the figures derived from it in one valuation pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuedHolding {
    #[serde(flatten)]
    pub holding: Holding,
    /// quantity × current price
    pub total_value: Decimal,
    /// quantity × avg price
    pub invested: Decimal,
    pub total_pnl: Decimal,
    pub total_pnl_pct: Decimal,
    /// Share of the portfolio value (0-100)
    pub weight: Decimal,
}
