//! Property-based integration tests for portfolio aggregation and the price
//! simulator, using `proptest` for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tickfolio_core::market::{apply_price_change, PriceSimulator, RandomWalkSimulator};
use tickfolio_core::portfolio::{build_portfolio_view, Holding};
use tickfolio_core::settings::SimulatorSettings;
use tickfolio_core::utils::math_utils::approx_eq;

const TOLERANCE: Decimal = dec!(0.0000000001);

// =============================================================================
// Generators
// =============================================================================

fn arb_sector() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Energy"),
        Just("Banking"),
        Just("Information Technology"),
        Just("FMCG"),
        Just("Telecom"),
    ]
}

/// Price in paise, 0.01 to 50,000.00
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..=5_000_000).prop_map(|paise| Decimal::new(paise, 2))
}

fn arb_holding(min_quantity: u64) -> impl Strategy<Value = (u64, Decimal, Decimal, &'static str)> {
    (min_quantity..10_000u64, arb_price(), arb_price(), arb_sector())
}

/// Non-empty list where every holding has a positive quantity.
fn arb_holdings() -> impl Strategy<Value = Vec<Holding>> {
    proptest::collection::vec(arb_holding(1), 1..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (quantity, avg, price, sector))| {
                Holding::new(
                    i.to_string(),
                    format!("SYM{}", i),
                    format!("Company {}", i),
                    sector,
                    quantity,
                    avg,
                    price,
                )
                .unwrap()
            })
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Derived figures are a pure function of quantity, avg price and price.
    #[test]
    fn prop_derived_fields_match_formulas(holdings in arb_holdings()) {
        let view = build_portfolio_view(&holdings);
        for valued in &view.holdings {
            let quantity = Decimal::from(valued.holding.quantity);
            prop_assert_eq!(valued.total_value, quantity * valued.holding.current_price);
            prop_assert_eq!(
                valued.total_pnl,
                valued.total_value - quantity * valued.holding.avg_price
            );
        }
    }

    /// Holding weights sum to 100.
    #[test]
    fn prop_holding_weights_sum_to_hundred(holdings in arb_holdings()) {
        let view = build_portfolio_view(&holdings);
        let sum: Decimal = view.holdings.iter().map(|h| h.weight).sum();
        prop_assert!(approx_eq(sum, dec!(100), TOLERANCE), "weight sum {}", sum);
    }

    /// Sector weights sum to 100 and sector values reconcile with the total.
    #[test]
    fn prop_sectors_reconcile_with_portfolio(holdings in arb_holdings()) {
        let view = build_portfolio_view(&holdings);
        let weight_sum: Decimal = view.sectors.iter().map(|s| s.weight).sum();
        let value_sum: Decimal = view.sectors.iter().map(|s| s.total_value).sum();
        let count_sum: usize = view.sectors.iter().map(|s| s.stock_count).sum();

        prop_assert!(approx_eq(weight_sum, dec!(100), TOLERANCE));
        prop_assert_eq!(value_sum, view.summary.total_value);
        prop_assert_eq!(count_sum, holdings.len());
    }

    /// Sector list is ordered by descending value, one entry per label.
    #[test]
    fn prop_sectors_sorted_and_distinct(holdings in arb_holdings()) {
        let view = build_portfolio_view(&holdings);
        let sorted = view
            .sectors
            .windows(2)
            .all(|pair| pair[0].total_value >= pair[1].total_value);
        prop_assert!(sorted);

        let mut labels: Vec<&str> = view.sectors.iter().map(|s| s.sector.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        prop_assert_eq!(labels.len(), view.sectors.len());
    }

    /// Any move inside the ±2% range keeps a price of 100 positive.
    #[test]
    fn prop_price_change_from_hundred_stays_positive(steps in -20_000i64..=20_000) {
        let holding = Holding::new("1", "X", "X Ltd", "IT", 1, dec!(50), dec!(100)).unwrap();
        let change = Decimal::new(steps, 4);
        let moved = apply_price_change(&holding, change, dec!(0.01));
        prop_assert!(moved.current_price > Decimal::ZERO);
        prop_assert_eq!(moved.day_change, moved.current_price - dec!(100));
    }

    /// The simulator never produces a price at or below zero, from any start.
    #[test]
    fn prop_random_walk_never_crosses_zero(seed in any::<u64>(), start in arb_price()) {
        let simulator = RandomWalkSimulator::new(&SimulatorSettings {
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap();
        let mut holding = Holding::new("1", "X", "X Ltd", "IT", 3, dec!(10), start).unwrap();
        for _ in 0..50 {
            holding = simulator.simulate(&holding);
            prop_assert!(holding.current_price > Decimal::ZERO);
        }
        prop_assert_eq!(holding.quantity, 3);
        prop_assert_eq!(holding.avg_price, dec!(10));
    }
}

#[test]
fn empty_portfolio_is_zeroed() {
    let view = build_portfolio_view(&[]);
    assert_eq!(view.summary.total_value, Decimal::ZERO);
    assert_eq!(view.summary.total_pnl_pct, Decimal::ZERO);
    assert_eq!(view.summary.day_change_pct, Decimal::ZERO);
    assert!(view.sectors.is_empty());
}
