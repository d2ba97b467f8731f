//! Static starting portfolio for a session.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::Result;

use super::{Fundamentals, Holding};

struct SeedRow {
    id: &'static str,
    symbol: &'static str,
    company: &'static str,
    sector: &'static str,
    quantity: u64,
    avg_price: Decimal,
    current_price: Decimal,
    day_change: Decimal,
    market_cap: &'static str,
    pe_ratio: Decimal,
    dividend: Decimal,
    beta: Decimal,
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        id: "1",
        symbol: "RELIANCE",
        company: "Reliance Industries Ltd",
        sector: "Energy",
        quantity: 50,
        avg_price: dec!(2450.00),
        current_price: dec!(2890.45),
        day_change: dec!(23.15),
        market_cap: "19.5L Cr",
        pe_ratio: dec!(28.4),
        dividend: dec!(0.35),
        beta: dec!(1.12),
    },
    SeedRow {
        id: "2",
        symbol: "TCS",
        company: "Tata Consultancy Services",
        sector: "Information Technology",
        quantity: 30,
        avg_price: dec!(3200.00),
        current_price: dec!(4125.80),
        day_change: dec!(-18.40),
        market_cap: "14.9L Cr",
        pe_ratio: dec!(31.2),
        dividend: dec!(1.25),
        beta: dec!(0.78),
    },
    SeedRow {
        id: "3",
        symbol: "HDFCBANK",
        company: "HDFC Bank Ltd",
        sector: "Banking",
        quantity: 80,
        avg_price: dec!(1550.00),
        current_price: dec!(1642.30),
        day_change: dec!(8.75),
        market_cap: "12.5L Cr",
        pe_ratio: dec!(19.6),
        dividend: dec!(1.15),
        beta: dec!(0.95),
    },
    SeedRow {
        id: "4",
        symbol: "INFY",
        company: "Infosys Ltd",
        sector: "Information Technology",
        quantity: 60,
        avg_price: dec!(1420.00),
        current_price: dec!(1785.60),
        day_change: dec!(12.20),
        market_cap: "7.4L Cr",
        pe_ratio: dec!(27.8),
        dividend: dec!(2.35),
        beta: dec!(0.82),
    },
    SeedRow {
        id: "5",
        symbol: "ICICIBANK",
        company: "ICICI Bank Ltd",
        sector: "Banking",
        quantity: 100,
        avg_price: dec!(920.00),
        current_price: dec!(1128.90),
        day_change: dec!(-4.60),
        market_cap: "7.9L Cr",
        pe_ratio: dec!(18.1),
        dividend: dec!(0.80),
        beta: dec!(1.05),
    },
    SeedRow {
        id: "6",
        symbol: "HINDUNILVR",
        company: "Hindustan Unilever Ltd",
        sector: "FMCG",
        quantity: 25,
        avg_price: dec!(2600.00),
        current_price: dec!(2398.55),
        day_change: dec!(-11.30),
        market_cap: "5.6L Cr",
        pe_ratio: dec!(55.3),
        dividend: dec!(1.70),
        beta: dec!(0.55),
    },
    SeedRow {
        id: "7",
        symbol: "ITC",
        company: "ITC Ltd",
        sector: "FMCG",
        quantity: 200,
        avg_price: dec!(380.00),
        current_price: dec!(436.25),
        day_change: dec!(2.85),
        market_cap: "5.4L Cr",
        pe_ratio: dec!(26.9),
        dividend: dec!(3.10),
        beta: dec!(0.68),
    },
    SeedRow {
        id: "8",
        symbol: "BHARTIARTL",
        company: "Bharti Airtel Ltd",
        sector: "Telecom",
        quantity: 70,
        avg_price: dec!(780.00),
        current_price: dec!(1245.70),
        day_change: dec!(15.40),
        market_cap: "7.1L Cr",
        pe_ratio: dec!(72.5),
        dividend: dec!(0.45),
        beta: dec!(0.88),
    },
    SeedRow {
        id: "9",
        symbol: "MARUTI",
        company: "Maruti Suzuki India Ltd",
        sector: "Automobile",
        quantity: 8,
        avg_price: dec!(9800.00),
        current_price: dec!(11420.35),
        day_change: dec!(-65.90),
        market_cap: "3.6L Cr",
        pe_ratio: dec!(29.7),
        dividend: dec!(0.80),
        beta: dec!(0.92),
    },
    SeedRow {
        id: "10",
        symbol: "SUNPHARMA",
        company: "Sun Pharmaceutical Industries",
        sector: "Pharmaceuticals",
        quantity: 45,
        avg_price: dec!(1050.00),
        current_price: dec!(1512.40),
        day_change: dec!(9.60),
        market_cap: "3.6L Cr",
        pe_ratio: dec!(38.2),
        dividend: dec!(0.75),
        beta: dec!(0.60),
    },
    SeedRow {
        id: "11",
        symbol: "TATAMOTORS",
        company: "Tata Motors Ltd",
        sector: "Automobile",
        quantity: 120,
        avg_price: dec!(640.00),
        current_price: dec!(948.15),
        day_change: dec!(-7.25),
        market_cap: "3.5L Cr",
        pe_ratio: dec!(10.4),
        dividend: dec!(0.30),
        beta: dec!(1.45),
    },
    SeedRow {
        id: "12",
        symbol: "WIPRO",
        company: "Wipro Ltd",
        sector: "Information Technology",
        quantity: 150,
        avg_price: dec!(510.00),
        current_price: dec!(472.80),
        day_change: dec!(-3.10),
        market_cap: "2.5L Cr",
        pe_ratio: dec!(22.6),
        dividend: dec!(0.20),
        beta: dec!(0.85),
    },
];

/// Returns the default holding list, validated.
pub fn seed_holdings() -> Result<Vec<Holding>> {
    SEED_ROWS.iter().map(build_seed_holding).collect()
}

fn build_seed_holding(row: &SeedRow) -> Result<Holding> {
    let previous_price = row.current_price - row.day_change;
    let day_change_pct = if previous_price > Decimal::ZERO {
        row.day_change / previous_price * dec!(100)
    } else {
        Decimal::ZERO
    };

    let holding = Holding::new(
        row.id,
        row.symbol,
        row.company,
        row.sector,
        row.quantity,
        row.avg_price,
        row.current_price,
    )?
    .with_day_change(row.day_change, day_change_pct)
    .with_fundamentals(Fundamentals {
        market_cap: row.market_cap.to_string(),
        pe_ratio: row.pe_ratio,
        dividend: row.dividend,
        beta: row.beta,
    });
    Ok(holding)
}
