//! Simulated market feed.

mod price_simulator;

pub use price_simulator::*;
