//! Portfolio events module.
//!
//! Provides the events emitted by the update scheduler and the sink trait
//! consumers implement to observe them.

mod portfolio_event;
mod sink;

pub use portfolio_event::*;
pub use sink::*;
