//! Tickfolio Core - simulated portfolio engine.
//!
//! Holds a session's holdings, derives portfolio and sector summaries from
//! them, and drives a simulated price feed on a timer. Presentation layers
//! consume the read surface of [`scheduler::UpdateScheduler`].

pub mod constants;
pub mod errors;
pub mod events;
pub mod market;
pub mod portfolio;
pub mod scheduler;
pub mod settings;
pub mod utils;

// Re-export common types from portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
