//! Holdings: the position model, the session store and the seed portfolio.

mod holdings_model;
mod holdings_store;
mod seed;

pub use holdings_model::*;
pub use holdings_store::*;
pub use seed::*;
