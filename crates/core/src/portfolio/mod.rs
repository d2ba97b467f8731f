pub mod allocation;
pub mod holdings;
pub mod summary;
pub mod valuation;

pub use allocation::*;
pub use holdings::*;
pub use summary::*;
pub use valuation::*;
