//! Session ownership and the update scheduler.

mod scheduler_model;
mod session;
mod update_scheduler;


pub use scheduler_model::*;
pub use session::*;
pub use update_scheduler::*;
