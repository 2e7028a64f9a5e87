//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) live side by side per
//! module.

pub mod handlers;

pub use handlers::academic::{CycleTransition, RunCycleClockCommand, RunCycleClockHandler};
pub use handlers::establishment::{SyncInstitutionsCommand, SyncInstitutionsHandler};
