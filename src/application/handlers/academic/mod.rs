//! Elective cycle command and query handlers.

// Command handlers
mod close_expired_cycles;
mod create_elective_cycle;
mod delete_elective_cycle;
mod disable_elective_cycle;
mod run_cycle_clock;

// Query handlers
mod get_elective_cycle;
mod list_elective_cycles;

pub use close_expired_cycles::{
    CloseExpiredCyclesCommand, CloseExpiredCyclesHandler, CloseExpiredCyclesResult,
};
pub use create_elective_cycle::{
    CreateElectiveCycleCommand, CreateElectiveCycleError, CreateElectiveCycleHandler,
    CreateElectiveCycleResult,
};
pub use delete_elective_cycle::{
    DeleteElectiveCycleCommand, DeleteElectiveCycleError, DeleteElectiveCycleHandler,
};
pub use disable_elective_cycle::{
    DisableElectiveCycleCommand, DisableElectiveCycleError, DisableElectiveCycleHandler,
    DisableElectiveCycleResult,
};
pub use run_cycle_clock::{
    CycleTransition, RunCycleClockCommand, RunCycleClockError, RunCycleClockHandler,
};

// Query handlers
pub use get_elective_cycle::{GetElectiveCycleError, GetElectiveCycleHandler, GetElectiveCycleQuery};
pub use list_elective_cycles::{CycleFilter, ListElectiveCyclesHandler, ListElectiveCyclesQuery};
