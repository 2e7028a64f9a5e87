//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, status enums, the state machine trait and error
//! types used by the academic and establishment modules.

mod cycle_status;
mod errors;
mod ids;
mod state_machine;

pub use cycle_status::CycleStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ElectiveCycleId, InstitutionId};
pub use state_machine::StateMachine;
