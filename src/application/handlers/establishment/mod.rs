//! Institution command and query handlers.

// Command handlers
mod create_institution;
mod propagate_elective_cycle;
mod sync_institutions;

// Query handlers
mod list_institutions;

pub use create_institution::{
    CreateInstitutionCommand, CreateInstitutionError, CreateInstitutionHandler,
};
pub use propagate_elective_cycle::{
    PropagateElectiveCycleCommand, PropagateElectiveCycleError, PropagateElectiveCycleHandler,
    PropagationFailure, PropagationReport,
};
pub use sync_institutions::{
    SyncInstitutionsCommand, SyncInstitutionsError, SyncInstitutionsHandler,
    SyncInstitutionsResult,
};

pub use list_institutions::ListInstitutionsHandler;
