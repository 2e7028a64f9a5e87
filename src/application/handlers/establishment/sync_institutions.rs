//! SyncInstitutionsHandler - Moves every institution onto a year's active cycle.

use std::sync::Arc;

use super::propagate_elective_cycle::{
    PropagateElectiveCycleCommand, PropagateElectiveCycleError, PropagateElectiveCycleHandler,
    PropagationReport,
};
use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ElectiveCycleRepository, InstitutionRepository};

/// Command to synchronize institutions to the active cycle of `year`.
#[derive(Debug, Clone)]
pub struct SyncInstitutionsCommand {
    pub year: i32,
}

/// Result of a synchronization.
#[derive(Debug, Clone)]
pub struct SyncInstitutionsResult {
    pub cycle: ElectiveCycle,
    pub report: PropagationReport,
}

/// Error type for synchronization.
#[derive(Debug, Clone)]
pub enum SyncInstitutionsError {
    /// No active cycle exists for the year.
    NoActiveCycle(i32),
    Propagation(PropagateElectiveCycleError),
    Domain(DomainError),
}

impl std::fmt::Display for SyncInstitutionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncInstitutionsError::NoActiveCycle(year) => {
                write!(f, "No active elective cycle found for year {}", year)
            }
            SyncInstitutionsError::Propagation(err) => write!(f, "{}", err),
            SyncInstitutionsError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SyncInstitutionsError {}

impl From<DomainError> for SyncInstitutionsError {
    fn from(err: DomainError) -> Self {
        SyncInstitutionsError::Domain(err)
    }
}

impl From<SyncInstitutionsError> for DomainError {
    fn from(err: SyncInstitutionsError) -> Self {
        match err {
            SyncInstitutionsError::NoActiveCycle(year) => {
                DomainError::new(ErrorCode::NoActiveCycle, err.to_string())
                    .with_detail("year", year.to_string())
            }
            SyncInstitutionsError::Propagation(PropagateElectiveCycleError::CycleNotFound(id)) => {
                DomainError::new(ErrorCode::ElectiveCycleNotFound, err.to_string())
                    .with_detail("cycle_id", id.to_string())
            }
            SyncInstitutionsError::Propagation(PropagateElectiveCycleError::Domain(e))
            | SyncInstitutionsError::Domain(e) => e,
        }
    }
}

/// Handler that resolves the year's cycle and propagates it.
pub struct SyncInstitutionsHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
    propagate: PropagateElectiveCycleHandler,
}

impl SyncInstitutionsHandler {
    pub fn new(
        cycle_repository: Arc<dyn ElectiveCycleRepository>,
        institution_repository: Arc<dyn InstitutionRepository>,
    ) -> Self {
        Self {
            propagate: PropagateElectiveCycleHandler::new(
                cycle_repository.clone(),
                institution_repository,
            ),
            cycle_repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: SyncInstitutionsCommand,
    ) -> Result<SyncInstitutionsResult, SyncInstitutionsError> {
        let cycle = self
            .cycle_repository
            .find_by_year(cmd.year)
            .await?
            .filter(ElectiveCycle::is_active)
            .ok_or(SyncInstitutionsError::NoActiveCycle(cmd.year))?;

        let report = self
            .propagate
            .handle(PropagateElectiveCycleCommand { cycle_id: cycle.id() })
            .await
            .map_err(SyncInstitutionsError::Propagation)?;

        Ok(SyncInstitutionsResult { cycle, report })
    }
}
