//! DeleteElectiveCycleHandler - Removes a cycle no institution references.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ElectiveCycleId, ErrorCode};
use crate::ports::{ElectiveCycleRepository, InstitutionRepository};

/// Command to delete a cycle.
#[derive(Debug, Clone)]
pub struct DeleteElectiveCycleCommand {
    pub cycle_id: ElectiveCycleId,
}

/// Error type for cycle deletion.
#[derive(Debug, Clone)]
pub enum DeleteElectiveCycleError {
    NotFound(ElectiveCycleId),
    /// Institutions still point at this cycle.
    InUse {
        cycle_id: ElectiveCycleId,
        references: u32,
    },
    Domain(DomainError),
}

impl std::fmt::Display for DeleteElectiveCycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteElectiveCycleError::NotFound(id) => write!(f, "Elective cycle not found: {}", id),
            DeleteElectiveCycleError::InUse { cycle_id, references } => write!(
                f,
                "Elective cycle {} is referenced by {} institution(s)",
                cycle_id, references
            ),
            DeleteElectiveCycleError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DeleteElectiveCycleError {}

impl From<DomainError> for DeleteElectiveCycleError {
    fn from(err: DomainError) -> Self {
        DeleteElectiveCycleError::Domain(err)
    }
}

/// Handler for deleting cycles.
pub struct DeleteElectiveCycleHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
    institution_repository: Arc<dyn InstitutionRepository>,
}

impl DeleteElectiveCycleHandler {
    pub fn new(
        cycle_repository: Arc<dyn ElectiveCycleRepository>,
        institution_repository: Arc<dyn InstitutionRepository>,
    ) -> Self {
        Self {
            cycle_repository,
            institution_repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteElectiveCycleCommand,
    ) -> Result<(), DeleteElectiveCycleError> {
        if !self.cycle_repository.exists(&cmd.cycle_id).await? {
            return Err(DeleteElectiveCycleError::NotFound(cmd.cycle_id));
        }

        let references = self
            .institution_repository
            .count_by_cycle(&cmd.cycle_id)
            .await?;
        if references > 0 {
            return Err(DeleteElectiveCycleError::InUse {
                cycle_id: cmd.cycle_id,
                references,
            });
        }

        // An institution may be attached between the count and the delete;
        // the store's restrict rule reports that as CycleInUse.
        self.cycle_repository
            .delete(&cmd.cycle_id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::CycleInUse => DeleteElectiveCycleError::InUse {
                    cycle_id: cmd.cycle_id,
                    references: 1,
                },
                ErrorCode::ElectiveCycleNotFound => {
                    DeleteElectiveCycleError::NotFound(cmd.cycle_id)
                }
                _ => DeleteElectiveCycleError::Domain(e),
            })?;

        tracing::info!(cycle_id = %cmd.cycle_id, "Elective cycle deleted");
        Ok(())
    }
}
