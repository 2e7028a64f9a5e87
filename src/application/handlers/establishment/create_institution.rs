//! CreateInstitutionHandler - Registers an institution on an existing cycle.

use std::sync::Arc;

use chrono::NaiveTime;

use crate::domain::establishment::Institution;
use crate::domain::foundation::{DomainError, ElectiveCycleId, ErrorCode, ValidationError};
use crate::ports::{ElectiveCycleRepository, InstitutionRepository};

/// Command to create an institution.
#[derive(Debug, Clone)]
pub struct CreateInstitutionCommand {
    pub name: String,
    pub opening_hour: NaiveTime,
    pub closing_hour: NaiveTime,
    pub elective_cycle_id: ElectiveCycleId,
}

/// Error type for institution creation.
#[derive(Debug, Clone)]
pub enum CreateInstitutionError {
    CycleNotFound(ElectiveCycleId),
    Validation(ValidationError),
    Domain(DomainError),
}

impl std::fmt::Display for CreateInstitutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateInstitutionError::CycleNotFound(id) => {
                write!(f, "Elective cycle not found: {}", id)
            }
            CreateInstitutionError::Validation(err) => write!(f, "{}", err),
            CreateInstitutionError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CreateInstitutionError {}

impl From<DomainError> for CreateInstitutionError {
    fn from(err: DomainError) -> Self {
        CreateInstitutionError::Domain(err)
    }
}

/// Handler for creating institutions.
pub struct CreateInstitutionHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
    institution_repository: Arc<dyn InstitutionRepository>,
}

impl CreateInstitutionHandler {
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
        cmd: CreateInstitutionCommand,
    ) -> Result<Institution, CreateInstitutionError> {
        let institution = Institution::new(
            cmd.name,
            cmd.opening_hour,
            cmd.closing_hour,
            cmd.elective_cycle_id,
        )
        .map_err(CreateInstitutionError::Validation)?;

        if !self.cycle_repository.exists(&cmd.elective_cycle_id).await? {
            return Err(CreateInstitutionError::CycleNotFound(cmd.elective_cycle_id));
        }

        self.institution_repository
            .save(&institution)
            .await
            .map_err(|e| match e.code {
                ErrorCode::ElectiveCycleNotFound => {
                    CreateInstitutionError::CycleNotFound(cmd.elective_cycle_id)
                }
                _ => CreateInstitutionError::Domain(e),
            })?;

        tracing::info!(
            institution_id = %institution.id(),
            name = institution.name(),
            "Institution created"
        );
        Ok(institution)
    }
}
