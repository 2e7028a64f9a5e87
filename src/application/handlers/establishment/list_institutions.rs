//! ListInstitutionsHandler - Query handler for the institution directory.

use std::sync::Arc;

use crate::domain::establishment::Institution;
use crate::domain::foundation::DomainError;
use crate::ports::InstitutionRepository;

/// Handler returning every institution ordered by name.
pub struct ListInstitutionsHandler {
    institution_repository: Arc<dyn InstitutionRepository>,
}

impl ListInstitutionsHandler {
    pub fn new(institution_repository: Arc<dyn InstitutionRepository>) -> Self {
        Self {
            institution_repository,
        }
    }

    pub async fn handle(&self) -> Result<Vec<Institution>, DomainError> {
        self.institution_repository.list_all().await
    }
}
