//! In-memory implementation of InstitutionRepository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Tables;
use crate::domain::establishment::Institution;
use crate::domain::foundation::{DomainError, ElectiveCycleId, ErrorCode, InstitutionId};
use crate::ports::InstitutionRepository;

/// In-memory institution storage.
#[derive(Debug, Clone)]
pub struct InMemoryInstitutionRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryInstitutionRepository {
    pub(super) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }

    /// Hard-removes an institution, bypassing the port.
    ///
    /// Lets tests simulate a row disappearing underneath a running batch.
    pub async fn remove(&self, id: &InstitutionId) -> Option<Institution> {
        self.tables.write().await.institutions.remove(id)
    }
}

fn cycle_not_found(id: &ElectiveCycleId) -> DomainError {
    DomainError::new(
        ErrorCode::ElectiveCycleNotFound,
        format!("Elective cycle not found: {}", id),
    )
}

#[async_trait]
impl InstitutionRepository for InMemoryInstitutionRepository {
    async fn save(&self, institution: &Institution) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.cycles.contains_key(&institution.elective_cycle_id()) {
            return Err(cycle_not_found(&institution.elective_cycle_id()));
        }
        tables
            .institutions
            .insert(institution.id(), institution.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &InstitutionId) -> Result<Option<Institution>, DomainError> {
        Ok(self.tables.read().await.institutions.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Institution>, DomainError> {
        let tables = self.tables.read().await;
        let mut all: Vec<Institution> = tables.institutions.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(all)
    }

    async fn set_cycle(
        &self,
        institution_id: &InstitutionId,
        cycle_id: &ElectiveCycleId,
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.cycles.contains_key(cycle_id) {
            return Err(cycle_not_found(cycle_id));
        }
        let institution = tables.institutions.get_mut(institution_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InstitutionNotFound,
                format!("Institution not found: {}", institution_id),
            )
        })?;
        institution.assign_cycle(*cycle_id);
        Ok(())
    }

    async fn count_by_cycle(&self, cycle_id: &ElectiveCycleId) -> Result<u32, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .institutions
            .values()
            .filter(|i| i.elective_cycle_id() == *cycle_id)
            .count() as u32)
    }
}
