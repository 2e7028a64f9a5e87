//! PropagateElectiveCycleHandler - Repoints every institution at a new cycle.
//!
//! The batch is not atomic. Each institution is handled on its own; a failure
//! is logged, recorded in the report and the loop moves on. Running it again
//! is safe because repointing to the same cycle changes nothing.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ElectiveCycleId, ErrorCode, InstitutionId};
use crate::ports::{ElectiveCycleRepository, InstitutionRepository};

/// Command to propagate a cycle to all institutions.
#[derive(Debug, Clone)]
pub struct PropagateElectiveCycleCommand {
    pub cycle_id: ElectiveCycleId,
}

/// One institution that could not be updated.
#[derive(Debug, Clone)]
pub struct PropagationFailure {
    pub institution_id: InstitutionId,
    pub error: DomainError,
}

/// Outcome of a propagation run.
#[derive(Debug, Clone)]
pub struct PropagationReport {
    pub cycle_id: ElectiveCycleId,
    pub updated: Vec<InstitutionId>,
    pub failures: Vec<PropagationFailure>,
}

impl PropagationReport {
    fn new(cycle_id: ElectiveCycleId) -> Self {
        Self {
            cycle_id,
            updated: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn updated_count(&self) -> u32 {
        self.updated.len() as u32
    }

    pub fn failed_count(&self) -> u32 {
        self.failures.len() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Error type for propagation.
///
/// Only raised when nothing could possibly succeed; per-institution
/// problems end up in the report instead.
#[derive(Debug, Clone)]
pub enum PropagateElectiveCycleError {
    CycleNotFound(ElectiveCycleId),
    Domain(DomainError),
}

impl std::fmt::Display for PropagateElectiveCycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagateElectiveCycleError::CycleNotFound(id) => {
                write!(f, "Elective cycle not found: {}", id)
            }
            PropagateElectiveCycleError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PropagateElectiveCycleError {}

impl From<DomainError> for PropagateElectiveCycleError {
    fn from(err: DomainError) -> Self {
        PropagateElectiveCycleError::Domain(err)
    }
}

/// Handler for cycle propagation.
pub struct PropagateElectiveCycleHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
    institution_repository: Arc<dyn InstitutionRepository>,
}

impl PropagateElectiveCycleHandler {
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
        cmd: PropagateElectiveCycleCommand,
    ) -> Result<PropagationReport, PropagateElectiveCycleError> {
        if !self.cycle_repository.exists(&cmd.cycle_id).await? {
            return Err(PropagateElectiveCycleError::CycleNotFound(cmd.cycle_id));
        }

        let institutions = self.institution_repository.list_all().await?;
        let mut report = PropagationReport::new(cmd.cycle_id);

        for institution in institutions {
            let institution_id = institution.id();
            match self.repoint(&institution_id, &cmd.cycle_id).await {
                Ok(()) => report.updated.push(institution_id),
                Err(error) => {
                    tracing::warn!(
                        institution_id = %institution_id,
                        cycle_id = %cmd.cycle_id,
                        code = %error.code,
                        "Could not update institution: {}",
                        error.message
                    );
                    report.failures.push(PropagationFailure {
                        institution_id,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            cycle_id = %cmd.cycle_id,
            updated = report.updated_count(),
            failed = report.failed_count(),
            "Elective cycle propagated to institutions"
        );

        Ok(report)
    }

    async fn repoint(
        &self,
        institution_id: &InstitutionId,
        cycle_id: &ElectiveCycleId,
    ) -> Result<(), DomainError> {
        if self
            .institution_repository
            .find_by_id(institution_id)
            .await?
            .is_none()
        {
            return Err(DomainError::new(
                ErrorCode::InstitutionNotFound,
                format!("Institution not found: {}", institution_id),
            ));
        }
        if !self.cycle_repository.exists(cycle_id).await? {
            return Err(DomainError::new(
                ErrorCode::ElectiveCycleNotFound,
                format!("Elective cycle not found: {}", cycle_id),
            ));
        }
        self.institution_repository
            .set_cycle(institution_id, cycle_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAcademicStore, InMemoryInstitutionRepository};
    use crate::domain::academic::ElectiveCycle;
    use crate::domain::establishment::Institution;
    use async_trait::async_trait;
    use chrono::NaiveTime;

    /// Returns a listing taken before some rows were removed.
    struct StaleListing {
        inner: InMemoryInstitutionRepository,
        snapshot: Vec<Institution>,
    }

    #[async_trait]
    impl InstitutionRepository for StaleListing {
        async fn save(&self, institution: &Institution) -> Result<(), DomainError> {
            self.inner.save(institution).await
        }
        async fn find_by_id(&self, id: &InstitutionId) -> Result<Option<Institution>, DomainError> {
            self.inner.find_by_id(id).await
        }
        async fn list_all(&self) -> Result<Vec<Institution>, DomainError> {
            Ok(self.snapshot.clone())
        }
        async fn set_cycle(
            &self,
            institution_id: &InstitutionId,
            cycle_id: &ElectiveCycleId,
        ) -> Result<(), DomainError> {
            self.inner.set_cycle(institution_id, cycle_id).await
        }
        async fn count_by_cycle(&self, cycle_id: &ElectiveCycleId) -> Result<u32, DomainError> {
            self.inner.count_by_cycle(cycle_id).await
        }
    }

    fn institution(n: usize, cycle_id: ElectiveCycleId) -> Institution {
        Institution::new(
            format!("Institution {}", n),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            cycle_id,
        )
        .unwrap()
    }

    async fn seed(
        store: &InMemoryAcademicStore,
        count: usize,
    ) -> (ElectiveCycle, ElectiveCycle, Vec<Institution>) {
        let cycles = store.elective_cycles();
        let old = ElectiveCycle::for_year(2025).unwrap();
        let new = ElectiveCycle::for_year(2026).unwrap();
        cycles.save(&old).await.unwrap();
        cycles.save(&new).await.unwrap();
        let mut institutions = Vec::new();
        for n in 0..count {
            let inst = institution(n, old.id());
            store.institutions().save(&inst).await.unwrap();
            institutions.push(inst);
        }
        (old, new, institutions)
    }

    #[tokio::test]
    async fn repoints_every_institution() {
        let store = InMemoryAcademicStore::new();
        let (old, new, _) = seed(&store, 3).await;
        let handler = PropagateElectiveCycleHandler::new(
            Arc::new(store.elective_cycles()),
            Arc::new(store.institutions()),
        );

        let report = handler
            .handle(PropagateElectiveCycleCommand { cycle_id: new.id() })
            .await
            .unwrap();

        assert_eq!(report.updated_count(), 3);
        assert!(report.is_complete());
        assert_eq!(store.institutions().count_by_cycle(&new.id()).await.unwrap(), 3);
        assert_eq!(store.institutions().count_by_cycle(&old.id()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn vanished_institution_is_reported_not_raised() {
        let store = InMemoryAcademicStore::new();
        let (_, new, institutions) = seed(&store, 5).await;
        let gone = institutions[2].id();
        store.institutions().remove(&gone).await;

        let handler = PropagateElectiveCycleHandler::new(
            Arc::new(store.elective_cycles()),
            Arc::new(StaleListing {
                inner: store.institutions(),
                snapshot: institutions,
            }),
        );

        let report = handler
            .handle(PropagateElectiveCycleCommand { cycle_id: new.id() })
            .await
            .unwrap();

        assert_eq!(report.updated_count(), 4);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.failures[0].institution_id, gone);
        assert_eq!(report.failures[0].error.code, ErrorCode::InstitutionNotFound);
        assert_eq!(store.institutions().count_by_cycle(&new.id()).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn rerun_is_idempotent() {
        let store = InMemoryAcademicStore::new();
        let (_, new, _) = seed(&store, 2).await;
        let handler = PropagateElectiveCycleHandler::new(
            Arc::new(store.elective_cycles()),
            Arc::new(store.institutions()),
        );
        let cmd = PropagateElectiveCycleCommand { cycle_id: new.id() };

        handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_eq!(second.updated_count(), 2);
        assert_eq!(store.institutions().count_by_cycle(&new.id()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn unknown_cycle_fails_whole_run() {
        let store = InMemoryAcademicStore::new();
        seed(&store, 2).await;
        let handler = PropagateElectiveCycleHandler::new(
            Arc::new(store.elective_cycles()),
            Arc::new(store.institutions()),
        );

        let result = handler
            .handle(PropagateElectiveCycleCommand { cycle_id: ElectiveCycleId::new() })
            .await;

        assert!(matches!(result, Err(PropagateElectiveCycleError::CycleNotFound(_))));
    }

    #[tokio::test]
    async fn empty_collection_gives_empty_report() {
        let store = InMemoryAcademicStore::new();
        let (_, new, _) = seed(&store, 0).await;
        let handler = PropagateElectiveCycleHandler::new(
            Arc::new(store.elective_cycles()),
            Arc::new(store.institutions()),
        );

        let report = handler
            .handle(PropagateElectiveCycleCommand { cycle_id: new.id() })
            .await
            .unwrap();

        assert_eq!(report.cycle_id, new.id());
        assert_eq!(report.updated_count(), 0);
        assert_eq!(report.failed_count(), 0);
    }
}
