//! DisableElectiveCycleHandler - Explicit deactivation of a single cycle.

use std::sync::Arc;

use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::{DomainError, ElectiveCycleId};
use crate::ports::ElectiveCycleRepository;

/// Command to deactivate one cycle.
#[derive(Debug, Clone)]
pub struct DisableElectiveCycleCommand {
    pub cycle_id: ElectiveCycleId,
}

/// Result of a deactivation.
#[derive(Debug, Clone)]
pub struct DisableElectiveCycleResult {
    pub cycle: ElectiveCycle,
    /// False when the cycle was already inactive.
    pub changed: bool,
}

/// Error type for cycle deactivation.
#[derive(Debug, Clone)]
pub enum DisableElectiveCycleError {
    NotFound(ElectiveCycleId),
    Domain(DomainError),
}

impl std::fmt::Display for DisableElectiveCycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisableElectiveCycleError::NotFound(id) => {
                write!(f, "Elective cycle not found: {}", id)
            }
            DisableElectiveCycleError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DisableElectiveCycleError {}

impl From<DomainError> for DisableElectiveCycleError {
    fn from(err: DomainError) -> Self {
        DisableElectiveCycleError::Domain(err)
    }
}

/// Handler for deactivating a cycle.
pub struct DisableElectiveCycleHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
}

impl DisableElectiveCycleHandler {
    pub fn new(cycle_repository: Arc<dyn ElectiveCycleRepository>) -> Self {
        Self { cycle_repository }
    }

    pub async fn handle(
        &self,
        cmd: DisableElectiveCycleCommand,
    ) -> Result<DisableElectiveCycleResult, DisableElectiveCycleError> {
        let mut cycle = self
            .cycle_repository
            .find_by_id(&cmd.cycle_id)
            .await?
            .ok_or(DisableElectiveCycleError::NotFound(cmd.cycle_id))?;

        let changed = cycle.deactivate().map_err(DomainError::from)?;
        if changed {
            self.cycle_repository.update(&cycle).await?;
            tracing::info!(year = cycle.year(), cycle_id = %cycle.id(), "Elective cycle disabled");
        } else {
            tracing::debug!(cycle_id = %cycle.id(), "Elective cycle already inactive");
        }

        Ok(DisableElectiveCycleResult { cycle, changed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAcademicStore;

    #[tokio::test]
    async fn disables_active_cycle() {
        let store = InMemoryAcademicStore::new();
        let repo = store.elective_cycles();
        let cycle = ElectiveCycle::for_year(2026).unwrap();
        repo.save(&cycle).await.unwrap();

        let handler = DisableElectiveCycleHandler::new(Arc::new(repo.clone()));
        let result = handler
            .handle(DisableElectiveCycleCommand { cycle_id: cycle.id() })
            .await
            .unwrap();

        assert!(result.changed);
        assert!(!result.cycle.is_active());
        assert!(!repo.find_by_id(&cycle.id()).await.unwrap().unwrap().is_active());
    }

    #[tokio::test]
    async fn disabling_inactive_cycle_is_a_no_op() {
        let store = InMemoryAcademicStore::new();
        let repo = store.elective_cycles();
        let cycle = ElectiveCycle::for_year(2026).unwrap();
        repo.save(&cycle).await.unwrap();
        let handler = DisableElectiveCycleHandler::new(Arc::new(repo));
        let cmd = DisableElectiveCycleCommand { cycle_id: cycle.id() };

        handler.handle(cmd.clone()).await.unwrap();
        let again = handler.handle(cmd).await.unwrap();

        assert!(!again.changed);
        assert!(!again.cycle.is_active());
    }

    #[tokio::test]
    async fn fails_for_unknown_cycle() {
        let store = InMemoryAcademicStore::new();
        let handler = DisableElectiveCycleHandler::new(Arc::new(store.elective_cycles()));
        let result = handler
            .handle(DisableElectiveCycleCommand { cycle_id: ElectiveCycleId::new() })
            .await;
        assert!(matches!(result, Err(DisableElectiveCycleError::NotFound(_))));
    }
}
