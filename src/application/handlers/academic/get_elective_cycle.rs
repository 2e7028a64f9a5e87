//! GetElectiveCycleHandler - Query handler for a single cycle.

use std::sync::Arc;

use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::{DomainError, ElectiveCycleId};
use crate::ports::ElectiveCycleRepository;

/// How to look the cycle up.
#[derive(Debug, Clone, Copy)]
pub enum GetElectiveCycleQuery {
    ById(ElectiveCycleId),
    ByYear(i32),
}

/// Error type for single-cycle queries.
#[derive(Debug, Clone)]
pub enum GetElectiveCycleError {
    NotFound(GetElectiveCycleQuery),
    Domain(DomainError),
}

impl std::fmt::Display for GetElectiveCycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetElectiveCycleError::NotFound(GetElectiveCycleQuery::ById(id)) => {
                write!(f, "Elective cycle not found: {}", id)
            }
            GetElectiveCycleError::NotFound(GetElectiveCycleQuery::ByYear(year)) => {
                write!(f, "No elective cycle for year {}", year)
            }
            GetElectiveCycleError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GetElectiveCycleError {}

impl From<DomainError> for GetElectiveCycleError {
    fn from(err: DomainError) -> Self {
        GetElectiveCycleError::Domain(err)
    }
}

/// Handler for single-cycle lookups.
pub struct GetElectiveCycleHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
}

impl GetElectiveCycleHandler {
    pub fn new(cycle_repository: Arc<dyn ElectiveCycleRepository>) -> Self {
        Self { cycle_repository }
    }

    pub async fn handle(
        &self,
        query: GetElectiveCycleQuery,
    ) -> Result<ElectiveCycle, GetElectiveCycleError> {
        let found = match query {
            GetElectiveCycleQuery::ById(id) => self.cycle_repository.find_by_id(&id).await?,
            GetElectiveCycleQuery::ByYear(year) => self.cycle_repository.find_by_year(year).await?,
        };
        found.ok_or(GetElectiveCycleError::NotFound(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAcademicStore;

    #[tokio::test]
    async fn finds_by_year_and_id() {
        let store = InMemoryAcademicStore::new();
        let cycle = ElectiveCycle::for_year(2026).unwrap();
        store.elective_cycles().save(&cycle).await.unwrap();
        let handler = GetElectiveCycleHandler::new(Arc::new(store.elective_cycles()));

        let by_year = handler.handle(GetElectiveCycleQuery::ByYear(2026)).await.unwrap();
        let by_id = handler.handle(GetElectiveCycleQuery::ById(cycle.id())).await.unwrap();

        assert_eq!(by_year, cycle);
        assert_eq!(by_id, cycle);
    }

    #[tokio::test]
    async fn missing_year_is_not_found() {
        let handler =
            GetElectiveCycleHandler::new(Arc::new(InMemoryAcademicStore::new().elective_cycles()));
        let err = handler
            .handle(GetElectiveCycleQuery::ByYear(2031))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No elective cycle for year 2031");
    }
}
