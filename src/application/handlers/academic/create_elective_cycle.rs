//! CreateElectiveCycleHandler - Command handler for opening an academic year.

use std::sync::Arc;

use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::ElectiveCycleRepository;

/// Command to create the elective cycle for a year.
#[derive(Debug, Clone)]
pub struct CreateElectiveCycleCommand {
    pub year: i32,
}

/// Result of successful cycle creation.
#[derive(Debug, Clone)]
pub struct CreateElectiveCycleResult {
    pub cycle: ElectiveCycle,
}

/// Error type for cycle creation.
#[derive(Debug, Clone)]
pub enum CreateElectiveCycleError {
    /// A cycle for this year already exists.
    DuplicateYear(i32),
    /// Year or dates rejected before persistence.
    Validation(ValidationError),
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for CreateElectiveCycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateElectiveCycleError::DuplicateYear(year) => {
                write!(f, "Elective cycle already exists for year {}", year)
            }
            CreateElectiveCycleError::Validation(err) => write!(f, "{}", err),
            CreateElectiveCycleError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CreateElectiveCycleError {}

impl From<DomainError> for CreateElectiveCycleError {
    fn from(err: DomainError) -> Self {
        CreateElectiveCycleError::Domain(err)
    }
}

/// Handler for creating elective cycles.
pub struct CreateElectiveCycleHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
}

impl CreateElectiveCycleHandler {
    pub fn new(cycle_repository: Arc<dyn ElectiveCycleRepository>) -> Self {
        Self { cycle_repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateElectiveCycleCommand,
    ) -> Result<CreateElectiveCycleResult, CreateElectiveCycleError> {
        // 1. Build the aggregate (validates year range and date order)
        let cycle =
            ElectiveCycle::for_year(cmd.year).map_err(CreateElectiveCycleError::Validation)?;

        // 2. Reject known duplicates early; the store's unique constraint
        //    still catches a concurrent insert
        if self.cycle_repository.find_by_year(cmd.year).await?.is_some() {
            return Err(CreateElectiveCycleError::DuplicateYear(cmd.year));
        }

        // 3. Persist
        self.cycle_repository.save(&cycle).await.map_err(|e| {
            if e.code == ErrorCode::DuplicateYear {
                CreateElectiveCycleError::DuplicateYear(cmd.year)
            } else {
                CreateElectiveCycleError::Domain(e)
            }
        })?;

        tracing::info!(
            year = cycle.year(),
            cycle_id = %cycle.id(),
            start_date = %cycle.start_date(),
            end_date = %cycle.end_date(),
            "Elective cycle created"
        );

        Ok(CreateElectiveCycleResult { cycle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAcademicStore;
    use crate::domain::academic::{MAX_YEAR, MIN_YEAR};
    use crate::domain::foundation::ElectiveCycleId;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    /// Simulates a concurrent insert: lookup misses, insert hits the unique constraint.
    struct RacingRepository;

    #[async_trait]
    impl ElectiveCycleRepository for RacingRepository {
        async fn save(&self, cycle: &ElectiveCycle) -> Result<(), DomainError> {
            Err(DomainError::new(
                ErrorCode::DuplicateYear,
                format!("duplicate key for year {}", cycle.year()),
            ))
        }
        async fn update(&self, _cycle: &ElectiveCycle) -> Result<(), DomainError> {
            Ok(())
        }
        async fn find_by_id(
            &self,
            _id: &ElectiveCycleId,
        ) -> Result<Option<ElectiveCycle>, DomainError> {
            Ok(None)
        }
        async fn find_by_year(&self, _year: i32) -> Result<Option<ElectiveCycle>, DomainError> {
            Ok(None)
        }
        async fn find_by_end_date(
            &self,
            _date: NaiveDate,
        ) -> Result<Vec<ElectiveCycle>, DomainError> {
            Ok(vec![])
        }
        async fn find_active(&self) -> Result<Vec<ElectiveCycle>, DomainError> {
            Ok(vec![])
        }
        async fn list_all(&self) -> Result<Vec<ElectiveCycle>, DomainError> {
            Ok(vec![])
        }
        async fn exists(&self, _id: &ElectiveCycleId) -> Result<bool, DomainError> {
            Ok(false)
        }
        async fn delete(&self, _id: &ElectiveCycleId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn handler(store: &InMemoryAcademicStore) -> CreateElectiveCycleHandler {
        CreateElectiveCycleHandler::new(Arc::new(store.elective_cycles()))
    }

    #[tokio::test]
    async fn creates_active_cycle_with_anchor_dates() {
        let store = InMemoryAcademicStore::new();
        let result = handler(&store)
            .handle(CreateElectiveCycleCommand { year: 2026 })
            .await
            .unwrap();

        assert_eq!(result.cycle.year(), 2026);
        assert_eq!(result.cycle.start_date(), NaiveDate::from_ymd_opt(2026, 2, 26).unwrap());
        assert_eq!(result.cycle.end_date(), NaiveDate::from_ymd_opt(2026, 12, 15).unwrap());
        assert!(result.cycle.is_active());
        assert_eq!(store.elective_cycles().len().await, 1);
    }

    #[tokio::test]
    async fn second_create_for_same_year_fails() {
        let store = InMemoryAcademicStore::new();
        let handler = handler(&store);
        handler
            .handle(CreateElectiveCycleCommand { year: 2026 })
            .await
            .unwrap();

        let result = handler.handle(CreateElectiveCycleCommand { year: 2026 }).await;

        assert!(matches!(result, Err(CreateElectiveCycleError::DuplicateYear(2026))));
        assert_eq!(store.elective_cycles().len().await, 1);
    }

    #[tokio::test]
    async fn rejects_year_out_of_range_before_persisting() {
        let store = InMemoryAcademicStore::new();
        let result = handler(&store)
            .handle(CreateElectiveCycleCommand { year: 1999 })
            .await;

        assert!(matches!(result, Err(CreateElectiveCycleError::Validation(_))));
        assert!(store.elective_cycles().is_empty().await);
    }

    #[tokio::test]
    async fn unique_constraint_violation_maps_to_duplicate_year() {
        let handler = CreateElectiveCycleHandler::new(Arc::new(RacingRepository));
        let result = handler.handle(CreateElectiveCycleCommand { year: 2030 }).await;
        assert!(matches!(result, Err(CreateElectiveCycleError::DuplicateYear(2030))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn create_twice_always_fails_with_duplicate_year(year in MIN_YEAR..=MAX_YEAR) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let outcome = rt.block_on(async {
                let store = InMemoryAcademicStore::new();
                let handler = handler(&store);
                handler.handle(CreateElectiveCycleCommand { year }).await.unwrap();
                handler.handle(CreateElectiveCycleCommand { year }).await
            });
            prop_assert!(matches!(
                outcome,
                Err(CreateElectiveCycleError::DuplicateYear(y)) if y == year
            ));
        }
    }
}
