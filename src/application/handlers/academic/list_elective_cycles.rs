//! ListElectiveCyclesHandler - Query handler for cycle collections.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::DomainError;
use crate::ports::ElectiveCycleRepository;

/// Which cycles to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CycleFilter {
    #[default]
    All,
    Active,
    /// Cycles whose end date is exactly this day, active or not.
    EndingOn(NaiveDate),
}

/// Query for a list of cycles, ordered by year.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListElectiveCyclesQuery {
    pub filter: CycleFilter,
}

/// Handler for listing cycles.
pub struct ListElectiveCyclesHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
}

impl ListElectiveCyclesHandler {
    pub fn new(cycle_repository: Arc<dyn ElectiveCycleRepository>) -> Self {
        Self { cycle_repository }
    }

    pub async fn handle(
        &self,
        query: ListElectiveCyclesQuery,
    ) -> Result<Vec<ElectiveCycle>, DomainError> {
        match query.filter {
            CycleFilter::All => self.cycle_repository.list_all().await,
            CycleFilter::Active => self.cycle_repository.find_active().await,
            CycleFilter::EndingOn(date) => self.cycle_repository.find_by_end_date(date).await,
        }
    }
}
