//! CloseExpiredCyclesHandler - Deactivates cycles whose end date is today.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::DomainError;
use crate::ports::ElectiveCycleRepository;

/// Command to close every active cycle ending on `today`.
#[derive(Debug, Clone)]
pub struct CloseExpiredCyclesCommand {
    pub today: NaiveDate,
}

/// Cycles closed by this run.
#[derive(Debug, Clone, Default)]
pub struct CloseExpiredCyclesResult {
    pub closed: Vec<ElectiveCycle>,
}

impl CloseExpiredCyclesResult {
    pub fn count(&self) -> u32 {
        self.closed.len() as u32
    }
}

/// Handler for closing expired cycles.
///
/// Already inactive cycles are skipped, so a second run on the same day
/// closes nothing.
pub struct CloseExpiredCyclesHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
}

impl CloseExpiredCyclesHandler {
    pub fn new(cycle_repository: Arc<dyn ElectiveCycleRepository>) -> Self {
        Self { cycle_repository }
    }

    pub async fn handle(
        &self,
        cmd: CloseExpiredCyclesCommand,
    ) -> Result<CloseExpiredCyclesResult, DomainError> {
        let candidates = self.cycle_repository.find_by_end_date(cmd.today).await?;

        let mut closed = Vec::new();
        for mut cycle in candidates {
            if !cycle.expires_on(cmd.today) {
                continue;
            }
            if cycle.deactivate()? {
                self.cycle_repository.update(&cycle).await?;
                tracing::info!(
                    year = cycle.year(),
                    cycle_id = %cycle.id(),
                    "Elective cycle closed"
                );
                closed.push(cycle);
            }
        }

        Ok(CloseExpiredCyclesResult { closed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAcademicStore;
    use crate::domain::foundation::{CycleStatus, ElectiveCycleId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn closes_active_cycle_ending_today() {
        let store = InMemoryAcademicStore::new();
        let repo = store.elective_cycles();
        let cycle = ElectiveCycle::for_year(2026).unwrap();
        repo.save(&cycle).await.unwrap();

        let handler = CloseExpiredCyclesHandler::new(Arc::new(repo.clone()));
        let result = handler
            .handle(CloseExpiredCyclesCommand { today: date(2026, 12, 15) })
            .await
            .unwrap();

        assert_eq!(result.count(), 1);
        let stored = repo.find_by_id(&cycle.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), CycleStatus::Inactive);
    }

    #[tokio::test]
    async fn second_run_same_day_closes_nothing() {
        let store = InMemoryAcademicStore::new();
        let repo = store.elective_cycles();
        repo.save(&ElectiveCycle::for_year(2026).unwrap()).await.unwrap();
        let handler = CloseExpiredCyclesHandler::new(Arc::new(repo));
        let cmd = CloseExpiredCyclesCommand { today: date(2026, 12, 15) };

        assert_eq!(handler.handle(cmd.clone()).await.unwrap().count(), 1);
        assert_eq!(handler.handle(cmd).await.unwrap().count(), 0);
    }

    #[tokio::test]
    async fn leaves_cycles_with_other_end_dates_alone() {
        let store = InMemoryAcademicStore::new();
        let repo = store.elective_cycles();
        let other = ElectiveCycle::for_year(2025).unwrap();
        repo.save(&other).await.unwrap();
        repo.save(&ElectiveCycle::for_year(2026).unwrap()).await.unwrap();

        let handler = CloseExpiredCyclesHandler::new(Arc::new(repo.clone()));
        let result = handler
            .handle(CloseExpiredCyclesCommand { today: date(2026, 12, 15) })
            .await
            .unwrap();

        assert_eq!(result.count(), 1);
        assert_eq!(result.closed[0].year(), 2026);
        assert!(repo.find_by_id(&other.id()).await.unwrap().unwrap().is_active());
    }

    #[tokio::test]
    async fn closes_every_misconfigured_cycle_sharing_the_end_date() {
        let store = InMemoryAcademicStore::new();
        let repo = store.elective_cycles();
        let shared_end = date(2026, 12, 15);
        for year in [2025, 2026] {
            let cycle =
                ElectiveCycle::new(ElectiveCycleId::new(), year, date(2025, 3, 1), shared_end)
                    .unwrap();
            repo.save(&cycle).await.unwrap();
        }

        let handler = CloseExpiredCyclesHandler::new(Arc::new(repo.clone()));
        let result = handler
            .handle(CloseExpiredCyclesCommand { today: shared_end })
            .await
            .unwrap();

        assert_eq!(result.count(), 2);
        assert!(repo.find_active().await.unwrap().is_empty());
    }
}
