//! In-memory implementation of ElectiveCycleRepository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use super::Tables;
use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::{DomainError, ElectiveCycleId, ErrorCode};
use crate::ports::ElectiveCycleRepository;

/// In-memory elective cycle storage.
#[derive(Debug, Clone)]
pub struct InMemoryElectiveCycleRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryElectiveCycleRepository {
    pub(super) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }

    /// Number of stored cycles.
    pub async fn len(&self) -> usize {
        self.tables.read().await.cycles.len()
    }

    /// Returns true when no cycle is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn sorted_by_year(mut cycles: Vec<ElectiveCycle>) -> Vec<ElectiveCycle> {
    cycles.sort_by_key(|c| c.year());
    cycles
}

#[async_trait]
impl ElectiveCycleRepository for InMemoryElectiveCycleRepository {
    async fn save(&self, cycle: &ElectiveCycle) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.cycles.values().any(|c| c.year() == cycle.year()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateYear,
                format!("Elective cycle already exists for year {}", cycle.year()),
            )
            .with_detail("year", cycle.year().to_string()));
        }
        tables.cycles.insert(cycle.id(), cycle.clone());
        Ok(())
    }

    async fn update(&self, cycle: &ElectiveCycle) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.cycles.get_mut(&cycle.id()) {
            Some(existing) => {
                *existing = cycle.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ElectiveCycleNotFound,
                format!("Elective cycle not found: {}", cycle.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &ElectiveCycleId) -> Result<Option<ElectiveCycle>, DomainError> {
        Ok(self.tables.read().await.cycles.get(id).cloned())
    }

    async fn find_by_year(&self, year: i32) -> Result<Option<ElectiveCycle>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .cycles
            .values()
            .find(|c| c.year() == year)
            .cloned())
    }

    async fn find_by_end_date(&self, date: NaiveDate) -> Result<Vec<ElectiveCycle>, DomainError> {
        let tables = self.tables.read().await;
        Ok(sorted_by_year(
            tables
                .cycles
                .values()
                .filter(|c| c.end_date() == date)
                .cloned()
                .collect(),
        ))
    }

    async fn find_active(&self) -> Result<Vec<ElectiveCycle>, DomainError> {
        let tables = self.tables.read().await;
        Ok(sorted_by_year(
            tables
                .cycles
                .values()
                .filter(|c| c.is_active())
                .cloned()
                .collect(),
        ))
    }

    async fn list_all(&self) -> Result<Vec<ElectiveCycle>, DomainError> {
        let tables = self.tables.read().await;
        Ok(sorted_by_year(tables.cycles.values().cloned().collect()))
    }

    async fn exists(&self, id: &ElectiveCycleId) -> Result<bool, DomainError> {
        Ok(self.tables.read().await.cycles.contains_key(id))
    }

    async fn delete(&self, id: &ElectiveCycleId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.cycles.contains_key(id) {
            return Err(DomainError::new(
                ErrorCode::ElectiveCycleNotFound,
                format!("Elective cycle not found: {}", id),
            ));
        }
        let references = tables
            .institutions
            .values()
            .filter(|i| i.elective_cycle_id() == *id)
            .count();
        if references > 0 {
            return Err(DomainError::new(
                ErrorCode::CycleInUse,
                format!("Elective cycle {} is referenced by {} institution(s)", id, references),
            ));
        }
        tables.cycles.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAcademicStore;
    use crate::domain::establishment::Institution;
    use crate::ports::InstitutionRepository;
    use chrono::NaiveTime;

    #[tokio::test]
    async fn save_rejects_second_cycle_for_same_year() {
        let repo = InMemoryAcademicStore::new().elective_cycles();
        repo.save(&ElectiveCycle::for_year(2026).unwrap()).await.unwrap();

        let err = repo
            .save(&ElectiveCycle::for_year(2026).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateYear);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn list_all_is_ordered_by_year() {
        let repo = InMemoryAcademicStore::new().elective_cycles();
        for year in [2027, 2025, 2026] {
            repo.save(&ElectiveCycle::for_year(year).unwrap()).await.unwrap();
        }
        let years: Vec<i32> = repo.list_all().await.unwrap().iter().map(|c| c.year()).collect();
        assert_eq!(years, vec![2025, 2026, 2027]);
    }

    #[tokio::test]
    async fn update_fails_for_unknown_cycle() {
        let repo = InMemoryAcademicStore::new().elective_cycles();
        let err = repo
            .update(&ElectiveCycle::for_year(2026).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ElectiveCycleNotFound);
    }

    #[tokio::test]
    async fn delete_is_blocked_while_referenced() {
        let store = InMemoryAcademicStore::new();
        let cycles = store.elective_cycles();
        let institutions = store.institutions();
        let cycle = ElectiveCycle::for_year(2026).unwrap();
        cycles.save(&cycle).await.unwrap();
        let inst = Institution::new(
            "Liceo",
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            cycle.id(),
        )
        .unwrap();
        institutions.save(&inst).await.unwrap();

        let err = cycles.delete(&cycle.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CycleInUse);
        assert!(cycles.exists(&cycle.id()).await.unwrap());
    }
}
