//! In-memory adapters.
//!
//! Both repositories share one [`InMemoryAcademicStore`] so that the
//! institution → cycle reference behaves like the database foreign key:
//! saving an institution requires the cycle to exist, and a referenced cycle
//! cannot be deleted. Useful for tests and local development.

mod elective_cycle_repository;
mod institution_repository;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::academic::ElectiveCycle;
use crate::domain::establishment::Institution;
use crate::domain::foundation::{ElectiveCycleId, InstitutionId};

pub use elective_cycle_repository::InMemoryElectiveCycleRepository;
pub use institution_repository::InMemoryInstitutionRepository;

#[derive(Debug, Default)]
struct Tables {
    cycles: HashMap<ElectiveCycleId, ElectiveCycle>,
    institutions: HashMap<InstitutionId, Institution>,
}

/// Shared backing store for the in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAcademicStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryAcademicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elective cycle repository backed by this store.
    pub fn elective_cycles(&self) -> InMemoryElectiveCycleRepository {
        InMemoryElectiveCycleRepository::new(self.tables.clone())
    }

    /// Institution repository backed by this store.
    pub fn institutions(&self) -> InMemoryInstitutionRepository {
        InMemoryInstitutionRepository::new(self.tables.clone())
    }
}
