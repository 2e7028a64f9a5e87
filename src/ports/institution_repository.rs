//! Institution repository port.
//!
//! Institutions are owned by the establishment module; the academic core
//! only needs to list them and rewrite their cycle reference.

use async_trait::async_trait;

use crate::domain::establishment::Institution;
use crate::domain::foundation::{DomainError, ElectiveCycleId, InstitutionId};

/// Repository port for Institution persistence.
#[async_trait]
pub trait InstitutionRepository: Send + Sync {
    /// Save a new institution.
    ///
    /// # Errors
    ///
    /// - `ElectiveCycleNotFound` if the referenced cycle doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn save(&self, institution: &Institution) -> Result<(), DomainError>;

    /// Find an institution by its ID.
    async fn find_by_id(&self, id: &InstitutionId) -> Result<Option<Institution>, DomainError>;

    /// List every institution, active or not, ordered by name.
    async fn list_all(&self) -> Result<Vec<Institution>, DomainError>;

    /// Point an institution at another elective cycle.
    ///
    /// # Errors
    ///
    /// - `InstitutionNotFound` if the institution doesn't exist
    /// - `ElectiveCycleNotFound` if the cycle doesn't exist
    async fn set_cycle(
        &self,
        institution_id: &InstitutionId,
        cycle_id: &ElectiveCycleId,
    ) -> Result<(), DomainError>;

    /// Count institutions referencing a cycle.
    async fn count_by_cycle(&self, cycle_id: &ElectiveCycleId) -> Result<u32, DomainError>;
}
