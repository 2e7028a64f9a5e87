//! Elective cycle repository port.
//!
//! Defines the contract for persisting and querying ElectiveCycle aggregates.
//!
//! # Design
//!
//! - **Unique by year**: `save` must reject a second cycle for the same year
//!   with `DuplicateYear`, even under concurrent callers
//! - **Soft close**: cycles are deactivated through `update`, not deleted

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::{DomainError, ElectiveCycleId};

/// Repository port for ElectiveCycle persistence.
#[async_trait]
pub trait ElectiveCycleRepository: Send + Sync {
    /// Save a new cycle.
    ///
    /// # Errors
    ///
    /// - `DuplicateYear` if a cycle for the same year exists
    /// - `DatabaseError` on persistence failure
    async fn save(&self, cycle: &ElectiveCycle) -> Result<(), DomainError>;

    /// Update an existing cycle.
    ///
    /// # Errors
    ///
    /// - `ElectiveCycleNotFound` if the cycle doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, cycle: &ElectiveCycle) -> Result<(), DomainError>;

    /// Find a cycle by its ID.
    async fn find_by_id(&self, id: &ElectiveCycleId) -> Result<Option<ElectiveCycle>, DomainError>;

    /// Find the cycle for a given year.
    async fn find_by_year(&self, year: i32) -> Result<Option<ElectiveCycle>, DomainError>;

    /// Find every cycle whose end date is `date`, active or not.
    ///
    /// Returns cycles ordered by year ascending.
    async fn find_by_end_date(&self, date: NaiveDate) -> Result<Vec<ElectiveCycle>, DomainError>;

    /// Find all active cycles, ordered by year ascending.
    async fn find_active(&self) -> Result<Vec<ElectiveCycle>, DomainError>;

    /// List every cycle, ordered by year ascending.
    async fn list_all(&self) -> Result<Vec<ElectiveCycle>, DomainError>;

    /// Check if a cycle exists.
    async fn exists(&self, id: &ElectiveCycleId) -> Result<bool, DomainError>;

    /// Delete a cycle.
    ///
    /// # Errors
    ///
    /// - `ElectiveCycleNotFound` if the cycle doesn't exist
    /// - `CycleInUse` if an institution still references it
    async fn delete(&self, id: &ElectiveCycleId) -> Result<(), DomainError>;
}
