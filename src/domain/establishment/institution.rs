//! Institution entity.
//!
//! Institutions reference the elective cycle currently in effect but do not
//! own it. The reference is rewritten when a new cycle opens.

use chrono::NaiveTime;

use crate::domain::foundation::{ElectiveCycleId, InstitutionId, ValidationError};

/// Maximum length for an institution name.
pub const MAX_NAME_LENGTH: usize = 150;

/// A school or other educational establishment.
///
/// # Invariants
///
/// - `name` is 1-150 characters after trimming
/// - `opening_hour < closing_hour`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    id: InstitutionId,
    name: String,
    opening_hour: NaiveTime,
    closing_hour: NaiveTime,
    /// Soft-delete flag.
    is_active: bool,
    elective_cycle_id: ElectiveCycleId,
}

impl Institution {
    /// Create a new active institution attached to `elective_cycle_id`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` for a bad name
    /// - `InvalidFormat` if the institution closes before it opens
    pub fn new(
        name: impl Into<String>,
        opening_hour: NaiveTime,
        closing_hour: NaiveTime,
        elective_cycle_id: ElectiveCycleId,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH));
        }
        if closing_hour <= opening_hour {
            return Err(ValidationError::invalid_format(
                "closing_hour",
                "must be later than opening_hour",
            ));
        }

        Ok(Self {
            id: InstitutionId::new(),
            name,
            opening_hour,
            closing_hour,
            is_active: true,
            elective_cycle_id,
        })
    }

    /// Reconstitute an institution from persistence (no validation).
    pub fn reconstitute(
        id: InstitutionId,
        name: String,
        opening_hour: NaiveTime,
        closing_hour: NaiveTime,
        is_active: bool,
        elective_cycle_id: ElectiveCycleId,
    ) -> Self {
        Self {
            id,
            name,
            opening_hour,
            closing_hour,
            is_active,
            elective_cycle_id,
        }
    }

    pub fn id(&self) -> InstitutionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opening_hour(&self) -> NaiveTime {
        self.opening_hour
    }

    pub fn closing_hour(&self) -> NaiveTime {
        self.closing_hour
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn elective_cycle_id(&self) -> ElectiveCycleId {
        self.elective_cycle_id
    }

    /// Points the institution at another cycle. Returns true if it changed.
    pub fn assign_cycle(&mut self, cycle_id: ElectiveCycleId) -> bool {
        if self.elective_cycle_id == cycle_id {
            return false;
        }
        self.elective_cycle_id = cycle_id;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn new_trims_name_and_starts_active() {
        let cycle_id = ElectiveCycleId::new();
        let inst = Institution::new("  Liceo Norte ", hour(8), hour(17), cycle_id).unwrap();
        assert_eq!(inst.name(), "Liceo Norte");
        assert!(inst.is_active());
        assert_eq!(inst.elective_cycle_id(), cycle_id);
    }

    #[test]
    fn new_rejects_blank_name() {
        let result = Institution::new("   ", hour(8), hour(17), ElectiveCycleId::new());
        assert_eq!(result.unwrap_err(), ValidationError::empty_field("name"));
    }

    #[test]
    fn new_rejects_overlong_name() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        let result = Institution::new(name, hour(8), hour(17), ElectiveCycleId::new());
        assert!(matches!(result, Err(ValidationError::TooLong { .. })));
    }

    #[test]
    fn new_rejects_inverted_hours() {
        let result = Institution::new("Liceo", hour(17), hour(8), ElectiveCycleId::new());
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn assign_cycle_reports_change() {
        let mut inst =
            Institution::new("Liceo", hour(8), hour(17), ElectiveCycleId::new()).unwrap();
        let next = ElectiveCycleId::new();
        assert!(inst.assign_cycle(next));
        assert!(!inst.assign_cycle(next));
        assert_eq!(inst.elective_cycle_id(), next);
    }
}
