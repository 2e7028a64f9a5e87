//! ElectiveCycle aggregate.
//!
//! An elective cycle is the academic-year record that bounds enrollment,
//! attendance and grading. One exists per year.
//!
//! # Invariants
//!
//! - `year` is in `[MIN_YEAR, MAX_YEAR]`
//! - `start_date < end_date`
//! - once `Inactive`, a cycle never becomes `Active` again

use chrono::NaiveDate;
use std::fmt;

use super::calendar::AcademicCalendar;
use crate::domain::foundation::{CycleStatus, ElectiveCycleId, StateMachine, ValidationError};

/// Academic-year record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectiveCycle {
    id: ElectiveCycleId,
    year: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: CycleStatus,
}

impl ElectiveCycle {
    /// Builds the cycle for `year` using the institutional anchors.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the year is outside the supported range
    pub fn for_year(year: i32) -> Result<Self, ValidationError> {
        AcademicCalendar::validate_year(year)?;
        let start_date = AcademicCalendar::open_date(year)?;
        let end_date = AcademicCalendar::close_date(year)?;
        Self::new(ElectiveCycleId::new(), year, start_date, end_date)
    }

    /// Creates a new active cycle with explicit dates.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the year is outside the supported range
    /// - `InvalidFormat` if `end_date` is not after `start_date`
    pub fn new(
        id: ElectiveCycleId,
        year: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        AcademicCalendar::validate_year(year)?;
        if end_date <= start_date {
            return Err(ValidationError::invalid_format(
                "end_date",
                format!("{} must be after start date {}", end_date, start_date),
            ));
        }

        Ok(Self {
            id,
            year,
            start_date,
            end_date,
            status: CycleStatus::Active,
        })
    }

    /// Reconstitute a cycle from persistence (no validation).
    pub fn reconstitute(
        id: ElectiveCycleId,
        year: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: CycleStatus,
    ) -> Self {
        Self {
            id,
            year,
            start_date,
            end_date,
            status,
        }
    }

    pub fn id(&self) -> ElectiveCycleId {
        self.id
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn status(&self) -> CycleStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns true if this cycle is active and ends exactly on `date`.
    pub fn expires_on(&self, date: NaiveDate) -> bool {
        self.is_active() && self.end_date == date
    }

    /// Marks the cycle inactive.
    ///
    /// Returns `Ok(false)` without touching anything when the cycle is
    /// already inactive.
    pub fn deactivate(&mut self) -> Result<bool, ValidationError> {
        if !self.is_active() {
            return Ok(false);
        }
        self.status = self.status.transition_to(CycleStatus::Inactive)?;
        Ok(true)
    }
}

impl fmt::Display for ElectiveCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Year: {} || Start date: {} || End date: {}",
            self.year, self.start_date, self.end_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::academic::{MAX_YEAR, MIN_YEAR};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn for_year_uses_institutional_anchors() {
        let cycle = ElectiveCycle::for_year(2026).unwrap();
        assert_eq!(cycle.year(), 2026);
        assert_eq!(cycle.start_date(), date(2026, 2, 26));
        assert_eq!(cycle.end_date(), date(2026, 12, 15));
        assert!(cycle.is_active());
    }

    #[test]
    fn for_year_rejects_years_out_of_range() {
        assert!(matches!(
            ElectiveCycle::for_year(1999),
            Err(ValidationError::OutOfRange { actual: 1999, .. })
        ));
        assert!(ElectiveCycle::for_year(2101).is_err());
    }

    #[test]
    fn new_rejects_end_before_start() {
        let result = ElectiveCycle::new(
            ElectiveCycleId::new(),
            2026,
            date(2026, 12, 15),
            date(2026, 2, 26),
        );
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn new_rejects_equal_dates() {
        let d = date(2026, 6, 1);
        assert!(ElectiveCycle::new(ElectiveCycleId::new(), 2026, d, d).is_err());
    }

    #[test]
    fn deactivate_closes_once() {
        let mut cycle = ElectiveCycle::for_year(2026).unwrap();
        assert_eq!(cycle.deactivate(), Ok(true));
        assert_eq!(cycle.status(), CycleStatus::Inactive);
        assert_eq!(cycle.deactivate(), Ok(false));
        assert_eq!(cycle.status(), CycleStatus::Inactive);
    }

    #[test]
    fn expires_on_requires_active_and_matching_end_date() {
        let mut cycle = ElectiveCycle::for_year(2026).unwrap();
        assert!(cycle.expires_on(date(2026, 12, 15)));
        assert!(!cycle.expires_on(date(2026, 12, 14)));
        cycle.deactivate().unwrap();
        assert!(!cycle.expires_on(date(2026, 12, 15)));
    }

    #[test]
    fn displays_year_and_bounds() {
        let cycle = ElectiveCycle::for_year(2026).unwrap();
        assert_eq!(
            cycle.to_string(),
            "Year: 2026 || Start date: 2026-02-26 || End date: 2026-12-15"
        );
    }

    proptest! {
        #[test]
        fn every_created_cycle_starts_before_it_ends(year in MIN_YEAR..=MAX_YEAR) {
            let cycle = ElectiveCycle::for_year(year).unwrap();
            prop_assert!(cycle.start_date() < cycle.end_date());
            prop_assert_eq!(cycle.year(), year);
        }
    }
}
