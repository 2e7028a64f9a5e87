//! Institutional calendar anchors.
//!
//! Every elective cycle opens on February 26th and closes on December 15th
//! of its own year. The daily clock fires only when today is exactly one of
//! those dates; a missed day is a missed transition.

use chrono::{Datelike, NaiveDate};

use crate::domain::foundation::ValidationError;

/// Earliest year an elective cycle may be created for.
pub const MIN_YEAR: i32 = 2000;

/// Latest year an elective cycle may be created for.
pub const MAX_YEAR: i32 = 2100;

const OPEN_MONTH: u32 = 2;
const OPEN_DAY: u32 = 26;
const CLOSE_MONTH: u32 = 12;
const CLOSE_DAY: u32 = 15;

/// Transition the calendar schedules for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTransition {
    /// Open the cycle for `year`.
    Open { year: i32 },
    /// Close every active cycle ending `on` this date.
    Close { on: NaiveDate },
    /// Not an anchor date.
    Idle,
}

/// Fixed open/close anchors for elective cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcademicCalendar;

impl AcademicCalendar {
    /// Validates that `year` is inside the supported range.
    pub fn validate_year(year: i32) -> Result<(), ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::out_of_range("year", MIN_YEAR, MAX_YEAR, year));
        }
        Ok(())
    }

    /// February 26th of `year`.
    pub fn open_date(year: i32) -> Result<NaiveDate, ValidationError> {
        NaiveDate::from_ymd_opt(year, OPEN_MONTH, OPEN_DAY)
            .ok_or_else(|| ValidationError::invalid_format("start_date", "not a calendar date"))
    }

    /// December 15th of `year`.
    pub fn close_date(year: i32) -> Result<NaiveDate, ValidationError> {
        NaiveDate::from_ymd_opt(year, CLOSE_MONTH, CLOSE_DAY)
            .ok_or_else(|| ValidationError::invalid_format("end_date", "not a calendar date"))
    }

    /// Decides which transition, if any, applies on `today`.
    ///
    /// Comparison is exact on the whole date.
    pub fn scheduled_transition(today: NaiveDate) -> ScheduledTransition {
        if today.month() == OPEN_MONTH && today.day() == OPEN_DAY {
            ScheduledTransition::Open { year: today.year() }
        } else if today.month() == CLOSE_MONTH && today.day() == CLOSE_DAY {
            ScheduledTransition::Close { on: today }
        } else {
            ScheduledTransition::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_anchor_schedules_open_for_that_year() {
        assert_eq!(
            AcademicCalendar::scheduled_transition(date(2026, 2, 26)),
            ScheduledTransition::Open { year: 2026 }
        );
    }

    #[test]
    fn close_anchor_schedules_close_on_that_day() {
        assert_eq!(
            AcademicCalendar::scheduled_transition(date(2026, 12, 15)),
            ScheduledTransition::Close {
                on: date(2026, 12, 15)
            }
        );
    }

    #[test]
    fn other_days_are_idle() {
        for d in [date(2026, 7, 1), date(2026, 2, 27), date(2026, 12, 14), date(2026, 3, 10)] {
            assert_eq!(AcademicCalendar::scheduled_transition(d), ScheduledTransition::Idle);
        }
    }

    #[test]
    fn year_bounds_are_inclusive() {
        assert!(AcademicCalendar::validate_year(MIN_YEAR).is_ok());
        assert!(AcademicCalendar::validate_year(MAX_YEAR).is_ok());
        assert!(AcademicCalendar::validate_year(MIN_YEAR - 1).is_err());
        assert!(AcademicCalendar::validate_year(MAX_YEAR + 1).is_err());
    }

    proptest! {
        #[test]
        fn anchors_are_ordered_for_every_supported_year(year in MIN_YEAR..=MAX_YEAR) {
            let open = AcademicCalendar::open_date(year).unwrap();
            let close = AcademicCalendar::close_date(year).unwrap();
            prop_assert_eq!((open.month(), open.day()), (2, 26));
            prop_assert_eq!((close.month(), close.day()), (12, 15));
            prop_assert!(open < close);
        }

        #[test]
        fn open_date_always_schedules_open(year in MIN_YEAR..=MAX_YEAR) {
            let open = AcademicCalendar::open_date(year).unwrap();
            prop_assert_eq!(
                AcademicCalendar::scheduled_transition(open),
                ScheduledTransition::Open { year }
            );
        }
    }
}
