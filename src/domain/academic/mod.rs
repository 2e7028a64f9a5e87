//! Academic module - Elective cycles and the institutional calendar.
//!
//! The elective cycle is the academic year. It opens on a fixed date,
//! closes on a fixed date, and institutions point at the one currently
//! in effect.

mod calendar;
mod elective_cycle;

pub use calendar::{AcademicCalendar, ScheduledTransition, MAX_YEAR, MIN_YEAR};
pub use elective_cycle::ElectiveCycle;
