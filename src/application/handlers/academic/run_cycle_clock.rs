//! RunCycleClockHandler - Daily open/close decision for elective cycles.
//!
//! Meant to be invoked once per calendar day by an external scheduler. The
//! date is passed in; nothing here reads the system clock.
//!
//! Only the exact anchor dates trigger anything. If the scheduler is down on
//! February 26th or December 15th the transition is skipped, and no catch-up
//! is attempted on a later day.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use super::close_expired_cycles::{CloseExpiredCyclesCommand, CloseExpiredCyclesHandler};
use super::create_elective_cycle::{
    CreateElectiveCycleCommand, CreateElectiveCycleError, CreateElectiveCycleHandler,
};
use crate::domain::academic::{AcademicCalendar, ElectiveCycle, ScheduledTransition};
use crate::domain::foundation::DomainError;
use crate::ports::ElectiveCycleRepository;

/// Command to run the clock for one day.
#[derive(Debug, Clone)]
pub struct RunCycleClockCommand {
    pub today: NaiveDate,
}

/// What the clock did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleTransition {
    Opened(ElectiveCycle),
    Closed(u32),
    NoAction { today: NaiveDate },
}

impl fmt::Display for CycleTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleTransition::Opened(cycle) => {
                write!(f, "Successfully opened elective cycle: {}", cycle)
            }
            CycleTransition::Closed(count) => {
                write!(f, "Successfully closed elective cycles: {}", count)
            }
            CycleTransition::NoAction { today } => write!(
                f,
                "Today ({}) is not a scheduled date for cycle changes.",
                today
            ),
        }
    }
}

/// Error type for a clock run.
#[derive(Debug, Clone)]
pub enum RunCycleClockError {
    /// Opening failed (including `DuplicateYear`).
    Open(CreateElectiveCycleError),
    /// Closing failed.
    Close(DomainError),
}

impl fmt::Display for RunCycleClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunCycleClockError::Open(err) => write!(f, "Failed to open elective cycle: {}", err),
            RunCycleClockError::Close(err) => write!(f, "Failed to close elective cycles: {}", err),
        }
    }
}

impl std::error::Error for RunCycleClockError {}

/// Handler that decides and performs at most one transition per day.
pub struct RunCycleClockHandler {
    cycle_repository: Arc<dyn ElectiveCycleRepository>,
    create: CreateElectiveCycleHandler,
    close: CloseExpiredCyclesHandler,
}

impl RunCycleClockHandler {
    pub fn new(cycle_repository: Arc<dyn ElectiveCycleRepository>) -> Self {
        Self {
            create: CreateElectiveCycleHandler::new(cycle_repository.clone()),
            close: CloseExpiredCyclesHandler::new(cycle_repository.clone()),
            cycle_repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: RunCycleClockCommand,
    ) -> Result<CycleTransition, RunCycleClockError> {
        match AcademicCalendar::scheduled_transition(cmd.today) {
            ScheduledTransition::Open { year } => {
                let result = self
                    .create
                    .handle(CreateElectiveCycleCommand { year })
                    .await
                    .map_err(RunCycleClockError::Open)?;
                self.warn_on_overlapping_cycles().await;
                Ok(CycleTransition::Opened(result.cycle))
            }
            ScheduledTransition::Close { on } => {
                let result = self
                    .close
                    .handle(CloseExpiredCyclesCommand { today: on })
                    .await
                    .map_err(RunCycleClockError::Close)?;
                Ok(CycleTransition::Closed(result.count()))
            }
            ScheduledTransition::Idle => {
                tracing::debug!(today = %cmd.today, "Not a scheduled date for cycle changes");
                Ok(CycleTransition::NoAction { today: cmd.today })
            }
        }
    }

    /// More than one active cycle means a close day was missed.
    async fn warn_on_overlapping_cycles(&self) {
        match self.cycle_repository.find_active().await {
            Ok(active) if active.len() > 1 => {
                let years: Vec<i32> = active.iter().map(|c| c.year()).collect();
                tracing::warn!(?years, "Multiple elective cycles are active at once");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Could not check for overlapping active cycles: {}", e),
        }
    }
}
