//! HTTP DTOs for elective cycle endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::academic::{CycleFilter, DisableElectiveCycleResult};
use crate::application::handlers::establishment::{PropagationFailure, PropagationReport};
use crate::domain::academic::ElectiveCycle;
use crate::domain::foundation::CycleStatus;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create the cycle for a year.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateElectiveCycleRequest {
    pub year: i32,
}

/// Query string for cycle listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListElectiveCyclesParams {
    /// Only cycles that are still active.
    #[serde(default)]
    pub active: bool,
    /// Only cycles whose end date is this day.
    pub ending_on: Option<NaiveDate>,
}

impl ListElectiveCyclesParams {
    /// `ending_on` wins over `active` when both are given.
    pub fn filter(&self) -> CycleFilter {
        match (self.ending_on, self.active) {
            (Some(date), _) => CycleFilter::EndingOn(date),
            (None, true) => CycleFilter::Active,
            (None, false) => CycleFilter::All,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Elective cycle details.
#[derive(Debug, Clone, Serialize)]
pub struct ElectiveCycleResponse {
    pub id: String,
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CycleStatus,
    /// Human-readable one-line description.
    pub label: String,
}

impl From<&ElectiveCycle> for ElectiveCycleResponse {
    fn from(cycle: &ElectiveCycle) -> Self {
        Self {
            id: cycle.id().to_string(),
            year: cycle.year(),
            start_date: cycle.start_date(),
            end_date: cycle.end_date(),
            status: cycle.status(),
            label: cycle.to_string(),
        }
    }
}

/// Response for a deactivation.
#[derive(Debug, Clone, Serialize)]
pub struct DisableElectiveCycleResponse {
    pub cycle: ElectiveCycleResponse,
    /// False when the cycle was already inactive.
    pub changed: bool,
}

impl From<DisableElectiveCycleResult> for DisableElectiveCycleResponse {
    fn from(result: DisableElectiveCycleResult) -> Self {
        Self {
            cycle: ElectiveCycleResponse::from(&result.cycle),
            changed: result.changed,
        }
    }
}

/// One institution the propagation could not update.
#[derive(Debug, Clone, Serialize)]
pub struct PropagationFailureResponse {
    pub institution_id: String,
    pub code: String,
    pub message: String,
}

impl From<&PropagationFailure> for PropagationFailureResponse {
    fn from(failure: &PropagationFailure) -> Self {
        Self {
            institution_id: failure.institution_id.to_string(),
            code: failure.error.code.to_string(),
            message: failure.error.message.clone(),
        }
    }
}

/// Propagation outcome.
#[derive(Debug, Clone, Serialize)]
pub struct PropagationResponse {
    pub cycle_id: String,
    pub updated: u32,
    pub failed: u32,
    pub failures: Vec<PropagationFailureResponse>,
}

impl From<&PropagationReport> for PropagationResponse {
    fn from(report: &PropagationReport) -> Self {
        Self {
            cycle_id: report.cycle_id.to_string(),
            updated: report.updated_count(),
            failed: report.failed_count(),
            failures: report
                .failures
                .iter()
                .map(PropagationFailureResponse::from)
                .collect(),
        }
    }
}
