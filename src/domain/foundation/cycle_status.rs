//! CycleStatus enum for tracking the lifecycle of elective cycles.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of an elective cycle.
///
/// Persisted as the `is_active` flag. Once a cycle is closed there is no
/// path back to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    #[default]
    Active,
    Inactive,
}

impl CycleStatus {
    /// Maps the persisted boolean flag onto a status.
    pub fn from_is_active(is_active: bool) -> Self {
        if is_active {
            CycleStatus::Active
        } else {
            CycleStatus::Inactive
        }
    }

    /// Returns the persisted boolean flag for this status.
    pub fn is_active(&self) -> bool {
        matches!(self, CycleStatus::Active)
    }
}

impl StateMachine for CycleStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (CycleStatus::Active, CycleStatus::Inactive))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            CycleStatus::Active => vec![CycleStatus::Inactive],
            CycleStatus::Inactive => vec![],
        }
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CycleStatus::Active => "Active",
            CycleStatus::Inactive => "Inactive",
        };
        write!(f, "{}", s)
    }
}
