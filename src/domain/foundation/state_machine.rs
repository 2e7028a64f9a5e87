//! State machine trait for status enums.
//!
//! Gives every lifecycle status (elective cycles today, enrollment or
//! institution status later) the same validated transition API.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors list their legal moves; `transition_to` and `is_terminal`
/// come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for CycleStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Active, Inactive))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Active => vec![Inactive],
///             Inactive => vec![],
///         }
///     }
/// }
///
/// let closed = CycleStatus::Active.transition_to(CycleStatus::Inactive)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Enrollment {
        Pending,
        Enrolled,
        Withdrawn,
    }

    impl StateMachine for Enrollment {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Enrollment::*;
            matches!(
                (self, target),
                (Pending, Enrolled) | (Pending, Withdrawn) | (Enrolled, Withdrawn)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Enrollment::*;
            match self {
                Pending => vec![Enrolled, Withdrawn],
                Enrolled => vec![Withdrawn],
                Withdrawn => vec![],
            }
        }
    }

    #[test]
    fn transition_to_accepts_listed_move() {
        assert_eq!(
            Enrollment::Pending.transition_to(Enrollment::Enrolled),
            Ok(Enrollment::Enrolled)
        );
    }

    #[test]
    fn transition_to_rejects_unlisted_move() {
        let err = Enrollment::Withdrawn
            .transition_to(Enrollment::Enrolled)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidTransition {
                from: "Withdrawn".to_string(),
                to: "Enrolled".to_string(),
            }
        );
    }

    #[test]
    fn terminal_state_has_no_exits() {
        assert!(Enrollment::Withdrawn.is_terminal());
        assert!(!Enrollment::Pending.is_terminal());
    }
}
