//! State machine trait for lifecycle enums.
//!
//! Gives every status enum the same validated `transition_to` entry point,
//! so callers never assign a new state without checking the edge exists.

use super::ValidationError;

/// Trait for enums whose values form a directed transition graph.
///
/// # Example
///
/// ```ignore
/// let next = DialogState::Idle.transition_to(DialogState::RatingShown)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if the edge `self -> target` exists.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all states reachable in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs a validated transition.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(
                format!("{:?}", self),
                format!("{:?}", target),
            ))
        }
    }

    /// Checks if no outgoing transitions remain.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
