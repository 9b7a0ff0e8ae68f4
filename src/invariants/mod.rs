//! First-class invariants for the snapshot history.
//!
//! Invariants are logical properties that must hold throughout play. They
//! are testable independently and serve as documentation of system
//! guarantees.

pub mod cursor_bounds;
pub mod snapshot_chain;
pub mod turn_parity;

pub use cursor_bounds::CursorBoundsInvariant;
pub use snapshot_chain::SnapshotChainInvariant;
pub use turn_parity::TurnParityInvariant;

use crate::history::History;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    SnapshotChainInvariant,
    TurnParityInvariant,
    CursorBoundsInvariant,
);

/// Panics in debug builds when any history invariant is violated.
pub fn assert_invariants(history: &History) {
    if cfg!(debug_assertions) {
        if let Err(violations) = HistoryInvariants::check_all(history) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("history invariant violated: {descriptions}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::session::GameSession;

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        let history = History::new();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let positions = [4, 0, 8]
            .map(|i| Position::from_index(i).expect("index in range"));
        let session = GameSession::replay(&positions).expect("legal sequence");
        assert!(HistoryInvariants::check_all(session.history()).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let history = History::new();

        type TwoInvariants = (SnapshotChainInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&history).is_ok());
    }
}
