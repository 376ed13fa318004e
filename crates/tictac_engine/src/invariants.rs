//! Consistency properties of a live engine.
//!
//! The engine checks these after every accepted move in debug builds.
//! They are testable independently and document what the state machine
//! guarantees.

use crate::{Engine, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
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
            violations.push(InvariantViolation {
                description: I1::description(),
            });
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation {
                description: I2::description(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X has either as many marks as O or exactly one more.
pub struct BalancedMarks;

impl Invariant<Engine> for BalancedMarks {
    fn holds(engine: &Engine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// The turn agrees with the marks on the board.
///
/// While the game is live the side with fewer marks (X on a tie) is to
/// move. Once it is over the turn stays with whoever moved last.
pub struct TurnMatchesMarks;

impl Invariant<Engine> for TurnMatchesMarks {
    fn holds(engine: &Engine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        let x_moved_last = x > o;
        let expected = match (engine.is_active(), x_moved_last) {
            (true, true) => Player::O,
            (true, false) => Player::X,
            (false, true) => Player::X,
            (false, false) => Player::O,
        };
        engine.turn() == expected
    }

    fn description() -> &'static str {
        "Turn matches the marks on the board"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (BalancedMarks, TurnMatchesMarks);
