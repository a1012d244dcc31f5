//! Move execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for a [`GameState`]'s
//! board. It drives each move through the transition phases and surfaces
//! which phase rejected it, so callers can distinguish rule violations from
//! defensive invariant failures.

use crate::action::{ActionTransition, MoveAction, MoveError};
use crate::state::{Board, Disk, GameState, Peg};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a move through the game engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<MoveError>),
}

/// The board mutation committed by a successful move: what the Step Tracker
/// compares against the expected solution step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommittedMove {
    pub from: Peg,
    pub to: Peg,
    pub disk: Disk,
}

/// Game engine that executes moves against a game state.
///
/// All board mutations flow through the three-phase pipeline:
/// pre_validate → apply → post_validate
///
/// A failure in `apply` or `post_validate` can leave a partial mutation
/// behind; callers that need atomicity execute against a working clone and
/// swap it in on success (the session worker does exactly this).
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes a move by routing it through the transition pipeline.
    ///
    /// Returns the [`CommittedMove`] describing the relocated disk.
    pub fn execute(&mut self, action: &MoveAction) -> Result<CommittedMove, ExecuteError> {
        let disk = self.state.board.top(action.from);

        drive_transition(action, &mut self.state.board).map_err(ExecuteError::Move)?;

        // pre_validate guarantees the source held a disk.
        let disk = disk.ok_or(ExecuteError::Move(TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            MoveError::SourceEmpty(action.from),
        )))?;

        Ok(CommittedMove {
            from: action.from,
            to: action.to,
            disk,
        })
    }
}

#[inline]
fn drive_transition<T>(
    transition: &T,
    board: &mut Board,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(board)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;
    transition
        .apply(board)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;
    transition
        .post_validate(board)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;
    Ok(())
}
