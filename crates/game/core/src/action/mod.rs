//! Action domain - transitions over the board.
//!
//! A move is expressed as a small action value driven through a three-phase
//! pipeline by the engine: pre_validate → apply → post_validate. Validation
//! lives entirely in the pipeline; the board's mutators trust their callers.
mod movement;

pub use movement::{MoveAction, MoveError};

use crate::state::Board;

/// Defines how a concrete action variant mutates the board.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the board **before** mutation.
    fn pre_validate(&self, _board: &Board) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the board directly.
    fn apply(&self, board: &mut Board) -> Result<(), Self::Error>;

    /// Validates post-conditions using the board **after** mutation.
    fn post_validate(&self, _board: &Board) -> Result<(), Self::Error> {
        Ok(())
    }
}
