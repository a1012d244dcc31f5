//! Authoritative puzzle state representation.
//!
//! This module owns the data structures describing the board and solution
//! progress. Runtime layers clone or query this state but mutate the board
//! exclusively through the engine.
mod board;
mod progress;

pub use board::{Board, BoardError, Disk, DiskStack, Peg};
pub use progress::Progress;

/// Canonical snapshot of one puzzle session's deterministic state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Physical board: the three disk stacks.
    pub board: Board,
    /// Bookkeeping of progress through the loaded solution.
    pub progress: Progress,
}

impl GameState {
    /// Creates a fresh state with `disks` stacked on peg A and progress at
    /// step 1.
    pub fn initial(disks: u8) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::initial(disks)?,
            progress: Progress::new(),
        })
    }
}
