use crate::action::ActionTransition;
use crate::state::{Board, Disk, Peg};

/// Errors raised by the move transition pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("peg {0} has no disk to lift")]
    SourceEmpty(Peg),

    #[error("source and destination are both {0}")]
    SamePeg(Peg),

    #[error("cannot place disk {moving} onto smaller disk {resting}")]
    LargerOnSmaller { moving: Disk, resting: Disk },

    #[error("peg {peg} cannot hold another disk")]
    DestinationFull { peg: Peg },

    #[error("stack on {peg} lost strict ordering after the move")]
    OrderingViolated { peg: Peg },
}

/// A single disk relocation intent materialised into a canonical action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub from: Peg,
    pub to: Peg,
}

impl MoveAction {
    pub fn new(from: Peg, to: Peg) -> Self {
        Self { from, to }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn pre_validate(&self, board: &Board) -> Result<(), Self::Error> {
        if self.from == self.to {
            return Err(MoveError::SamePeg(self.from));
        }

        let moving = board
            .top(self.from)
            .ok_or(MoveError::SourceEmpty(self.from))?;

        if let Some(resting) = board.top(self.to)
            && moving > resting
        {
            return Err(MoveError::LargerOnSmaller { moving, resting });
        }

        Ok(())
    }

    fn apply(&self, board: &mut Board) -> Result<(), Self::Error> {
        let disk = board
            .lift_top(self.from)
            .ok_or(MoveError::SourceEmpty(self.from))?;
        board
            .place(self.to, disk)
            .map_err(|_| MoveError::DestinationFull { peg: self.to })
    }

    fn post_validate(&self, board: &Board) -> Result<(), Self::Error> {
        if !board.is_ordered() {
            return Err(MoveError::OrderingViolated { peg: self.to });
        }
        Ok(())
    }
}
