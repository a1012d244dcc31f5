use core::fmt;

use arrayvec::ArrayVec;
use strum::{Display, EnumString};

use crate::config::GameConfig;

/// Ordered stack of disks on a single peg, bottom to top.
pub type DiskStack = ArrayVec<Disk, { GameConfig::MAX_DISKS }>;

/// One of the three fixed peg positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    pub const fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }
}

/// A puzzle piece identified by its size rank (1 = smallest).
///
/// Disks carry no independent identity; equality is by rank, and a board
/// holds each rank in `1..=N` exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disk(pub u8);

impl Disk {
    pub const fn rank(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised while constructing or mutating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    #[error("disk count must be at least 1")]
    NoDisks,

    #[error("disk count {requested} exceeds maximum {max}")]
    TooManyDisks { requested: u8, max: usize },

    #[error("peg {peg} cannot hold another disk")]
    PegFull { peg: Peg },
}

/// The three ordered disk stacks; single source of truth for the physical
/// board.
///
/// Invariants: within each stack disk sizes strictly decrease from bottom to
/// top, and the multiset union of all stacks equals exactly `{1..N}`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pegs: [DiskStack; 3],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pegs: [DiskStack::new(), DiskStack::new(), DiskStack::new()],
        }
    }
}

impl Board {
    /// Creates the starting position: all `disks` stacked on peg A, largest
    /// at the bottom.
    pub fn initial(disks: u8) -> Result<Self, BoardError> {
        if disks == 0 {
            return Err(BoardError::NoDisks);
        }
        if disks as usize > GameConfig::MAX_DISKS {
            return Err(BoardError::TooManyDisks {
                requested: disks,
                max: GameConfig::MAX_DISKS,
            });
        }

        let mut board = Board::default();
        for rank in (1..=disks).rev() {
            board.pegs[Peg::A.index()].push(Disk(rank));
        }
        Ok(board)
    }

    pub fn stack(&self, peg: Peg) -> &DiskStack {
        &self.pegs[peg.index()]
    }

    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(|stack| stack.len()).sum()
    }

    /// Legality predicate for relocating the top disk of `from` onto `to`.
    ///
    /// False when the source peg is empty, when source and destination are
    /// the same peg, or when the destination's top disk is smaller than the
    /// disk being moved. Pure; never mutates the board.
    pub fn can_move(&self, from: Peg, to: Peg) -> bool {
        if from == to {
            return false;
        }
        let Some(moving) = self.top(from) else {
            return false;
        };
        match self.top(to) {
            Some(resting) => moving < resting,
            None => true,
        }
    }

    /// Removes and returns the top disk of `peg`.
    ///
    /// Returns `None` on an empty peg. Callers guarantee non-emptiness via
    /// [`Board::can_move`] or selection logic before invoking this.
    pub fn lift_top(&mut self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].pop()
    }

    /// Appends `disk` on top of `peg`.
    ///
    /// Ordering is the caller's contract (checked by [`Board::can_move`]
    /// before mutation); only capacity is enforced here.
    pub fn place(&mut self, peg: Peg, disk: Disk) -> Result<(), BoardError> {
        self.pegs[peg.index()]
            .try_push(disk)
            .map_err(|_| BoardError::PegFull { peg })
    }

    /// True when every stack strictly decreases in size from bottom to top.
    pub fn is_ordered(&self) -> bool {
        self.pegs
            .iter()
            .all(|stack| stack.windows(2).all(|pair| pair[0] > pair[1]))
    }

    /// True when the board holds each rank in `1..=disks` exactly once.
    pub fn holds_exactly(&self, disks: u8) -> bool {
        if self.disk_count() != disks as usize {
            return false;
        }
        let mut seen = [false; GameConfig::MAX_DISKS + 1];
        for stack in &self.pegs {
            for disk in stack {
                let rank = disk.rank() as usize;
                if rank == 0 || rank > disks as usize || seen[rank] {
                    return false;
                }
                seen[rank] = true;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_stacks_all_disks_on_a() {
        for disks in 1..=GameConfig::MAX_DISKS as u8 {
            let board = Board::initial(disks).unwrap();
            let expected: Vec<Disk> = (1..=disks).rev().map(Disk).collect();
            assert_eq!(board.stack(Peg::A).as_slice(), expected.as_slice());
            assert!(board.stack(Peg::B).is_empty());
            assert!(board.stack(Peg::C).is_empty());
            assert!(board.is_ordered());
            assert!(board.holds_exactly(disks));
        }
    }

    #[test]
    fn initial_board_rejects_bad_disk_counts() {
        assert_eq!(Board::initial(0), Err(BoardError::NoDisks));
        assert_eq!(
            Board::initial(GameConfig::MAX_DISKS as u8 + 1),
            Err(BoardError::TooManyDisks {
                requested: GameConfig::MAX_DISKS as u8 + 1,
                max: GameConfig::MAX_DISKS,
            })
        );
    }

    #[test]
    fn can_move_rejects_empty_source_and_same_peg() {
        let board = Board::initial(3).unwrap();
        assert!(!board.can_move(Peg::B, Peg::C));
        assert!(!board.can_move(Peg::A, Peg::A));
        assert!(board.can_move(Peg::A, Peg::B));
        assert!(board.can_move(Peg::A, Peg::C));
    }

    #[test]
    fn can_move_rejects_larger_disk_on_smaller() {
        let mut board = Board::initial(2).unwrap();
        let disk = board.lift_top(Peg::A).unwrap();
        board.place(Peg::C, disk).unwrap();

        // Disk 2 on A cannot rest on disk 1 on C.
        assert!(!board.can_move(Peg::A, Peg::C));
        // Disk 1 can always return onto disk 2.
        assert!(board.can_move(Peg::C, Peg::A));
        assert!(board.can_move(Peg::A, Peg::B));
    }

    #[test]
    fn lift_and_place_round_trip_preserves_invariants() {
        let mut board = Board::initial(4).unwrap();
        let disk = board.lift_top(Peg::A).unwrap();
        assert_eq!(disk, Disk(1));
        board.place(Peg::B, disk).unwrap();

        assert_eq!(board.top(Peg::B), Some(Disk(1)));
        assert_eq!(board.top(Peg::A), Some(Disk(2)));
        assert!(board.is_ordered());
        assert!(board.holds_exactly(4));
    }

    #[test]
    fn lift_from_empty_peg_returns_none() {
        let mut board = Board::initial(1).unwrap();
        assert_eq!(board.lift_top(Peg::C), None);
    }

    #[test]
    fn peg_labels_parse_case_insensitively() {
        assert_eq!("A".parse::<Peg>(), Ok(Peg::A));
        assert_eq!("b".parse::<Peg>(), Ok(Peg::B));
        assert!("D".parse::<Peg>().is_err());
        assert_eq!(Peg::C.to_string(), "C");
    }
}
