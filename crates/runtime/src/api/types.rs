//! View types shared between the session worker and presentation layers.

use std::collections::BTreeSet;

use hanoi_core::{Board, Disk, Peg};

/// Per-move animation phase as observed by the presentation layer.
///
/// A move advances strictly `Idle → Lifted → Transiting → Settling → Idle`,
/// and only one move is ever in flight per session. The board mutation is
/// committed at the `Transiting → Settling` boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FlightPhase {
    /// No disk in flight.
    #[default]
    Idle,
    /// A disk is raised above its source peg; the board is unchanged.
    Lifted { disk: Disk, from: Peg },
    /// A destination was chosen and the disk travels toward it; the move is
    /// not yet committed to the board.
    Transiting { disk: Disk, from: Peg, to: Peg },
    /// The move is committed and the disk drops into place.
    Settling { disk: Disk, from: Peg, to: Peg },
}

impl FlightPhase {
    /// True while a destination is chosen and timers drive the move.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            FlightPhase::Transiting { .. } | FlightPhase::Settling { .. }
        )
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, FlightPhase::Idle)
    }
}

/// Outcome of a peg touch routed through the facade.
///
/// Rule violations are outcomes, not errors: the presentation layer surfaces
/// them and play continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchOutcome {
    /// The peg's top disk was lifted and awaits a destination.
    Lifted { disk: Disk, from: Peg },
    /// The lifted disk was put back on its source peg.
    Deselected,
    /// A legal destination was chosen; the move animation started.
    MoveStarted { from: Peg, to: Peg },
    /// The destination violates the size rule; the selection was cleared.
    InvalidMove { from: Peg, to: Peg },
    /// Touching an empty peg with nothing lifted does nothing.
    EmptyPeg,
    /// A move is in flight or auto-solve owns the session.
    Busy,
}

/// Progress toward the canonical solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// The next step number expected (1-based).
    pub current_step: u32,
    /// Step numbers already matched against the solution.
    pub completed: BTreeSet<u32>,
    /// True once the final solution step has been matched.
    pub is_solved: bool,
}

/// Display summary of the loaded solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolutionSummary {
    pub disks: u8,
    pub total_steps: u64,
    /// False for count-only responses; such boards cannot be played.
    pub playable: bool,
}

/// Full session snapshot for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub flight: FlightPhase,
    pub progress: ProgressSnapshot,
    pub auto_solving: bool,
    pub solution: Option<SolutionSummary>,
}
