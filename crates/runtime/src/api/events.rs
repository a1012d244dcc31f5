//! Events emitted during a session for front-ends to observe.
//!
//! Consumers subscribe to [`GameEvent`] to react to state changes without
//! blocking the worker loop.

use hanoi_core::{CommittedMove, Disk, Peg};

use super::types::{FlightPhase, ProgressSnapshot};

/// Events published by the session worker.
#[derive(Clone, Debug)]
pub enum GameEvent {
    /// The board was rebuilt with `disks` disks stacked on peg A.
    BoardReset { disks: u8 },
    /// A solution was installed; `playable` is false for count-only
    /// responses.
    SolutionLoaded {
        disks: u8,
        total_steps: u64,
        playable: bool,
    },
    /// The animation phase changed, including selection and deselection.
    FlightChanged { flight: FlightPhase },
    /// A rule-violating placement was attempted and rejected.
    MoveRejected { from: Peg, to: Peg },
    /// A move finished settling on the board. `matched` carries the solution
    /// step number when the move equals the expected step.
    MoveCommitted {
        mv: CommittedMove,
        matched: Option<u32>,
        progress: ProgressSnapshot,
    },
    /// The final solution step was matched.
    Solved,
    /// Automated playback started.
    AutoSolveStarted,
    /// Automated playback was cancelled before completion.
    AutoSolveStopped,
    /// Automated playback played every remaining step. Published exactly
    /// once per run.
    AutoSolveCompleted,
    /// The top disk of the recorded source peg did not match the expected
    /// solution step; automated playback halted.
    Desynchronized {
        step: u32,
        source: Peg,
        expected: Disk,
        found: Option<Disk>,
    },
}
