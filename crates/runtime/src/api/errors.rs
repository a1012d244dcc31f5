//! Unified error types surfaced by the session API.
//!
//! Wraps failures from worker coordination and session commands so clients
//! can bubble them up with consistent context. Rule violations during play
//! are not errors; they surface as [`TouchOutcome`](super::TouchOutcome)
//! variants instead.

use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Board(#[from] hanoi_core::BoardError),

    #[error("no playable solution is loaded")]
    SolutionNotPlayable,

    #[error("auto-solve is already running")]
    AutoSolveActive,

    #[error("a move is already in flight")]
    MoveInFlight,
}
