//! Solver abstraction trait.
//!
//! Implementations are pure request/response adapters: a failed call leaves
//! no trace in game state, so callers may simply retry.

use async_trait::async_trait;

use hanoi_core::Solution;

/// Errors surfaced by solver implementations.
///
/// Variants carry strings rather than transport types so the trait stays
/// transport-agnostic.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("disk count {0} is out of range for the solver")]
    InvalidDiskCount(u8),

    #[error("network error: {0}")]
    Network(String),

    #[error("solver returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed solver payload: {0}")]
    Malformed(String),
}

/// Capability trait for obtaining the optimal move sequence for a board.
#[async_trait]
pub trait SolverApi: Send + Sync {
    /// Solve the puzzle for `disks` disks.
    ///
    /// Returns a playable solution up to the solver's enumeration
    /// threshold, and a count-only solution beyond it.
    async fn solve(&self, disks: u8) -> Result<Solution, SolverError>;
}
