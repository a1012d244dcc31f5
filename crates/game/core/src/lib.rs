//! Deterministic Tower of Hanoi rules and data types shared across layers.
//!
//! `hanoi-core` defines the canonical puzzle model (board, moves, solution
//! progress) and exposes pure APIs reused by the session runtime and the
//! solver client. All board mutation flows through [`engine::GameEngine`],
//! and supporting crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod solution;
pub mod state;

pub use action::{ActionTransition, MoveAction, MoveError};
pub use config::GameConfig;
pub use engine::{CommittedMove, ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use solution::{Solution, SolutionError, Step};
pub use state::{Board, BoardError, Disk, DiskStack, GameState, Peg, Progress};
