//! Client adapter for the remote Tower of Hanoi solver.
//!
//! The solver is an external collaborator: given a disk count it returns the
//! optimal move sequence, or a bare move count for boards too large to
//! enumerate. This crate defines the [`SolverApi`] capability trait, the
//! HTTP implementation used in production, and an in-memory mock for tests
//! and offline development.

pub mod http;
pub mod mock;
pub mod traits;
pub mod types;

pub use http::HttpSolverClient;
pub use mock::MockSolver;
pub use traits::{SolverApi, SolverError};
pub use types::{SolveResponse, WireStep};
