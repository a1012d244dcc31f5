//! Public session API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration or the worker internals.

pub mod errors;
pub mod events;
pub mod handle;
pub mod types;

pub use errors::{Result, RuntimeError};
pub use events::GameEvent;
pub use handle::SessionHandle;
pub use types::{FlightPhase, GameSnapshot, ProgressSnapshot, SolutionSummary, TouchOutcome};
