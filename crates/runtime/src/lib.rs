//! Session runtime for the interactive Tower of Hanoi client.
//!
//! This crate wires the pure rules from `hanoi-core` into a live, timer
//! driven session: a background worker owns the authoritative state, drives
//! the per-move animation phases, and plays back fetched solutions. Consumers
//! embed [`Runtime`] to start a session and interact with it through
//! [`SessionHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - `worker` keeps the background task internal to the crate
pub mod api;
pub mod runtime;

mod worker;

pub use api::{
    FlightPhase, GameEvent, GameSnapshot, ProgressSnapshot, Result, RuntimeError, SessionHandle,
    SolutionSummary, TouchOutcome,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
