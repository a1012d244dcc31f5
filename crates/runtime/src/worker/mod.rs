//! Worker task that backs the session orchestration.
//!
//! The session worker executes user intents, drives the move animation
//! phases on a single armed deadline, and plays back fetched solutions.

mod session;

pub(crate) use session::{Command, SessionWorker};
