//! High-level session orchestrator.
//!
//! The runtime spawns the background session worker, wires up the command
//! and event channels, and exposes a builder-based API for clients to drive
//! the puzzle.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use hanoi_core::{GameConfig, GameState};

use crate::api::{GameEvent, Result, RuntimeError, SessionHandle};
use crate::worker::SessionWorker;

/// Session configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Dwell of the horizontal travel phase (D1).
    pub travel_duration: Duration,
    /// Dwell of the drop/settle phase (D2).
    pub settle_duration: Duration,
    /// Pause between auto-solved steps, independent of the phase dwells.
    pub step_pause: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            travel_duration: Duration::from_millis(300),
            settle_duration: Duration::from_millis(400),
            step_pause: Duration::from_millis(100),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that owns one interactive puzzle session.
///
/// Design: Runtime owns the worker and coordinates its lifetime.
/// [`SessionHandle`] provides a cloneable façade for clients; timers and
/// session state are per-instance, so any number of sessions coexist.
pub struct Runtime {
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Start a session with the given configuration.
    pub fn start(config: RuntimeConfig) -> Result<Self> {
        Self::builder().with_config(config).build()
    }

    /// Get a cloneable handle to this session.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe()
    }

    /// Shutdown the session gracefully.
    ///
    /// The worker exits once every handle clone is dropped; this drops the
    /// runtime's own handle and joins the task.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of disks on the starting board.
    pub fn with_disks(mut self, disks: u8) -> Self {
        self.config.game_config.disks = disks;
        self
    }

    /// Travel (D1) and settle (D2) dwell durations.
    pub fn with_phase_durations(mut self, travel: Duration, settle: Duration) -> Self {
        self.config.travel_duration = travel;
        self.config.settle_duration = settle;
        self
    }

    /// Pause between auto-solved steps.
    pub fn with_step_pause(mut self, pause: Duration) -> Self {
        self.config.step_pause = pause;
        self
    }

    /// Spawn the session worker and return the runtime.
    pub fn build(self) -> Result<Runtime> {
        let state = GameState::initial(self.config.game_config.disks)?;

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);
        let (event_tx, _) = broadcast::channel(self.config.event_buffer_size);

        let worker = SessionWorker::new(self.config, state, command_rx, event_tx.clone());
        let worker_handle = tokio::spawn(worker.run());

        Ok(Runtime {
            handle: SessionHandle::new(command_tx, event_tx),
            worker_handle,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
