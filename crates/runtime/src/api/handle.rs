//! Cloneable façade for issuing commands to a session.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for
//! driving the puzzle and streaming events.

use tokio::sync::{broadcast, mpsc, oneshot};

use hanoi_core::{Peg, Solution};

use super::errors::{Result, RuntimeError};
use super::events::GameEvent;
use super::types::{GameSnapshot, TouchOutcome};
use crate::worker::Command;

/// Client-facing handle to interact with one puzzle session.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl SessionHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Subscribe to session events.
    ///
    /// Presentation layers receive board, selection and progress changes
    /// here instead of polling [`SessionHandle::snapshot`].
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }

    /// Route a peg click through selection and placement logic.
    ///
    /// While nothing is lifted, touching a non-empty peg lifts its top disk;
    /// while a disk is lifted, touching a peg either deselects (same peg),
    /// starts the move animation (legal destination), or clears the
    /// selection with [`TouchOutcome::InvalidMove`].
    pub async fn touch_peg(&self, peg: Peg) -> Result<TouchOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::TouchPeg {
                peg,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Rebuild the board with `disks` disks, cancelling any move in flight
    /// and any automated playback.
    ///
    /// The loaded solution is kept only when its disk count matches.
    pub async fn reset(&self, disks: u8) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Reset {
                disks,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Install a fetched solution.
    ///
    /// A playable solution restarts the board to its disk count; a
    /// count-only solution is stored for display without touching the board.
    pub async fn load_solution(&self, solution: Solution) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::LoadSolution {
                solution,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Start automated playback of the remaining solution steps.
    pub async fn start_auto_solve(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::StartAutoSolve { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Stop automated playback.
    ///
    /// Takes effect synchronously within the session's command order: once
    /// the reply arrives, no further board mutation can occur.
    pub async fn stop_auto_solve(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::StopAutoSolve { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query a full session snapshot (read-only).
    pub async fn snapshot(&self) -> Result<GameSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QuerySnapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
