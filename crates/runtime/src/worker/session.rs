//! Session worker that owns the authoritative [`GameState`].
//!
//! Receives commands from [`SessionHandle`](crate::api::SessionHandle),
//! advances the per-move animation phases and auto-solve playback on a
//! single armed deadline, and publishes [`GameEvent`] notifications.
//!
//! All session state lives in this one task; commands and timer firings
//! interleave through its `select!` loop, so every mutation is serialized
//! and cancellation reduces to bumping the epoch and disarming the deadline.

use std::future;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::Instant;
use tracing::{debug, error, warn};

use hanoi_core::{CommittedMove, Disk, GameEngine, GameState, MoveAction, Peg, Solution};

use crate::api::{
    FlightPhase, GameEvent, GameSnapshot, ProgressSnapshot, Result, RuntimeError, SolutionSummary,
    TouchOutcome,
};
use crate::runtime::RuntimeConfig;

/// Commands that can be sent to the session worker.
pub(crate) enum Command {
    /// Route a peg click through selection / placement logic.
    TouchPeg {
        peg: Peg,
        reply: oneshot::Sender<TouchOutcome>,
    },
    /// Rebuild the board with the given disk count.
    Reset {
        disks: u8,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Install a fetched solution.
    LoadSolution {
        solution: Solution,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Begin automated playback of the remaining solution steps.
    StartAutoSolve { reply: oneshot::Sender<Result<()>> },
    /// Cancel automated playback.
    StopAutoSolve { reply: oneshot::Sender<()> },
    /// Query a full session snapshot (read-only).
    QuerySnapshot { reply: oneshot::Sender<GameSnapshot> },
}

/// A scheduled phase advance.
///
/// The epoch invalidates wakes armed before a reset or stop: a wake whose
/// epoch no longer matches the session's must never mutate state.
#[derive(Clone, Copy, Debug)]
struct PendingWake {
    at: Instant,
    epoch: u64,
}

/// Background task that owns one puzzle session.
pub(crate) struct SessionWorker {
    config: RuntimeConfig,
    state: GameState,
    solution: Option<Solution>,
    flight: FlightPhase,
    auto_solving: bool,
    epoch: u64,
    next_wake: Option<PendingWake>,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl SessionWorker {
    pub(crate) fn new(
        config: RuntimeConfig,
        state: GameState,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            config,
            state,
            solution: None,
            flight: FlightPhase::Idle,
            auto_solving: false,
            epoch: 0,
            next_wake: None,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop.
    ///
    /// Exits when every [`SessionHandle`](crate::api::SessionHandle) clone
    /// has been dropped.
    pub(crate) async fn run(mut self) {
        loop {
            let wake = self.next_wake;
            tokio::select! {
                maybe_cmd = self.command_rx.recv() => {
                    match maybe_cmd {
                        Some(cmd) => self.handle_command(cmd),
                        None => break,
                    }
                }
                _ = sleep_until_wake(wake) => {
                    if let Some(wake) = wake {
                        self.next_wake = None;
                        self.advance(wake.epoch);
                    }
                }
            }
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::TouchPeg { peg, reply } => {
                let _ = reply.send(self.touch_peg(peg));
            }
            Command::Reset { disks, reply } => {
                let _ = reply.send(self.reset(disks));
            }
            Command::LoadSolution { solution, reply } => {
                let _ = reply.send(self.load_solution(solution));
            }
            Command::StartAutoSolve { reply } => {
                let _ = reply.send(self.start_auto_solve());
            }
            Command::StopAutoSolve { reply } => {
                self.stop_auto_solve();
                let _ = reply.send(());
            }
            Command::QuerySnapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }
        }
    }

    // ===== manual play =====

    fn touch_peg(&mut self, peg: Peg) -> TouchOutcome {
        if self.auto_solving || self.flight.is_in_flight() {
            return TouchOutcome::Busy;
        }

        match self.flight {
            FlightPhase::Idle => match self.state.board.top(peg) {
                Some(disk) => {
                    self.set_flight(FlightPhase::Lifted { disk, from: peg });
                    TouchOutcome::Lifted { disk, from: peg }
                }
                None => TouchOutcome::EmptyPeg,
            },
            FlightPhase::Lifted { disk, from } => {
                if peg == from {
                    self.set_flight(FlightPhase::Idle);
                    return TouchOutcome::Deselected;
                }
                if !self.state.board.can_move(from, peg) {
                    self.set_flight(FlightPhase::Idle);
                    self.publish(GameEvent::MoveRejected { from, to: peg });
                    return TouchOutcome::InvalidMove { from, to: peg };
                }
                self.begin_transit(disk, from, peg);
                TouchOutcome::MoveStarted { from, to: peg }
            }
            // In-flight phases are rejected above.
            FlightPhase::Transiting { .. } | FlightPhase::Settling { .. } => TouchOutcome::Busy,
        }
    }

    // ===== animation sequencing =====

    /// Single driver for every scheduled transition: commit after the travel
    /// dwell, finish after the settle dwell, start the next auto step after
    /// the inter-step pause.
    fn advance(&mut self, epoch: u64) {
        if epoch != self.epoch {
            debug!(stale = epoch, current = self.epoch, "discarding stale wake");
            return;
        }

        match self.flight {
            FlightPhase::Transiting { disk, from, to } => self.commit_move(disk, from, to),
            FlightPhase::Settling { disk, from, to } => self.finish_move(disk, from, to),
            FlightPhase::Idle | FlightPhase::Lifted { .. } => {
                if self.auto_solving {
                    self.auto_step();
                }
            }
        }
    }

    fn begin_transit(&mut self, disk: Disk, from: Peg, to: Peg) {
        self.set_flight(FlightPhase::Transiting { disk, from, to });
        self.arm_wake(self.config.travel_duration);
    }

    /// Commits the in-flight move to the board and enters the settle phase.
    fn commit_move(&mut self, disk: Disk, from: Peg, to: Peg) {
        let action = MoveAction::new(from, to);

        // Execute against a working clone so a failed pipeline leaves the
        // authoritative board untouched.
        let mut working = self.state.clone();
        match GameEngine::new(&mut working).execute(&action) {
            Ok(committed) => {
                self.state = working;
                self.set_flight(FlightPhase::Settling {
                    disk: committed.disk,
                    from,
                    to,
                });
                self.arm_wake(self.config.settle_duration);
            }
            Err(e) => {
                // The move was validated when the transit was scheduled, and
                // the single-flight rule bars interleaved mutation.
                warn!(error = %e, lifted = %disk, "in-flight move failed at commit");
                self.set_flight(FlightPhase::Idle);
                if self.auto_solving {
                    self.auto_solving = false;
                    self.publish(GameEvent::AutoSolveStopped);
                }
            }
        }
    }

    /// Completes a settled move: clears the selection, evaluates the step
    /// tracker, and schedules the next auto-solve step if one remains.
    fn finish_move(&mut self, disk: Disk, from: Peg, to: Peg) {
        self.set_flight(FlightPhase::Idle);

        let committed = CommittedMove { from, to, disk };
        let matched = self.record_progress(&committed);

        if !self.auto_solving {
            return;
        }

        match matched {
            Some(_) if self.is_solved() => {
                self.auto_solving = false;
                self.publish(GameEvent::AutoSolveCompleted);
            }
            Some(_) => self.arm_wake(self.config.step_pause),
            None => {
                // Auto-played moves are read from the solution; a non-match
                // means progress and board diverged underneath the driver.
                error!(mv = ?committed, "auto-solved move did not match the expected step");
                self.auto_solving = false;
                self.publish(GameEvent::AutoSolveStopped);
            }
        }
    }

    /// Evaluates the committed move against the solution and publishes the
    /// resulting progress.
    fn record_progress(&mut self, committed: &CommittedMove) -> Option<u32> {
        let matched = match &self.solution {
            Some(solution) => self.state.progress.record_if_matches(solution, committed),
            None => None,
        };

        let progress = self.progress_snapshot();
        let newly_solved = matched.is_some() && progress.is_solved;
        self.publish(GameEvent::MoveCommitted {
            mv: *committed,
            matched,
            progress,
        });
        if newly_solved {
            self.publish(GameEvent::Solved);
        }
        matched
    }

    // ===== auto-solve driving =====

    fn start_auto_solve(&mut self) -> Result<()> {
        let (playable, disks, finished) = match &self.solution {
            Some(solution) => (
                solution.is_playable(),
                solution.disks(),
                self.state.progress.is_solved(solution),
            ),
            None => return Err(RuntimeError::SolutionNotPlayable),
        };

        if !playable {
            return Err(RuntimeError::SolutionNotPlayable);
        }
        if self.auto_solving {
            return Err(RuntimeError::AutoSolveActive);
        }
        if self.flight.is_in_flight() {
            return Err(RuntimeError::MoveInFlight);
        }

        self.cancel_pending();
        self.set_flight(FlightPhase::Idle);

        if finished {
            // Replaying from step 1 needs the starting position back;
            // rewinding progress alone would desynchronize on the first
            // lift.
            self.state = GameState::initial(disks)?;
            self.publish(GameEvent::BoardReset { disks });
        }

        self.auto_solving = true;
        self.publish(GameEvent::AutoSolveStarted);
        self.auto_step();
        Ok(())
    }

    /// Stops automated playback and cancels any pending phase advance.
    ///
    /// A move stopped while settling already mutated the board at the
    /// travel boundary, so its bookkeeping is finalized here instead of
    /// being dropped; a move stopped while transiting is discarded
    /// unapplied. Either way, nothing can mutate the board afterwards.
    fn stop_auto_solve(&mut self) {
        let was_auto = self.auto_solving;
        self.auto_solving = false;
        self.cancel_pending();

        match self.flight {
            FlightPhase::Settling { disk, from, to } => self.finish_move(disk, from, to),
            FlightPhase::Idle => {}
            _ => self.set_flight(FlightPhase::Idle),
        }

        if was_auto {
            self.publish(GameEvent::AutoSolveStopped);
        }
    }

    /// Starts playback of the next solution step, or ends the run when the
    /// solution is exhausted.
    fn auto_step(&mut self) {
        let expected = self
            .solution
            .as_ref()
            .and_then(|solution| self.state.progress.expected_step(solution))
            .copied();

        let Some(step) = expected else {
            self.auto_solving = false;
            self.publish(GameEvent::AutoSolveCompleted);
            return;
        };

        // The physical top of the recorded source must be the disk the step
        // expects; anything else is a fatal desynchronization.
        let found = self.state.board.top(step.from);
        if found != Some(step.disk) {
            error!(
                step = step.number,
                source = %step.from,
                expected = %step.disk,
                "auto-solve desynchronized from the board"
            );
            self.auto_solving = false;
            self.publish(GameEvent::Desynchronized {
                step: step.number,
                source: step.from,
                expected: step.disk,
                found,
            });
            return;
        }

        // Full lift → transit cycle, identical to a manual move but without
        // the human dwell between selection and placement.
        self.set_flight(FlightPhase::Lifted {
            disk: step.disk,
            from: step.from,
        });
        self.begin_transit(step.disk, step.from, step.to);
    }

    // ===== session lifecycle =====

    fn reset(&mut self, disks: u8) -> Result<()> {
        // Validate the disk count before tearing anything down.
        let state = GameState::initial(disks)?;

        self.cancel_pending();
        self.auto_solving = false;
        self.set_flight(FlightPhase::Idle);
        self.state = state;

        if self
            .solution
            .as_ref()
            .is_some_and(|solution| solution.disks() != disks)
        {
            self.solution = None;
        }

        self.publish(GameEvent::BoardReset { disks });
        Ok(())
    }

    fn load_solution(&mut self, solution: Solution) -> Result<()> {
        let disks = solution.disks();
        let total_steps = solution.total_steps();
        let playable = solution.is_playable();

        if playable {
            let state = GameState::initial(disks)?;
            self.cancel_pending();
            self.auto_solving = false;
            self.set_flight(FlightPhase::Idle);
            self.state = state;
            self.publish(GameEvent::BoardReset { disks });
        }

        self.solution = Some(solution);
        self.publish(GameEvent::SolutionLoaded {
            disks,
            total_steps,
            playable,
        });
        Ok(())
    }

    // ===== plumbing =====

    fn set_flight(&mut self, flight: FlightPhase) {
        if self.flight != flight {
            self.flight = flight;
            self.publish(GameEvent::FlightChanged { flight });
        }
    }

    fn arm_wake(&mut self, after: Duration) {
        self.next_wake = Some(PendingWake {
            at: Instant::now() + after,
            epoch: self.epoch,
        });
    }

    /// Invalidates any armed wake. Wakes already in the select loop carry
    /// the old epoch and are discarded by [`SessionWorker::advance`].
    fn cancel_pending(&mut self) {
        self.epoch += 1;
        self.next_wake = None;
    }

    fn is_solved(&self) -> bool {
        self.solution
            .as_ref()
            .is_some_and(|solution| self.state.progress.is_solved(solution))
    }

    fn progress_snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current_step: self.state.progress.current_step(),
            completed: self.state.progress.completed().clone(),
            is_solved: self.is_solved(),
        }
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.state.board.clone(),
            flight: self.flight,
            progress: self.progress_snapshot(),
            auto_solving: self.auto_solving,
            solution: self.solution.as_ref().map(|solution| SolutionSummary {
                disks: solution.disks(),
                total_steps: solution.total_steps(),
                playable: solution.is_playable(),
            }),
        }
    }

    fn publish(&self, event: GameEvent) {
        // No subscribers is normal; events are best-effort.
        let _ = self.event_tx.send(event);
    }
}

async fn sleep_until_wake(wake: Option<PendingWake>) {
    match wake {
        Some(wake) => tokio::time::sleep_until(wake.at).await,
        None => future::pending().await,
    }
}
