//! Mock solver for testing without network.

use async_trait::async_trait;

use hanoi_core::{Disk, GameConfig, Peg, Solution, Step};

use crate::traits::{SolverApi, SolverError};

/// In-memory solver generating the classic recursive solution.
///
/// Mirrors the remote solver's contract, including the enumeration
/// threshold: disk counts above [`GameConfig::SOLVER_STEP_LIMIT_DISKS`]
/// yield a count-only solution.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockSolver;

impl MockSolver {
    pub fn new() -> Self {
        Self
    }

    /// Generates the canonical optimal move sequence for `disks` disks,
    /// relocating the full stack from peg A to peg C.
    pub fn generate(disks: u8) -> Vec<Step> {
        let mut steps = Vec::with_capacity((1usize << disks) - 1);
        move_stack(disks, Peg::A, Peg::C, Peg::B, &mut steps);
        steps
    }
}

fn move_stack(height: u8, from: Peg, to: Peg, via: Peg, steps: &mut Vec<Step>) {
    if height == 0 {
        return;
    }
    move_stack(height - 1, from, via, to, steps);
    steps.push(Step {
        number: steps.len() as u32 + 1,
        from,
        to,
        disk: Disk(height),
    });
    move_stack(height - 1, via, to, from, steps);
}

#[async_trait]
impl SolverApi for MockSolver {
    async fn solve(&self, disks: u8) -> Result<Solution, SolverError> {
        if disks == 0 || disks >= 64 {
            return Err(SolverError::InvalidDiskCount(disks));
        }

        if disks <= GameConfig::SOLVER_STEP_LIMIT_DISKS {
            Solution::with_steps(disks, Self::generate(disks))
                .map_err(|e| SolverError::Malformed(e.to_string()))
        } else {
            Ok(Solution::count_only(disks, (1u64 << disks) - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::{Board, GameEngine, GameState, MoveAction};

    #[test]
    fn three_disk_sequence_is_the_canonical_one() {
        let steps = MockSolver::generate(3);
        let expected = [
            (1, Peg::A, Peg::C, 1),
            (2, Peg::A, Peg::B, 2),
            (3, Peg::C, Peg::B, 1),
            (4, Peg::A, Peg::C, 3),
            (5, Peg::B, Peg::A, 1),
            (6, Peg::B, Peg::C, 2),
            (7, Peg::A, Peg::C, 1),
        ];

        assert_eq!(steps.len(), expected.len());
        for (step, (number, from, to, disk)) in steps.iter().zip(expected) {
            assert_eq!(step.number, number);
            assert_eq!(step.from, from);
            assert_eq!(step.to, to);
            assert_eq!(step.disk, Disk(disk));
        }
    }

    #[test]
    fn generated_sequences_replay_to_a_solved_board() {
        for disks in 1..=6u8 {
            let steps = MockSolver::generate(disks);
            assert_eq!(steps.len(), (1usize << disks) - 1);

            let mut state = GameState::initial(disks).unwrap();
            for step in &steps {
                // Every generated step must be legal on the evolving board.
                assert!(state.board.can_move(step.from, step.to));
                let committed = GameEngine::new(&mut state)
                    .execute(&MoveAction::new(step.from, step.to))
                    .unwrap();
                assert_eq!(committed.disk, step.disk);
            }

            let goal: Vec<Disk> = (1..=disks).rev().map(Disk).collect();
            assert_eq!(state.board.stack(Peg::C).as_slice(), goal.as_slice());
            assert!(state.board.stack(Peg::A).is_empty());
            assert!(state.board.stack(Peg::B).is_empty());
        }
    }

    #[tokio::test]
    async fn solve_switches_to_count_only_above_the_threshold() {
        let solver = MockSolver::new();

        let playable = solver
            .solve(GameConfig::SOLVER_STEP_LIMIT_DISKS)
            .await
            .unwrap();
        assert!(playable.is_playable());
        assert_eq!(
            playable.total_steps(),
            (1u64 << GameConfig::SOLVER_STEP_LIMIT_DISKS) - 1
        );

        let counted = solver
            .solve(GameConfig::SOLVER_STEP_LIMIT_DISKS + 2)
            .await
            .unwrap();
        assert!(!counted.is_playable());
        assert_eq!(
            counted.total_steps(),
            (1u64 << (GameConfig::SOLVER_STEP_LIMIT_DISKS + 2)) - 1
        );
    }

    #[tokio::test]
    async fn out_of_range_disk_counts_are_rejected() {
        let solver = MockSolver::new();
        assert!(matches!(
            solver.solve(0).await.unwrap_err(),
            SolverError::InvalidDiskCount(0)
        ));
        assert!(matches!(
            solver.solve(64).await.unwrap_err(),
            SolverError::InvalidDiskCount(64)
        ));
    }

    #[test]
    fn mock_solutions_never_exceed_board_capacity() {
        // Playable solutions must fit the board the runtime will build.
        assert!(GameConfig::SOLVER_STEP_LIMIT_DISKS as usize <= GameConfig::MAX_DISKS);
        let _ = Board::initial(GameConfig::SOLVER_STEP_LIMIT_DISKS).unwrap();
    }
}
