use std::collections::BTreeSet;

use crate::engine::CommittedMove;
use crate::solution::{Solution, Step};

/// Tracks which step of a fetched solution is current and which steps have
/// been matched so far.
///
/// Progress is deliberately decoupled from physical legality: a legal move
/// that deviates from the canonical solution stays on the board but earns no
/// progress, so users may explore off the optimal path freely.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    current_step: u32,
    completed: BTreeSet<u32>,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            completed: BTreeSet::new(),
        }
    }

    /// The next step number expected to be performed (1-based).
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Step numbers already matched against the solution.
    pub fn completed(&self) -> &BTreeSet<u32> {
        &self.completed
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The solution step expected next, if any remains.
    pub fn expected_step<'a>(&self, solution: &'a Solution) -> Option<&'a Step> {
        solution.step(self.current_step)
    }

    /// Records the performed move when it equals the expected step on all of
    /// from, to and disk, returning the matched step number.
    ///
    /// A deviating move leaves progress untouched and returns `None`; the
    /// move itself remains applied to the board.
    pub fn record_if_matches(
        &mut self,
        solution: &Solution,
        performed: &CommittedMove,
    ) -> Option<u32> {
        let step = self.expected_step(solution)?;
        if step.from != performed.from || step.to != performed.to || step.disk != performed.disk {
            return None;
        }

        let matched = step.number;
        self.completed.insert(matched);
        self.current_step += 1;
        Some(matched)
    }

    /// Derived solved flag: true exactly when the current step ran past the
    /// final step of a playable solution.
    pub fn is_solved(&self, solution: &Solution) -> bool {
        solution.is_playable() && self.current_step > solution.final_step_number()
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Disk, Peg};

    fn two_disk_solution() -> Solution {
        Solution::with_steps(
            2,
            vec![
                Step {
                    number: 1,
                    from: Peg::A,
                    to: Peg::B,
                    disk: Disk(1),
                },
                Step {
                    number: 2,
                    from: Peg::A,
                    to: Peg::C,
                    disk: Disk(2),
                },
                Step {
                    number: 3,
                    from: Peg::B,
                    to: Peg::C,
                    disk: Disk(1),
                },
            ],
        )
        .unwrap()
    }

    fn committed(from: Peg, to: Peg, disk: u8) -> CommittedMove {
        CommittedMove {
            from,
            to,
            disk: Disk(disk),
        }
    }

    #[test]
    fn matching_moves_advance_to_solved() {
        let solution = two_disk_solution();
        let mut progress = Progress::new();

        assert_eq!(progress.expected_step(&solution).map(|s| s.number), Some(1));
        assert_eq!(
            progress.record_if_matches(&solution, &committed(Peg::A, Peg::B, 1)),
            Some(1)
        );
        assert_eq!(
            progress.record_if_matches(&solution, &committed(Peg::A, Peg::C, 2)),
            Some(2)
        );
        assert!(!progress.is_solved(&solution));

        assert_eq!(
            progress.record_if_matches(&solution, &committed(Peg::B, Peg::C, 1)),
            Some(3)
        );
        assert_eq!(progress.current_step(), 4);
        assert_eq!(progress.expected_step(&solution), None);
        assert!(progress.is_solved(&solution));
        assert!(progress.completed().iter().eq([1, 2, 3].iter()));
    }

    #[test]
    fn deviating_move_leaves_progress_untouched() {
        let solution = two_disk_solution();
        let mut progress = Progress::new();

        // Expected step is A -> B; the user went A -> C instead.
        assert_eq!(
            progress.record_if_matches(&solution, &committed(Peg::A, Peg::C, 1)),
            None
        );
        assert_eq!(progress.current_step(), 1);
        assert!(progress.completed().is_empty());
        assert!(!progress.is_solved(&solution));
    }

    #[test]
    fn count_only_solution_is_never_solved() {
        let solution = Solution::count_only(20, (1 << 20) - 1);
        let progress = Progress::new();

        assert_eq!(progress.expected_step(&solution), None);
        assert!(!progress.is_solved(&solution));
    }
}
