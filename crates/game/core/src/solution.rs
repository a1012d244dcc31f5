//! Canonical solver output: an ordered move sequence or a bare move count.

use crate::state::{Disk, Peg};

/// One canonical disk relocation in the solver's optimal solution, numbered
/// from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub number: u32,
    pub from: Peg,
    pub to: Peg,
    pub disk: Disk,
}

/// Errors raised while validating a fetched solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolutionError {
    #[error("steps must be numbered 1..=len contiguously (step at index {index} is numbered {found})")]
    NonContiguous { index: usize, found: u32 },
}

/// A fetched solution for a fixed disk count.
///
/// `steps` is empty for boards the solver reports by count only; such
/// solutions are display-worthy but not playable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    disks: u8,
    total_steps: u64,
    steps: Vec<Step>,
}

impl Solution {
    /// Builds a playable solution from an ordered step sequence, verifying
    /// 1-based contiguous numbering.
    pub fn with_steps(disks: u8, steps: Vec<Step>) -> Result<Self, SolutionError> {
        for (index, step) in steps.iter().enumerate() {
            let expected = index as u32 + 1;
            if step.number != expected {
                return Err(SolutionError::NonContiguous {
                    index,
                    found: step.number,
                });
            }
        }
        Ok(Self {
            disks,
            total_steps: steps.len() as u64,
            steps,
        })
    }

    /// Builds a count-only solution for a board too large to enumerate.
    pub fn count_only(disks: u8, total_steps: u64) -> Self {
        Self {
            disks,
            total_steps,
            steps: Vec::new(),
        }
    }

    pub fn disks(&self) -> u8 {
        self.disks
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// True when the solution carries an enumerated move sequence.
    pub fn is_playable(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Looks up the step with the given 1-based number.
    pub fn step(&self, number: u32) -> Option<&Step> {
        if number == 0 {
            return None;
        }
        self.steps.get(number as usize - 1)
    }

    /// Number of the last enumerated step; 0 for count-only solutions.
    pub fn final_step_number(&self) -> u32 {
        self.steps.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(number: u32, from: Peg, to: Peg, disk: u8) -> Step {
        Step {
            number,
            from,
            to,
            disk: Disk(disk),
        }
    }

    #[test]
    fn with_steps_accepts_contiguous_numbering() {
        let solution = Solution::with_steps(
            1,
            vec![step(1, Peg::A, Peg::C, 1)],
        )
        .unwrap();

        assert!(solution.is_playable());
        assert_eq!(solution.total_steps(), 1);
        assert_eq!(solution.final_step_number(), 1);
        assert_eq!(solution.step(1).map(|s| s.disk), Some(Disk(1)));
        assert_eq!(solution.step(0), None);
        assert_eq!(solution.step(2), None);
    }

    #[test]
    fn with_steps_rejects_gaps() {
        let result = Solution::with_steps(
            2,
            vec![step(1, Peg::A, Peg::B, 1), step(3, Peg::A, Peg::C, 2)],
        );
        assert_eq!(
            result,
            Err(SolutionError::NonContiguous { index: 1, found: 3 })
        );
    }

    #[test]
    fn count_only_is_not_playable() {
        let solution = Solution::count_only(20, (1 << 20) - 1);
        assert!(!solution.is_playable());
        assert_eq!(solution.total_steps(), (1 << 20) - 1);
        assert_eq!(solution.step(1), None);
        assert_eq!(solution.final_step_number(), 0);
    }
}
