//! Wire types for the solver HTTP API.
//!
//! Deliberately decoupled from the core model: the solver speaks camelCase
//! JSON with string peg labels, and conversion into [`Solution`] validates
//! everything the transport cannot.

use serde::Deserialize;

use hanoi_core::{Disk, Peg, Solution, Step};

use crate::traits::SolverError;

/// One move in the solver response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireStep {
    pub step_number: u32,
    pub from: String,
    pub to: String,
    pub disk: u8,
}

/// Solver response body.
///
/// `steps` is omitted for disk counts beyond the solver's enumeration
/// threshold; `totalSteps` is always present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    #[serde(default)]
    pub steps: Option<Vec<WireStep>>,
    pub total_steps: u64,
}

impl SolveResponse {
    /// Converts the wire shape into a core [`Solution`], validating peg
    /// labels, step numbering and the advertised total.
    pub fn into_solution(self, disks: u8) -> Result<Solution, SolverError> {
        let Some(wire_steps) = self.steps.filter(|steps| !steps.is_empty()) else {
            return Ok(Solution::count_only(disks, self.total_steps));
        };

        if wire_steps.len() as u64 != self.total_steps {
            return Err(SolverError::Malformed(format!(
                "totalSteps {} disagrees with {} enumerated steps",
                self.total_steps,
                wire_steps.len()
            )));
        }

        let mut steps = Vec::with_capacity(wire_steps.len());
        for wire in wire_steps {
            if wire.disk == 0 {
                return Err(SolverError::Malformed(format!(
                    "step {} names disk 0",
                    wire.step_number
                )));
            }
            steps.push(Step {
                number: wire.step_number,
                from: parse_peg(&wire.from)?,
                to: parse_peg(&wire.to)?,
                disk: Disk(wire.disk),
            });
        }

        Solution::with_steps(disks, steps).map_err(|e| SolverError::Malformed(e.to_string()))
    }
}

fn parse_peg(label: &str) -> Result<Peg, SolverError> {
    label
        .parse()
        .map_err(|_| SolverError::Malformed(format!("unknown peg label {label:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_response() {
        let payload = r#"{
            "steps": [
                {"stepNumber": 1, "from": "A", "to": "C", "disk": 1},
                {"stepNumber": 2, "from": "A", "to": "B", "disk": 2},
                {"stepNumber": 3, "from": "C", "to": "B", "disk": 1}
            ],
            "totalSteps": 3
        }"#;

        let response: SolveResponse = serde_json::from_str(payload).unwrap();
        let solution = response.into_solution(2).unwrap();

        assert!(solution.is_playable());
        assert_eq!(solution.total_steps(), 3);
        assert_eq!(
            solution.step(2),
            Some(&Step {
                number: 2,
                from: Peg::A,
                to: Peg::B,
                disk: Disk(2),
            })
        );
    }

    #[test]
    fn decodes_a_count_only_response() {
        let payload = r#"{"totalSteps": 1048575}"#;

        let response: SolveResponse = serde_json::from_str(payload).unwrap();
        let solution = response.into_solution(20).unwrap();

        assert!(!solution.is_playable());
        assert_eq!(solution.total_steps(), 1_048_575);
    }

    #[test]
    fn rejects_total_step_disagreement() {
        let payload = r#"{
            "steps": [{"stepNumber": 1, "from": "A", "to": "C", "disk": 1}],
            "totalSteps": 7
        }"#;

        let response: SolveResponse = serde_json::from_str(payload).unwrap();
        let error = response.into_solution(3).unwrap_err();
        assert!(matches!(error, SolverError::Malformed(_)));
    }

    #[test]
    fn rejects_unknown_peg_labels() {
        let payload = r#"{
            "steps": [{"stepNumber": 1, "from": "A", "to": "D", "disk": 1}],
            "totalSteps": 1
        }"#;

        let response: SolveResponse = serde_json::from_str(payload).unwrap();
        let error = response.into_solution(1).unwrap_err();
        assert!(matches!(error, SolverError::Malformed(_)));
    }

    #[test]
    fn rejects_non_contiguous_numbering() {
        let payload = r#"{
            "steps": [
                {"stepNumber": 2, "from": "A", "to": "C", "disk": 1},
                {"stepNumber": 1, "from": "A", "to": "B", "disk": 2}
            ],
            "totalSteps": 2
        }"#;

        let response: SolveResponse = serde_json::from_str(payload).unwrap();
        let error = response.into_solution(2).unwrap_err();
        assert!(matches!(error, SolverError::Malformed(_)));
    }
}
