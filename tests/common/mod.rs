// tests/common/mod.rs

#![allow(dead_code)]

pub use interview_scheduler_test_utils::builders;
pub use interview_scheduler_test_utils::init_tracing;

use interview_scheduler::{MatchOutcome, Program};

/// Assigned dates per program, in input order, as strings (`None` = unassigned).
pub fn assigned(programs: &[Program]) -> Vec<Option<String>> {
    programs
        .iter()
        .map(|p| p.assigned_date.map(|d| d.to_string()))
        .collect()
}

/// Secondary dates of the program at `idx`, as strings.
pub fn secondary(outcome: &MatchOutcome, idx: usize) -> Vec<String> {
    outcome.assignments[idx]
        .secondary_dates
        .iter()
        .map(|d| d.to_string())
        .collect()
}
