// src/matching/outcome.rs

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::program::Program;

/// Result for a single program, in the same position as its input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramAssignment {
    pub program: String,
    pub assigned_date: Option<NaiveDate>,
    /// Candidate dates that were neither assigned to this program nor
    /// consumed by any other program, in original order.
    pub secondary_dates: Vec<NaiveDate>,
}

/// Outcome of one matching run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MatchOutcome {
    /// One entry per input program, in input order.
    pub assignments: Vec<ProgramAssignment>,
    /// Every date assigned to some program.
    pub consumed_dates: BTreeSet<NaiveDate>,
}

impl MatchOutcome {
    /// Number of programs that received a date.
    pub fn matched(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.assigned_date.is_some())
            .count()
    }

    /// Names of programs left without a date, in input order.
    pub fn unassigned(&self) -> impl Iterator<Item = &str> {
        self.assignments
            .iter()
            .filter(|a| a.assigned_date.is_none())
            .map(|a| a.program.as_str())
    }

    /// Write assigned and secondary dates back onto the records this outcome
    /// was computed from.
    ///
    /// Records are matched by position. Any previous assignment or secondary
    /// list on the records is replaced.
    pub fn apply_to(&self, programs: &mut [Program]) {
        for (program, assignment) in programs.iter_mut().zip(&self.assignments) {
            program.assigned_date = assignment.assigned_date;
            program.secondary_dates = assignment.secondary_dates.clone();
        }
    }
}
