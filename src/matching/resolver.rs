// src/matching/resolver.rs

//! Turn residual capacities back into per-program assignments.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::errors::{Result, SchedulerError};
use crate::matching::network::{FlowNetwork, NetworkLayout};
use crate::matching::outcome::{MatchOutcome, ProgramAssignment};
use crate::program::Program;

/// Read committed program -> date edges out of `network`.
///
/// A program -> date edge with zero forward residual carried flow, so that
/// date is the program's assignment. Two distinct committed dates on one
/// program cannot come from a correct unit-capacity run and are reported as
/// [`SchedulerError::Invariant`].
pub fn resolve_assignments(
    programs: &[Program],
    network: &FlowNetwork,
    layout: &NetworkLayout,
) -> Result<MatchOutcome> {
    let mut assigned: Vec<Option<NaiveDate>> = Vec::with_capacity(programs.len());
    let mut consumed_dates = BTreeSet::new();

    for (program, &program_node) in programs.iter().zip(&layout.program_nodes) {
        let mut committed: Option<NaiveDate> = None;

        for date in &program.available_dates {
            let date_node = layout.date_node(date).ok_or_else(|| {
                SchedulerError::Invariant(format!(
                    "date {date} of program '{}' has no node in the network",
                    program.name
                ))
            })?;

            if network.residual(program_node, date_node) != 0 {
                continue;
            }

            match committed {
                None => committed = Some(*date),
                Some(existing) if existing == *date => {}
                Some(existing) => {
                    return Err(SchedulerError::Invariant(format!(
                        "program '{}' has flow on more than one date ({existing} and {date})",
                        program.name
                    )));
                }
            }
        }

        if let Some(date) = committed {
            debug!(program = %program.name, %date, "assigned date");
            consumed_dates.insert(date);
        }
        assigned.push(committed);
    }

    let assignments = programs
        .iter()
        .zip(assigned)
        .map(|(program, assigned_date)| ProgramAssignment {
            program: program.name.clone(),
            assigned_date,
            secondary_dates: secondary_dates(program, assigned_date, &consumed_dates),
        })
        .collect();

    Ok(MatchOutcome {
        assignments,
        consumed_dates,
    })
}

/// Candidate dates still on offer for `program`.
///
/// A date consumed by any program is withheld from everyone, even programs
/// that lost it to another.
fn secondary_dates(
    program: &Program,
    assigned_date: Option<NaiveDate>,
    consumed: &BTreeSet<NaiveDate>,
) -> Vec<NaiveDate> {
    program
        .available_dates
        .iter()
        .filter(|date| Some(**date) != assigned_date && !consumed.contains(*date))
        .copied()
        .collect()
}
