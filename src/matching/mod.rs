// src/matching/mod.rs

//! Date matching engine.
//!
//! - [`network`] builds the source / program / date / sink flow network.
//! - [`solver`] runs Edmonds-Karp max flow over it.
//! - [`resolver`] reads the residual network back into assignments.
//! - [`outcome`] holds the result types handed back to callers.
//!
//! Every call builds its own network; nothing survives between runs.

pub mod network;
pub mod outcome;
pub mod resolver;
pub mod solver;

use tracing::{info, warn};

use crate::errors::Result;
use crate::program::Program;

pub use network::{FlowNetwork, NetworkLayout, build_network};
pub use outcome::{MatchOutcome, ProgramAssignment};
pub use resolver::resolve_assignments;
pub use solver::{FlowSummary, max_flow};

/// Canonical node index type used by the flow network.
pub type NodeId = usize;

/// Assign at most one date to each program, maximising the number of
/// programs that get one, with no date used twice.
///
/// The input records are left untouched; see [`assign_dates_in_place`] for
/// the write-back variant.
pub fn assign_dates(programs: &[Program]) -> Result<MatchOutcome> {
    let (mut network, layout) = build_network(programs);
    let flow = max_flow(&mut network, layout.source, layout.sink);
    let outcome = resolve_assignments(programs, &network, &layout)?;

    info!(
        programs = programs.len(),
        distinct_dates = layout.distinct_dates(),
        matched = outcome.matched(),
        augmentations = flow.augmentations,
        "date matching finished"
    );

    for name in outcome.unassigned() {
        warn!(program = %name, "program has no assigned date");
    }

    Ok(outcome)
}

/// Same as [`assign_dates`], then writes `assigned_date` and
/// `secondary_dates` onto each record.
pub fn assign_dates_in_place(programs: &mut [Program]) -> Result<MatchOutcome> {
    let outcome = assign_dates(programs)?;
    outcome.apply_to(programs);
    Ok(outcome)
}
