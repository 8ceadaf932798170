// src/report.rs

//! Rendering of annotated program records.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::model::OutputSection;
use crate::errors::Result;
use crate::program::Program;
use crate::types::OutputFormat;

/// Every listed date mapped to the programs that listed it, chronologically.
///
/// Program names appear in input order; a program listing a date twice is
/// named once.
pub fn date_demand(programs: &[Program]) -> BTreeMap<NaiveDate, Vec<String>> {
    let mut demand: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for program in programs {
        let mut seen = BTreeSet::new();
        for date in &program.available_dates {
            if seen.insert(*date) {
                demand.entry(*date).or_default().push(program.name.clone());
            }
        }
    }
    demand
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    date_demand: Option<BTreeMap<NaiveDate, Vec<String>>>,
    programs: &'a [Program],
    matched: usize,
    unassigned: Vec<&'a str>,
}

/// Render annotated programs (after matching) in the configured format.
pub fn render(programs: &[Program], output: &OutputSection) -> Result<String> {
    match output.format {
        OutputFormat::Text => Ok(render_text(programs, output.show_date_demand)),
        OutputFormat::Json => render_json(programs, output.show_date_demand),
    }
}

/// Render only the demand map (used for `--dry-run`).
pub fn render_demand(programs: &[Program], format: OutputFormat) -> Result<String> {
    let demand = date_demand(programs);
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            write_demand(&mut out, &demand);
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&demand)?),
    }
}

fn render_json(programs: &[Program], show_date_demand: bool) -> Result<String> {
    let report = JsonReport {
        date_demand: show_date_demand.then(|| date_demand(programs)),
        programs,
        matched: programs.iter().filter(|p| p.is_assigned()).count(),
        unassigned: unassigned_names(programs),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn render_text(programs: &[Program], show_date_demand: bool) -> String {
    let mut out = String::new();

    if show_date_demand {
        write_demand(&mut out, &date_demand(programs));
        out.push('\n');
    }

    out.push_str("Assignments:\n");
    for program in programs {
        let line = match program.assigned_date {
            Some(date) => format!("  {}: {date}", program.name),
            None => format!("  {}: unassigned", program.name),
        };
        out.push_str(&line);
        if !program.secondary_dates.is_empty() {
            out.push_str(&format!(" (secondary: {})", join_dates(&program.secondary_dates)));
        }
        out.push('\n');
    }

    let matched = programs.iter().filter(|p| p.is_assigned()).count();
    out.push_str(&format!("Matched {matched} of {} programs\n", programs.len()));

    for name in unassigned_names(programs) {
        out.push_str(&format!("{name} has no assigned date\n"));
    }

    out
}

fn write_demand(out: &mut String, demand: &BTreeMap<NaiveDate, Vec<String>>) {
    out.push_str("Date to programs:\n");
    for (date, names) in demand {
        out.push_str(&format!("  {date}: {}\n", names.join(", ")));
    }
}

fn unassigned_names(programs: &[Program]) -> Vec<&str> {
    programs
        .iter()
        .filter(|p| !p.is_assigned())
        .map(|p| p.name.as_str())
        .collect()
}

fn join_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
