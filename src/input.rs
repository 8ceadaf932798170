// src/input.rs

//! Line-oriented program list loader.
//!
//! One program per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! Cardiology|2024-10-01,2024-10-08
//! Nephrology|2024-10-01
//! ```
//!
//! Separators come from the `[input]` config section.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::model::InputSection;
use crate::errors::{Result, SchedulerError};
use crate::fs::FileSystem;
use crate::program::{Program, parse_date};

/// Read and parse a program list through `fs`.
pub fn load_programs(
    fs: &dyn FileSystem,
    path: &Path,
    input: &InputSection,
) -> Result<Vec<Program>> {
    let contents = fs.read_to_string(path)?;
    let programs = parse_programs(&contents, input)?;
    debug!(path = ?path, programs = programs.len(), "loaded program list");
    Ok(programs)
}

/// Parse a program list from text.
///
/// Lines that do not split into exactly a name and a date list are skipped
/// with a warning when `skip_malformed` is set, and rejected otherwise.
/// An unparseable date always fails the whole load.
pub fn parse_programs(text: &str, input: &InputSection) -> Result<Vec<Program>> {
    let mut programs = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(input.field_separator.as_str()).collect();
        if fields.len() != 2 {
            let msg = format!(
                "line {line_no}: expected '<name>{}<dates>', found {} field(s)",
                input.field_separator,
                fields.len()
            );
            if input.skip_malformed {
                warn!(line = line_no, "skipping malformed program line");
                continue;
            }
            return Err(SchedulerError::InvalidInput(msg));
        }

        let name = fields[0].trim();
        if name.is_empty() {
            return Err(SchedulerError::InvalidInput(format!(
                "line {line_no}: program name is empty"
            )));
        }

        let dates = fields[1]
            .split(input.date_separator.as_str())
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                parse_date(raw).map_err(|msg| {
                    SchedulerError::InvalidInput(format!(
                        "line {line_no}: program '{name}': {msg}"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        programs.push(Program::new(name, dates));
    }

    Ok(programs)
}
