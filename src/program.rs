// src/program.rs

//! Program records: the unit the matching engine assigns dates to.

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::{Result, SchedulerError};

/// Textual date format accepted for candidate dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A program that needs exactly one interview date.
///
/// `available_dates` is the ordered candidate list as supplied by the caller.
/// `assigned_date` and `secondary_dates` start empty and are filled in by
/// [`crate::matching::assign_dates_in_place`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub name: String,
    pub available_dates: Vec<NaiveDate>,
    pub assigned_date: Option<NaiveDate>,
    pub secondary_dates: Vec<NaiveDate>,
}

impl Program {
    pub fn new(name: impl Into<String>, available_dates: Vec<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            available_dates,
            assigned_date: None,
            secondary_dates: Vec::new(),
        }
    }

    /// Build a program from textual `YYYY-MM-DD` dates.
    ///
    /// Fails on the first date that does not parse; nothing is skipped.
    pub fn parse(name: impl Into<String>, dates: &[&str]) -> Result<Self> {
        let name = name.into();
        let available_dates = dates
            .iter()
            .map(|raw| parse_date(raw).map_err(|msg| invalid_date(&name, msg)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, available_dates))
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_date.is_some()
    }
}

/// Parse a single calendar date in [`DATE_FORMAT`].
pub fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| format!("unparseable date '{trimmed}': {e}"))
}

fn invalid_date(program: &str, msg: String) -> SchedulerError {
    SchedulerError::InvalidInput(format!("program '{program}': {msg}"))
}
