#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use interview_scheduler::Program;
use interview_scheduler::config::{ConfigFile, RawConfigFile};
use interview_scheduler::types::OutputFormat;

/// Parse a `YYYY-MM-DD` literal; panics on bad input (tests only).
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date literal must be YYYY-MM-DD")
}

/// `n` consecutive days starting at 2024-10-01, handy for generated inputs.
pub fn day(n: u32) -> NaiveDate {
    date("2024-10-01") + chrono::Days::new(n as u64)
}

/// Builder for `Program` to simplify test setup.
pub struct ProgramBuilder {
    program: Program,
}

impl ProgramBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            program: Program::new(name, Vec::new()),
        }
    }

    pub fn date(mut self, s: &str) -> Self {
        self.program.available_dates.push(date(s));
        self
    }

    pub fn dates(mut self, all: &[&str]) -> Self {
        self.program.available_dates.extend(all.iter().map(|s| date(s)));
        self
    }

    pub fn build(self) -> Program {
        self.program
    }
}

/// Shorthand: `program("P1", &["2024-10-01"])`.
pub fn program(name: &str, dates: &[&str]) -> Program {
    ProgramBuilder::new(name).dates(dates).build()
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn input_path(mut self, path: &str) -> Self {
        self.config.input.path = Some(PathBuf::from(path));
        self
    }

    pub fn separators(mut self, field: &str, date: &str) -> Self {
        self.config.input.field_separator = field.to_string();
        self.config.input.date_separator = date.to_string();
        self
    }

    pub fn skip_malformed(mut self, val: bool) -> Self {
        self.config.input.skip_malformed = val;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn show_date_demand(mut self, val: bool) -> Self {
        self.config.output.show_date_demand = val;
        self
    }

    pub fn output_path(mut self, path: &str) -> Self {
        self.config.output.path = Some(PathBuf::from(path));
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
