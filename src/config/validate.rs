// src/config/validate.rs

use std::path::Path;

use crate::config::model::{ConfigFile, InputSection, OutputSection, RawConfigFile};
use crate::errors::{Result, SchedulerError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::SchedulerError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.input, raw.output))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_input(&cfg.input)?;
    validate_output(&cfg.output)?;
    Ok(())
}

fn validate_input(input: &InputSection) -> Result<()> {
    validate_separator("field_separator", &input.field_separator)?;
    validate_separator("date_separator", &input.date_separator)?;

    if input.field_separator == input.date_separator {
        return Err(SchedulerError::ConfigError(format!(
            "[input].field_separator and [input].date_separator must differ (both '{}')",
            input.field_separator
        )));
    }

    if let Some(ref path) = input.path {
        ensure_non_empty_path("[input].path", path)?;
    }

    Ok(())
}

fn validate_output(output: &OutputSection) -> Result<()> {
    // `format` is strongly typed and validated during deserialization.
    if let Some(ref path) = output.path {
        ensure_non_empty_path("[output].path", path)?;
    }
    Ok(())
}

fn validate_separator(key: &str, sep: &str) -> Result<()> {
    if sep.is_empty() {
        return Err(SchedulerError::ConfigError(format!(
            "[input].{key} must not be empty"
        )));
    }
    // Dates are written YYYY-MM-DD, so '-' would split them apart.
    if sep.contains('-') {
        return Err(SchedulerError::ConfigError(format!(
            "[input].{key} must not contain '-' (got '{sep}')"
        )));
    }
    Ok(())
}

fn ensure_non_empty_path(key: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(SchedulerError::ConfigError(format!(
            "{key} must not be empty"
        )));
    }
    Ok(())
}
