// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::OutputFormat;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [input]
/// path = "programs.txt"
/// field_separator = "|"
/// date_separator = ","
/// skip_malformed = true
///
/// [output]
/// format = "text"
/// show_date_demand = true
/// path = "report.txt"
/// ```
///
/// All sections are optional and have reasonable defaults.
///
/// This is the unvalidated form; use [`ConfigFile::try_from`] (or
/// [`crate::config::load_and_validate`]) to get a checked [`ConfigFile`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub input: InputSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Validated configuration.
///
/// Fields are private so a `ConfigFile` can only come out of validation.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    input: InputSection,
    output: OutputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(input: InputSection, output: OutputSection) -> Self {
        Self { input, output }
    }

    pub fn input(&self) -> &InputSection {
        &self.input
    }

    pub fn output(&self) -> &OutputSection {
        &self.output
    }

    /// Apply CLI overrides. Overrides are validated the same way as file
    /// values.
    pub fn with_overrides(
        self,
        input_path: Option<PathBuf>,
        format: Option<OutputFormat>,
        output_path: Option<PathBuf>,
    ) -> crate::errors::Result<Self> {
        let mut raw = RawConfigFile {
            input: self.input,
            output: self.output,
        };
        if let Some(path) = input_path {
            raw.input.path = Some(path);
        }
        if let Some(format) = format {
            raw.output.format = format;
        }
        if let Some(path) = output_path {
            raw.output.path = Some(path);
        }
        ConfigFile::try_from(raw)
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(InputSection::default(), OutputSection::default())
    }
}

/// `[input]` section: where program records come from and how lines split.
#[derive(Debug, Clone, Deserialize)]
pub struct InputSection {
    /// Program list file. `--input` takes precedence.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Separator between the program name and its date list.
    #[serde(default = "default_field_separator")]
    pub field_separator: String,

    /// Separator between dates.
    #[serde(default = "default_date_separator")]
    pub date_separator: String,

    /// Skip lines without exactly two fields instead of failing.
    #[serde(default = "default_skip_malformed")]
    pub skip_malformed: bool,
}

fn default_field_separator() -> String {
    "|".to_string()
}

fn default_date_separator() -> String {
    ",".to_string()
}

fn default_skip_malformed() -> bool {
    true
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            path: None,
            field_separator: default_field_separator(),
            date_separator: default_date_separator(),
            skip_malformed: default_skip_malformed(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,

    /// Include the date -> programs demand map in the report.
    #[serde(default = "default_show_date_demand")]
    pub show_date_demand: bool,

    /// Write the report here instead of stdout.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_show_date_demand() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_date_demand: default_show_date_demand(),
            path: None,
        }
    }
}
