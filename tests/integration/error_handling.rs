// tests/integration/error_handling.rs

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use interview_scheduler::config::{ConfigFile, load_and_validate, load_or_default};
use interview_scheduler::errors::SchedulerError;
use interview_scheduler::fs::RealFileSystem;

use crate::common::builders::ConfigFileBuilder;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = config_file("");

    let cfg = load_and_validate(&RealFileSystem, file.path()).unwrap();

    assert_eq!(cfg.input().field_separator, "|");
    assert_eq!(cfg.input().date_separator, ",");
    assert!(cfg.input().skip_malformed);
    assert!(cfg.input().path.is_none());
    assert!(cfg.output().show_date_demand);
    assert!(cfg.output().path.is_none());
}

#[test]
fn test_full_config_is_read() {
    let file = config_file(
        r#"
[input]
path = "programs.txt"
field_separator = ";"
date_separator = " "
skip_malformed = false

[output]
format = "json"
show_date_demand = false
path = "out/report.json"
"#,
    );

    let cfg = load_and_validate(&RealFileSystem, file.path()).unwrap();

    assert_eq!(cfg.input().path.as_deref(), Some(Path::new("programs.txt")));
    assert_eq!(cfg.input().field_separator, ";");
    assert_eq!(cfg.input().date_separator, " ");
    assert!(!cfg.input().skip_malformed);
    assert_eq!(
        cfg.output().format,
        interview_scheduler::types::OutputFormat::Json
    );
    assert!(!cfg.output().show_date_demand);
    assert_eq!(cfg.output().path.as_deref(), Some(Path::new("out/report.json")));
}

#[test]
fn test_identical_separators_return_config_error() {
    let file = config_file(
        r#"
[input]
field_separator = ","
"#,
    );

    match load_and_validate(&RealFileSystem, file.path()) {
        Err(SchedulerError::ConfigError(msg)) => {
            assert!(msg.contains("must differ"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_empty_separator_returns_config_error() {
    let raw = ConfigFileBuilder::new().separators("", ",").raw();

    match ConfigFile::try_from(raw) {
        Err(SchedulerError::ConfigError(msg)) => {
            assert!(msg.contains("field_separator"));
            assert!(msg.contains("must not be empty"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_dash_separator_returns_config_error() {
    let raw = ConfigFileBuilder::new().separators("|", "-").raw();

    match ConfigFile::try_from(raw) {
        Err(SchedulerError::ConfigError(msg)) => {
            assert!(msg.contains("date_separator"));
            assert!(msg.contains("'-'"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_empty_output_path_returns_config_error() {
    let raw = ConfigFileBuilder::new().output_path("").raw();

    assert!(matches!(
        ConfigFile::try_from(raw),
        Err(SchedulerError::ConfigError(_))
    ));
}

#[test]
fn test_unknown_format_returns_toml_error() {
    let file = config_file(
        r#"
[output]
format = "yaml"
"#,
    );

    assert!(matches!(
        load_and_validate(&RealFileSystem, file.path()),
        Err(SchedulerError::TomlError(_))
    ));
}

#[test]
fn test_missing_explicit_config_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    match load_or_default(&RealFileSystem, Some(&missing)) {
        Err(SchedulerError::Other(e)) => {
            assert!(format!("{e:?}").contains("nope.toml"));
        }
        Err(e) => panic!("Expected read error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_overrides_are_validated() {
    let cfg = ConfigFileBuilder::new().build();

    let result = cfg.with_overrides(Some("".into()), None, None);

    assert!(matches!(result, Err(SchedulerError::ConfigError(_))));
}
