// tests/integration/run_end_to_end.rs

use std::path::PathBuf;

use clap::Parser;
use interview_scheduler::cli::CliArgs;
use interview_scheduler::errors::SchedulerError;
use interview_scheduler::fs::mock::MockFileSystem;
use interview_scheduler::run_with;
use interview_scheduler::types::OutputFormat;

use crate::common::init_tracing;

const PROGRAMS: &str = "\
# name|dates
Cardiology|2024-10-01
Nephrology|2024-10-01,2024-10-02
Oncology|2024-10-01
";

fn args(input: Option<&str>) -> CliArgs {
    CliArgs {
        config: None,
        input: input.map(PathBuf::from),
        format: None,
        output: None,
        log_level: None,
        dry_run: false,
    }
}

fn run_to_string(args: &CliArgs, fs: &MockFileSystem) -> Result<String, SchedulerError> {
    let mut out = Vec::new();
    run_with(args, fs, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_cli_flags_parse() {
    let args = CliArgs::try_parse_from([
        "interview-scheduler",
        "--input",
        "programs.txt",
        "--format",
        "json",
        "--output",
        "report.json",
        "--log-level",
        "debug",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.input, Some(PathBuf::from("programs.txt")));
    assert_eq!(args.format, Some(OutputFormat::Json));
    assert_eq!(args.output, Some(PathBuf::from("report.json")));
    assert!(args.dry_run);
    assert!(args.config.is_none());
}

#[test]
fn test_cli_rejects_unknown_format() {
    let result = CliArgs::try_parse_from(["interview-scheduler", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn test_run_prints_text_report() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("programs.txt", PROGRAMS);

    let out = run_to_string(&args(Some("programs.txt")), &fs).unwrap();

    assert!(out.contains("  Cardiology: 2024-10-01\n"));
    assert!(out.contains("  Nephrology: 2024-10-02\n"));
    assert!(out.contains("  Oncology: unassigned\n"));
    assert!(out.contains("Matched 2 of 3 programs\n"));
    assert!(out.contains("Oncology has no assigned date\n"));
}

#[test]
fn test_run_writes_json_report_to_output_path() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("programs.txt", PROGRAMS);
    let mut a = args(Some("programs.txt"));
    a.format = Some(OutputFormat::Json);
    a.output = Some(PathBuf::from("report.json"));

    let out = run_to_string(&a, &fs).unwrap();

    assert!(out.is_empty());
    let written = fs.contents("report.json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["matched"], 2);
    assert_eq!(value["unassigned"], serde_json::json!(["Oncology"]));
}

#[test]
fn test_dry_run_only_prints_demand() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("programs.txt", PROGRAMS);
    let mut a = args(Some("programs.txt"));
    a.dry_run = true;

    let out = run_to_string(&a, &fs).unwrap();

    assert_eq!(
        out,
        "Date to programs:\n  2024-10-01: Cardiology, Nephrology, Oncology\n  2024-10-02: Nephrology\n"
    );
}

#[test]
fn test_input_path_from_config_file() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("from-config.txt", "Solo;2024-11-05\n");
    fs.add_file(
        "custom.toml",
        r#"
[input]
path = "from-config.txt"
field_separator = ";"

[output]
show_date_demand = false
"#,
    );

    let mut a = args(None);
    a.config = Some(PathBuf::from("custom.toml"));

    let out = run_to_string(&a, &fs).unwrap();

    assert_eq!(out, "Assignments:\n  Solo: 2024-11-05\nMatched 1 of 1 programs\n");
}

#[test]
fn test_default_config_file_is_found_through_filesystem() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("mock-programs.txt", "Solo|2024-11-05\n");
    fs.add_file(
        "Scheduler.toml",
        r#"
[input]
path = "mock-programs.txt"

[output]
show_date_demand = false
"#,
    );

    let out = run_to_string(&args(None), &fs).unwrap();

    assert_eq!(out, "Assignments:\n  Solo: 2024-11-05\nMatched 1 of 1 programs\n");
}

#[test]
fn test_cli_format_text_parses() {
    let args = CliArgs::try_parse_from(["interview-scheduler", "--format", "text"]).unwrap();
    assert_eq!(args.format, Some(OutputFormat::Text));
}

#[test]
fn test_missing_input_path_is_config_error() {
    init_tracing();
    let fs = MockFileSystem::new();

    match run_to_string(&args(None), &fs) {
        Err(SchedulerError::ConfigError(msg)) => assert!(msg.contains("--input")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_empty_program_list_reports_nothing_matched() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("empty.txt", "# nothing yet\n");

    let out = run_to_string(&args(Some("empty.txt")), &fs).unwrap();

    assert!(out.contains("Matched 0 of 0 programs"));
}

#[test]
fn test_log_level_names_from_env_var() {
    use interview_scheduler::logging::parse_level_str;

    assert_eq!(parse_level_str(" DEBUG "), Some(tracing::Level::DEBUG));
    assert_eq!(parse_level_str("warning"), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str("loud"), None);
}
