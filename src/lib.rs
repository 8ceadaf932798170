// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod input;
pub mod logging;
pub mod matching;
pub mod program;
pub mod report;
pub mod types;

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::errors::{Result, SchedulerError};
use crate::fs::{FileSystem, RealFileSystem};
use crate::input::load_programs;
use crate::matching::assign_dates_in_place;
use crate::report::{render, render_demand};

pub use crate::matching::{MatchOutcome, ProgramAssignment, assign_dates};
pub use crate::program::Program;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (+ CLI overrides)
/// - program list loading
/// - the matching engine
/// - report rendering to stdout or a file
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&args, &RealFileSystem, &mut out)
}

/// [`run`] with an explicit filesystem and stdout sink.
pub fn run_with(args: &CliArgs, fs: &dyn FileSystem, out: &mut dyn Write) -> Result<()> {
    let cfg = load_or_default(fs, args.config.as_deref())?.with_overrides(
        args.input.clone(),
        args.format,
        args.output.clone(),
    )?;

    let input_path = cfg.input().path.clone().ok_or_else(|| {
        SchedulerError::ConfigError(
            "no program list given; pass --input or set [input].path".to_string(),
        )
    })?;

    let mut programs = load_programs(fs, &input_path, cfg.input())?;
    info!(path = ?input_path, programs = programs.len(), "program list loaded");

    if args.dry_run {
        let rendered = render_demand(&programs, cfg.output().format)?;
        emit(fs, cfg.output().path.as_deref(), &rendered, out)?;
        debug!("dry-run complete (no matching)");
        return Ok(());
    }

    assign_dates_in_place(&mut programs)?;

    let rendered = render(&programs, cfg.output())?;
    emit(fs, cfg.output().path.as_deref(), &rendered, out)
}

/// Send a rendered report to `path` if set, otherwise to `out`.
fn emit(fs: &dyn FileSystem, path: Option<&Path>, rendered: &str, out: &mut dyn Write) -> Result<()> {
    match path {
        Some(path) => {
            fs.write(path, rendered.as_bytes())?;
            info!(path = ?path, "report written");
        }
        None => {
            out.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(out)?;
            }
            out.flush()?;
        }
    }
    Ok(())
}
