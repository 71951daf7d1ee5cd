//! License header check
//!
//! Compares the leading block comment of each file with a template and prints
//! a unified diff for every file that does not match. Nothing is rewritten on
//! disk.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use pidgin_build_tools::{CheckConfig, FileOutcome, LicenseChecker, default_context_radius};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: directory template-file file...";

#[derive(Parser, Debug)]
#[command(name = "check-license-header")]
#[command(about = "Check that source files start with the canonical license header")]
struct Args {
    /// Directory the template and files are relative to
    directory: PathBuf,

    /// File holding the canonical header
    template: PathBuf,

    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Unchanged lines shown around each change
    #[arg(long, default_value_t = default_context_radius())]
    context: usize,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            log::debug!("{e}");
            println!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = CheckConfig::new(args.directory, args.template, args.files).with_context_radius(args.context);
    let checker = LicenseChecker::from_config(&config)
        .with_context(|| format!("Failed to load template {}", config.template_path().display()))?;

    let report = checker.check_files(&config.directory, &config.files);
    for file in &report.files {
        match &file.outcome {
            FileOutcome::Clean => log::debug!("{}: ok", file.filename),
            FileOutcome::NeedsUpdate { diff } => print!("{diff}"),
            FileOutcome::Unreadable { error } => eprintln!("{error}"),
        }
    }

    if !report.is_clean() {
        log::info!("{} of {} files need a new license header", report.failures(), report.files.len());
    }
    Ok(report.exit_code())
}
