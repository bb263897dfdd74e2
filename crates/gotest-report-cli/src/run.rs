//! Reading test output and writing the report
//!
//! The command is a single pass: read `go test -v` output from a file or
//! stdin, build the report, and hand it off as JSON.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use gotest_report::{Report, parse};
use tracing::{debug, info};

use crate::config::Config;

/// Read and parse the configured input
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or reading it fails.
pub fn read_report(config: &Config) -> Result<Report> {
    match config.input_path() {
        Some(path) => {
            debug!(path = %path.display(), "reading test output from file");
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            parse(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))
        }
        None => {
            debug!("reading test output from stdin");
            parse(io::stdin().lock()).context("failed to parse stdin")
        }
    }
}

/// Serialize the report as JSON followed by a newline
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_report<W: Write>(report: &Report, mut writer: W, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Check whether the run should exit with a failure status
#[must_use]
pub fn reports_failure(report: &Report, config: &Config) -> bool {
    config.set_exit_code && !report.all_passed()
}

/// Run the command end to end
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// read, or the report cannot be written.
pub fn run(config: &Config) -> Result<ExitCode> {
    config.validate()?;

    let report = read_report(config)?;
    info!(
        packages = report.packages.len(),
        tests = report.test_count(),
        failed = report.failed_count(),
        "parsed test output"
    );

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_report(&report, BufWriter::new(file), config.pretty)?;
            info!(path = %path.display(), "report written");
        }
        None => write_report(&report, io::stdout().lock(), config.pretty)?,
    }

    if reports_failure(&report, config) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
