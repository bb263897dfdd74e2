//! gotest-report: convert `go test -v` output into a JSON report
//!
//! Reads test output from a file or stdin and writes the structured report
//! to stdout or a file.

use std::process::ExitCode;

use clap::Parser;
use gotest_report_cli::config::Config;
use gotest_report_cli::run::run;
use tracing::error;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
