//! Configuration for the gotest-report command
//!
//! This module provides the command-line configuration: where test output is
//! read from, where the report goes, and logging options.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Convert `go test -v` output into a structured JSON report
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gotest-report")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// File containing `go test -v` output
    ///
    /// Reads from stdin when omitted or set to `-`.
    #[arg(short, long, env = "GOTEST_REPORT_INPUT")]
    pub input: Option<PathBuf>,

    /// File to write the JSON report to
    ///
    /// Writes to stdout when omitted. Missing parent directories are created.
    #[arg(short, long, env = "GOTEST_REPORT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long, default_value = "false")]
    pub pretty: bool,

    /// Exit with status 1 when any test in the report failed
    #[arg(long, default_value = "false")]
    pub set_exit_code: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the input file, or `None` when reading from stdin
    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file is specified but doesn't exist
    /// - The input path is a directory
    /// - The output file's parent directory cannot be created
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(input) = self.input_path() {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.to_path_buf()));
            }
            if input.is_dir() {
                return Err(ConfigError::InputIsDirectory(input.to_path_buf()));
            }
        }

        if let Some(parent) = self.output.as_deref().and_then(Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::OutputDirectoryCreateFailed(parent.to_path_buf(), e)
                })?;
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input file not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is a directory
    #[error("Input path is a directory: {0}")]
    InputIsDirectory(PathBuf),

    /// Failed to create the output directory
    #[error("Failed to create output directory {0}: {1}")]
    OutputDirectoryCreateFailed(PathBuf, std::io::Error),
}
