// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report building from `go test -v` output
//!
//! [`ReportBuilder`] is a two-state machine fed one line at a time. While no
//! test is open it is `Idle` and ignores everything except run-start and
//! package summary lines. A `=== RUN` line opens a test and moves it to
//! `Accumulating`, where status lines update the open test and other lines
//! become its output. Tests are only moved into the pending list when the next
//! test starts or the package summary arrives, and a package is only emitted
//! once its summary line is seen.
//!
//! Whatever is still open when the input ends is dropped: an unclosed test and
//! any pending tests without a package summary never reach the report.
//!
//! # Example
//!
//! ```
//! use gotest_report::parser::parse_str;
//! use gotest_report::TestResult;
//!
//! let report = parse_str(
//!     "=== RUN TestA\n--- PASS: TestA (0.00s)\nok  \texample.com/pkg\t0.015s\n",
//! );
//! assert_eq!(report.packages[0].name, "example.com/pkg");
//! assert_eq!(report.packages[0].tests[0].result, TestResult::Pass);
//! ```

use std::io::BufRead;
use std::mem;

use tracing::{debug, trace};

use crate::classify::{Line, classify, is_run_terminator};
use crate::duration::{normalize, normalize_status};
use crate::error::ReportError;
use crate::report::{Package, Report, Test};

/// Builder state: either no test is open, or one is collecting output
#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Accumulating(Test),
}

/// Incremental report builder
///
/// Feed lines with [`push_line`](Self::push_line) and call
/// [`finish`](Self::finish) once the input is exhausted.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: Report,
    pending: Vec<Test>,
    state: State,
}

impl ReportBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single line of output (without its line terminator)
    ///
    /// Returns the package that this line completed, if any.
    pub fn push_line(&mut self, line: &str) -> Option<&Package> {
        let classified = classify(line);
        trace!(line = ?classified, "classified line");

        match classified {
            Line::RunStart { name } => {
                self.flush();
                self.state = State::Accumulating(Test::started(name));
            }
            Line::PackageResult { name, time, .. } => {
                self.flush();
                let package = Package {
                    name: name.to_string(),
                    duration: normalize(time),
                    tests: mem::take(&mut self.pending),
                };
                debug!(
                    package = %package.name,
                    tests = package.tests.len(),
                    failed = package.failed_count(),
                    "package finished"
                );
                self.report.packages.push(package);
                return self.report.packages.last();
            }
            Line::Status { status, name, time } => {
                if let State::Accumulating(test) = &mut self.state {
                    test.name = name.to_string();
                    test.result = status.result();
                    test.duration = normalize_status(time);
                }
            }
            Line::Unclassified(text) => {
                if let State::Accumulating(test) = &mut self.state {
                    if !is_run_terminator(text) {
                        test.output.push(text.to_string());
                    }
                }
            }
        }

        None
    }

    /// Move the open test, if any, into the pending list
    fn flush(&mut self) {
        if let State::Accumulating(test) = mem::take(&mut self.state) {
            self.pending.push(test);
        }
    }

    /// The test currently collecting output, if any
    #[must_use]
    pub fn open_test(&self) -> Option<&Test> {
        match &self.state {
            State::Idle => None,
            State::Accumulating(test) => Some(test),
        }
    }

    /// Check if a test is currently open
    #[must_use]
    pub fn has_open_test(&self) -> bool {
        self.open_test().is_some()
    }

    /// Number of closed tests waiting for their package summary line
    #[must_use]
    pub fn pending_test_count(&self) -> usize {
        self.pending.len()
    }

    /// Packages completed so far
    #[must_use]
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Finalize and return the report
    ///
    /// The open test and pending tests are discarded: only packages whose
    /// summary line was seen are part of the result.
    #[must_use]
    pub fn finish(self) -> Report {
        let dropped = self.pending.len() + usize::from(self.has_open_test());
        if dropped > 0 {
            debug!(
                dropped,
                "input ended before package summary, discarding unfinished tests"
            );
        }
        self.report
    }
}

/// Parse a complete stream of `go test -v` output
///
/// Lines are split on `\n`; a `\r` before it is dropped. Invalid UTF-8 is
/// replaced rather than rejected.
///
/// # Errors
///
/// Returns `ReportError::Io` if reading from `reader` fails. No partial
/// report is returned in that case.
pub fn parse<R: BufRead>(mut reader: R) -> Result<Report, ReportError> {
    let mut builder = ReportBuilder::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(strip_line_ending(&buf));
        builder.push_line(&line);
    }

    Ok(builder.finish())
}

/// Parse `go test -v` output that is already in memory
#[must_use]
pub fn parse_str(input: &str) -> Report {
    let mut builder = ReportBuilder::new();
    for line in input.lines() {
        builder.push_line(line);
    }
    builder.finish()
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    match buf.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => buf,
    }
}
