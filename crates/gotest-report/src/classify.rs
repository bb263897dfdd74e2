// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification for `go test -v` output
//!
//! Every input line falls into exactly one [`Line`] category. Classification
//! is lexical and per line: nothing here knows about the lines before or
//! after.
//!
//! # Example
//!
//! ```
//! use gotest_report::classify::{Line, Status, classify};
//!
//! assert_eq!(classify("=== RUN TestAdd"), Line::RunStart { name: "TestAdd" });
//! assert_eq!(
//!     classify("--- PASS: TestAdd (0.00s)"),
//!     Line::Status { status: Status::Pass, name: "TestAdd", time: "0.00" },
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::report::TestResult;

static RUN_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^=== RUN:? (.+)$").expect("run-start pattern compiles"));

static STATUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--- (PASS|FAIL|SKIP): (.+) \(([0-9.]+) ?(?:s|seconds|ms|us)?\)$")
        .expect("status pattern compiles")
});

// Separators are ASCII whitespace only; `\s` would also accept Unicode spaces.
static PACKAGE_RESULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(ok|FAIL)[\t\n\f\r ]+(.+)[\t\n\f\r ]([0-9.]+)s$")
        .expect("package-result pattern compiles")
});

/// Outcome token on a `--- <STATUS>: ...` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `--- PASS`
    Pass,
    /// `--- FAIL`
    Fail,
    /// `--- SKIP`
    Skip,
}

impl Status {
    /// Resolve the status into the two-valued report result
    ///
    /// `SKIP` has no state of its own and resolves to [`TestResult::Pass`].
    #[must_use]
    pub fn result(self) -> TestResult {
        match self {
            Status::Pass | Status::Skip => TestResult::Pass,
            Status::Fail => TestResult::Fail,
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "PASS" => Some(Status::Pass),
            "FAIL" => Some(Status::Fail),
            "SKIP" => Some(Status::Skip),
            _ => None,
        }
    }
}

/// Verdict token on a package summary line (`ok` or `FAIL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// `ok <package> <time>s`
    Ok,
    /// `FAIL <package> <time>s`
    Fail,
}

/// A classified line of test output
///
/// Captured fields borrow from the classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `=== RUN <name>`: a test has started
    RunStart {
        /// Test name, leading whitespace trimmed
        name: &'a str,
    },
    /// `--- <STATUS>: <name> (<time><unit>)`: a test has resolved
    Status {
        /// Reported outcome
        status: Status,
        /// Test name as reported on the status line
        name: &'a str,
        /// Raw decimal duration, unit stripped
        time: &'a str,
    },
    /// `<ok|FAIL> <package> <time>s`: every test in a package has finished
    PackageResult {
        /// Package verdict
        verdict: Verdict,
        /// Package import path
        name: &'a str,
        /// Raw decimal duration in seconds
        time: &'a str,
    },
    /// Anything else, potentially test output
    Unclassified(&'a str),
}

/// Classify a single line (without its trailing newline)
///
/// Patterns are tried in a fixed order: run-start, package result, test
/// status. The first match wins; a line matching none is
/// [`Line::Unclassified`].
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    run_start(line)
        .or_else(|| package_result(line))
        .or_else(|| status(line))
        .unwrap_or(Line::Unclassified(line))
}

/// Check whether a line is the trailer `go test` prints after a package's tests
///
/// These are the bare `PASS` / `FAIL` lines and `exit status N`. They are
/// never test output.
#[must_use]
pub fn is_run_terminator(line: &str) -> bool {
    line == "PASS" || line == "FAIL" || line.starts_with("exit status")
}

fn run_start(line: &str) -> Option<Line<'_>> {
    let caps = RUN_START.captures(line)?;
    let name = caps.get(1)?.as_str().trim_start();
    Some(Line::RunStart { name })
}

fn status(line: &str) -> Option<Line<'_>> {
    let caps = STATUS.captures(line)?;
    Some(Line::Status {
        status: Status::from_token(caps.get(1)?.as_str())?,
        name: caps.get(2)?.as_str(),
        time: caps.get(3)?.as_str(),
    })
}

fn package_result(line: &str) -> Option<Line<'_>> {
    let caps = PACKAGE_RESULT.captures(line)?;
    let verdict = match caps.get(1)?.as_str() {
        "ok" => Verdict::Ok,
        "FAIL" => Verdict::Fail,
        _ => return None,
    };
    Some(Line::PackageResult {
        verdict,
        name: caps.get(2)?.as_str(),
        time: caps.get(3)?.as_str(),
    })
}
