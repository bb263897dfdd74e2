// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gotest-report: structured reports from `go test -v` output
//!
//! This library crate turns the console output of a Go test run into a
//! [`Report`]: packages, their tests, each test's outcome, duration and
//! captured output. Rendering the report is left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use gotest_report::parser::{ReportBuilder, parse};
//!
//! // Parse a complete stream
//! let stdin = std::io::stdin();
//! let report = parse(stdin.lock()).unwrap();
//! println!("{} tests, {} failed", report.test_count(), report.failed_count());
//!
//! // Or feed lines one at a time
//! let mut builder = ReportBuilder::new();
//! builder.push_line("=== RUN TestAdd");
//! builder.push_line("--- PASS: TestAdd (0.00s)");
//! builder.push_line("ok  \texample.com/calc\t0.004s");
//! let report = builder.finish();
//! ```

pub mod classify;
pub mod duration;
pub mod error;
pub mod parser;
pub mod report;

pub use classify::{Line, Status, Verdict, classify};
pub use duration::normalize;
pub use error::ReportError;
pub use parser::{ReportBuilder, parse, parse_str};
pub use report::{Package, Report, Test, TestResult};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::parser::{ReportBuilder, parse, parse_str};
    pub use crate::report::{Package, Report, Test, TestResult};
}
