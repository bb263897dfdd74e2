// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gotest-report

use thiserror::Error;

/// Errors that can occur while building a report
///
/// Malformed lines are never an error; they are classified and either
/// captured as test output or dropped. Only the input stream itself can fail.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading the next line from the input stream failed
    #[error("failed to read test output: {0}")]
    Io(#[from] std::io::Error),
}
