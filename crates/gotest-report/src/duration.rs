// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Duration normalization
//!
//! `go test` prints durations as decimal seconds (`0.015s`). The report stores
//! them as integers obtained by dropping the decimal point, so `"0.015"`
//! becomes `15` and `"12.3"` becomes `123`. The declared unit never enters the
//! computation.

/// Multiplier applied to durations taken from `--- PASS/FAIL/SKIP` lines
pub const STATUS_DURATION_SCALE: i64 = 10;

/// Normalize a decimal duration string to an integer
///
/// Every `.` is removed and the remaining text is parsed as a base-10
/// integer. Anything that does not parse (empty, non-numeric, out of range)
/// yields `0`.
///
/// # Example
///
/// ```
/// use gotest_report::duration::normalize;
///
/// assert_eq!(normalize("0.015"), 15);
/// assert_eq!(normalize("12.3"), 123);
/// assert_eq!(normalize("abc"), 0);
/// ```
#[must_use]
pub fn normalize(time: &str) -> i64 {
    time.replace('.', "").parse().unwrap_or(0)
}

/// Normalize the duration captured from a test status line
///
/// Status lines are scaled by [`STATUS_DURATION_SCALE`]; package lines are not.
#[must_use]
pub fn normalize_status(time: &str) -> i64 {
    normalize(time).saturating_mul(STATUS_DURATION_SCALE)
}
