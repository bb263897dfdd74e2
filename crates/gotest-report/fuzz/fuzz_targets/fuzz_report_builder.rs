// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the incremental report builder
//!
//! Feeds arbitrary text line by line and checks that every package the
//! builder reports on completion ends up in the final report.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gotest_report::ReportBuilder;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut builder = ReportBuilder::new();
        let mut completed = 0;

        for line in input.lines() {
            if builder.push_line(line).is_some() {
                completed += 1;
            }
        }

        let report = builder.finish();
        assert_eq!(report.packages.len(), completed);
    }
});
