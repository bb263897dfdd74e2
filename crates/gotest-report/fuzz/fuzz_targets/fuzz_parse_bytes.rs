// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for parsing raw bytes
//!
//! Any byte sequence read from memory must parse without error or panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    assert!(gotest_report::parse(data).is_ok());
});
