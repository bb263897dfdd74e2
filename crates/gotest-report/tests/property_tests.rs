// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for gotest-report
//!
//! These tests use proptest to check the builder's invariants over generated
//! test logs and arbitrary text.

use gotest_report::classify::{Line, classify};
use gotest_report::duration::normalize;
use gotest_report::{TestResult, parse, parse_str};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Generate a plausible Go test name
fn test_name() -> impl Strategy<Value = String> {
    "Test[A-Z][a-zA-Z0-9_]{0,20}"
}

/// Generate a decimal duration as `go test` prints it
fn decimal_time() -> impl Strategy<Value = String> {
    (0u32..100, 0u32..1000).prop_map(|(secs, frac)| format!("{secs}.{frac:03}"))
}

/// Generate an output line that is never classified as a marker
fn output_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("    helper_test.go:10: value mismatch".to_string()),
        Just("goroutine 1 [running]:".to_string()),
        "log: [a-z ]{0,40}",
    ]
}

/// One test in a generated log: name, optional status, output lines
type GeneratedTest = (String, Option<(&'static str, String)>, Vec<String>);

fn generated_test() -> impl Strategy<Value = GeneratedTest> {
    (
        test_name(),
        proptest::option::of((
            prop_oneof![Just("PASS"), Just("FAIL"), Just("SKIP")],
            decimal_time(),
        )),
        proptest::collection::vec(output_line(), 0..4),
    )
}

/// One package: tests plus the summary line's time
fn generated_package() -> impl Strategy<Value = (Vec<GeneratedTest>, String)> {
    (
        proptest::collection::vec(generated_test(), 0..5),
        decimal_time(),
    )
}

fn render(packages: &[(Vec<GeneratedTest>, String)]) -> String {
    let mut log = String::new();
    for (idx, (tests, time)) in packages.iter().enumerate() {
        for (name, status, output) in tests {
            log.push_str(&format!("=== RUN   {name}\n"));
            for line in output {
                log.push_str(line);
                log.push('\n');
            }
            if let Some((status, time)) = status {
                log.push_str(&format!("--- {status}: {name} ({time}s)\n"));
            }
        }
        log.push_str("PASS\nexit status 0\n");
        log.push_str(&format!("ok  \texample.com/pkg{idx}\t{time}s\n"));
    }
    log
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_parser_never_panics(input in "(?s).{0,500}") {
        let _ = parse_str(&input);
    }

    #[test]
    fn prop_parse_bytes_never_fails(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert!(parse(bytes.as_slice()).is_ok());
    }

    #[test]
    fn prop_classify_never_panics(line in ".{0,200}") {
        let _ = classify(&line);
    }

    #[test]
    fn prop_unclassified_echoes_line(line in "[a-z ]{0,80}") {
        prop_assert_eq!(classify(&line), Line::Unclassified(line.as_str()));
    }

    #[test]
    fn prop_normalize_drops_decimal_point(secs in 0u32..10_000, frac in 0u32..1000) {
        let time = format!("{secs}.{frac:03}");
        prop_assert_eq!(normalize(&time), i64::from(secs) * 1000 + i64::from(frac));
    }

    #[test]
    fn prop_package_count_matches_summary_lines(
        packages in proptest::collection::vec(generated_package(), 0..5)
    ) {
        let report = parse_str(&render(&packages));

        prop_assert_eq!(report.packages.len(), packages.len());
        for (idx, (pkg, (tests, time))) in report.packages.iter().zip(&packages).enumerate() {
            prop_assert_eq!(&pkg.name, &format!("example.com/pkg{idx}"));
            prop_assert_eq!(pkg.duration, normalize(time));
            prop_assert_eq!(pkg.tests.len(), tests.len());
        }
    }

    #[test]
    fn prop_tests_resolve_from_status_lines(
        packages in proptest::collection::vec(generated_package(), 1..4)
    ) {
        let report = parse_str(&render(&packages));

        for (pkg, (tests, _)) in report.packages.iter().zip(&packages) {
            for (test, (name, status, output)) in pkg.tests.iter().zip(tests) {
                prop_assert_eq!(&test.name, name);
                prop_assert_eq!(&test.output, output);
                match status {
                    Some((token, time)) => {
                        let expected = if *token == "FAIL" { TestResult::Fail } else { TestResult::Pass };
                        prop_assert_eq!(test.result, expected);
                        prop_assert_eq!(test.duration, normalize(time) * 10);
                    }
                    None => {
                        prop_assert_eq!(test.result, TestResult::Fail);
                        prop_assert_eq!(test.duration, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_trailing_tests_never_reported(
        packages in proptest::collection::vec(generated_package(), 0..3),
        trailing in proptest::collection::vec(generated_test(), 1..3),
    ) {
        let mut log = render(&packages);
        for (name, _, output) in &trailing {
            log.push_str(&format!("=== RUN   {name}\n"));
            for line in output {
                log.push_str(line);
                log.push('\n');
            }
        }

        prop_assert_eq!(parse_str(&log), parse_str(&render(&packages)));
    }
}
