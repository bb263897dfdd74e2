//! Report data model
//!
//! A [`Report`] is a tree: packages in the order their summary lines were
//! seen, each holding its tests in run order, each test holding its captured
//! output lines.

use serde::{Deserialize, Serialize};

/// Outcome of a single test
///
/// There is no skipped state: `--- SKIP` resolves to [`TestResult::Pass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestResult {
    /// Test passed (or was skipped)
    Pass,
    /// Test failed, or never reported a status
    Fail,
}

/// A single test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    /// Test name, taken from the status line when one was seen
    pub name: String,
    /// Normalized duration (see [`crate::duration`])
    pub duration: i64,
    /// Test outcome
    pub result: TestResult,
    /// Output lines captured while the test was open, in order
    pub output: Vec<String>,
}

impl Test {
    /// Create a freshly started test
    ///
    /// A test starts out failed with no duration; only a status line can
    /// change that.
    #[must_use]
    pub fn started(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: 0,
            result: TestResult::Fail,
            output: Vec::new(),
        }
    }

    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result == TestResult::Pass
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.result == TestResult::Fail
    }
}

/// The results of one test binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package import path
    pub name: String,
    /// Normalized duration (see [`crate::duration`])
    pub duration: i64,
    /// Tests in the order they started
    pub tests: Vec<Test>,
}

impl Package {
    /// Number of passed tests
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.tests.iter().filter(|t| t.passed()).count()
    }

    /// Number of failed tests
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.tests.iter().filter(|t| t.failed()).count()
    }

    /// Get failing tests
    #[must_use]
    pub fn failing_tests(&self) -> Vec<&Test> {
        self.tests.iter().filter(|t| t.failed()).collect()
    }

    /// Check if all tests passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.tests.iter().all(Test::passed)
    }
}

/// A parsed test run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Packages in the order their summary lines appeared
    pub packages: Vec<Package>,
}

impl Report {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no package was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Total number of tests across all packages
    #[must_use]
    pub fn test_count(&self) -> usize {
        self.packages.iter().map(|p| p.tests.len()).sum()
    }

    /// Total number of failed tests across all packages
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.packages.iter().map(Package::failed_count).sum()
    }

    /// Get failing tests together with their package
    #[must_use]
    pub fn failing_tests(&self) -> Vec<(&Package, &Test)> {
        self.packages
            .iter()
            .flat_map(|p| p.tests.iter().filter(|t| t.failed()).map(move |t| (p, t)))
            .collect()
    }

    /// Check if every test in every package passed
    ///
    /// An empty report counts as passing.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.packages.iter().all(Package::all_passed)
    }
}
