//! gotest-report-cli library
//!
//! This module exports the command's configuration and run loop for use in
//! integration tests.

pub mod config;
pub mod run;
