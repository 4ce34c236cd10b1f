// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Configuration for the demo driver
//!
//! This module provides the command line and environment configuration of
//! `testevents-demo`: which suites to simulate, how results are rendered, and
//! logging options.

use clap::{Parser, ValueEnum};

/// Suites simulated when none are given
pub const DEFAULT_SUITES: [&str; 3] = ["MyTestSuite", "MyOtherTestSuite", "AnotherTestSuite"];

/// Tests per suite when not given
pub const DEFAULT_TESTS_PER_SUITE: usize = 3;

/// testevents demo - report a simulated test run through a listener
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "testevents-demo")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Name of the root group
    #[arg(long, env = "TESTEVENTS_TASK_NAME", default_value = "test")]
    pub task_name: String,

    /// Demonstrate failures
    ///
    /// Adds a suite with a failing test and fails the root group.
    #[arg(long, default_value = "false")]
    pub fail: bool,

    /// Comma-separated suite names to simulate
    #[arg(long, env = "TESTEVENTS_SUITES", value_delimiter = ',')]
    pub suites: Vec<String>,

    /// Number of tests in each simulated suite
    #[arg(short = 'n', long, env = "TESTEVENTS_TESTS_PER_SUITE")]
    pub tests_per_suite: Option<usize>,

    /// How listener output is rendered on stdout
    #[arg(short, long, value_enum, env = "TESTEVENTS_FORMAT", default_value_t)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with listener output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Rendering of listener output
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented tree, one line per notification
    #[default]
    Console,
    /// One JSON object per notification
    Json,
}

impl Config {
    /// Get the suite names, using the defaults if none were given
    #[must_use]
    pub fn suite_names(&self) -> Vec<String> {
        if self.suites.is_empty() {
            DEFAULT_SUITES.iter().map(|s| (*s).to_string()).collect()
        } else {
            self.suites.clone()
        }
    }

    /// Get the number of tests per suite, using the default if not given
    #[must_use]
    pub fn tests_per_suite(&self) -> usize {
        self.tests_per_suite.unwrap_or(DEFAULT_TESTS_PER_SUITE)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root group name is only whitespace
    /// - A suite name is empty
    /// - `tests_per_suite` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.task_name.is_empty() && self.task_name.trim().is_empty() {
            return Err(ConfigError::EmptyTaskName);
        }
        if self.suites.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::EmptySuiteName);
        }
        if self.tests_per_suite == Some(0) {
            return Err(ConfigError::NoTestsPerSuite);
        }
        Ok(())
    }

    /// Name of the root group, defaulting to `test`
    #[must_use]
    pub fn root_name(&self) -> &str {
        if self.task_name.is_empty() {
            "test"
        } else {
            &self.task_name
        }
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Root group name is blank
    #[error("Task name must not be blank")]
    EmptyTaskName,

    /// A suite name is blank
    #[error("Suite names must not be blank")]
    EmptySuiteName,

    /// Suites would contain no tests
    #[error("--tests-per-suite must be at least 1")]
    NoTestsPerSuite,
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.fail);
        assert!(config.suites.is_empty());
        assert!(config.tests_per_suite.is_none());
        assert_eq!(config.format, OutputFormat::Console);
        assert!(!config.verbose);
        assert!(!config.quiet);
        assert_eq!(config.root_name(), "test");
    }

    #[test]
    fn test_suite_names_default() {
        let config = Config::default();
        assert_eq!(
            config.suite_names(),
            vec!["MyTestSuite", "MyOtherTestSuite", "AnotherTestSuite"]
        );
    }

    #[test]
    fn test_suite_names_custom() {
        let config = Config {
            suites: vec!["A".to_string(), "B".to_string()],
            ..Default::default()
        };
        assert_eq!(config.suite_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_tests_per_suite_default() {
        assert_eq!(Config::default().tests_per_suite(), DEFAULT_TESTS_PER_SUITE);
    }

    #[test]
    fn test_validate_zero_tests_per_suite() {
        let config = Config {
            tests_per_suite: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoTestsPerSuite)
        ));
    }

    #[test]
    fn test_validate_blank_suite() {
        let config = Config {
            suites: vec!["A".to_string(), "  ".to_string()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptySuiteName)));
    }

    #[test]
    fn test_validate_default_is_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_log_level_default() {
        let config = Config::default();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose() {
        let config = Config {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        let config = Config {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
