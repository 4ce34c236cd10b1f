// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Test result types

use serde::{Deserialize, Serialize};

/// Final disposition of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultType {
    /// The node passed
    Success,
    /// The node was skipped
    Skipped,
    /// The node failed
    Failure,
}

/// How a node is being completed
///
/// This is the single input to the result computation; every completion call
/// on a reporter is reduced to one of these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Skipped,
    /// Failed, optionally with a message describing why
    Failure {
        /// Failure message, becomes a single [`TestFailure`] record when present
        message: Option<String>,
    },
}

impl Outcome {
    /// Failure carrying a message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: Some(message.into()),
        }
    }

    /// Result type this outcome completes with
    #[must_use]
    pub fn result_type(&self) -> ResultType {
        match self {
            Self::Success => ResultType::Success,
            Self::Skipped => ResultType::Skipped,
            Self::Failure { .. } => ResultType::Failure,
        }
    }
}

/// Details of one failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFailure {
    /// Failure message
    pub message: String,
    /// Category of the failure, e.g. the name of the error type
    pub class_name: String,
    /// Rendered stack trace, empty when unavailable
    pub stack_trace: String,
    /// Whether the failure came from a failed assertion
    pub is_assertion_failure: bool,
    /// Whether the failure came from the test framework rather than the test
    pub is_framework_failure: bool,
    /// Expected value of a failed comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Actual value of a failed comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Failures that caused this one, outermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<TestFailure>,
}

impl TestFailure {
    /// Category given to failures reported with only a message
    pub const GENERIC_CLASS_NAME: &'static str = "Throwable";

    /// Build the failure record for a plain failure message
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            class_name: Self::GENERIC_CLASS_NAME.to_string(),
            stack_trace: String::new(),
            is_assertion_failure: false,
            is_framework_failure: false,
            expected: None,
            actual: None,
            causes: Vec::new(),
        }
    }

    /// Attach a cause to this failure
    #[must_use]
    pub fn with_cause(mut self, cause: TestFailure) -> Self {
        self.causes.push(cause);
        self
    }
}

/// Result computed when a node completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub result_type: ResultType,
    /// Start time in epoch milliseconds
    pub start_time: i64,
    /// End time in epoch milliseconds
    pub end_time: i64,
    pub test_count: u64,
    pub success_count: u64,
    pub failure_count: u64,
    /// Failure records, in order
    pub failures: Vec<TestFailure>,
}

impl TestResult {
    /// Compute the result of completing a node with `outcome`
    ///
    /// | outcome                | test | success | failure | failures |
    /// |------------------------|------|---------|---------|----------|
    /// | `Success`              | 1    | 1       | 0       | none     |
    /// | `Skipped`              | 1    | 0       | 0       | none     |
    /// | `Failure` (no message) | 1    | 0       | 1       | none     |
    /// | `Failure` (message)    | 1    | 0       | 1       | one      |
    #[must_use]
    pub fn from_outcome(outcome: Outcome, start_time: i64, end_time: i64) -> Self {
        let result_type = outcome.result_type();
        let (success_count, failure_count, failures) = match outcome {
            Outcome::Success => (1, 0, Vec::new()),
            Outcome::Skipped => (0, 0, Vec::new()),
            Outcome::Failure { message: None } => (0, 1, Vec::new()),
            Outcome::Failure {
                message: Some(message),
            } => (0, 1, vec![TestFailure::from_message(message)]),
        };

        Self {
            result_type,
            start_time,
            end_time,
            test_count: 1,
            success_count,
            failure_count,
            failures,
        }
    }

    /// Number of tests that were skipped
    ///
    /// Counts that do not add up, e.g. on a deserialized result, give zero.
    #[must_use]
    pub fn skipped_count(&self) -> u64 {
        self.test_count
            .saturating_sub(self.success_count)
            .saturating_sub(self.failure_count)
    }

    /// Elapsed time between start and end, in milliseconds
    #[must_use]
    pub fn duration_millis(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Check if the node passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.result_type == ResultType::Success
    }

    /// Check if the node failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.result_type == ResultType::Failure
    }
}
