// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Scoped handles that report one node's lifecycle
//!
//! Every reporter follows the same discipline, at any depth:
//!
//! 1. [`started`](EventReporter::started)
//! 2. any number of [`output`](EventReporter::output) chunks
//! 3. exactly one completion ([`succeeded`](EventReporter::succeeded),
//!    [`skipped`](EventReporter::skipped), [`failed`](EventReporter::failed),
//!    [`failed_with_message`](EventReporter::failed_with_message) or
//!    [`complete`](EventReporter::complete))
//! 4. [`close`](EventReporter::close) or drop
//!
//! Calls out of that order fail with [`ReportError::ProtocolViolation`].
//! Releasing a reporter never completes it.
//!
//! Nesting is not enforced between parent and child: a group may complete
//! while its children are still open. Callers own correct nesting.

mod group;
mod lifecycle;
mod leaf;

pub use group::GroupTestEventReporter;
pub use leaf::TestEventReporter;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::descriptor::Descriptor;
use crate::error::ReportError;
use crate::event::Destination;
use crate::result::Outcome;

/// Position of a reporter in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReporterState {
    /// Created, `started` not yet called
    NotStarted,
    /// Started, accepting output and a completion
    Started,
    /// Completed; terminal
    Completed,
}

impl fmt::Display for ReporterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::Started => "started",
            Self::Completed => "completed",
        })
    }
}

/// Lifecycle operations shared by test and group reporters
pub trait EventReporter: lifecycle::Sealed {
    /// Descriptor of the node this reporter is bound to
    fn descriptor(&self) -> &Descriptor {
        self.lifecycle().descriptor()
    }

    /// Current lifecycle state
    fn state(&self) -> ReporterState {
        self.lifecycle().state()
    }

    /// Report that the node started
    ///
    /// # Errors
    ///
    /// Returns `ReportError::ProtocolViolation` unless the node has not been
    /// started yet, or `ReportError::Listener` if the listener fails.
    fn started(&mut self, start_time: DateTime<Utc>) -> Result<(), ReportError> {
        self.lifecycle_mut().started(start_time)
    }

    /// Report a chunk of output captured while the node runs
    ///
    /// # Errors
    ///
    /// Returns `ReportError::ProtocolViolation` unless the node is started,
    /// or `ReportError::Listener` if the listener fails.
    fn output(
        &self,
        log_time: DateTime<Utc>,
        destination: Destination,
        output: &str,
    ) -> Result<(), ReportError> {
        self.lifecycle().output(log_time, destination, output)
    }

    /// Complete the node with the given outcome
    ///
    /// # Errors
    ///
    /// Returns `ReportError::ProtocolViolation` unless the node is started,
    /// or `ReportError::Listener` if the listener fails. The node counts as
    /// completed even when the listener fails.
    fn complete(&mut self, end_time: DateTime<Utc>, outcome: Outcome) -> Result<(), ReportError> {
        self.lifecycle_mut().complete(end_time, outcome)
    }

    /// Complete the node as passed
    ///
    /// # Errors
    ///
    /// See [`complete`](Self::complete).
    fn succeeded(&mut self, end_time: DateTime<Utc>) -> Result<(), ReportError> {
        self.complete(end_time, Outcome::Success)
    }

    /// Complete the node as skipped
    ///
    /// # Errors
    ///
    /// See [`complete`](Self::complete).
    fn skipped(&mut self, end_time: DateTime<Utc>) -> Result<(), ReportError> {
        self.complete(end_time, Outcome::Skipped)
    }

    /// Complete the node as failed, without failure details
    ///
    /// # Errors
    ///
    /// See [`complete`](Self::complete).
    fn failed(&mut self, end_time: DateTime<Utc>) -> Result<(), ReportError> {
        self.complete(end_time, Outcome::Failure { message: None })
    }

    /// Complete the node as failed with a message
    ///
    /// # Errors
    ///
    /// See [`complete`](Self::complete).
    fn failed_with_message(
        &mut self,
        end_time: DateTime<Utc>,
        message: impl Into<String>,
    ) -> Result<(), ReportError>
    where
        Self: Sized,
    {
        self.complete(end_time, Outcome::failure(message))
    }

    /// Release the reporter
    ///
    /// Emits nothing. A node released before completing stays without a
    /// terminal event; that is reported back as `ReportError::NotCompleted`
    /// so the caller can decide whether it matters.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NotCompleted` if no completion was reported.
    fn close(mut self) -> Result<(), ReportError>
    where
        Self: Sized,
    {
        self.lifecycle_mut().close()
    }
}
