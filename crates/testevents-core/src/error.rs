// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Error types for testevents-core

use thiserror::Error;

use crate::id::TestId;
use crate::reporter::ReporterState;

/// Error raised by a [`TestListener`](crate::listener::TestListener) implementation
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while driving a reporter
///
/// A failing test is not an error: it is reported as data through
/// [`TestResult`](crate::result::TestResult). These variants only signal a
/// defect in the code driving the reporter, or a failure inside a listener.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An operation was invoked in a state that does not allow it
    #[error("cannot {operation} '{name}' ({id}) while it is {state}")]
    ProtocolViolation {
        /// Id of the node the operation was invoked on
        id: TestId,
        /// Name of the node
        name: String,
        /// The rejected operation
        operation: &'static str,
        /// State the node was in
        state: ReporterState,
    },

    /// A reporter was closed before it emitted a completion event
    #[error("'{name}' ({id}) was closed while {state}; no completion event was emitted")]
    NotCompleted {
        /// Id of the node
        id: TestId,
        /// Name of the node
        name: String,
        /// State the node was left in
        state: ReporterState,
    },

    /// A listener callback failed
    #[error("listener error: {0}")]
    Listener(#[source] ListenerError),
}

impl ReportError {
    /// Check if this error indicates a misuse of the reporting protocol
    #[must_use]
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Self::ProtocolViolation { .. } | Self::NotCompleted { .. }
        )
    }
}
