// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! State machine and event emission shared by every reporter kind

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use super::ReporterState;
use crate::descriptor::Descriptor;
use crate::error::ReportError;
use crate::event::{CompleteEvent, Destination, OutputEvent, StartEvent};
use crate::listener::TestListener;
use crate::result::{Outcome, TestResult};

/// Gives the shared reporter behaviour access to a reporter's lifecycle
pub trait Sealed {
    fn lifecycle(&self) -> &Lifecycle;
    fn lifecycle_mut(&mut self) -> &mut Lifecycle;
}

/// One node's descriptor, state and listener
///
/// Dropping a lifecycle that never completed emits nothing; it only logs a
/// warning unless the owner released it through `close` first.
pub struct Lifecycle {
    listener: Arc<dyn TestListener>,
    descriptor: Descriptor,
    state: ReporterState,
    start_time: i64,
    released: bool,
}

impl Lifecycle {
    pub(crate) fn new(listener: Arc<dyn TestListener>, descriptor: Descriptor) -> Self {
        Self {
            listener,
            descriptor,
            state: ReporterState::NotStarted,
            start_time: 0,
            released: false,
        }
    }

    pub(crate) fn listener(&self) -> &Arc<dyn TestListener> {
        &self.listener
    }

    pub(crate) fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub(crate) fn state(&self) -> ReporterState {
        self.state
    }

    pub(crate) fn require(
        &self,
        operation: &'static str,
        expected: ReporterState,
    ) -> Result<(), ReportError> {
        if self.state == expected {
            return Ok(());
        }
        Err(ReportError::ProtocolViolation {
            id: self.descriptor.id().clone(),
            name: self.descriptor.name().to_string(),
            operation,
            state: self.state,
        })
    }

    pub(crate) fn started(&mut self, start_time: DateTime<Utc>) -> Result<(), ReportError> {
        self.require("start", ReporterState::NotStarted)?;

        let timestamp_millis = start_time.timestamp_millis();
        self.start_time = timestamp_millis;
        self.state = ReporterState::Started;

        debug!(
            id = %self.descriptor.id(),
            name = self.descriptor.name(),
            "Reporting start"
        );
        let event = StartEvent {
            timestamp_millis,
            parent_id: self.descriptor.parent_id().cloned(),
        };
        self.listener
            .started(&self.descriptor, &event)
            .map_err(ReportError::Listener)
    }

    pub(crate) fn output(
        &self,
        log_time: DateTime<Utc>,
        destination: Destination,
        message: &str,
    ) -> Result<(), ReportError> {
        self.require("write output for", ReporterState::Started)?;

        trace!(id = %self.descriptor.id(), ?destination, len = message.len(), "Reporting output");
        let event = OutputEvent {
            timestamp_millis: log_time.timestamp_millis(),
            destination,
            message: message.to_string(),
        };
        self.listener
            .output(&self.descriptor, &event)
            .map_err(ReportError::Listener)
    }

    pub(crate) fn complete(
        &mut self,
        end_time: DateTime<Utc>,
        outcome: Outcome,
    ) -> Result<(), ReportError> {
        self.require("complete", ReporterState::Started)?;

        let timestamp_millis = end_time.timestamp_millis();
        self.state = ReporterState::Completed;

        let result_type = outcome.result_type();
        let result = TestResult::from_outcome(outcome, self.start_time, timestamp_millis);
        debug!(
            id = %self.descriptor.id(),
            name = self.descriptor.name(),
            ?result_type,
            "Reporting completion"
        );
        let event = CompleteEvent {
            timestamp_millis,
            result_type,
        };
        self.listener
            .completed(&self.descriptor, &result, &event)
            .map_err(ReportError::Listener)
    }

    pub(crate) fn close(&mut self) -> Result<(), ReportError> {
        self.released = true;
        if self.state == ReporterState::Completed {
            return Ok(());
        }
        Err(ReportError::NotCompleted {
            id: self.descriptor.id().clone(),
            name: self.descriptor.name().to_string(),
            state: self.state,
        })
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        if self.released || self.state == ReporterState::Completed || std::thread::panicking() {
            return;
        }
        warn!(
            id = %self.descriptor.id(),
            name = self.descriptor.name(),
            state = %self.state,
            "Reporter dropped without a completion event"
        );
    }
}
