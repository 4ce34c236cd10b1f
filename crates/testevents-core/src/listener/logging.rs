// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Listener that turns notifications into tracing events

use tracing::{debug, info, warn};

use super::TestListener;
use crate::descriptor::Descriptor;
use crate::error::ListenerError;
use crate::event::{CompleteEvent, Destination, OutputEvent, StartEvent};
use crate::result::{ResultType, TestResult};

/// Logs every notification through `tracing`
///
/// Starts and output go out at debug level, completions at info, failures at
/// warn. Never returns an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl TestListener for LoggingListener {
    fn started(&self, descriptor: &Descriptor, event: &StartEvent) -> Result<(), ListenerError> {
        debug!(
            id = %descriptor.id(),
            parent = ?event.parent_id.as_ref().map(|p| p.as_str()),
            kind = ?descriptor.kind(),
            "{} started",
            descriptor.display_name()
        );
        Ok(())
    }

    fn output(&self, descriptor: &Descriptor, event: &OutputEvent) -> Result<(), ListenerError> {
        let stream = match event.destination {
            Destination::StdOut => "stdout",
            Destination::StdErr => "stderr",
        };
        debug!(id = %descriptor.id(), stream, "{}", event.message);
        Ok(())
    }

    fn completed(
        &self,
        descriptor: &Descriptor,
        result: &TestResult,
        event: &CompleteEvent,
    ) -> Result<(), ListenerError> {
        let duration_ms = result.duration_millis();
        match event.result_type {
            ResultType::Failure => {
                let failure = result
                    .failures
                    .first()
                    .map(|f| f.message.as_str())
                    .unwrap_or("");
                warn!(
                    id = %descriptor.id(),
                    duration_ms,
                    failure,
                    "{} FAILED",
                    descriptor.display_name()
                );
            }
            ResultType::Skipped => {
                info!(id = %descriptor.id(), "{} SKIPPED", descriptor.display_name());
            }
            ResultType::Success => {
                info!(id = %descriptor.id(), duration_ms, "{} PASSED", descriptor.display_name());
            }
        }
        Ok(())
    }
}
