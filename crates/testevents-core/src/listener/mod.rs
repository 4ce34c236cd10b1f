// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Consumers of test lifecycle notifications
//!
//! Reporters push notifications into a [`TestListener`] and never read
//! anything back. Listeners are shared between every reporter of a session,
//! so an implementation driven from several threads must do its own
//! synchronization; reporters add none.

mod logging;
mod recording;

pub use logging::LoggingListener;
pub use recording::{RecordingListener, RunSummary};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;
use crate::error::ListenerError;
use crate::event::{CompleteEvent, OutputEvent, StartEvent};
use crate::result::TestResult;

/// Receives lifecycle notifications keyed by descriptor
///
/// An error returned from any callback is handed back unchanged to the code
/// that drove the reporter.
pub trait TestListener: Send + Sync {
    /// A node started
    fn started(&self, descriptor: &Descriptor, event: &StartEvent) -> Result<(), ListenerError>;

    /// A started node wrote output
    fn output(&self, descriptor: &Descriptor, event: &OutputEvent) -> Result<(), ListenerError>;

    /// A node completed
    fn completed(
        &self,
        descriptor: &Descriptor,
        result: &TestResult,
        event: &CompleteEvent,
    ) -> Result<(), ListenerError>;
}

/// Owned copy of one notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListenerEvent {
    Started {
        descriptor: Descriptor,
        #[serde(flatten)]
        event: StartEvent,
    },
    Output {
        descriptor: Descriptor,
        #[serde(flatten)]
        event: OutputEvent,
    },
    Completed {
        descriptor: Descriptor,
        result: TestResult,
        #[serde(flatten)]
        event: CompleteEvent,
    },
}

impl ListenerEvent {
    /// The node this notification is about
    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        match self {
            Self::Started { descriptor, .. }
            | Self::Output { descriptor, .. }
            | Self::Completed { descriptor, .. } => descriptor,
        }
    }

    /// Timestamp of the notification in epoch milliseconds
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        match self {
            Self::Started { event, .. } => event.timestamp_millis,
            Self::Output { event, .. } => event.timestamp_millis,
            Self::Completed { event, .. } => event.timestamp_millis,
        }
    }
}

/// Broadcasts every notification to several listeners
///
/// Listeners are called in the order they were added. The first error stops
/// the broadcast and is returned; later listeners do not see that
/// notification.
#[derive(Default, Clone)]
pub struct FanOutListener {
    listeners: Vec<Arc<dyn TestListener>>,
}

impl FanOutListener {
    /// Create a broadcaster with no listeners
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener to the end of the broadcast list
    #[must_use]
    pub fn with(mut self, listener: Arc<dyn TestListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Number of registered listeners
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for FanOutListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanOutListener")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TestListener for FanOutListener {
    fn started(&self, descriptor: &Descriptor, event: &StartEvent) -> Result<(), ListenerError> {
        self.listeners
            .iter()
            .try_for_each(|listener| listener.started(descriptor, event))
    }

    fn output(&self, descriptor: &Descriptor, event: &OutputEvent) -> Result<(), ListenerError> {
        self.listeners
            .iter()
            .try_for_each(|listener| listener.output(descriptor, event))
    }

    fn completed(
        &self,
        descriptor: &Descriptor,
        result: &TestResult,
        event: &CompleteEvent,
    ) -> Result<(), ListenerError> {
        self.listeners
            .iter()
            .try_for_each(|listener| listener.completed(descriptor, result, event))
    }
}
