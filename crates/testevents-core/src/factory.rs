// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Entry point for a reporting session

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::descriptor::Descriptor;
use crate::id::{IdGenerator, SequentialIdGenerator};
use crate::listener::TestListener;
use crate::reporter::GroupTestEventReporter;

/// Creates root group reporters bound to one listener and one id generator
///
/// Every reporter created from the same factory, at any depth, draws its id
/// from the same generator, so ids are unique across the whole session.
#[derive(Clone)]
pub struct TestEventReporterFactory {
    listener: Arc<dyn TestListener>,
    id_generator: Arc<dyn IdGenerator>,
}

impl TestEventReporterFactory {
    /// Create a factory from a listener and an id generator
    #[must_use]
    pub fn new(listener: Arc<dyn TestListener>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            listener,
            id_generator,
        }
    }

    /// Create a factory that numbers nodes sequentially from `1`
    #[must_use]
    pub fn with_listener(listener: Arc<dyn TestListener>) -> Self {
        Self::new(listener, Arc::new(SequentialIdGenerator::new()))
    }

    /// Create a root group reporter
    ///
    /// The returned reporter has no parent and is not started.
    #[must_use]
    pub fn create_test_event_reporter(&self, name: impl Into<String>) -> GroupTestEventReporter {
        let descriptor = Descriptor::group(self.id_generator.generate_id(), None, name);
        debug!(
            id = %descriptor.id(),
            name = descriptor.name(),
            "Created root group reporter"
        );
        GroupTestEventReporter::new(
            Arc::clone(&self.listener),
            Arc::clone(&self.id_generator),
            descriptor,
        )
    }
}

impl fmt::Debug for TestEventReporterFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestEventReporterFactory").finish_non_exhaustive()
    }
}
