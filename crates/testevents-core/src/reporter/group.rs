// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Reporter for a group of tests

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::lifecycle::{Lifecycle, Sealed};
use super::{EventReporter, ReporterState, TestEventReporter};
use crate::descriptor::Descriptor;
use crate::error::ReportError;
use crate::id::IdGenerator;
use crate::listener::TestListener;

/// Reports the lifecycle of a group and hands out reporters for its children
///
/// Children get a fresh id from the group's generator and the group's id as
/// their parent. The group does not keep them: each child reporter belongs to
/// whoever asked for it, and must be started, completed and closed by that
/// owner.
pub struct GroupTestEventReporter {
    lifecycle: Lifecycle,
    id_generator: Arc<dyn IdGenerator>,
}

impl GroupTestEventReporter {
    pub(crate) fn new(
        listener: Arc<dyn TestListener>,
        id_generator: Arc<dyn IdGenerator>,
        descriptor: Descriptor,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::new(listener, descriptor),
            id_generator,
        }
    }

    /// Create a reporter for a test inside this group
    ///
    /// The returned reporter is not started.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::ProtocolViolation` unless this group is started.
    pub fn report_test(
        &self,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<TestEventReporter, ReportError> {
        self.lifecycle.require("report a test in", ReporterState::Started)?;

        let descriptor = Descriptor::test(
            self.id_generator.generate_id(),
            Some(self.descriptor().id().clone()),
            name,
            display_name,
        );
        debug!(
            id = %descriptor.id(),
            parent = %self.descriptor().id(),
            name = descriptor.name(),
            "Created test reporter"
        );
        Ok(TestEventReporter::new(
            Arc::clone(self.lifecycle.listener()),
            descriptor,
        ))
    }

    /// Create a reporter for a group nested inside this group
    ///
    /// The returned reporter is not started.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::ProtocolViolation` unless this group is started.
    pub fn report_test_group(
        &self,
        name: impl Into<String>,
    ) -> Result<GroupTestEventReporter, ReportError> {
        self.lifecycle
            .require("report a group in", ReporterState::Started)?;

        let descriptor = Descriptor::group(
            self.id_generator.generate_id(),
            Some(self.descriptor().id().clone()),
            name,
        );
        debug!(
            id = %descriptor.id(),
            parent = %self.descriptor().id(),
            name = descriptor.name(),
            "Created group reporter"
        );
        Ok(GroupTestEventReporter::new(
            Arc::clone(self.lifecycle.listener()),
            Arc::clone(&self.id_generator),
            descriptor,
        ))
    }
}

impl Sealed for GroupTestEventReporter {
    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }
}

impl EventReporter for GroupTestEventReporter {}

impl fmt::Debug for GroupTestEventReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupTestEventReporter")
            .field("descriptor", self.descriptor())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
