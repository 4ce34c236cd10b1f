// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! In-memory listener that keeps every notification

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::{ListenerEvent, TestListener};
use crate::descriptor::{Descriptor, DescriptorKind};
use crate::error::ListenerError;
use crate::event::{CompleteEvent, OutputEvent, StartEvent};
use crate::id::TestId;
use crate::result::{ResultType, TestResult};

/// Records notifications in the order they were received
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Mutex<Vec<ListenerEvent>>,
}

impl RecordingListener {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ListenerEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every notification received so far
    #[must_use]
    pub fn events(&self) -> Vec<ListenerEvent> {
        self.lock().clone()
    }

    /// Total number of notifications received
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn started_count(&self) -> usize {
        self.count(|e| matches!(e, ListenerEvent::Started { .. }))
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.count(|e| matches!(e, ListenerEvent::Output { .. }))
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.count(|e| matches!(e, ListenerEvent::Completed { .. }))
    }

    fn count(&self, predicate: impl Fn(&ListenerEvent) -> bool) -> usize {
        self.lock().iter().filter(|e| predicate(*e)).count()
    }

    /// Result reported for the node with the given id, if it completed
    #[must_use]
    pub fn result_for(&self, id: &TestId) -> Option<TestResult> {
        self.lock().iter().find_map(|event| match event {
            ListenerEvent::Completed {
                descriptor, result, ..
            } if descriptor.id() == id => Some(result.clone()),
            _ => None,
        })
    }

    /// Aggregate the results of every completed test
    ///
    /// Groups are not counted; their results describe the group itself, not
    /// the tests inside it.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for event in self.lock().iter() {
            let ListenerEvent::Completed {
                descriptor, result, ..
            } = event
            else {
                continue;
            };
            if descriptor.kind() != DescriptorKind::Test {
                continue;
            }

            summary.total += 1;
            match result.result_type {
                ResultType::Success => summary.passed += 1,
                ResultType::Failure => {
                    summary.failed += 1;
                    summary.failing.push(descriptor.clone());
                }
                ResultType::Skipped => summary.skipped += 1,
            }
        }
        summary
    }

    fn record(&self, event: ListenerEvent) {
        self.lock().push(event);
    }
}

impl TestListener for RecordingListener {
    fn started(&self, descriptor: &Descriptor, event: &StartEvent) -> Result<(), ListenerError> {
        self.record(ListenerEvent::Started {
            descriptor: descriptor.clone(),
            event: event.clone(),
        });
        Ok(())
    }

    fn output(&self, descriptor: &Descriptor, event: &OutputEvent) -> Result<(), ListenerError> {
        self.record(ListenerEvent::Output {
            descriptor: descriptor.clone(),
            event: event.clone(),
        });
        Ok(())
    }

    fn completed(
        &self,
        descriptor: &Descriptor,
        result: &TestResult,
        event: &CompleteEvent,
    ) -> Result<(), ListenerError> {
        self.record(ListenerEvent::Completed {
            descriptor: descriptor.clone(),
            result: result.clone(),
            event: *event,
        });
        Ok(())
    }
}

/// Totals over the tests of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tests completed
    pub total: usize,
    /// Tests passed
    pub passed: usize,
    /// Tests failed
    pub failed: usize,
    /// Tests skipped
    pub skipped: usize,
    /// Descriptors of the failed tests, in completion order
    pub failing: Vec<Descriptor>,
}

impl RunSummary {
    /// Check if no test failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Get failing tests
    #[must_use]
    pub fn failing_tests(&self) -> &[Descriptor] {
        &self.failing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Outcome;
    use similar_asserts::assert_eq;

    fn complete(listener: &RecordingListener, descriptor: &Descriptor, outcome: Outcome) {
        let result_type = outcome.result_type();
        listener
            .completed(
                descriptor,
                &TestResult::from_outcome(outcome, 0, 1),
                &CompleteEvent {
                    timestamp_millis: 1,
                    result_type,
                },
            )
            .expect("record");
    }

    #[test]
    fn test_summary_counts_tests_only() {
        let listener = RecordingListener::new();
        let suite = Descriptor::group(TestId::new("1"), None, "Suite");
        let parent = Some(suite.id().clone());
        let ok = Descriptor::test(TestId::new("2"), parent.clone(), "ok", "ok()");
        let bad = Descriptor::test(TestId::new("3"), parent.clone(), "bad", "bad()");
        let skip = Descriptor::test(TestId::new("4"), parent, "skip", "skip()");

        complete(&listener, &ok, Outcome::Success);
        complete(&listener, &bad, Outcome::failure("nope"));
        complete(&listener, &skip, Outcome::Skipped);
        complete(&listener, &suite, Outcome::Failure { message: None });

        let summary = listener.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.all_passed());
        assert_eq!(summary.failing_tests(), &[bad][..]);
    }

    #[test]
    fn test_result_lookup_by_id() {
        let listener = RecordingListener::new();
        let test = Descriptor::test(TestId::new("7"), None, "t", "t");
        complete(&listener, &test, Outcome::Skipped);

        let result = listener.result_for(&TestId::new("7")).expect("recorded");
        assert_eq!(result.result_type, ResultType::Skipped);
        assert!(listener.result_for(&TestId::new("8")).is_none());
    }

    #[test]
    fn test_empty_summary_passes() {
        let listener = RecordingListener::new();
        assert!(listener.is_empty());
        assert!(listener.summary().all_passed());
        assert_eq!(listener.summary(), RunSummary::default());
    }
}
