// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Reporter for a single test

use std::fmt;
use std::sync::Arc;

use super::EventReporter;
use super::lifecycle::{Lifecycle, Sealed};
use crate::descriptor::Descriptor;
use crate::listener::TestListener;

/// Reports the lifecycle of one test
pub struct TestEventReporter {
    lifecycle: Lifecycle,
}

impl TestEventReporter {
    pub(crate) fn new(listener: Arc<dyn TestListener>, descriptor: Descriptor) -> Self {
        Self {
            lifecycle: Lifecycle::new(listener, descriptor),
        }
    }
}

impl Sealed for TestEventReporter {
    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }
}

impl EventReporter for TestEventReporter {}

impl fmt::Debug for TestEventReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestEventReporter")
            .field("descriptor", self.descriptor())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::event::Destination;
    use crate::id::TestId;
    use crate::listener::{ListenerEvent, RecordingListener};
    use crate::reporter::ReporterState;
    use crate::result::ResultType;
    use chrono::{TimeZone, Utc};
    use similar_asserts::assert_eq;
    use std::io::Write;
    use std::sync::Mutex;

    fn reporter() -> (Arc<RecordingListener>, TestEventReporter) {
        let listener = Arc::new(RecordingListener::new());
        let descriptor = Descriptor::test(TestId::new("1"), None, "t1", "t1()");
        let reporter = TestEventReporter::new(listener.clone(), descriptor);
        (listener, reporter)
    }

    fn at(millis: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_lifecycle_transitions() {
        let (listener, mut reporter) = reporter();
        assert_eq!(reporter.state(), ReporterState::NotStarted);

        reporter.started(at(1_000)).expect("start");
        assert_eq!(reporter.state(), ReporterState::Started);

        reporter
            .output(at(1_001), Destination::StdOut, "hello")
            .expect("output");
        reporter.succeeded(at(1_250)).expect("succeed");
        assert_eq!(reporter.state(), ReporterState::Completed);
        reporter.close().expect("close");

        let result = listener.result_for(&TestId::new("1")).expect("completed");
        assert_eq!(result.result_type, ResultType::Success);
        assert_eq!(result.start_time, 1_000);
        assert_eq!(result.end_time, 1_250);
    }

    #[test]
    fn test_start_event_carries_timestamp() {
        let (listener, mut reporter) = reporter();
        reporter.started(at(42)).expect("start");

        match &listener.events()[0] {
            ListenerEvent::Started { event, .. } => {
                assert_eq!(event.timestamp_millis, 42);
                assert_eq!(event.parent_id, None);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_output_before_start_is_rejected() {
        let (listener, reporter) = reporter();
        let err = reporter
            .output(at(1), Destination::StdErr, "too early")
            .expect_err("should fail");
        assert!(err.is_protocol_error());
        assert!(listener.is_empty());
    }

    #[test]
    fn test_double_start_is_rejected() {
        let (listener, mut reporter) = reporter();
        reporter.started(at(1)).expect("start");
        let err = reporter.started(at(2)).expect_err("should fail");
        assert!(matches!(
            err,
            ReportError::ProtocolViolation {
                operation: "start",
                state: ReporterState::Started,
                ..
            }
        ));
        assert_eq!(listener.started_count(), 1);
    }

    #[test]
    fn test_operations_after_completion_are_rejected() {
        let (listener, mut reporter) = reporter();
        reporter.started(at(1)).expect("start");
        reporter.skipped(at(2)).expect("skip");

        assert!(reporter.started(at(3)).is_err());
        assert!(reporter.output(at(3), Destination::StdOut, "late").is_err());
        assert!(reporter.succeeded(at(3)).is_err());
        assert!(reporter.failed_with_message(at(3), "late").is_err());
        assert_eq!(listener.len(), 2);
    }

    #[test]
    fn test_completion_before_start_is_rejected() {
        let (listener, mut reporter) = reporter();
        let err = reporter.failed(at(1)).expect_err("should fail");
        assert!(matches!(
            err,
            ReportError::ProtocolViolation {
                state: ReporterState::NotStarted,
                ..
            }
        ));
        assert!(listener.is_empty());
    }

    #[test]
    fn test_close_without_completion_reports_error() {
        let (listener, mut reporter) = reporter();
        reporter.started(at(1)).expect("start");

        let err = reporter.close().expect_err("should fail");
        assert!(matches!(
            err,
            ReportError::NotCompleted {
                state: ReporterState::Started,
                ..
            }
        ));
        // Closing never completes the node.
        assert_eq!(listener.completed_count(), 0);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    #[test]
    fn test_drop_without_completion_warns() {
        let logs = with_captured_logs(|| {
            let (_listener, mut reporter) = reporter();
            reporter.started(at(1)).expect("start");
            drop(reporter);
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Reporter dropped without a completion event"));
    }

    #[test]
    fn test_drop_after_completion_or_close_is_silent() {
        let logs = with_captured_logs(|| {
            let (_listener, mut completed) = reporter();
            completed.started(at(1)).expect("start");
            completed.succeeded(at(2)).expect("succeed");
            drop(completed);

            let (_listener, mut released) = reporter();
            released.started(at(1)).expect("start");
            assert!(released.close().is_err());
        });
        assert_eq!(logs, "");
    }
}
