// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! testevents-core: hierarchical test event reporting
//!
//! A test engine describes its run as a tree of groups and tests. Each node is
//! driven through a reporter handle that emits `started`, `output` and
//! `completed` notifications to a [`TestListener`]; listeners render, store or
//! aggregate them. Data only flows outward, from reporters to the listener.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::Utc;
//! use testevents_core::prelude::*;
//!
//! let listener = Arc::new(RecordingListener::new());
//! let factory = TestEventReporterFactory::with_listener(listener.clone());
//!
//! let mut root = factory.create_test_event_reporter("Suite");
//! root.started(Utc::now())?;
//!
//! let mut test = root.report_test("t1", "t1()")?;
//! test.started(Utc::now())?;
//! test.output(Utc::now(), Destination::StdOut, "hello")?;
//! test.succeeded(Utc::now())?;
//! test.close()?;
//!
//! root.succeeded(Utc::now())?;
//! root.close()?;
//!
//! assert_eq!(listener.summary().passed, 1);
//! # Ok::<(), ReportError>(())
//! ```

pub mod descriptor;
pub mod error;
pub mod event;
pub mod factory;
pub mod id;
pub mod listener;
pub mod reporter;
pub mod result;

pub use descriptor::{Descriptor, DescriptorKind};
pub use error::{ListenerError, ReportError};
pub use event::{CompleteEvent, Destination, OutputEvent, StartEvent};
pub use factory::TestEventReporterFactory;
pub use id::{IdGenerator, SequentialIdGenerator, TestId, UuidIdGenerator};
pub use listener::{
    FanOutListener, ListenerEvent, LoggingListener, RecordingListener, RunSummary, TestListener,
};
pub use reporter::{EventReporter, GroupTestEventReporter, ReporterState, TestEventReporter};
pub use result::{Outcome, ResultType, TestFailure, TestResult};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::event::Destination;
    pub use crate::factory::TestEventReporterFactory;
    pub use crate::listener::{RecordingListener, TestListener};
    pub use crate::reporter::{EventReporter, GroupTestEventReporter, TestEventReporter};
    pub use crate::result::{Outcome, ResultType};
}
