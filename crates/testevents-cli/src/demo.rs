// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Simulated test run that exercises every part of the reporting protocol
//!
//! The run covers output on both streams, every completion kind, a failing
//! suite with a suite-level message, and three levels of nested groups.

use std::sync::Arc;

use chrono::Utc;
use testevents_core::prelude::*;
use tracing::{debug, info};

use crate::config::Config;

/// Name of the suite added when failures are demonstrated
pub const FAILING_SUITE: &str = "FailingSuite";

/// Report a simulated test run to `listener`
///
/// Returns `true` if the run reported failures.
///
/// # Errors
///
/// Returns the first error raised by the listener.
pub fn run(config: &Config, listener: Arc<dyn TestListener>) -> Result<bool, ReportError> {
    let factory = TestEventReporterFactory::with_listener(listener);
    let mut root = factory.create_test_event_reporter(config.root_name());
    root.started(Utc::now())?;
    let mut has_failures = false;

    if config.fail {
        report_failing_suite(&root)?;
        has_failures = true;
    }

    for suite_name in config.suite_names() {
        report_suite(&root, &suite_name, config.tests_per_suite())?;
    }

    report_nesting(&root)?;

    if has_failures {
        root.failed(Utc::now())?;
    } else {
        root.succeeded(Utc::now())?;
    }
    root.close()?;

    info!(failures = has_failures, "Simulated run complete");
    Ok(has_failures)
}

fn report_failing_suite(root: &GroupTestEventReporter) -> Result<(), ReportError> {
    let mut suite = root.report_test_group(FAILING_SUITE)?;
    suite.started(Utc::now())?;

    let mut test = suite.report_test("failingTest", "failingTest()")?;
    test.started(Utc::now())?;
    test.failed_with_message(Utc::now(), "This is a test failure")?;
    test.close()?;

    suite.failed_with_message(
        Utc::now(),
        "This is additional message for the suite failure",
    )?;
    suite.close()
}

/// Even-numbered tests pass, odd-numbered tests are skipped
fn report_suite(
    root: &GroupTestEventReporter,
    name: &str,
    test_count: usize,
) -> Result<(), ReportError> {
    debug!(suite = name, test_count, "Reporting suite");
    let mut suite = root.report_test_group(name)?;
    suite.started(Utc::now())?;

    for i in 0..test_count {
        let mut test = suite.report_test(format!("test{i}"), format!("test({i})"))?;
        test.started(Utc::now())?;
        test.output(
            Utc::now(),
            Destination::StdOut,
            "This is some standard output",
        )?;
        test.output(
            Utc::now(),
            Destination::StdErr,
            "This is some standard error",
        )?;
        if i % 2 == 0 {
            test.succeeded(Utc::now())?;
        } else {
            test.skipped(Utc::now())?;
        }
        test.close()?;
    }

    suite.succeeded(Utc::now())?;
    suite.close()
}

fn report_nesting(root: &GroupTestEventReporter) -> Result<(), ReportError> {
    let mut outer = root.report_test_group("OuterNestingSuite")?;
    outer.started(Utc::now())?;
    let mut deeper = outer.report_test_group("DeeperNestingSuite")?;
    deeper.started(Utc::now())?;
    let mut inner = deeper.report_test_group("InnerNestingSuite")?;
    inner.started(Utc::now())?;

    let mut test = inner.report_test("nestedTest", "nestedTest()")?;
    test.started(Utc::now())?;
    test.succeeded(Utc::now())?;
    test.close()?;

    inner.succeeded(Utc::now())?;
    inner.close()?;
    deeper.succeeded(Utc::now())?;
    deeper.close()?;
    outer.succeeded(Utc::now())?;
    outer.close()
}
