// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! CLI tests for testevents-demo
//!
//! These tests verify flag parsing and run the demo scenario through the
//! console and JSON listeners.

use std::sync::Arc;

use clap::Parser;
use similar_asserts::assert_eq;
use testevents_cli::{Config, ConsoleListener, JsonLinesListener, OutputFormat, demo};
use testevents_core::{ListenerEvent, ResultType};
use tracing::Level;

// ============================================================================
// Flag parsing
// ============================================================================

#[test]
fn test_no_flags_uses_defaults() {
    let config = Config::try_parse_from(["testevents-demo"]).expect("parse should succeed");
    assert!(!config.fail);
    assert_eq!(config.root_name(), "test");
    assert_eq!(config.format, OutputFormat::Console);
    assert_eq!(config.suite_names().len(), 3);
    assert_eq!(config.log_level(), Level::INFO);
}

#[test]
fn test_fail_flag() {
    let config =
        Config::try_parse_from(["testevents-demo", "--fail"]).expect("parse should succeed");
    assert!(config.fail);
}

#[test]
fn test_suites_are_comma_separated() {
    let config = Config::try_parse_from(["testevents-demo", "--suites", "Alpha,Beta"])
        .expect("parse should succeed");
    assert_eq!(config.suite_names(), vec!["Alpha", "Beta"]);
}

#[test]
fn test_format_json() {
    let config = Config::try_parse_from(["testevents-demo", "--format", "json"])
        .expect("parse should succeed");
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_unknown_format_rejected() {
    let result = Config::try_parse_from(["testevents-demo", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn test_tests_per_suite_short_flag() {
    let config =
        Config::try_parse_from(["testevents-demo", "-n", "5"]).expect("parse should succeed");
    assert_eq!(config.tests_per_suite(), 5);
}

#[test]
fn test_zero_tests_per_suite_fails_validation() {
    let config =
        Config::try_parse_from(["testevents-demo", "-n", "0"]).expect("parse should succeed");
    assert!(config.validate().is_err());
}

#[test]
fn test_verbose_and_quiet_levels() {
    let verbose = Config::try_parse_from(["testevents-demo", "-v"]).expect("parse");
    assert_eq!(verbose.log_level(), Level::DEBUG);
    let quiet = Config::try_parse_from(["testevents-demo", "-q"]).expect("parse");
    assert_eq!(quiet.log_level(), Level::WARN);
}

// ============================================================================
// Demo runs
// ============================================================================

#[test]
fn test_console_output_for_single_suite() {
    let config = Config::try_parse_from(["testevents-demo", "--suites", "Solo", "-n", "2"])
        .expect("parse");
    let listener = Arc::new(ConsoleListener::new(Vec::new()));

    let failed = demo::run(&config, listener.clone()).expect("run");
    assert!(!failed);

    let listener = Arc::try_unwrap(listener).ok().expect("sole owner");
    let rendered = String::from_utf8(listener.into_inner()).expect("utf8");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "test");
    assert_eq!(lines[1], "  Solo");
    assert!(lines[2].starts_with("      [out] test(0): This is some standard output"));
    assert!(lines[3].starts_with("      [err] test(0): This is some standard error"));
    assert!(lines[4].starts_with("    test(0) PASSED"));
    assert!(rendered.contains("    test(1) SKIPPED"));
    assert!(rendered.contains("  Solo PASSED"));
    assert!(rendered.contains("      InnerNestingSuite\n"));
    assert!(rendered.contains("        nestedTest() PASSED"));
    assert_eq!(*lines.last().expect("lines"), "test PASSED");
}

#[test]
fn test_json_output_with_failures() {
    let config = Config::try_parse_from([
        "testevents-demo",
        "--fail",
        "--suites",
        "Solo",
        "-n",
        "1",
        "--format",
        "json",
    ])
    .expect("parse");
    let listener = Arc::new(JsonLinesListener::new(Vec::new()));

    let failed = demo::run(&config, listener.clone()).expect("run");
    assert!(failed);

    let listener = Arc::try_unwrap(listener).ok().expect("sole owner");
    let written = String::from_utf8(listener.into_inner()).expect("utf8");
    let events: Vec<ListenerEvent> = written
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid json line"))
        .collect();

    // root, FailingSuite + failingTest, Solo + test0 (+2 outputs),
    // three nested groups + nestedTest
    let starts = events
        .iter()
        .filter(|e| matches!(e, ListenerEvent::Started { .. }))
        .count();
    assert_eq!(starts, 9);

    let failing = events
        .iter()
        .find_map(|e| match e {
            ListenerEvent::Completed {
                descriptor, result, ..
            } if descriptor.name() == "failingTest" => Some(result.clone()),
            _ => None,
        })
        .expect("failing test completed");
    assert_eq!(failing.result_type, ResultType::Failure);
    assert_eq!(failing.failures[0].message, "This is a test failure");

    match events.last() {
        Some(ListenerEvent::Completed { descriptor, result, .. }) => {
            assert_eq!(descriptor.name(), "test");
            assert_eq!(result.result_type, ResultType::Failure);
        }
        other => panic!("unexpected last event: {other:?}"),
    }
}
