// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! testevents-demo: report a simulated test run
//!
//! Drives the reporting protocol end to end and renders the notifications on
//! stdout, either as an indented tree or as JSON lines.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use testevents_cli::{Config, ConsoleListener, JsonLinesListener, OutputFormat, demo};
use testevents_core::{FanOutListener, LoggingListener, RecordingListener, TestListener};
use tracing::{error, info};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries listener output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match run(&config) {
        Ok(true) => ExitCode::FAILURE,
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(config: &Config) -> anyhow::Result<bool> {
    config.validate()?;

    let output: Arc<dyn TestListener> = match config.format {
        OutputFormat::Console => Arc::new(ConsoleListener::new(std::io::stdout())),
        OutputFormat::Json => Arc::new(JsonLinesListener::new(std::io::stdout())),
    };
    let recorder = Arc::new(RecordingListener::new());
    let mut listener = FanOutListener::new().with(output).with(recorder.clone());
    if config.verbose {
        listener = listener.with(Arc::new(LoggingListener));
    }

    info!(root = config.root_name(), "Starting simulated test run");
    let failed = demo::run(config, Arc::new(listener)).context("Reporting failed")?;

    let summary = recorder.summary();
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        "Run summary"
    );
    Ok(failed || !summary.all_passed())
}
