// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Console rendering of test events
//!
//! Each node is indented by its depth in the tree. Depth is resolved from the
//! parent id carried by the start event, so the listener never needs access to
//! the reporters themselves.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use testevents_core::{
    CompleteEvent, Descriptor, Destination, ListenerError, OutputEvent, ResultType, StartEvent,
    TestId, TestListener, TestResult,
};

struct ConsoleState<W> {
    writer: W,
    depths: HashMap<TestId, usize>,
}

impl<W: Write> ConsoleState<W> {
    fn depth_of(&self, descriptor: &Descriptor) -> usize {
        self.depths.get(descriptor.id()).copied().unwrap_or(0)
    }
}

/// Writes an indented tree of test events
pub struct ConsoleListener<W> {
    state: Mutex<ConsoleState<W>>,
}

impl<W: Write> ConsoleListener<W> {
    /// Create a listener writing to `writer`
    pub fn new(writer: W) -> Self {
        Self {
            state: Mutex::new(ConsoleState {
                writer,
                depths: HashMap::new(),
            }),
        }
    }

    /// Consume the listener and return its writer
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

impl<W: Write + Send> TestListener for ConsoleListener<W> {
    fn started(&self, descriptor: &Descriptor, event: &StartEvent) -> Result<(), ListenerError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let depth = event
            .parent_id
            .as_ref()
            .and_then(|parent| state.depths.get(parent))
            .map_or(0, |d| d + 1);
        state.depths.insert(descriptor.id().clone(), depth);

        if descriptor.is_composite() {
            writeln!(state.writer, "{}{}", indent(depth), descriptor.display_name())?;
        }
        Ok(())
    }

    fn output(&self, descriptor: &Descriptor, event: &OutputEvent) -> Result<(), ListenerError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let depth = state.depth_of(descriptor);
        let stream = match event.destination {
            Destination::StdOut => "out",
            Destination::StdErr => "err",
        };
        // An empty chunk still gets one line
        let lines = event.message.lines().chain(event.message.is_empty().then_some(""));
        for line in lines {
            writeln!(
                state.writer,
                "{}  [{}] {}: {}",
                indent(depth),
                stream,
                descriptor.display_name(),
                line
            )?;
        }
        Ok(())
    }

    fn completed(
        &self,
        descriptor: &Descriptor,
        result: &TestResult,
        event: &CompleteEvent,
    ) -> Result<(), ListenerError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let depth = state.depth_of(descriptor);
        if !descriptor.is_composite() {
            // Tests have no children that need their depth
            state.depths.remove(descriptor.id());
        }
        let status = match event.result_type {
            ResultType::Success => "PASSED",
            ResultType::Skipped => "SKIPPED",
            ResultType::Failure => "FAILED",
        };
        let pad = indent(depth);

        if descriptor.is_composite() {
            writeln!(state.writer, "{pad}{} {status}", descriptor.display_name())?;
        } else {
            writeln!(
                state.writer,
                "{pad}{} {status} ({} ms)",
                descriptor.display_name(),
                result.duration_millis()
            )?;
        }
        for failure in &result.failures {
            writeln!(state.writer, "{pad}    {}", failure.message)?;
        }
        state.writer.flush()?;
        Ok(())
    }
}
