// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Line-delimited JSON rendering of test events

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use testevents_core::{
    CompleteEvent, Descriptor, ListenerError, ListenerEvent, OutputEvent, StartEvent,
    TestListener, TestResult,
};

/// Writes each notification as one JSON object per line
pub struct JsonLinesListener<W> {
    writer: Mutex<W>,
}

impl<W: Write> JsonLinesListener<W> {
    /// Create a listener writing to `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the listener and return its writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: &ListenerEvent) -> Result<(), ListenerError> {
        let line = serde_json::to_string(event)?;
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> TestListener for JsonLinesListener<W> {
    fn started(&self, descriptor: &Descriptor, event: &StartEvent) -> Result<(), ListenerError> {
        self.emit(&ListenerEvent::Started {
            descriptor: descriptor.clone(),
            event: event.clone(),
        })
    }

    fn output(&self, descriptor: &Descriptor, event: &OutputEvent) -> Result<(), ListenerError> {
        self.emit(&ListenerEvent::Output {
            descriptor: descriptor.clone(),
            event: event.clone(),
        })
    }

    fn completed(
        &self,
        descriptor: &Descriptor,
        result: &TestResult,
        event: &CompleteEvent,
    ) -> Result<(), ListenerError> {
        self.emit(&ListenerEvent::Completed {
            descriptor: descriptor.clone(),
            result: result.clone(),
            event: *event,
        })
    }
}
