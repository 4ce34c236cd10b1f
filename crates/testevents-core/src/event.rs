// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Payloads carried by listener notifications

use serde::{Deserialize, Serialize};

use crate::id::TestId;
use crate::result::ResultType;

/// Stream a chunk of captured output was written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Standard output
    StdOut,
    /// Standard error
    StdErr,
}

/// A node started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartEvent {
    /// Start time in epoch milliseconds
    pub timestamp_millis: i64,
    /// Id of the enclosing group, `None` for a root
    pub parent_id: Option<TestId>,
}

/// A node wrote output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEvent {
    /// Time the output was captured, in epoch milliseconds
    pub timestamp_millis: i64,
    pub destination: Destination,
    /// The captured text, unmodified
    pub message: String,
}

/// A node completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteEvent {
    /// End time in epoch milliseconds
    pub timestamp_millis: i64,
    pub result_type: ResultType,
}
