// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Node identifiers and the generators that hand them out

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a test or group node
///
/// Ids are only ever compared for equality; their textual form carries no
/// meaning beyond being unique within one reporting session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestId(String);

impl TestId {
    /// Create an id from its textual form
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().to_string())
    }

    /// Get the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TestId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TestId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Source of unique node ids
///
/// Implementations must never return the same id twice, including when called
/// concurrently from several group reporters.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh id
    fn generate_id(&self) -> TestId;
}

/// Generates ids from a monotonically increasing counter
///
/// An optional scope prefix keeps ids distinct when several sessions report to
/// the same listener, e.g. `worker-2.17`.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    scope: Option<String>,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator whose first id is `1`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator whose ids are prefixed with `scope`
    #[must_use]
    pub fn scoped(scope: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            next: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> TestId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        match &self.scope {
            Some(scope) => TestId::from(format!("{scope}.{n}")),
            None => TestId::from(n.to_string()),
        }
    }
}

/// Generates random v4 UUID ids
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self) -> TestId {
        TestId::from(Uuid::new_v4().to_string())
    }
}
