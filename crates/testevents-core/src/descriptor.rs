// Copyright (c) 2026 - present testevents contributors
// SPDX-License-Identifier: MIT

//! Identity records for test and group nodes

use serde::{Deserialize, Serialize};

use crate::id::TestId;

/// Whether a node is a single test or a group of nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorKind {
    /// A single test
    Test,
    /// A container of tests and nested groups
    Group,
}

/// Immutable identity of one node in the reporting tree
///
/// The parent is held by id only. A descriptor never points at its parent's
/// reporter, so parents and children can be owned independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    id: TestId,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<TestId>,
    name: String,
    display_name: String,
    kind: DescriptorKind,
}

impl Descriptor {
    /// Describe a single test
    #[must_use]
    pub fn test(
        id: TestId,
        parent_id: Option<TestId>,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            parent_id,
            name: name.into(),
            display_name: display_name.into(),
            kind: DescriptorKind::Test,
        }
    }

    /// Describe a group; its display name is its name
    #[must_use]
    pub fn group(id: TestId, parent_id: Option<TestId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            parent_id,
            display_name: name.clone(),
            name,
            kind: DescriptorKind::Group,
        }
    }

    /// Unique id of the node
    #[must_use]
    pub fn id(&self) -> &TestId {
        &self.id
    }

    /// Id of the enclosing group, `None` for a root
    #[must_use]
    pub fn parent_id(&self) -> Option<&TestId> {
        self.parent_id.as_ref()
    }

    /// Short stable name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable label
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether this node is a test or a group
    #[must_use]
    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    /// Check if this node can contain other nodes
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.kind == DescriptorKind::Group
    }

    /// Check if this node has no parent
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
