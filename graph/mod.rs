/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Core graph model records.
//!
//! - `GraphRef`: graph identity, the only thing the selection itself needs
//! - `GraphSummary`: identity plus display fields for selector UIs

use serde::{Deserialize, Serialize};

/// Identity of a graph. The id is an opaque, globally unique string issued
/// by the graph backend; this crate never validates it against existence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphRef {
    pub id: String,
}

impl GraphRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A graph as shown in selection UI: identity plus name and an optional
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl GraphSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn to_ref(&self) -> GraphRef {
        GraphRef {
            id: self.id.clone(),
        }
    }
}

impl From<&GraphSummary> for GraphRef {
    fn from(summary: &GraphSummary) -> Self {
        summary.to_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_to_ref_keeps_id() {
        let summary = GraphSummary::new("g1", "Graph One").with_description("first");
        assert_eq!(summary.to_ref(), GraphRef::new("g1"));
        assert_eq!(GraphRef::from(&summary), GraphRef::new("g1"));
    }

    #[test]
    fn graph_ref_serde_round_trip() {
        let graph = GraphRef::new("graph-xyz");
        let encoded = serde_json::to_string(&graph).expect("ref should encode");
        let decoded: GraphRef = serde_json::from_str(&encoded).expect("ref should decode");
        assert_eq!(decoded, graph);
    }
}
