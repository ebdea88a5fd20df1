/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Serializable types for selection persistence.

use serde::{Deserialize, Serialize};

use crate::graph::GraphRef;

/// Persisted form of the selected graph. `graph_id: None` is a deliberate
/// "no scope restriction" record, distinct from the key being absent only
/// in that it proves a user once made a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSelection {
    pub graph_id: Option<String>,
}

impl PersistedSelection {
    pub fn from_selection(selected: Option<&GraphRef>) -> Self {
        Self {
            graph_id: selected.map(|graph| graph.id.clone()),
        }
    }

    pub fn into_selection(self) -> Option<GraphRef> {
        self.graph_id.map(GraphRef::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_selected_graph() {
        let record = PersistedSelection::from_selection(Some(&GraphRef::new("g1")));
        let encoded = serde_json::to_string(&record).expect("record should encode");
        let decoded: PersistedSelection =
            serde_json::from_str(&encoded).expect("record should decode");
        assert_eq!(decoded.into_selection(), Some(GraphRef::new("g1")));
    }

    #[test]
    fn round_trips_no_selection() {
        let record = PersistedSelection::from_selection(None);
        let encoded = serde_json::to_string(&record).expect("record should encode");
        assert_eq!(encoded, r#"{"graph_id":null}"#);
        let decoded: PersistedSelection =
            serde_json::from_str(&encoded).expect("record should decode");
        assert_eq!(decoded.into_selection(), None);
    }
}
