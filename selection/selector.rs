/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Consumer-side helpers for graph selector UIs.
//!
//! The store never fetches anything; a selector widget combines the store's
//! contextual graphs with graphs from a remote [`GraphSource`] and renders
//! the merged list. [`GraphList`] implements the reload-token pattern: it
//! re-issues its fetch whenever the `reload_seq` it observes differs from
//! the one it last fetched under.

use log::warn;

use super::SelectionSnapshot;
use crate::graph::GraphSummary;

/// Sentinel option id for "no scope restriction".
pub const NO_SELECTION_ID: &str = "no-selection";

/// One row in a selector listbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOption {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
}

/// Build the display list: the "Everything" option, then contextual graphs,
/// then remotely fetched graphs. Deliberately de-duplication-free; a graph
/// that is both contributed and remotely listed appears twice.
pub fn selector_options(
    snapshot: &SelectionSnapshot,
    remote: &[GraphSummary],
) -> Vec<GraphOption> {
    let contextual = snapshot.contextual_graphs.as_deref().unwrap_or(&[]);
    let mut options = Vec::with_capacity(1 + contextual.len() + remote.len());
    options.push(GraphOption {
        id: NO_SELECTION_ID.to_string(),
        label: "Everything".to_string(),
        description: None,
    });
    for graph in contextual.iter().chain(remote) {
        options.push(GraphOption {
            id: graph.id.clone(),
            label: graph.name.clone(),
            description: graph.description.clone(),
        });
    }
    options
}

/// How the current selection should be captioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionLabel {
    Everything,
    Named(String),
    /// The selected id resolves to nothing in the merged list, e.g. a stale
    /// persisted selection. Tolerated, not an error.
    Unresolved(String),
}

pub fn selected_label(snapshot: &SelectionSnapshot, options: &[GraphOption]) -> SelectionLabel {
    let Some(selected) = &snapshot.selected_graph else {
        return SelectionLabel::Everything;
    };
    options
        .iter()
        .filter(|option| option.id != NO_SELECTION_ID)
        .find(|option| option.id == selected.id)
        .map_or_else(
            || SelectionLabel::Unresolved(selected.id.clone()),
            |option| SelectionLabel::Named(option.label.clone()),
        )
}

/// Remote graph source: given no owner or an owner id, yields zero or more
/// graph summaries. The transport behind it (GraphQL or otherwise) is an
/// external collaborator.
pub trait GraphSource {
    fn list_graphs(&self, owner: Option<&str>) -> Result<Vec<GraphSummary>, String>;
}

/// Cached remote graph list keyed by the last observed reload sequence.
///
/// A consumer calls [`GraphList::graphs`] with the store's current
/// `reload_seq` on every render/poll; the fetch re-runs only when the
/// token moved. Last write wins, no coalescing assumed. Fetch failures
/// keep the previous cache and wait for the next token.
pub struct GraphList<S: GraphSource> {
    source: S,
    owner: Option<String>,
    cached: Vec<GraphSummary>,
    seen_seq: Option<u64>,
}

impl<S: GraphSource> GraphList<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            owner: None,
            cached: Vec::new(),
            seen_seq: None,
        }
    }

    pub fn for_owner(source: S, owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
            ..Self::new(source)
        }
    }

    pub fn graphs(&mut self, reload_seq: u64) -> &[GraphSummary] {
        if self.seen_seq != Some(reload_seq) {
            match self.source.list_graphs(self.owner.as_deref()) {
                Ok(graphs) => self.cached = graphs,
                Err(e) => warn!("Failed to fetch remote graph list: {e}"),
            }
            self.seen_seq = Some(reload_seq);
        }
        &self.cached
    }
}
