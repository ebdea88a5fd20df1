/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The graph selection store.
//!
//! Single source of truth for "what graph scope is the user operating in":
//! a durable selected graph, a monotonic reload sequence, and the contextual
//! graph batches contributed by independent UI locations. All mutations are
//! synchronous and run to completion; batches are applied and removed
//! whole, never element by element.

pub mod selector;
pub mod shared;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

use crate::graph::{GraphRef, GraphSummary};
use crate::persistence::{self, DurableStore, MemoryStore};

/// Token identifying one contributed batch. Disposal is keyed by this token,
/// not by element equality, so two contributions of equal graphs stay
/// independently removable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContributionId(u64);

/// Notification emitted to subscribers after a mutation has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    SelectionChanged { selected: Option<GraphRef> },
    ReloadRequested { seq: u64 },
    ContextualGraphsChanged,
}

/// Point-in-time read of the whole selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    /// `None` means no scope restriction (search everything).
    pub selected_graph: Option<GraphRef>,
    /// Reload token; consumers re-fetch remote graph lists when this moves.
    pub reload_seq: u64,
    /// Live contributed graphs in contribution order, or `None` if no batch
    /// is currently contributed. Never `Some` of an empty list.
    pub contextual_graphs: Option<Vec<GraphSummary>>,
}

struct ContributionBatch {
    id: ContributionId,
    graphs: Vec<GraphSummary>,
}

pub struct SelectionStore {
    storage: Box<dyn DurableStore>,
    selected: Option<GraphRef>,
    reload_seq: u64,
    contributions: Vec<ContributionBatch>,
    next_contribution_id: u64,
    subscribers: Vec<Sender<SelectionEvent>>,
}

impl SelectionStore {
    /// Create a store over the given durable storage, restoring the
    /// persisted selection. Storage failures fall back to no selection.
    pub fn new(storage: Box<dyn DurableStore>) -> Self {
        let selected = persistence::load_selection(storage.as_ref());
        Self {
            storage,
            selected,
            reload_seq: 0,
            contributions: Vec::new(),
            next_contribution_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Store with no durable backing, for tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn selected_graph(&self) -> Option<&GraphRef> {
        self.selected.as_ref()
    }

    pub fn reload_seq(&self) -> u64 {
        self.reload_seq
    }

    /// Live contributed graphs in contribution order. `None` while nothing
    /// is contributed, never `Some` of an empty list: empty batches hold a
    /// disposable slot but contribute nothing observable.
    pub fn contextual_graphs(&self) -> Option<Vec<GraphSummary>> {
        let graphs: Vec<GraphSummary> = self
            .contributions
            .iter()
            .flat_map(|batch| batch.graphs.iter().cloned())
            .collect();
        if graphs.is_empty() { None } else { Some(graphs) }
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selected_graph: self.selected.clone(),
            reload_seq: self.reload_seq,
            contextual_graphs: self.contextual_graphs(),
        }
    }

    /// Set (or clear) the selected graph. The id is not validated against
    /// existence; a selection resolving to nothing is the renderer's
    /// problem. Effective immediately, written through to storage.
    pub fn set_selected_graph(&mut self, selected: Option<GraphRef>) {
        debug!(
            "Graph selection set to {}",
            selected.as_ref().map_or("<none>", |graph| graph.id.as_str())
        );
        self.selected = selected;
        persistence::persist_selection(self.storage.as_mut(), self.selected.as_ref());
        self.emit(SelectionEvent::SelectionChanged {
            selected: self.selected.clone(),
        });
    }

    /// Signal that remote graph data should be re-fetched by whoever loads
    /// it. Pure signal: increments the sequence by exactly one per call,
    /// never coalesced, and performs no fetch itself.
    pub fn reload_graphs(&mut self) -> u64 {
        self.reload_seq += 1;
        let seq = self.reload_seq;
        self.emit(SelectionEvent::ReloadRequested { seq });
        seq
    }

    /// Contribute a batch of contextual graphs. The batch is appended
    /// whole; dispose it with [`SelectionStore::dispose_contribution`] (or
    /// let a [`shared::ContributionHandle`] do it). An empty batch is a
    /// degenerate no-op that still gets a valid id.
    pub fn contribute_contextual_graphs(
        &mut self,
        graphs: Vec<GraphSummary>,
    ) -> ContributionId {
        let id = ContributionId(self.next_contribution_id);
        self.next_contribution_id += 1;
        self.contributions.push(ContributionBatch { id, graphs });
        self.emit(SelectionEvent::ContextualGraphsChanged);
        id
    }

    /// Remove exactly the batch contributed under `id`, leaving every other
    /// batch untouched. Idempotent: disposing an already-removed (or never
    /// issued) id is a no-op and returns false.
    pub fn dispose_contribution(&mut self, id: ContributionId) -> bool {
        let Some(index) = self.contributions.iter().position(|batch| batch.id == id) else {
            return false;
        };
        self.contributions.remove(index);
        self.emit(SelectionEvent::ContextualGraphsChanged);
        true
    }

    /// Subscribe to mutation events. Events are emitted after the mutation
    /// has been applied; dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<SelectionEvent> {
        let (sender, receiver) = unbounded();
        self.subscribers.push(sender);
        receiver
    }

    fn emit(&mut self, event: SelectionEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}
