/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Shared handle over the selection store.
//!
//! Any number of independent components hold clones of
//! [`SharedSelectionStore`] and mutate without coordinating with each
//! other. The whole store sits behind one coarse mutex: it is small, read
//! often, written rarely. Contribution here returns a
//! [`ContributionHandle`] that disposes on drop, so every teardown path
//! releases its batch.

use std::sync::{Arc, Weak};

use crossbeam_channel::Receiver;
use parking_lot::Mutex;

use super::{ContributionId, SelectionEvent, SelectionSnapshot, SelectionStore};
use crate::graph::{GraphRef, GraphSummary};

#[derive(Clone)]
pub struct SharedSelectionStore {
    inner: Arc<Mutex<SelectionStore>>,
}

impl SharedSelectionStore {
    pub fn new(store: SelectionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(SelectionStore::in_memory())
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        self.inner.lock().snapshot()
    }

    pub fn selected_graph(&self) -> Option<GraphRef> {
        self.inner.lock().selected_graph().cloned()
    }

    pub fn set_selected_graph(&self, selected: Option<GraphRef>) {
        self.inner.lock().set_selected_graph(selected);
    }

    pub fn reload_seq(&self) -> u64 {
        self.inner.lock().reload_seq()
    }

    pub fn reload_graphs(&self) -> u64 {
        self.inner.lock().reload_graphs()
    }

    pub fn contextual_graphs(&self) -> Option<Vec<GraphSummary>> {
        self.inner.lock().contextual_graphs()
    }

    /// Contribute a batch and receive the handle that removes it again.
    /// Hold the handle for as long as the contribution should be visible.
    pub fn contribute_contextual_graphs(
        &self,
        graphs: Vec<GraphSummary>,
    ) -> ContributionHandle {
        let id = self.inner.lock().contribute_contextual_graphs(graphs);
        ContributionHandle {
            store: Arc::downgrade(&self.inner),
            id,
            disposed: false,
        }
    }

    pub fn subscribe(&self) -> Receiver<SelectionEvent> {
        self.inner.lock().subscribe()
    }
}

/// Owns one contributed batch. Disposal removes exactly that batch and is
/// idempotent; dropping the handle disposes if it has not happened yet.
/// A handle that outlives its store disposes into nothing.
pub struct ContributionHandle {
    store: Weak<Mutex<SelectionStore>>,
    id: ContributionId,
    disposed: bool,
}

impl ContributionHandle {
    pub fn id(&self) -> ContributionId {
        self.id
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(store) = self.store.upgrade() {
            store.lock().dispose_contribution(self.id);
        }
    }
}

impl Drop for ContributionHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}
