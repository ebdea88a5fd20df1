/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Graph scope selection state for code-search clients.
//!
//! A *graph* is a named scope (a collection of repositories) that narrows
//! search and code navigation. This crate is the single source of truth for
//! the user's current graph scope:
//!
//! - [`SelectionStore`]: the durable selection, a monotonic reload sequence
//!   consumers watch to know when to re-fetch remote graph lists, and the
//!   contextual graph batches contributed by independent UI locations.
//! - [`SharedSelectionStore`]: a cloneable handle for use from many
//!   components, with RAII [`ContributionHandle`] disposal.
//! - [`persistence`]: the durable key-value layer the selection is written
//!   through to (redb on disk, or in-memory).
//! - [`selection::selector`]: consumer-side helpers that merge contributed
//!   and remotely fetched graphs into a display list.

pub mod graph;
pub mod persistence;
pub mod selection;

pub use graph::{GraphRef, GraphSummary};
pub use persistence::{DurableStore, MemoryStore, RedbStore, SelectionStoreError};
pub use selection::shared::{ContributionHandle, SharedSelectionStore};
pub use selection::{ContributionId, SelectionEvent, SelectionSnapshot, SelectionStore};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
