/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Durable storage for the selected graph.
//!
//! The selection store writes through a [`DurableStore`]: a synchronous,
//! string-keyed, string-valued persistence contract. The shipped backends
//! are [`RedbStore`] (one redb table on disk) and [`MemoryStore`] (tests
//! and ephemeral sessions).
//!
//! Persistence is fail-open everywhere: a read or decode failure falls back
//! to "no selection", a write failure is logged and dropped. Losing the
//! persisted selection is recoverable; surfacing a storage error to the
//! user is not worth it.

pub mod types;

use log::warn;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::graph::GraphRef;
use types::PersistedSelection;

const SELECTION_TABLE: TableDefinition<&str, &str> = TableDefinition::new("selection");

/// Fixed storage key for the serialized selected graph.
pub const SELECTED_GRAPH_KEY: &str = "graphscope.selected-graph";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionStoreError {
    Io(String),
    Redb(String),
    Encoding(String),
}

impl std::fmt::Display for SelectionStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionStoreError::Io(e) => write!(f, "IO error: {e}"),
            SelectionStoreError::Redb(e) => write!(f, "Redb error: {e}"),
            SelectionStoreError::Encoding(e) => write!(f, "Encoding error: {e}"),
        }
    }
}

/// Synchronous key-value persistence contract consumed by the selection
/// store. Implementations must treat an absent key as `Ok(None)`, not an
/// error.
pub trait DurableStore: Send {
    fn read(&self, key: &str) -> Result<Option<String>, SelectionStoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), SelectionStoreError>;
}

/// Durable store backed by a single-table redb database.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open (or create) the selection database at `path`, creating parent
    /// directories as needed.
    pub fn open(path: &Path) -> Result<Self, SelectionStoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| SelectionStoreError::Io(format!("{e}")))?;
        }
        let db =
            Database::create(path).map_err(|e| SelectionStoreError::Redb(format!("{e}")))?;
        Ok(Self { db })
    }
}

impl DurableStore for RedbStore {
    fn read(&self, key: &str) -> Result<Option<String>, SelectionStoreError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| SelectionStoreError::Redb(format!("{e}")))?;
        // The table is first created by a write; before that, every key
        // reads as absent.
        let Ok(table) = read_txn.open_table(SELECTION_TABLE) else {
            return Ok(None);
        };
        let value = table
            .get(key)
            .map_err(|e| SelectionStoreError::Redb(format!("{e}")))?;
        Ok(value.map(|guard| guard.value().to_string()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SelectionStoreError> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| SelectionStoreError::Redb(format!("{e}")))?;
        {
            let mut table = write_txn
                .open_table(SELECTION_TABLE)
                .map_err(|e| SelectionStoreError::Redb(format!("{e}")))?;
            table
                .insert(key, value)
                .map_err(|e| SelectionStoreError::Redb(format!("{e}")))?;
        }
        write_txn
            .commit()
            .map_err(|e| SelectionStoreError::Redb(format!("{e}")))?;
        Ok(())
    }
}

/// In-memory durable store. Not durable at all; used for tests and for
/// sessions where the on-disk database cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, SelectionStoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), SelectionStoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Default on-disk location for the selection database.
pub fn default_selection_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("graphscope")
        .join("selection.redb")
}

/// Restore the persisted selection, failing open to `None` on any storage
/// or decode error.
pub(crate) fn load_selection(store: &dyn DurableStore) -> Option<GraphRef> {
    let raw = match store.read(SELECTED_GRAPH_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Failed to read persisted graph selection: {e}");
            return None;
        },
    };
    match serde_json::from_str::<PersistedSelection>(&raw) {
        Ok(record) => record.into_selection(),
        Err(e) => {
            warn!("Discarding undecodable persisted graph selection: {e}");
            None
        },
    }
}

/// Write the selection through to storage. Failures are logged and dropped;
/// the in-memory selection stays authoritative for this session.
pub(crate) fn persist_selection(store: &mut dyn DurableStore, selected: Option<&GraphRef>) {
    let record = PersistedSelection::from_selection(selected);
    let encoded = match serde_json::to_string(&record) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!("Failed to encode graph selection: {e}");
            return;
        },
    };
    if let Err(e) = store.write(SELECTED_GRAPH_KEY, &encoded) {
        warn!("Failed to persist graph selection: {e}");
    }
}
