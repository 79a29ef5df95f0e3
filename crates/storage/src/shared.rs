//! Lock-guarded table handle
//!
//! `Table` itself does no synchronization. `SharedTable` puts one
//! `parking_lot::Mutex` around it so several threads can reach the same
//! store; every operation holds the lock for its whole duration.
//!
//! # Thread Safety
//!
//! SharedTable is Clone and Send + Sync. Clones share the same table.
//! Use [`SharedTable::with_mut`] to run several operations under one lock.

use hades_core::{Record, Result, RowId};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::table::{Table, Upserted};

/// Shared, mutex-guarded [`Table`]
#[derive(Debug, Clone)]
pub struct SharedTable {
    /// Copy of the immutable table key, readable without locking
    key: Arc<str>,
    inner: Arc<Mutex<Table>>,
}

impl SharedTable {
    /// Wrap a table
    pub fn new(table: Table) -> Self {
        Self {
            key: Arc::from(table.key()),
            inner: Arc::new(Mutex::new(table)),
        }
    }

    /// Table key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// See [`Table::insert_row`]
    pub fn insert_row(&self, record: Record) -> Result<RowId> {
        self.inner.lock().insert_row(record)
    }

    /// See [`Table::update_row`]
    pub fn update_row(&self, row_id: impl Into<RowId>, patch: Record) -> Result<()> {
        self.inner.lock().update_row(row_id, patch)
    }

    /// See [`Table::upsert_row`]
    pub fn upsert_row(&self, record: Record) -> Result<Upserted> {
        self.inner.lock().upsert_row(record)
    }

    /// See [`Table::delete_row`]
    pub fn delete_row(&self, row_id: impl Into<RowId>) -> Option<Record> {
        self.inner.lock().delete_row(row_id)
    }

    /// Clone of the row under `row_id`
    pub fn get_row(&self, row_id: impl Into<RowId>) -> Option<Record> {
        self.inner.lock().get_row(row_id).cloned()
    }

    /// See [`Table::contains_row`]
    pub fn contains_row(&self, row_id: impl Into<RowId>) -> bool {
        self.inner.lock().contains_row(row_id)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True if the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// See [`Table::last_id`]
    pub fn last_id(&self) -> u64 {
        self.inner.lock().last_id()
    }

    /// Run `f` with shared access to the table
    pub fn with<R>(&self, f: impl FnOnce(&Table) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run `f` with exclusive access to the table
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Table) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<Table> for SharedTable {
    fn from(table: Table) -> Self {
        SharedTable::new(table)
    }
}
