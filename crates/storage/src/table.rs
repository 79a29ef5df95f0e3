//! Single-table keyed row store
//!
//! A `Table` backs one model: it maps [`RowId`]s to [`Record`]s and keeps a
//! small metadata record with the last auto-increment position.
//!
//! # Design
//!
//! - FxHashMap: O(1) primary-key lookups, fast non-crypto hash
//! - `&mut self` on every write: exclusive access, no internal locking
//!   (see [`SharedTable`](crate::SharedTable) for cross-thread use)
//! - Failures are checked before any mutation, so a failed call leaves the
//!   table exactly as it was
//!
//! # Identifier counter
//!
//! `last_id` starts at 0 and grows by one on every successful insert, whether
//! the caller supplied an id or not. It only proposes the next auto id
//! (`last_id + 1`); it is not the maximum key in use, and explicit ids can
//! make the two drift apart arbitrarily.
//!
//! # Example
//!
//! ```
//! use hades_core::{Record, RowId};
//! use hades_storage::Table;
//!
//! let mut users = Table::new("User");
//! assert_eq!(users.key(), "table_user");
//!
//! let mut ada = Record::new();
//! ada.insert("name", "ada");
//! let id = users.insert_row(ada).unwrap();
//! assert_eq!(id, RowId::Int(1));
//! assert_eq!(users.last_id(), 1);
//! ```

use hades_core::{table_name_for, Error, Model, Record, Result, RowId, ID_FIELD};
use rustc_hash::FxHashMap;
use std::fmt::Display;

use crate::options::TableOptions;
use crate::shared::SharedTable;

/// Per-table metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TableMeta {
    /// Number of successful inserts; base of the next auto id
    last_id: u64,
}

/// Which path an upsert took
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upserted {
    /// No row existed; the record was inserted under this id
    Inserted(RowId),
    /// An existing row was merged with the record
    Updated(RowId),
}

impl Upserted {
    /// Identifier of the affected row
    pub fn id(&self) -> &RowId {
        match self {
            Upserted::Inserted(id) | Upserted::Updated(id) => id,
        }
    }

    /// True if the insert path was taken
    pub fn is_inserted(&self) -> bool {
        matches!(self, Upserted::Inserted(_))
    }
}

/// In-memory row store for one model
#[derive(Debug, Clone)]
pub struct Table {
    key: String,
    rows: FxHashMap<RowId, Record>,
    meta: TableMeta,
    options: TableOptions,
}

impl Table {
    /// Create a table for a model descriptor with default options
    ///
    /// The table key is `"table_"` plus the lower-cased display form of
    /// `model`. Any displayable value is accepted.
    pub fn new(model: impl Display) -> Self {
        Self::with_options(model, TableOptions::default())
    }

    /// Create a table for a model descriptor with explicit options
    pub fn with_options(model: impl Display, options: TableOptions) -> Self {
        let key = table_name_for(model);
        tracing::debug!(
            target: "hades::table",
            table = %key,
            id_policy = ?options.id_policy,
            "table created"
        );
        Self {
            key,
            rows: FxHashMap::with_capacity_and_hasher(
                options.initial_capacity,
                Default::default(),
            ),
            meta: TableMeta::default(),
            options,
        }
    }

    /// Create a table for a [`Model`] type
    pub fn for_model<M: Model>() -> Self {
        Self::new(M::model_name())
    }

    /// Wrap this table in a lock for shared use
    pub fn into_shared(self) -> SharedTable {
        SharedTable::new(self)
    }

    /// Table key, fixed at construction
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Options the table was created with
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Current value of the insert counter
    pub fn last_id(&self) -> u64 {
        self.meta.last_id
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Insert a new row
    ///
    /// The row is stored under the record's own `id` when one is supplied
    /// (per the table's [`IdPolicy`](crate::IdPolicy)), otherwise under
    /// `last_id + 1`. The stored copy always has its `id` field set to the
    /// resolved key. On success the counter advances by one.
    ///
    /// # Errors
    ///
    /// - `NonUniqueIdentifier` if a row already exists under the resolved id
    /// - `Implementation` if the supplied `id` cannot be a key, or the
    ///   auto-increment range is exhausted
    pub fn insert_row(&mut self, record: Record) -> Result<RowId> {
        let (id, assigned) = self.resolve_id(&record)?;

        if self.rows.contains_key(&id) {
            return Err(Error::NonUniqueIdentifier {
                table: self.key.clone(),
                id,
            });
        }

        let mut row = record;
        row.set_id(&id);
        self.rows.insert(id.clone(), row);
        self.meta.last_id += 1;

        tracing::debug!(
            target: "hades::table",
            table = %self.key,
            id = %id,
            assigned,
            last_id = self.meta.last_id,
            "row inserted"
        );
        Ok(id)
    }

    /// Merge `patch` into an existing row
    ///
    /// Fields in `patch` overwrite fields of the same name; all other fields
    /// are kept. A patch `id` naming the same key is written in key form, as
    /// on insert. Any other `id` is merged as given and not checked, so the
    /// row stays under `row_id` with a different `id` field. Callers should
    /// not send one.
    ///
    /// # Errors
    ///
    /// `RowNotFound` if no row exists under `row_id`.
    pub fn update_row(&mut self, row_id: impl Into<RowId>, mut patch: Record) -> Result<()> {
        let row_id = row_id.into();
        let Some(row) = self.rows.get_mut(&row_id) else {
            return Err(Error::RowNotFound {
                table: self.key.clone(),
                id: row_id,
            });
        };

        if matches!(patch.row_id(), Ok(Some(ref id)) if *id == row_id) {
            patch.set_id(&row_id);
        } else if let Some(patched) = patch.id() {
            tracing::warn!(
                target: "hades::table",
                table = %self.key,
                id = %row_id,
                patched_id = %patched,
                "update overwrites {ID_FIELD} field with a different identifier"
            );
        }

        row.merge(patch);
        tracing::debug!(target: "hades::table", table = %self.key, id = %row_id, "row updated");
        Ok(())
    }

    /// Update the row named by `record.id` if it exists, insert otherwise
    ///
    /// A record without an `id` always takes the insert path and receives an
    /// auto-assigned identifier.
    ///
    /// # Errors
    ///
    /// Whatever [`update_row`](Self::update_row) or
    /// [`insert_row`](Self::insert_row) returns on the branch taken.
    pub fn upsert_row(&mut self, record: Record) -> Result<Upserted> {
        let existing = record
            .row_id()
            .ok()
            .flatten()
            .filter(|id| self.rows.contains_key(id));

        match existing {
            Some(id) => {
                tracing::debug!(
                    target: "hades::table",
                    table = %self.key,
                    id = %id,
                    "upsert updating"
                );
                self.update_row(id.clone(), record)?;
                Ok(Upserted::Updated(id))
            }
            None => {
                tracing::debug!(target: "hades::table", table = %self.key, "upsert inserting");
                self.insert_row(record).map(Upserted::Inserted)
            }
        }
    }

    /// Remove a row, returning it if it existed
    ///
    /// Deleting a missing row is a no-op. The insert counter is untouched.
    pub fn delete_row(&mut self, row_id: impl Into<RowId>) -> Option<Record> {
        let row_id = row_id.into();
        let removed = self.rows.remove(&row_id);
        tracing::debug!(
            target: "hades::table",
            table = %self.key,
            id = %row_id,
            removed = removed.is_some(),
            "row deleted"
        );
        removed
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Get a row by id
    pub fn get_row(&self, row_id: impl Into<RowId>) -> Option<&Record> {
        self.rows.get(&row_id.into())
    }

    /// Check whether a row exists
    pub fn contains_row(&self, row_id: impl Into<RowId>) -> bool {
        self.rows.contains_key(&row_id.into())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, ordered by id
    pub fn rows(&self) -> impl Iterator<Item = (&RowId, &Record)> {
        let mut rows: Vec<_> = self.rows.iter().collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rows.into_iter()
    }

    /// All row ids, ordered
    pub fn row_ids(&self) -> Vec<RowId> {
        let mut ids: Vec<_> = self.rows.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Resolve the key a new record goes under; `true` if auto-assigned
    fn resolve_id(&self, record: &Record) -> Result<(RowId, bool)> {
        let supplied = match record.id() {
            Some(value) if self.options.id_policy.is_supplied(value) => {
                RowId::try_from_value(value)?
            }
            _ => None,
        };

        match supplied {
            Some(id) => Ok((id, false)),
            None => Ok((self.next_id()?, true)),
        }
    }

    fn next_id(&self) -> Result<RowId> {
        self.meta
            .last_id
            .checked_add(1)
            .and_then(|next| i64::try_from(next).ok())
            .map(RowId::Int)
            .ok_or_else(|| {
                Error::implementation(format!("{}: auto-increment range exhausted", self.key))
            })
    }
}
