//! Storage layer for the Hades row store
//!
//! This crate provides the in-memory table that backs one model:
//! - Table: keyed rows, auto-increment ids, insert/update/upsert/delete
//! - TableOptions: identifier policy and sizing
//! - SharedTable: mutex-guarded handle for multi-threaded callers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod options;
pub mod shared;
pub mod table;

pub use options::{IdPolicy, TableOptions};
pub use shared::SharedTable;
pub use table::{Table, Upserted};
