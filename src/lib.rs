//! Hades: an in-memory row store for lightweight ORMs
//!
//! One [`Table`] per model holds keyed records, hands out auto-increment
//! identifiers and supports insert, update, upsert and delete.
//!
//! ```
//! use hades::{Record, RowId, Table};
//!
//! let mut posts = Table::new("Post");
//! let id = posts.insert_row(Record::from_json(serde_json::json!({"title": "hi"}))?)?;
//! assert_eq!(id, RowId::Int(1));
//! assert_eq!(posts.key(), "table_post");
//! # Ok::<(), hades::Error>(())
//! ```

#![warn(missing_docs)]

mod types;

pub use types::*;

pub use hades_core::{table_name_for, Error, ErrorKind, Result, ID_FIELD};
pub use hades_storage::{SharedTable, Table};
