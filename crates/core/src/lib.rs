//! Core types for the Hades row store
//!
//! This crate holds everything the storage layer is built from:
//! - Value: variant field value
//! - Record: open-shaped row
//! - RowId: row key
//! - Model: table naming
//! - Error: failure kinds

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod model;
pub mod record;
pub mod row_id;
pub mod value;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};
pub use model::{table_name_for, Model, TABLE_NAME_BASE};
pub use record::{Record, ID_FIELD};
pub use row_id::RowId;
pub use value::Value;
