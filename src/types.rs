//! Public types for the Hades API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Core value types
pub use hades_core::Record;
pub use hades_core::RowId;
pub use hades_core::Value;

// Model naming
pub use hades_core::Model;

// Table configuration
pub use hades_storage::{IdPolicy, TableOptions};

// Upsert outcome
pub use hades_storage::Upserted;
