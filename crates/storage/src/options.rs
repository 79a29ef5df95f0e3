//! Table configuration
//!
//! [`TableOptions`] controls how a table treats incoming identifiers and
//! how its row map is sized up front.

use hades_core::Value;
use serde::{Deserialize, Serialize};

/// Decides when a record's `id` field counts as a caller-supplied identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdPolicy {
    /// Any `id` other than null is used as given, including `0` and `""`.
    #[default]
    Explicit,
    /// Falsy ids (`null`, `false`, `0`, `0.0`, `""`) are replaced by the
    /// next auto-assigned identifier, matching loosely-typed ORM callers.
    Falsy,
}

impl IdPolicy {
    /// True if `id` should be used rather than auto-assigned
    pub fn is_supplied(self, id: &Value) -> bool {
        match self {
            IdPolicy::Explicit => !id.is_null(),
            IdPolicy::Falsy => !id.is_falsy(),
        }
    }
}

/// Options for creating a table.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use hades_storage::{IdPolicy, TableOptions};
///
/// let opts = TableOptions::new()
///     .id_policy(IdPolicy::Falsy)
///     .initial_capacity(1024);
/// assert_eq!(opts.id_policy, IdPolicy::Falsy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// How supplied identifiers are recognised
    pub id_policy: IdPolicy,
    /// Rows to pre-allocate space for
    pub initial_capacity: usize,
}

impl TableOptions {
    /// Create options with default settings (explicit ids, no pre-allocation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier policy.
    pub fn id_policy(mut self, policy: IdPolicy) -> Self {
        self.id_policy = policy;
        self
    }

    /// Set the initial row capacity.
    pub fn initial_capacity(mut self, rows: usize) -> Self {
        self.initial_capacity = rows;
        self
    }
}
