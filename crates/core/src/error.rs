//! Error types for the row store
//!
//! Every failing table operation returns one of these before touching any
//! state, so callers can branch on [`ErrorKind`] and retry however they like.

use crate::row_id::RowId;
use thiserror::Error;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Row store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Insert resolved to an identifier that is already taken
    #[error("Cannot insert new row with non-unique ID.")]
    NonUniqueIdentifier {
        /// Table the insert targeted
        table: String,
        /// Colliding identifier
        id: RowId,
    },

    /// Update addressed a row that does not exist
    #[error("Cannot update missing row {id} in {table}.")]
    RowNotFound {
        /// Table the update targeted
        table: String,
        /// Missing identifier
        id: RowId,
    },

    /// The store was used in a way it does not support
    #[error("{message}")]
    Implementation {
        /// Human-readable description
        message: String,
    },
}

/// Coarse error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input rejected (identifier collision)
    Validation,
    /// Addressed row is missing
    NotFound,
    /// Internal misuse
    Implementation,
}

impl ErrorKind {
    /// Stable name callers can log or match on
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Validation => "HadesValidationError",
            ErrorKind::NotFound => "HadesNotFoundError",
            ErrorKind::Implementation => "HadesImplementationError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Error {
    /// Build an implementation error from any message
    pub fn implementation(message: impl Into<String>) -> Self {
        Error::Implementation {
            message: message.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NonUniqueIdentifier { .. } => ErrorKind::Validation,
            Error::RowNotFound { .. } => ErrorKind::NotFound,
            Error::Implementation { .. } => ErrorKind::Implementation,
        }
    }

    /// True for identifier collisions on insert
    pub fn is_non_unique(&self) -> bool {
        matches!(self, Error::NonUniqueIdentifier { .. })
    }

    /// True for updates against a missing row
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::RowNotFound { .. })
    }

    /// True for implementation errors
    pub fn is_implementation(&self) -> bool {
        matches!(self, Error::Implementation { .. })
    }

    /// Identifier involved in the failure, if any
    pub fn row_id(&self) -> Option<&RowId> {
        match self {
            Error::NonUniqueIdentifier { id, .. } | Error::RowNotFound { id, .. } => Some(id),
            Error::Implementation { .. } => None,
        }
    }
}
