//! Model descriptors and table naming
//!
//! A table is named after the model it backs. Naming is a pure function of
//! the model's display form; no registry is involved.

use std::fmt::Display;

/// Prefix of every derived table key
pub const TABLE_NAME_BASE: &str = "table_";

/// A type that can be backed by a table
///
/// ```
/// use hades_core::{table_name_for, Model};
///
/// struct User;
///
/// impl Model for User {
///     fn model_name() -> &'static str {
///         "User"
///     }
/// }
///
/// assert_eq!(table_name_for(User::model_name()), "table_user");
/// ```
pub trait Model {
    /// Name the table key is derived from
    fn model_name() -> &'static str;
}

/// Derive the table key for a model descriptor: `"table_"` followed by the
/// lower-cased display form of `model`.
pub fn table_name_for(model: impl Display) -> String {
    format!("{TABLE_NAME_BASE}{}", model.to_string().to_lowercase())
}
