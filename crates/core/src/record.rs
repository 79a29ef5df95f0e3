//! Open-shaped rows
//!
//! A `Record` maps field names to [`Value`]s with no schema. The only field
//! the store cares about is [`ID_FIELD`]; everything else is carried as is.

use crate::error::{Error, Result};
use crate::row_id::RowId;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Name of the identifier field
pub const ID_FIELD: &str = "id";

/// One row: field name -> value
///
/// # Examples
///
/// ```
/// use hades_core::{Record, Value};
///
/// let mut user = Record::new();
/// user.insert("name", "ada");
/// user.insert("age", 36i64);
///
/// assert_eq!(user.get("name"), Some(&Value::from("ada")));
/// assert!(user.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record(BTreeMap::new())
    }

    /// Build a record from a JSON object
    ///
    /// # Errors
    ///
    /// Returns an implementation error if `json` is not an object.
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Object(map) => {
                Ok(Record(map.into_iter().map(|(k, v)| (k, v.into())).collect()))
            }
            other => Err(Error::implementation(format!(
                "a record must be built from a JSON object, got {other}"
            ))),
        }
    }

    /// Convert back into a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.clone().into()))
                .collect(),
        )
    }

    /// Get a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set a field, returning the previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Remove a field
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Check whether a field is set
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Raw `id` field
    pub fn id(&self) -> Option<&Value> {
        self.0.get(ID_FIELD)
    }

    /// `id` field coerced to a row key; `None` when missing or null
    ///
    /// # Errors
    ///
    /// Returns an implementation error when `id` holds a value that cannot
    /// be a key.
    pub fn row_id(&self) -> Result<Option<RowId>> {
        match self.id() {
            Some(value) => RowId::try_from_value(value),
            None => Ok(None),
        }
    }

    /// Overwrite the `id` field
    pub fn set_id(&mut self, id: &RowId) {
        self.0.insert(ID_FIELD.to_string(), id.to_value());
    }

    /// Shallow merge: every field of `patch` overwrites the field of the
    /// same name here; fields absent from `patch` are kept.
    pub fn merge(&mut self, patch: Record) {
        self.0.extend(patch.0);
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Field names in order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Unwrap into the underlying map
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Record(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
