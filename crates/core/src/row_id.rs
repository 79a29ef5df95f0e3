//! Row identifiers
//!
//! A `RowId` is the map key a record is stored under. Integer and string
//! identifiers share one key space: a string holding the canonical decimal
//! spelling of an integer is the same key as that integer, so `"7"` and `7`
//! address the same row.

use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a row inside a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// Integer identifier (all auto-assigned ids are of this form)
    Int(i64),
    /// Any other string identifier
    Str(String),
}

impl RowId {
    /// Coerce a field value into a row key
    ///
    /// Returns `Ok(None)` for `Null` (no identifier). Integers and floats
    /// with an integral `i64` value become integer keys. Strings, booleans
    /// and all other floats are keyed by their printed form, so `1.5`,
    /// `"1.5"` and `true`, `"true"` address the same rows.
    ///
    /// # Errors
    ///
    /// Returns an implementation error for bytes, arrays and objects.
    pub fn try_from_value(value: &Value) -> Result<Option<RowId>> {
        match value {
            Value::Null => Ok(None),
            Value::Int(n) => Ok(Some(RowId::Int(*n))),
            Value::Float(f) if is_integral(*f) => Ok(Some(RowId::Int(*f as i64))),
            Value::Float(f) => Ok(Some(RowId::from(float_key(*f)))),
            Value::Bool(b) => Ok(Some(RowId::from(b.to_string()))),
            Value::String(s) => Ok(Some(RowId::from(s.as_str()))),
            other => Err(Error::implementation(format!(
                "a {} value cannot be used as a row identifier: {other}",
                other.type_name()
            ))),
        }
    }

    /// Field value written into a stored record's `id`
    pub fn to_value(&self) -> Value {
        match self {
            RowId::Int(n) => Value::Int(*n),
            RowId::Str(s) => Value::String(s.clone()),
        }
    }

    /// Get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RowId::Int(n) => Some(*n),
            RowId::Str(_) => None,
        }
    }
}

fn is_integral(f: f64) -> bool {
    // 2^63 is exactly representable, i64::MAX is not
    f.is_finite()
        && f.fract() == 0.0
        && f >= i64::MIN as f64
        && f < 9_223_372_036_854_775_808.0
}

/// Printed form of a float that is not an `i64` key
fn float_key(f: f64) -> String {
    if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        f.to_string()
    }
}

/// Parse `s` as an integer only if it is spelled exactly as the integer prints
fn canonical_int(s: &str) -> Option<i64> {
    let n: i64 = s.parse().ok()?;
    (n.to_string() == s).then_some(n)
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{n}"),
            RowId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        RowId::Int(n)
    }
}

impl From<i32> for RowId {
    fn from(n: i32) -> Self {
        RowId::Int(n.into())
    }
}

impl From<u32> for RowId {
    fn from(n: u32) -> Self {
        RowId::Int(n.into())
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        match canonical_int(s) {
            Some(n) => RowId::Int(n),
            None => RowId::Str(s.to_string()),
        }
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        match canonical_int(&s) {
            Some(n) => RowId::Int(n),
            None => RowId::Str(s),
        }
    }
}

impl From<&RowId> for RowId {
    fn from(id: &RowId) -> Self {
        id.clone()
    }
}

impl From<RowId> for Value {
    fn from(id: RowId) -> Self {
        match id {
            RowId::Int(n) => Value::Int(n),
            RowId::Str(s) => Value::String(s),
        }
    }
}
