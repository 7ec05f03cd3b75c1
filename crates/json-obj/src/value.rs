//! Structural inspection of dynamic values.
//!
//! Documents store plain [`serde_json::Value`]s. Numbers keep whatever
//! representation the parser chose, but every inspection here treats them as
//! doubles: integer and fractional numbers are only told apart when a value
//! is assigned into a typed destination.

use serde_json::Value;
use std::fmt;

/// Type tag of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lowercase JSON name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Whether values of this kind hold children.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Array | Kind::Object)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get the type tag of a value.
#[inline]
pub fn kind(v: &Value) -> Kind {
    match v {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Bool,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
    }
}

/// Number of children of an array or object. `None` for scalars.
pub fn child_count(v: &Value) -> Option<usize> {
    match v {
        Value::Array(arr) => Some(arr.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

/// Child of an object by key.
pub fn child_by_key<'v>(v: &'v Value, key: &str) -> Option<&'v Value> {
    v.as_object()?.get(key)
}

/// Child of an array by index.
pub fn child_by_index(v: &Value, index: usize) -> Option<&Value> {
    v.as_array()?.get(index)
}

/// Double-precision projection of a number. `None` for non-numbers.
#[inline]
pub fn as_double(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
