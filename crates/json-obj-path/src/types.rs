//! Type definitions for dot/bracket paths.

use serde_json::{Map, Value};
use std::fmt;

/// A single step of a parsed path.
///
/// Field portions borrow from the path text and are never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// `name` - descend into an object key.
    Field(&'a str),
    /// `[n]` - descend into an array element at the current position.
    Index(usize),
    /// `name[n]` - descend into an object key, then into its array.
    FieldIndex(&'a str, usize),
}

impl<'a> Step<'a> {
    /// The field portion of this step, if any.
    pub fn field(&self) -> Option<&'a str> {
        match *self {
            Step::Field(f) | Step::FieldIndex(f, _) => Some(f),
            Step::Index(_) => None,
        }
    }

    /// The index portion of this step, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Step::Index(i) | Step::FieldIndex(_, i) => Some(i),
            Step::Field(_) => None,
        }
    }
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Field(name) => write!(f, "{name}"),
            Step::Index(i) => write!(f, "[{i}]"),
            Step::FieldIndex(name, i) => write!(f, "{name}[{i}]"),
        }
    }
}

/// A parsed path.
pub type Path<'a> = Vec<Step<'a>>;

/// Where a write lands inside its parent container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Object key; the key may not exist yet.
    Key(String),
    /// Array index; always below the array's current length.
    Index(usize),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Key(k) => write!(f, "key {k:?}"),
            Locator::Index(i) => write!(f, "index {i}"),
        }
    }
}

/// A writable slot: the mutable parent container plus the terminal
/// key or index.
///
/// The parent is held by its concrete container type, so a slot can only
/// ever point into an object or an array.
#[derive(Debug)]
pub enum Slot<'v> {
    /// A (possibly missing) key in an object.
    Entry {
        map: &'v mut Map<String, Value>,
        key: String,
    },
    /// An existing element of an array.
    Element { array: &'v mut Vec<Value>, index: usize },
}

impl<'v> Slot<'v> {
    pub(crate) fn entry(map: &'v mut Map<String, Value>, key: &str) -> Self {
        Slot::Entry {
            map,
            key: key.to_string(),
        }
    }

    /// Builds an element slot, or `None` when `index` is past the end.
    pub(crate) fn element(array: &'v mut Vec<Value>, index: usize) -> Option<Self> {
        if index < array.len() {
            Some(Slot::Element { array, index })
        } else {
            None
        }
    }

    /// The key or index this slot addresses.
    pub fn locator(&self) -> Locator {
        match self {
            Slot::Entry { key, .. } => Locator::Key(key.clone()),
            Slot::Element { index, .. } => Locator::Index(*index),
        }
    }

    /// The value currently stored at the slot, if any.
    pub fn current(&self) -> Option<&Value> {
        match self {
            Slot::Entry { map, key } => map.get(key.as_str()),
            Slot::Element { array, index } => array.get(*index),
        }
    }

    /// Stores `value` at the slot, replacing whatever was there, and returns
    /// the previous value.
    pub fn store(self, value: Value) -> Option<Value> {
        match self {
            Slot::Entry { map, key } => map.insert(key, value),
            Slot::Element { array, index } => array
                .get_mut(index)
                .map(|old| std::mem::replace(old, value)),
        }
    }
}
