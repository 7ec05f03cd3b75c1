//! The path-addressed document.

use std::fmt;
use std::str::FromStr;

use json_obj_path::{resolve, resolve_slot};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::assign::{assign, to_dynamic, Assign};
use crate::error::{Error, Result};
use crate::value::{kind, Kind};

/// A parsed JSON document read and written through paths.
///
/// Paths are dot-separated field names with optional bracketed array
/// indices, e.g. `planets[0].name` or `[3]`. See [`json_obj_path`] for the
/// grammar.
///
/// A document is plain data: writes need `&mut self`, so sharing one across
/// threads takes an external lock.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parse a document from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if `bytes` is not a complete JSON text.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            root: serde_json::from_slice(bytes)?,
        })
    }

    /// Wrap an existing value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// An empty object document.
    pub fn new() -> Self {
        Self::from_value(Value::Object(Map::new()))
    }

    /// The root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Take the root value out of the document.
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Read the value at `path` into `out`.
    ///
    /// A `null` at `path` leaves `out` unchanged. Object values are matched
    /// into records field by field; unmatched fields and keys are skipped
    /// without error.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPath`] - malformed path
    /// - [`Error::NotFound`] - missing key, or wrong container shape on the way
    /// - [`Error::OutOfRange`] - array index past the end
    /// - [`Error::InvalidOut`] - `out` cannot hold the value's shape
    /// - [`Error::Truncate`] - the number does not fit `out` exactly
    ///
    /// # Example
    ///
    /// ```
    /// use json_obj::Document;
    ///
    /// let doc = Document::parse(br#"{"planets":[{"name":"Saturn","moons":62}]}"#).unwrap();
    /// let mut moons: i64 = 0;
    /// doc.get("planets[0].moons", &mut moons).unwrap();
    /// assert_eq!(moons, 62);
    /// ```
    pub fn get<T: Assign + ?Sized>(&self, path: &str, out: &mut T) -> Result<()> {
        let value = resolve(&self.root, path)?;
        assign(value, out)
    }

    /// Read the value at `path` into a fresh `T::default()`.
    pub fn get_as<T: Assign + Default>(&self, path: &str) -> Result<T> {
        let mut out = T::default();
        self.get(path, &mut out)?;
        Ok(out)
    }

    /// Borrow the dynamic value at `path`.
    pub fn get_value(&self, path: &str) -> Result<&Value> {
        Ok(resolve(&self.root, path)?)
    }

    /// Type tag of the value at `path`.
    pub fn kind(&self, path: &str) -> Result<Kind> {
        self.get_value(path).map(kind)
    }

    /// Whether `path` is well formed and addresses a value.
    pub fn contains(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    /// Store `input` at `path`, replacing whatever was there.
    ///
    /// The input is encoded to JSON and parsed back before it is stored.
    /// Missing object keys at the end of `path` are created; arrays are never
    /// grown.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidIn`] - `input` encodes to `null` (`None`, `()`)
    /// - path errors as for [`get`](Self::get), except that a missing final
    ///   object key is allowed
    /// - [`Error::Json`] - `input` cannot be encoded
    ///
    /// Nothing is written when an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use json_obj::Document;
    ///
    /// let mut doc = Document::parse(br#"{"planets":[{"name":"Saturn"}]}"#).unwrap();
    /// doc.set("planets[0].name", "Jenifer Lawrence").unwrap();
    /// assert_eq!(doc.export("").unwrap(), br#"{"planets":[{"name":"Jenifer Lawrence"}]}"#);
    /// ```
    pub fn set<T: Serialize + ?Sized>(&mut self, path: &str, input: &T) -> Result<()> {
        let encoded = to_dynamic(input);
        if let Ok(Value::Null) = encoded {
            tracing::debug!(path, "rejected absent input");
            return Err(Error::InvalidIn);
        }
        let slot = resolve_slot(&mut self.root, path)?;
        let value = encoded?;
        tracing::trace!(path, locator = %slot.locator(), "storing value");
        slot.store(value);
        Ok(())
    }

    /// Store a dynamic value at `path` without the encoding round trip.
    ///
    /// Follows the same rules as [`set`](Self::set); `Value::Null` is an
    /// absent input.
    pub fn set_value(&mut self, path: &str, value: Value) -> Result<()> {
        if value.is_null() {
            tracing::debug!(path, "rejected absent input");
            return Err(Error::InvalidIn);
        }
        let slot = resolve_slot(&mut self.root, path)?;
        tracing::trace!(path, locator = %slot.locator(), "storing value");
        slot.store(value);
        Ok(())
    }

    /// Length of the array at `path`.
    ///
    /// # Errors
    ///
    /// Path errors as for [`get`](Self::get); [`Error::InvalidPath`] if the
    /// value at `path` is not an array.
    pub fn len(&self, path: &str) -> Result<usize> {
        match self.get_value(path)? {
            Value::Array(arr) => Ok(arr.len()),
            _ => Err(Error::InvalidPath),
        }
    }

    /// Whether the array at `path` has no elements.
    ///
    /// # Errors
    ///
    /// As for [`len`](Self::len).
    pub fn is_empty(&self, path: &str) -> Result<bool> {
        self.len(path).map(|n| n == 0)
    }

    /// Serialize the document.
    ///
    /// An empty `indent` gives compact output; otherwise the output is pretty
    /// printed with `indent` as one level.
    pub fn export(&self, indent: &str) -> Result<Vec<u8>> {
        if indent.is_empty() {
            return Ok(serde_json::to_vec(&self.root)?);
        }
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = Serializer::with_formatter(&mut out, formatter);
        self.root.serialize(&mut ser)?;
        Ok(out)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.into_value()
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

/// Compact JSON text.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
