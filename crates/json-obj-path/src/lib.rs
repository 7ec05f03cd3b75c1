//! Dot and bracket paths over `serde_json` values.
//!
//! A path is a sequence of dot-separated segments. Each segment is a field
//! name, a field name followed by a bracketed array index, or a bare
//! bracketed index:
//!
//! ```text
//! planets[0].name     field "planets", element 0, field "name"
//! [42]                element 42 of the array at the current position
//! ```
//!
//! # Example
//!
//! ```
//! use json_obj_path::{parse_path, resolve, resolve_slot, Step};
//! use serde_json::json;
//!
//! let path = parse_path("planets[1].moons").unwrap();
//! assert_eq!(path, vec![Step::FieldIndex("planets", 1), Step::Field("moons")]);
//!
//! let mut doc = json!({"planets": [{"moons": 62}, {"moons": 27}]});
//! assert_eq!(resolve(&doc, "planets[1].moons").unwrap(), &json!(27));
//!
//! resolve_slot(&mut doc, "planets[0].moons").unwrap().store(json!(83));
//! assert_eq!(doc["planets"][0]["moons"], json!(83));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Locator, Path, Slot, Step};

mod parse;
pub use parse::{format_path, is_index, parse_path, parse_segment};

mod resolve;
pub use resolve::{find, find_slot, resolve, resolve_slot};

/// Errors produced while parsing or walking a path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The path text is malformed.
    #[error("invalid path")]
    InvalidPath,
    /// A key is missing, or a container has the wrong shape.
    #[error("element not found")]
    NotFound,
    /// An array index is past the end of the array.
    #[error("index out of range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        assert_eq!(PathError::InvalidPath.to_string(), "invalid path");
        assert_eq!(PathError::NotFound.to_string(), "element not found");
        assert_eq!(PathError::OutOfRange.to_string(), "index out of range");
    }

    #[test]
    fn test_parse_then_find() {
        let doc = json!({"a": {"b": [10, 20, 30]}});
        let path = parse_path("a.b[2]").unwrap();
        assert_eq!(find(&doc, &path).unwrap(), &json!(30));
    }

    #[test]
    fn test_shape_before_magnitude() {
        let doc = json!({"a": {"b": 1}});
        // Index on an object is a shape error even for large indices.
        assert_eq!(resolve(&doc, "a[100]"), Err(PathError::NotFound));
        let doc = json!({"a": []});
        assert_eq!(resolve(&doc, "a[0]"), Err(PathError::OutOfRange));
    }
}
