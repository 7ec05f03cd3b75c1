//! Path-addressed access to parsed JSON documents.
//!
//! A [`Document`] owns a parsed JSON value. Values are read into typed
//! destinations and written from typed inputs through textual paths such as
//! `planets[1].moons`, without declaring the document's schema.
//!
//! Reads are checked: a number only lands in an integer or `f32` destination
//! if it fits exactly, objects are matched into records by field name, and
//! shape mismatches are errors rather than panics.
//!
//! # Example
//!
//! ```
//! use json_obj::{impl_record, Document, Error};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Planet {
//!     name: String,
//!     moons: i64,
//! }
//!
//! impl_record!(Planet { name, moons });
//!
//! let mut doc = Document::parse(
//!     br#"{"planets":[{"name":"Saturn","moons":62},{"name":"Uranus","moons":27}]}"#,
//! )
//! .unwrap();
//!
//! let mut moons: i64 = 0;
//! doc.get("planets[1].moons", &mut moons).unwrap();
//! assert_eq!(moons, 27);
//!
//! let uranus: Planet = doc.get_as("planets[1]").unwrap();
//! assert_eq!(uranus, Planet { name: "Uranus".into(), moons: 27 });
//!
//! let mut small: u8 = 0;
//! assert!(matches!(doc.get("planets[0].name", &mut small), Err(Error::InvalidOut)));
//!
//! doc.set("planets[0].name", "Jenifer Lawrence").unwrap();
//! assert_eq!(doc.len("planets").unwrap(), 2);
//! assert_eq!(
//!     doc.export("").unwrap(),
//!     br#"{"planets":[{"name":"Jenifer Lawrence","moons":62},{"name":"Uranus","moons":27}]}"#
//! );
//! ```

pub use serde_json::Value;

mod error;
pub use error::{Error, Result};

pub mod value;
pub use value::Kind;

mod assign;
pub use assign::{assign, assign_record, to_dynamic, Assign, Field, Record};

mod document;
pub use document::Document;

pub use json_obj_path as path;
pub use json_obj_path::{Locator, PathError, Step};
