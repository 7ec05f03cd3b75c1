use json_obj::{impl_record, Document, Error, Kind};
use serde::Serialize;
use serde_json::{json, Value};

const PLANETS: &str =
    r#"{"planets":[{"name":"Saturn","moons":62},{"name":"Uranus","moons":27}]}"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn planets() -> Document {
    Document::parse(PLANETS.as_bytes()).expect("parse planets")
}

#[derive(Debug, Default, PartialEq)]
struct Named {
    name: String,
}

#[derive(Debug, Default, PartialEq)]
struct Person {
    name: String,
    age: u8,
}

#[derive(Debug, Default, PartialEq)]
struct Roster {
    title: String,
    members: Vec<Person>,
}

impl_record!(
    Named { name }
    Person { name, age }
    Roster { title as "roster_title", members as "items" }
);

#[derive(Serialize)]
struct Entry {
    name: &'static str,
    #[serde(rename = "address")]
    addr: &'static str,
}

#[test]
fn test_planets_scenario() {
    init_tracing();
    let mut doc = planets();

    let mut x: i64 = 0;
    doc.get("planets[1].moons", &mut x).unwrap();
    assert_eq!(x, 27);

    doc.set("planets[0].name", "Jenifer Lawrence").unwrap();
    let out = String::from_utf8(doc.export("").unwrap()).unwrap();
    assert_eq!(out, PLANETS.replace("Saturn", "Jenifer Lawrence"));

    assert_eq!(doc.len("planets").unwrap(), 2);
}

#[test]
fn test_bare_index_on_array_document() {
    let doc = Document::parse(
        br#"[
            {"name": "Mirko", "age": 42},
            {"name": "Mirjana", "age": 34}
        ]"#,
    )
    .unwrap();
    let mut name = String::new();
    doc.get("[1].name", &mut name).unwrap();
    assert_eq!(name, "Mirjana");
    assert_eq!(doc.len("[0].name").err().map(|e| e.to_string()), Some("invalid path".into()));

    let first: Person = doc.get_as("[0]").unwrap();
    assert_eq!(first, Person { name: "Mirko".into(), age: 42 });
}

#[test]
fn test_set_replaces_array_items_with_records() {
    let mut doc = Document::parse(
        br#"{"items":[{"name":"Mirko","age":42},{"name":"Mirjana","age":64}]}"#,
    )
    .unwrap();

    doc.set("items[1].age", "pregzbušt").unwrap();
    assert_eq!(doc.get_value("items[1].age").unwrap(), &json!("pregzbušt"));
    assert!(matches!(doc.get_as::<u8>("items[1].age"), Err(Error::InvalidOut)));

    doc.set("items[0]", &Entry { name: "Votevr", addr: "Adresa" }).unwrap();
    doc.set("items[1]", &Entry { name: "Antverp", addr: "Adsresasasa" }).unwrap();
    assert_eq!(
        doc.export("").unwrap(),
        br#"{"items":[{"name":"Votevr","address":"Adresa"},{"name":"Antverp","address":"Adsresasasa"}]}"#
    );

    assert!(matches!(
        doc.set("items[2]", &Entry { name: "x", addr: "y" }),
        Err(Error::OutOfRange)
    ));
}

#[test]
fn test_array_bounds_are_out_of_range_not_not_found() {
    let mut doc = planets();
    let n = doc.len("planets").unwrap();
    for i in n..n + 5 {
        let path = format!("planets[{i}]");
        assert!(matches!(doc.get_as::<Value>(&path), Err(Error::OutOfRange)), "{path}");
        assert!(matches!(doc.set(&path, &1), Err(Error::OutOfRange)), "{path}");
        let nested = format!("planets[{i}].name");
        assert!(matches!(doc.get_as::<String>(&nested), Err(Error::OutOfRange)));
    }
    // Chained brackets are malformed; indexing a string is a shape error.
    assert!(matches!(doc.get_as::<Value>("planets[0][0]"), Err(Error::InvalidPath)));
    assert!(matches!(doc.get_as::<Value>("planets[0].name[0]"), Err(Error::NotFound)));
}

#[test]
fn test_truncation_detection() {
    let doc = Document::from_value(json!({"half": 3.5, "whole": 3.0, "big": 70000}));

    let mut i: i32 = 11;
    assert!(matches!(doc.get("half", &mut i), Err(Error::Truncate)));
    assert_eq!(i, 11);
    doc.get("whole", &mut i).unwrap();
    assert_eq!(i, 3);

    let mut s: i16 = 5;
    assert!(matches!(doc.get("big", &mut s), Err(Error::Truncate)));
    assert_eq!(s, 5);
    let mut u: u32 = 0;
    doc.get("big", &mut u).unwrap();
    assert_eq!(u, 70000);

    let mut f: f32 = 0.0;
    doc.get("half", &mut f).unwrap();
    assert_eq!(f, 3.5);
}

#[test]
fn test_partial_structural_match() {
    let doc = Document::from_value(json!({"who": {"name": "X", "extra": "Y"}}));
    let mut named = Named::default();
    doc.get("who", &mut named).unwrap();
    assert_eq!(named, Named { name: "X".into() });

    let mut person = Person { name: "old".into(), age: 9 };
    doc.get("who", &mut person).unwrap();
    assert_eq!(person, Person { name: "X".into(), age: 9 });
}

#[test]
fn test_declared_names_match_exactly() {
    let doc = Document::from_value(json!({"r": {
        "roster_title": "crew",
        "Title": "ignored",
        "items": [{"NAME": "Ana", "Age": 30}, null, {"name": "Bo"}]
    }}));
    let roster: Roster = doc.get_as("r").unwrap();
    assert_eq!(roster.title, "crew");
    assert_eq!(
        roster.members,
        vec![
            Person { name: "Ana".into(), age: 30 },
            Person::default(),
            Person { name: "Bo".into(), age: 0 },
        ]
    );
}

#[test]
fn test_record_from_non_object_is_invalid_out() {
    let doc = planets();
    assert!(matches!(doc.get_as::<Named>("planets"), Err(Error::InvalidOut)));
    assert!(matches!(doc.get_as::<Vec<Named>>("planets[0]"), Err(Error::InvalidOut)));
    let all: Vec<Named> = doc.get_as("planets").unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].name, "Uranus");
}

#[test]
fn test_malformed_paths_leave_document_untouched() {
    let mut doc = planets();
    let before = doc.export("").unwrap();
    for path in ["", ".", "a..b", "a[x]", "a[-1]", "[1]extra"] {
        let mut out = Value::Null;
        assert!(matches!(doc.get(path, &mut out), Err(Error::InvalidPath)), "{path:?}");
        assert!(matches!(doc.set(path, &1), Err(Error::InvalidPath)), "{path:?}");
        assert!(matches!(doc.len(path), Err(Error::InvalidPath)), "{path:?}");
    }
    assert_eq!(doc.export("").unwrap(), before);
}

#[test]
fn test_overwrite_replaces_whole_value() {
    let mut doc = Document::from_value(json!({"a": {"b": {"c": 1}, "d": 2}}));
    doc.set("a", &5).unwrap();
    assert_eq!(doc.root(), &json!({"a": 5}));
    assert!(matches!(doc.get_as::<Value>("a.b"), Err(Error::NotFound)));

    doc.set("a", &json!({"fresh": true})).unwrap();
    assert_eq!(doc.kind("a").unwrap(), Kind::Object);
    assert_eq!(doc.root(), &json!({"a": {"fresh": true}}));
}

#[test]
fn test_set_creates_keys_but_not_paths() {
    let mut doc = Document::new();
    doc.set("a", &json!({})).unwrap();
    doc.set("a.b", "x").unwrap();
    assert_eq!(doc.root(), &json!({"a": {"b": "x"}}));
    assert!(matches!(doc.set("a.c.d", "x"), Err(Error::NotFound)));
    assert!(matches!(doc.set("a.b.c", "x"), Err(Error::NotFound)));
    assert!(matches!(doc.set("a.b[0]", "x"), Err(Error::NotFound)));
}

#[test]
fn test_null_values_leave_destinations_alone() {
    let doc = Document::from_value(json!({"gone": null, "list": [null]}));
    let mut s = String::from("kept");
    doc.get("gone", &mut s).unwrap();
    assert_eq!(s, "kept");
    doc.get("list[0]", &mut s).unwrap();
    assert_eq!(s, "kept");
}

#[test]
fn test_pretty_export_uses_indent_per_level() {
    let doc = Document::from_value(json!({"a": {"b": [1, 2]}}));
    let out = String::from_utf8(doc.export("  ").unwrap()).unwrap();
    assert_eq!(out, "{\n  \"a\": {\n    \"b\": [\n      1,\n      2\n    ]\n  }\n}");
    let reparsed = Document::parse(out.as_bytes()).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn test_numbers_keep_their_text_form() {
    let src = br#"{"i":1,"f":1.5,"n":-7,"e":1e3}"#;
    let mut doc = Document::parse(src).unwrap();
    doc.set("i", &2u8).unwrap();
    assert_eq!(doc.export("").unwrap(), br#"{"i":2,"f":1.5,"n":-7,"e":1000.0}"#);
}

#[test]
fn test_large_integers_survive_get_then_set() {
    let src = br#"{"id":9007199254740993,"max":18446744073709551615,"min":-9223372036854775808}"#;
    let mut doc = Document::parse(src).unwrap();

    let id: i64 = doc.get_as("id").unwrap();
    assert_eq!(id, 9_007_199_254_740_993);
    doc.set("id", &id).unwrap();

    let max: u64 = doc.get_as("max").unwrap();
    assert_eq!(max, u64::MAX);
    doc.set("max", &max).unwrap();
    assert!(matches!(doc.get_as::<i64>("max"), Err(Error::Truncate)));

    let min: i64 = doc.get_as("min").unwrap();
    doc.set("min", &min).unwrap();

    assert_eq!(doc.export("").unwrap(), src);
}
