//! Walking a value along a parsed path.

use serde_json::Value;

use crate::types::{Slot, Step};
use crate::PathError;

fn field<'v>(current: &'v Value, name: &str) -> Result<&'v Value, PathError> {
    match current {
        Value::Object(map) => map.get(name).ok_or(PathError::NotFound),
        _ => Err(PathError::NotFound),
    }
}

fn element(current: &Value, index: usize) -> Result<&Value, PathError> {
    match current {
        Value::Array(arr) => arr.get(index).ok_or(PathError::OutOfRange),
        _ => Err(PathError::NotFound),
    }
}

fn field_mut<'v>(current: &'v mut Value, name: &str) -> Result<&'v mut Value, PathError> {
    match current {
        Value::Object(map) => map.get_mut(name).ok_or(PathError::NotFound),
        _ => Err(PathError::NotFound),
    }
}

fn element_mut(current: &mut Value, index: usize) -> Result<&mut Value, PathError> {
    match current {
        Value::Array(arr) => arr.get_mut(index).ok_or(PathError::OutOfRange),
        _ => Err(PathError::NotFound),
    }
}

fn step<'v>(current: &'v Value, s: &Step<'_>) -> Result<&'v Value, PathError> {
    let mut current = current;
    if let Some(name) = s.field() {
        current = field(current, name)?;
    }
    if let Some(index) = s.index() {
        current = element(current, index)?;
    }
    Ok(current)
}

fn step_mut<'v>(current: &'v mut Value, s: &Step<'_>) -> Result<&'v mut Value, PathError> {
    let mut current = current;
    if let Some(name) = s.field() {
        current = field_mut(current, name)?;
    }
    if let Some(index) = s.index() {
        current = element_mut(current, index)?;
    }
    Ok(current)
}

/// Find the value addressed by `path`.
///
/// An empty step list resolves to `root`.
///
/// # Errors
///
/// - [`PathError::NotFound`] - a key is missing, or a step expects an object
///   or array and finds another shape
/// - [`PathError::OutOfRange`] - an index is past the end of an array
pub fn find<'v>(root: &'v Value, path: &[Step<'_>]) -> Result<&'v Value, PathError> {
    let mut current = root;
    for s in path {
        current = step(current, s)?;
    }
    Ok(current)
}

/// Find the writable slot addressed by `path`.
///
/// The walk stops one level short of the target: the returned [`Slot`] holds
/// the parent container. A missing final object key is not an error, since
/// writes may create keys. Arrays are never extended, so a final index must
/// address an existing element.
///
/// # Errors
///
/// Same as [`find`] for every step before the last. The last step yields
/// [`PathError::NotFound`] when its container has the wrong shape and
/// [`PathError::OutOfRange`] when its index is past the end. An empty step
/// list is [`PathError::InvalidPath`], since the root has no parent.
pub fn find_slot<'v>(root: &'v mut Value, path: &[Step<'_>]) -> Result<Slot<'v>, PathError> {
    let Some((last, init)) = path.split_last() else {
        return Err(PathError::InvalidPath);
    };
    let mut current = root;
    for s in init {
        current = step_mut(current, s)?;
    }
    match *last {
        Step::Field(name) => match current {
            Value::Object(map) => Ok(Slot::entry(map, name)),
            _ => Err(PathError::NotFound),
        },
        Step::Index(index) => slot_in_array(current, index),
        Step::FieldIndex(name, index) => slot_in_array(field_mut(current, name)?, index),
    }
}

fn slot_in_array(current: &mut Value, index: usize) -> Result<Slot<'_>, PathError> {
    match current {
        Value::Array(arr) => Slot::element(arr, index).ok_or(PathError::OutOfRange),
        _ => Err(PathError::NotFound),
    }
}

/// Parse `path` and find the value it addresses.
///
/// # Example
///
/// ```
/// use json_obj_path::resolve;
/// use serde_json::json;
///
/// let doc = json!({"planets": [{"name": "Saturn"}, {"name": "Uranus"}]});
/// assert_eq!(resolve(&doc, "planets[1].name").unwrap(), &json!("Uranus"));
/// ```
pub fn resolve<'v>(root: &'v Value, path: &str) -> Result<&'v Value, PathError> {
    let steps = crate::parse_path(path)?;
    let found = find(root, &steps);
    if let Err(err) = &found {
        tracing::trace!(path, %err, "path did not resolve");
    }
    found
}

/// Parse `path` and find the writable slot it addresses.
///
/// # Example
///
/// ```
/// use json_obj_path::{resolve_slot, Locator};
/// use serde_json::json;
///
/// let mut doc = json!({"planets": [{"name": "Saturn"}]});
/// let slot = resolve_slot(&mut doc, "planets[0].rings").unwrap();
/// assert_eq!(slot.locator(), Locator::Key("rings".to_string()));
/// slot.store(json!(true));
/// assert_eq!(doc, json!({"planets": [{"name": "Saturn", "rings": true}]}));
/// ```
pub fn resolve_slot<'v>(root: &'v mut Value, path: &str) -> Result<Slot<'v>, PathError> {
    let steps = crate::parse_path(path)?;
    let slot = find_slot(root, &steps);
    match &slot {
        Ok(slot) => tracing::trace!(path, locator = %slot.locator(), "located slot"),
        Err(err) => tracing::trace!(path, %err, "slot did not resolve"),
    }
    slot
}
