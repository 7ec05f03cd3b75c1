//! Checked conversion between dynamic values and typed destinations.
//!
//! Reading goes through the [`Assign`] trait: every destination type knows
//! which value shapes it accepts and how to narrow numbers into itself.
//! Writing goes through `serde`: the typed input is encoded to JSON text and
//! parsed back, so stored values always have the encoder's shape.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::value::as_double;

/// A destination that a dynamic value can be assigned into.
///
/// Implementations only see non-null values; [`assign`] skips `null`
/// before calling them.
pub trait Assign {
    /// Assign a non-null `value` into `self`.
    ///
    /// On error the destination is left as it was, except for records, which
    /// keep the fields assigned before the failing one.
    fn assign_from(&mut self, value: &Value) -> Result<()>;
}

/// Assign `value` into `out`.
///
/// A `null` value leaves `out` untouched and succeeds.
///
/// # Example
///
/// ```
/// use json_obj::{assign, Error};
/// use serde_json::json;
///
/// let mut moons: u8 = 0;
/// assign(&json!(27), &mut moons).unwrap();
/// assert_eq!(moons, 27);
///
/// assert!(matches!(assign(&json!(27.5), &mut moons), Err(Error::Truncate)));
/// assert!(matches!(assign(&json!(300), &mut moons), Err(Error::Truncate)));
/// assert_eq!(moons, 27);
///
/// assign(&json!(null), &mut moons).unwrap();
/// assert_eq!(moons, 27);
/// ```
pub fn assign<T: Assign + ?Sized>(value: &Value, out: &mut T) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    out.assign_from(value)
}

/// Encode a typed value into a dynamic one through a JSON text round trip.
///
/// # Errors
///
/// Returns [`Error::Json`] when the value cannot be encoded, or the encoded
/// text does not parse back.
pub fn to_dynamic<T: Serialize + ?Sized>(input: &T) -> Result<Value> {
    let bytes = serde_json::to_vec(input)?;
    Ok(serde_json::from_slice(&bytes)?)
}

// ── Scalars ───────────────────────────────────────────────────────────────

impl Assign for bool {
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Bool(b) => {
                *self = *b;
                Ok(())
            }
            _ => Err(Error::InvalidOut),
        }
    }
}

impl Assign for String {
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::String(s) => {
                self.clone_from(s);
                Ok(())
            }
            _ => Err(Error::InvalidOut),
        }
    }
}

fn number(value: &Value) -> Result<f64> {
    as_double(value).ok_or(Error::InvalidOut)
}

fn truncated(value: f64, ty: &'static str) -> Error {
    tracing::debug!(value, ty, "numeric narrowing rejected");
    Error::Truncate
}

impl Assign for f64 {
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        *self = number(value)?;
        Ok(())
    }
}

impl Assign for f32 {
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        let v = number(value)?;
        let narrowed = v as f32;
        if f64::from(narrowed) != v {
            return Err(truncated(v, "f32"));
        }
        *self = narrowed;
        Ok(())
    }
}

// Integer-backed numbers convert exactly. Float-backed ones go through the
// range check, where `MAX as f64 + 1.0` is 2^bits exactly: narrow widths add
// one to an exact value, and for 64-bit widths `MAX as f64` already rounds up
// to 2^bits.
macro_rules! impl_assign_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Assign for $t {
            fn assign_from(&mut self, value: &Value) -> Result<()> {
                let ty = stringify!($t);
                let narrowed = if let Some(i) = value.as_i64() {
                    <$t>::try_from(i).map_err(|_| truncated(i as f64, ty))?
                } else if let Some(u) = value.as_u64() {
                    <$t>::try_from(u).map_err(|_| truncated(u as f64, ty))?
                } else {
                    let v = number(value)?;
                    if v.trunc() != v || v < <$t>::MIN as f64 || v >= <$t>::MAX as f64 + 1.0 {
                        return Err(truncated(v, ty));
                    }
                    v as $t
                };
                *self = narrowed;
                Ok(())
            }
        }
    )*};
}

impl_assign_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Assign for Value {
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        self.clone_from(value);
        Ok(())
    }
}

/// Accepts any value and stores nothing.
impl Assign for () {
    fn assign_from(&mut self, _value: &Value) -> Result<()> {
        Ok(())
    }
}

// ── Containers ────────────────────────────────────────────────────────────

impl<T: Assign + Default> Assign for Vec<T> {
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        let items = value.as_array().ok_or(Error::InvalidOut)?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let mut slot = T::default();
            assign(item, &mut slot)?;
            out.push(slot);
        }
        *self = out;
        Ok(())
    }
}

impl<T: Assign + Default> Assign for Option<T> {
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        match self {
            Some(inner) => inner.assign_from(value),
            None => {
                let mut inner = T::default();
                inner.assign_from(value)?;
                *self = Some(inner);
                Ok(())
            }
        }
    }
}

impl<T: Assign + ?Sized> Assign for Box<T> {
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        (**self).assign_from(value)
    }
}

fn entries<T, E>(value: &Value) -> Result<E>
where
    T: Assign + Default,
    E: Default + Extend<(String, T)>,
{
    let map = value.as_object().ok_or(Error::InvalidOut)?;
    let mut out = E::default();
    for (key, item) in map {
        let mut slot = T::default();
        assign(item, &mut slot)?;
        out.extend(Some((key.clone(), slot)));
    }
    Ok(out)
}

impl<T: Assign + Default> Assign for BTreeMap<String, T> {
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        *self = entries::<T, _>(value)?;
        Ok(())
    }
}

impl<T, S> Assign for HashMap<String, T, S>
where
    T: Assign + Default,
    S: BuildHasher + Default,
{
    fn assign_from(&mut self, value: &Value) -> Result<()> {
        *self = entries::<T, _>(value)?;
        Ok(())
    }
}

// ── Records ───────────────────────────────────────────────────────────────

/// One assignable field of a [`Record`].
pub struct Field<R> {
    /// Field identifier as written in the type.
    pub name: &'static str,
    /// Declared serialization name. When set, only this exact key matches.
    pub rename: Option<&'static str>,
    /// Assigns a value into this field of a record.
    pub assign: fn(&mut R, &Value) -> Result<()>,
}

impl<R> Field<R> {
    /// Field identifier with any raw-identifier prefix removed.
    pub fn ident(&self) -> &'static str {
        self.name.strip_prefix("r#").unwrap_or(self.name)
    }

    /// Find the source value for this field in an object.
    ///
    /// A declared name must match exactly. Otherwise an exact match of the
    /// identifier wins over the first case-insensitive one.
    pub fn lookup<'v>(&self, map: &'v Map<String, Value>) -> Option<&'v Value> {
        if let Some(rename) = self.rename {
            return map.get(rename);
        }
        let ident = self.ident();
        map.get(ident).or_else(|| {
            map.iter()
                .find(|(key, _)| fold_eq(key, ident))
                .map(|(_, v)| v)
        })
    }
}

fn fold_eq(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// A struct whose fields are matched against object keys by name.
///
/// Implement it with [`impl_record!`](crate::impl_record), which also
/// implements [`Assign`] through [`assign_record`].
pub trait Record: Sized + 'static {
    /// Descriptor table of the assignable fields, in declaration order.
    const FIELDS: &'static [Field<Self>];
}

/// Assign an object into a record field by field.
///
/// Fields without a matching key keep their current value and keys without a
/// matching field are ignored, so a partial match is not an error.
///
/// # Errors
///
/// - [`Error::InvalidOut`] - `value` is not an object
/// - any error from assigning a matched field; fields assigned before it keep
///   their new values
pub fn assign_record<R: Record>(out: &mut R, value: &Value) -> Result<()> {
    let map = value.as_object().ok_or(Error::InvalidOut)?;
    for field in R::FIELDS {
        if let Some(item) = field.lookup(map) {
            (field.assign)(out, item)?;
        }
    }
    Ok(())
}

/// Implement [`Record`] and [`Assign`] for structs.
///
/// List the fields that take part in matching; `as "key"` declares a
/// serialization name. Unlisted fields are never written.
///
/// # Example
///
/// ```
/// use json_obj::{assign, impl_record};
/// use serde_json::json;
///
/// #[derive(Default)]
/// struct Planet {
///     name: String,
///     moon_count: u32,
///     notes: String,
/// }
///
/// impl_record!(Planet { name, moon_count as "moons" });
///
/// let mut planet = Planet::default();
/// assign(&json!({"NAME": "Saturn", "moons": 62, "notes": "x"}), &mut planet).unwrap();
/// assert_eq!(planet.name, "Saturn");
/// assert_eq!(planet.moon_count, 62);
/// assert_eq!(planet.notes, "");
/// ```
#[macro_export]
macro_rules! impl_record {
    (@rename) => { ::core::option::Option::None };
    (@rename $rename:literal) => { ::core::option::Option::Some($rename) };
    ($($ty:ty { $($field:ident $(as $rename:literal)?),* $(,)? })*) => {$(
        impl $crate::Record for $ty {
            const FIELDS: &'static [$crate::Field<Self>] = &[$({
                fn set(record: &mut $ty, value: &$crate::Value) -> $crate::Result<()> {
                    $crate::assign(value, &mut record.$field)
                }
                $crate::Field {
                    name: ::core::stringify!($field),
                    rename: $crate::impl_record!(@rename $($rename)?),
                    assign: set,
                }
            }),*];
        }

        impl $crate::Assign for $ty {
            fn assign_from(&mut self, value: &$crate::Value) -> $crate::Result<()> {
                $crate::assign_record(self, value)
            }
        }
    )*};
}
