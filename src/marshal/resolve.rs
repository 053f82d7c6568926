//! Type resolvers: conversion of single field values to and from JSON.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::Number;
use tracing::warn;

use super::error::{MarshalError, ValueKind};
use super::settings::{DecodePolicy, Settings};
use crate::json::{JsonMap, Value};

/// Converts one field's value to and from a JSON value.
///
/// The resolver for a field is picked statically from the field's type: primitives, integer
/// coded enums (see the `enum_number!` macro), nested entities, and the containers below are all
/// covered by an implementation of this trait.
pub trait Resolve: Sized {
    /// Reads a value of this type out of a JSON value.
    ///
    /// # Errors
    ///
    /// Returns a [`MarshalError`] if the value has an incompatible kind or unparsable content.
    fn read(value: &Value, settings: &Settings) -> Result<Self, MarshalError>;

    /// Writes this value as a JSON value.
    fn write(&self, settings: &Settings) -> Value;

    /// Whether the value means "not set", and is left out when stored in an optional field.
    fn is_absent(&self) -> bool {
        false
    }

    /// Whether the value is empty, and is left out of optional fields when
    /// [`Settings::omit_empty`] is set.
    fn is_empty(&self) -> bool {
        false
    }
}

impl Resolve for String {
    fn read(value: &Value, _: &Settings) -> Result<Self, MarshalError> {
        value.as_str().map(str::to_owned).ok_or_else(|| MarshalError::type_mismatch("string", value))
    }

    fn write(&self, _: &Settings) -> Value {
        Value::String(self.clone())
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl Resolve for bool {
    fn read(value: &Value, _: &Settings) -> Result<Self, MarshalError> {
        value.as_bool().ok_or_else(|| MarshalError::type_mismatch("boolean", value))
    }

    fn write(&self, _: &Settings) -> Value {
        Value::Bool(*self)
    }
}

/// Returns the number as an integer, if it is integral.
///
/// Floats are accepted as long as they carry no fraction, so `3.0` reads as `3`.
fn integral(number: &Number) -> Option<i128> {
    if let Some(v) = number.as_i64() {
        Some(i128::from(v))
    } else if let Some(v) = number.as_u64() {
        Some(i128::from(v))
    } else {
        let v = number.as_f64()?;
        (v.is_finite() && v.fract() == 0.0).then_some(v as i128)
    }
}

macro_rules! impl_resolve_integer {
    ($($ty:ty),*) => {
        $(
            impl Resolve for $ty {
                fn read(value: &Value, _: &Settings) -> Result<Self, MarshalError> {
                    let Value::Number(number) = value else {
                        return Err(MarshalError::type_mismatch("integer", value));
                    };
                    let wide = integral(number)
                        .ok_or_else(|| MarshalError::type_mismatch("integer", value))?;

                    <$ty>::try_from(wide).map_err(|_| {
                        MarshalError::invalid_value(stringify!($ty), format!("{number} is out of range"))
                    })
                }

                fn write(&self, _: &Settings) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_resolve_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

impl Resolve for f64 {
    fn read(value: &Value, _: &Settings) -> Result<Self, MarshalError> {
        value.as_f64().ok_or_else(|| MarshalError::type_mismatch("number", value))
    }

    fn write(&self, _: &Settings) -> Value {
        Value::from(*self)
    }
}

impl Resolve for f32 {
    fn read(value: &Value, settings: &Settings) -> Result<Self, MarshalError> {
        f64::read(value, settings).map(|v| v as f32)
    }

    fn write(&self, _: &Settings) -> Value {
        Value::from(f64::from(*self))
    }
}

/// The opaque passthrough slot: the value is kept exactly as received.
impl Resolve for Value {
    fn read(value: &Value, _: &Settings) -> Result<Self, MarshalError> {
        Ok(value.clone())
    }

    fn write(&self, _: &Settings) -> Value {
        self.clone()
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

/// Nullable values: `null` reads as `None`, and `None` is left out of optional fields.
impl<T: Resolve> Resolve for Option<T> {
    fn read(value: &Value, settings: &Settings) -> Result<Self, MarshalError> {
        match value {
            Value::Null => Ok(None),
            value => T::read(value, settings).map(Some),
        }
    }

    fn write(&self, settings: &Settings) -> Value {
        self.as_ref().map_or(Value::Null, |v| v.write(settings))
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Resolve> Resolve for Box<T> {
    fn read(value: &Value, settings: &Settings) -> Result<Self, MarshalError> {
        T::read(value, settings).map(Box::new)
    }

    fn write(&self, settings: &Settings) -> Value {
        (**self).write(settings)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

/// Sequences keep their order. Under [`DecodePolicy::Lenient`] a malformed element is dropped
/// and the rest of the sequence is kept.
impl<T: Resolve> Resolve for Vec<T> {
    fn read(value: &Value, settings: &Settings) -> Result<Self, MarshalError> {
        let array =
            value.as_array().ok_or_else(|| MarshalError::shape_mismatch(ValueKind::Array, value))?;

        let mut items = Vec::with_capacity(array.len());
        for (index, item) in array.iter().enumerate() {
            match T::read(item, settings) {
                Ok(item) => items.push(item),
                Err(why) if settings.policy == DecodePolicy::Lenient => {
                    let why = why.at_index(index);
                    warn!(error = %why, "dropping malformed element");
                },
                Err(why) => return Err(why.at_index(index)),
            }
        }

        Ok(items)
    }

    fn write(&self, settings: &Settings) -> Value {
        Value::Array(self.iter().map(|item| item.write(settings)).collect())
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

fn read_map<T, M>(value: &Value, settings: &Settings) -> Result<M, MarshalError>
where
    T: Resolve,
    M: FromIterator<(String, T)>,
{
    let object =
        value.as_object().ok_or_else(|| MarshalError::shape_mismatch(ValueKind::Object, value))?;

    let mut entries = Vec::with_capacity(object.len());
    for (key, item) in object {
        match T::read(item, settings) {
            Ok(item) => entries.push((key.clone(), item)),
            Err(why) if settings.policy == DecodePolicy::Lenient => {
                let why = why.at_key(key.clone());
                warn!(error = %why, "dropping malformed entry");
            },
            Err(why) => return Err(why.at_key(key.clone())),
        }
    }

    Ok(entries.into_iter().collect())
}

impl<T: Resolve, S: BuildHasher + Default> Resolve for HashMap<String, T, S> {
    fn read(value: &Value, settings: &Settings) -> Result<Self, MarshalError> {
        read_map(value, settings)
    }

    fn write(&self, settings: &Settings) -> Value {
        let map: JsonMap = self.iter().map(|(k, v)| (k.clone(), v.write(settings))).collect();
        Value::Object(map)
    }

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T: Resolve> Resolve for BTreeMap<String, T> {
    fn read(value: &Value, settings: &Settings) -> Result<Self, MarshalError> {
        read_map(value, settings)
    }

    fn write(&self, settings: &Settings) -> Value {
        let map: JsonMap = self.iter().map(|(k, v)| (k.clone(), v.write(settings))).collect();
        Value::Object(map)
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::json;
    use crate::marshal::MarshalErrorKind;

    fn read<T: Resolve>(value: Value) -> Result<T, MarshalError> {
        T::read(&value, &Settings::default())
    }

    #[test]
    fn numbers_widen_into_any_numeric_field() {
        assert_eq!(read::<u8>(json!(7)).unwrap(), 7);
        assert_eq!(read::<i64>(json!(-3)).unwrap(), -3);
        assert_eq!(read::<u64>(json!(4.0)).unwrap(), 4);
        assert!((read::<f64>(json!(3)).unwrap() - 3.0).abs() < f64::EPSILON);
        assert!((read::<f32>(json!(2.5)).unwrap() - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn lossy_integer_conversions_fail() {
        let why = read::<i32>(json!(2.5)).unwrap_err();
        assert_eq!(
            why.kind(),
            &MarshalErrorKind::TypeMismatch {
                expected: "integer",
                found: ValueKind::Number,
            }
        );

        let why = read::<u8>(json!(300)).unwrap_err();
        assert!(matches!(why.kind(), MarshalErrorKind::InvalidValue { expected: "u8", .. }));

        let why = read::<u32>(json!(-1)).unwrap_err();
        assert!(matches!(why.kind(), MarshalErrorKind::InvalidValue { expected: "u32", .. }));
    }

    #[test]
    fn leaves_of_the_wrong_kind_fail() {
        let why = read::<String>(json!(true)).unwrap_err();
        assert_eq!(why.to_string(), "expected string, found boolean");

        let why = read::<bool>(json!("true")).unwrap_err();
        assert_eq!(why.to_string(), "expected boolean, found string");

        let why = read::<i64>(json!("12")).unwrap_err();
        assert_eq!(why.to_string(), "expected integer, found string");
    }

    #[test]
    fn sequences_keep_order_and_report_the_index() {
        assert_eq!(read::<Vec<u8>>(json!([3, 1, 2])).unwrap(), vec![3, 1, 2]);
        assert_eq!(read::<Vec<String>>(json!([])).unwrap(), Vec::<String>::new());

        let why = read::<Vec<u8>>(json!([1, "2"])).unwrap_err();
        assert_eq!(why.path(), "[1]");

        let why = read::<Vec<u8>>(json!({})).unwrap_err();
        assert_eq!(why.to_string(), "expected array, found object");
    }

    #[test]
    fn lenient_sequences_drop_only_the_malformed_elements() {
        let value = json!([1, "2", 3, 300]);

        let why = read::<Vec<u8>>(value.clone()).unwrap_err();
        assert_eq!(why.path(), "[1]");

        let items = Vec::<u8>::read(&value, &Settings::lenient()).unwrap();
        assert_eq!(items, [1, 3]);

        let map = BTreeMap::<String, u8>::read(&json!({"a": 1, "b": "x"}), &Settings::lenient()).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], 1);

        let why = Vec::<u8>::read(&json!({}), &Settings::lenient()).unwrap_err();
        assert_eq!(why.to_string(), "expected array, found object");
    }

    #[test]
    fn maps_report_the_key() {
        let map = read::<HashMap<String, String>>(json!({"de": "Hallo", "fr": "Salut"})).unwrap();
        assert_eq!(map["de"], "Hallo");
        assert_eq!(map.len(), 2);

        let why = read::<BTreeMap<String, String>>(json!({"de": 1})).unwrap_err();
        assert_eq!(why.path(), "de");
    }

    #[test]
    fn null_reads_as_none() {
        assert_eq!(read::<Option<u8>>(json!(null)).unwrap(), None);
        assert_eq!(read::<Option<u8>>(json!(5)).unwrap(), Some(5));
        assert_eq!(None::<u8>.write(&Settings::default()), Value::Null);
        assert!(None::<u8>.is_absent());
        assert!(!Some(0_u8).is_absent());
    }

    #[test]
    fn raw_values_pass_through() {
        let value = json!({"anything": [1, "two", null]});
        assert_eq!(read::<Value>(value.clone()).unwrap(), value);
        assert!(Value::Null.is_absent());
    }
}
