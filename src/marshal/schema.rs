//! Schema tables and the struct marshaler that runs them.

use tracing::{trace, warn};

use super::error::{MarshalError, ValueKind};
use super::resolve::Resolve;
use super::settings::{DecodePolicy, Settings};
use crate::json::{JsonMap, Value};

/// Whether a field must be present in the decoded object.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Presence {
    /// Absence fails the decode with [`MarshalErrorKind::MissingField`].
    ///
    /// [`MarshalErrorKind::MissingField`]: super::MarshalErrorKind::MissingField
    Required,
    /// Absence (or `null`) leaves the field at its current value.
    Optional,
}

/// The binding of one struct field to a JSON key.
pub struct Field<T: 'static> {
    pub(crate) key: &'static str,
    pub(crate) presence: Presence,
    pub(crate) decode: fn(&mut T, &Value, &Settings) -> Result<(), MarshalError>,
    pub(crate) encode: fn(&T, Presence, &Settings) -> Option<Value>,
}

impl<T> Field<T> {
    /// The JSON key of the field.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Whether the field must be present when decoding.
    #[must_use]
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Shorthand for a [`Presence::Required`] field.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

/// The ordered field list of an entity type.
///
/// Tables are `static` items generated by the `schema!` macro. The order of the fields is the
/// order of the keys in encoded objects; decoding looks fields up by key.
pub struct Schema<T: 'static> {
    pub(crate) name: &'static str,
    pub(crate) fields: &'static [Field<T>],
}

impl<T> Schema<T> {
    /// The name of the entity type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The fields, in encoding order.
    #[must_use]
    pub fn fields(&self) -> &'static [Field<T>] {
        self.fields
    }

    /// Looks up the field bound to the given key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&'static Field<T>> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Encodes the entity as an object, with one key per field in table order.
    ///
    /// Optional fields holding an absent value are left out, and so are empty ones if
    /// [`Settings::omit_empty`] is set. Required fields are always written.
    pub fn encode(&self, source: &T, settings: &Settings) -> Value {
        let mut map = JsonMap::new();
        for field in self.fields {
            if let Some(value) = (field.encode)(source, field.presence, settings) {
                map.insert(field.key.to_owned(), value);
            }
        }

        Value::Object(map)
    }

    fn decode_fields(
        &self,
        target: &mut T,
        value: &Value,
        settings: &Settings,
    ) -> Result<(), MarshalError> {
        let map =
            value.as_object().ok_or_else(|| MarshalError::shape_mismatch(ValueKind::Object, value))?;

        for field in self.fields {
            let raw = match (map.get(field.key), field.presence) {
                (None, Presence::Required) => return Err(MarshalError::missing_field(field.key)),
                (None | Some(Value::Null), Presence::Optional) => continue,
                (Some(raw), _) => raw,
            };

            if let Err(why) = (field.decode)(target, raw, settings) {
                let why = why.at_key(field.key);
                if settings.policy == DecodePolicy::Lenient && field.presence == Presence::Optional {
                    warn!(entity = self.name, error = %why, "dropping malformed optional field");
                    continue;
                }

                return Err(why);
            }
        }

        Ok(())
    }
}

impl<T: Default> Schema<T> {
    /// Decodes an object into a new entity.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalErrorKind::ShapeMismatch`] if the value is not an object,
    /// [`MarshalErrorKind::MissingField`] if a required field is absent, or the error of the
    /// first field that fails to decode, wrapped with its path.
    ///
    /// [`MarshalErrorKind::ShapeMismatch`]: super::MarshalErrorKind::ShapeMismatch
    /// [`MarshalErrorKind::MissingField`]: super::MarshalErrorKind::MissingField
    #[cfg_attr(feature = "tracing_instrument", tracing::instrument(skip_all, fields(entity = self.name)))]
    pub fn decode(&self, value: &Value, settings: &Settings) -> Result<T, MarshalError> {
        trace!(entity = self.name, "decoding");

        let mut target = T::default();
        self.decode_fields(&mut target, value, settings)?;
        Ok(target)
    }
}

impl<T: Clone> Schema<T> {
    /// Decodes an object over an existing entity. Optional fields absent from the object keep
    /// their current values.
    ///
    /// The object is decoded into a copy which replaces the target only once every field
    /// succeeded, so a failed merge leaves the target untouched.
    ///
    /// # Errors
    ///
    /// Same as [`Self::decode`].
    pub fn merge(&self, target: &mut T, value: &Value, settings: &Settings) -> Result<(), MarshalError> {
        let mut staged = target.clone();
        self.decode_fields(&mut staged, value, settings)?;
        *target = staged;
        Ok(())
    }
}

/// Encodes one field for a schema table, or returns `None` when it is left out.
#[doc(hidden)]
pub fn encode_field<F: Resolve>(field: &F, presence: Presence, settings: &Settings) -> Option<Value> {
    let omitted = field.is_absent() || (settings.omit_empty && field.is_empty());
    if presence == Presence::Optional && omitted {
        return None;
    }

    Some(field.write(settings))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::json::json;
    use crate::marshal::{Entity, Marshal, MarshalErrorKind};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Sample {
        id: u64,
        label: String,
        tags: Vec<String>,
        weight: Option<f64>,
        nested: Option<Inner>,
        extra: HashMap<String, String>,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Inner {
        count: u8,
    }

    schema!(Sample {
        id: "id" => Required,
        label: "label" => Optional,
        tags: "tags" => Optional,
        weight: "weight" => Optional,
        nested: "nested" => Optional,
        extra: "extra" => Optional,
    });

    schema!(Inner {
        count: "count" => Required,
    });

    #[test]
    fn table_keeps_declaration_order() {
        let keys: Vec<_> = Sample::schema().fields().iter().map(Field::key).collect();

        assert_eq!(keys, ["id", "label", "tags", "weight", "nested", "extra"]);
        assert_eq!(Sample::schema().name(), "Sample");
        assert!(Sample::schema().field("id").unwrap().is_required());
        assert!(Sample::schema().field("missing").is_none());
    }

    #[test]
    fn decode_requires_an_object() {
        let why = Sample::decode(&json!([1, 2])).unwrap_err();

        assert_eq!(
            why.kind(),
            &MarshalErrorKind::ShapeMismatch {
                expected: ValueKind::Object,
                found: ValueKind::Array,
            }
        );
    }

    #[test]
    fn absent_optional_fields_keep_their_default() {
        let sample = Sample::decode(&json!({"id": 3, "weight": null})).unwrap();

        assert_eq!(sample, Sample {
            id: 3,
            ..Sample::default()
        });
    }

    #[test]
    fn missing_required_field_fails() {
        let why = Sample::decode(&json!({"label": "x"})).unwrap_err();
        assert_eq!(why.kind(), &MarshalErrorKind::MissingField("id"));

        let why = Sample::decode(&json!({"id": 1, "nested": {}})).unwrap_err();
        assert_eq!(why.to_string(), "nested: missing field `count`");
    }

    #[test]
    fn nested_failures_carry_the_path() {
        let why = Sample::decode(&json!({"id": 1, "tags": ["a", 2]})).unwrap_err();

        assert_eq!(why.path(), "tags[1]");
    }

    #[test]
    fn lenient_policy_drops_malformed_optional_fields() {
        let value = json!({"id": 1, "label": "kept", "tags": "not a list", "nested": {"count": "x"}});

        let sample = Sample::decode_with(&value, &Settings::lenient()).unwrap();
        assert_eq!(sample.label, "kept");
        assert!(sample.tags.is_empty());
        assert_eq!(sample.nested, None);

        let why = Sample::decode_with(&json!({"id": "x"}), &Settings::lenient()).unwrap_err();
        assert_eq!(why.path(), "id");
    }

    #[test]
    fn encode_skips_absent_optionals_only() {
        let sample = Sample {
            id: 9,
            ..Sample::default()
        };

        assert_eq!(sample.encode(), json!({"id": 9, "label": "", "tags": [], "extra": {}}));

        let mut settings = Settings::default();
        settings.omit_empty = true;
        assert_eq!(sample.encode_with(&settings), json!({"id": 9}));
    }

    #[test]
    fn encoded_text_follows_table_order() {
        let sample = Sample {
            id: 9,
            label: "x".into(),
            weight: Some(1.5),
            extra: HashMap::from([("k".to_string(), "v".to_string())]),
            ..Sample::default()
        };

        assert_eq!(
            sample.to_json_string().unwrap(),
            r#"{"id":9,"label":"x","tags":[],"weight":1.5,"extra":{"k":"v"}}"#
        );
    }

    #[test]
    fn encoding_is_idempotent_and_round_trips() {
        let sample = Sample {
            id: 1,
            label: "x".into(),
            tags: vec!["b".into(), "a".into()],
            weight: Some(0.5),
            nested: Some(Inner {
                count: 2,
            }),
            extra: HashMap::from([("k".to_string(), "v".to_string())]),
        };

        let first = sample.encode();
        assert_eq!(first, sample.encode());
        assert_eq!(Sample::decode(&first).unwrap(), sample);

        let mut settings = Settings::default();
        settings.omit_empty = true;
        assert_eq!(Sample::decode(&sample.encode_with(&settings)).unwrap(), sample);
    }

    #[test]
    fn failed_merge_leaves_the_target_untouched() {
        let mut sample = Sample {
            id: 1,
            label: "before".into(),
            ..Sample::default()
        };

        let why = sample.merge(&json!({"id": 2, "label": "after", "tags": [1]})).unwrap_err();
        assert_eq!(why.path(), "tags[0]");
        assert_eq!(sample.id, 1);
        assert_eq!(sample.label, "before");

        sample.merge(&json!({"id": 2})).unwrap();
        assert_eq!(sample.id, 2);
        assert_eq!(sample.label, "before");
    }

    #[test]
    fn tables_are_shared_between_threads() {
        let value = json!({"id": 5, "tags": ["x"]});

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let value = value.clone();
                std::thread::spawn(move || Sample::decode(&value).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().tags, ["x"]);
        }
    }
}
