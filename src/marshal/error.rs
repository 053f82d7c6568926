//! Error type for the marshaling layer, carrying the path to the field that failed.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::json::Value;

/// The kind of a JSON value, as seen by the marshaler.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Returns the kind of the given value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// The name used for the kind in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One step of the path from the decoded root value to the failing field.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathSegment {
    /// An object key.
    Key(Cow<'static, str>),
    /// An array index.
    Index(usize),
}

/// The condition behind a [`MarshalError`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum MarshalErrorKind {
    /// A required field was absent from the object.
    MissingField(&'static str),
    /// A container of the wrong kind was found, such as an array where an object was expected.
    ShapeMismatch { expected: ValueKind, found: ValueKind },
    /// A leaf of the wrong kind was found and no coercion applies.
    TypeMismatch { expected: &'static str, found: ValueKind },
    /// A closed enum received a code it does not define.
    UnknownCode { name: &'static str, code: u64 },
    /// A callback type code has no payload mapping and passthrough is disabled, or the `None`
    /// sentinel was about to be sent.
    UnknownDiscriminator(i64),
    /// A payload was paired with a callback type code that carries another payload type.
    PayloadMismatch(i64),
    /// The leaf has the right kind but its content can't be parsed.
    InvalidValue { expected: &'static str, reason: String },
}

impl fmt::Display for MarshalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(key) => write!(f, "missing field `{key}`"),
            Self::ShapeMismatch {
                expected,
                found,
            } => write!(f, "expected {expected}, found {found}"),
            Self::TypeMismatch {
                expected,
                found,
            } => write!(f, "expected {expected}, found {found}"),
            Self::UnknownCode {
                name,
                code,
            } => write!(f, "unknown {name} value: {code}"),
            Self::UnknownDiscriminator(code) => {
                write!(f, "callback type {code} has no payload mapping")
            },
            Self::PayloadMismatch(code) => {
                write!(f, "payload does not belong to callback type {code}")
            },
            Self::InvalidValue {
                expected,
                reason,
            } => write!(f, "invalid {expected}: {reason}"),
        }
    }
}

/// An error returned while decoding a value into a model, or while building a response envelope.
///
/// Errors raised inside nested fields are wrapped with the key or index of every enclosing
/// container, so [`Self::path`] points at the exact value that failed:
///
/// ```rust
/// use serenity_interactions::json::json;
/// use serenity_interactions::marshal::Marshal;
/// use serenity_interactions::model::application::Command;
///
/// let value = json!({
///     "id": "1",
///     "application_id": "2",
///     "name": "ping",
///     "options": [{"type": 3, "name": 5}],
/// });
///
/// let why = Command::decode(&value).unwrap_err();
/// assert_eq!(why.path(), "options[0].name");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MarshalError {
    kind: MarshalErrorKind,
    // Innermost segment first; segments are appended while the error unwinds.
    path: Vec<PathSegment>,
}

impl MarshalError {
    #[must_use]
    pub fn new(kind: MarshalErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    #[must_use]
    pub fn missing_field(key: &'static str) -> Self {
        Self::new(MarshalErrorKind::MissingField(key))
    }

    #[must_use]
    pub fn shape_mismatch(expected: ValueKind, found: &Value) -> Self {
        Self::new(MarshalErrorKind::ShapeMismatch {
            expected,
            found: ValueKind::of(found),
        })
    }

    #[must_use]
    pub fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        Self::new(MarshalErrorKind::TypeMismatch {
            expected,
            found: ValueKind::of(found),
        })
    }

    #[must_use]
    pub fn unknown_code(name: &'static str, code: u64) -> Self {
        Self::new(MarshalErrorKind::UnknownCode {
            name,
            code,
        })
    }

    #[must_use]
    pub fn invalid_value(expected: &'static str, reason: impl Into<String>) -> Self {
        Self::new(MarshalErrorKind::InvalidValue {
            expected,
            reason: reason.into(),
        })
    }

    /// Wraps the error with the object key it was raised under.
    #[must_use]
    pub fn at_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.path.push(PathSegment::Key(key.into()));
        self
    }

    /// Wraps the error with the array index it was raised under.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push(PathSegment::Index(index));
        self
    }

    #[must_use]
    pub fn kind(&self) -> &MarshalErrorKind {
        &self.kind
    }

    /// The path segments from the root value down to the failing one.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.path.iter().rev()
    }

    /// The path from the root value to the failing one, such as `options[0].choices[1].value`.
    ///
    /// Empty if the root value itself failed.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in self.segments() {
            match segment {
                PathSegment::Key(key) => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(key);
                },
                PathSegment::Index(index) => {
                    path.push('[');
                    path.push_str(&index.to_string());
                    path.push(']');
                },
            }
        }
        path
    }
}

impl From<MarshalErrorKind> for MarshalError {
    fn from(kind: MarshalErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            fmt::Display::fmt(&self.kind, f)
        } else {
            write!(f, "{}: {}", self.path(), self.kind)
        }
    }
}

impl StdError for MarshalError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::json;

    #[test]
    fn path_is_rendered_root_first() {
        let why = MarshalError::type_mismatch("string", &json!(5))
            .at_key("value")
            .at_index(1)
            .at_key("choices")
            .at_index(0)
            .at_key("options");

        assert_eq!(why.path(), "options[0].choices[1].value");
        assert_eq!(why.to_string(), "options[0].choices[1].value: expected string, found number");
    }

    #[test]
    fn root_errors_have_no_path() {
        let why = MarshalError::shape_mismatch(ValueKind::Object, &json!([]));

        assert_eq!(why.path(), "");
        assert_eq!(why.to_string(), "expected object, found array");
        assert_eq!(
            why.kind(),
            &MarshalErrorKind::ShapeMismatch {
                expected: ValueKind::Object,
                found: ValueKind::Array,
            }
        );
    }

    #[test]
    fn missing_field_names_the_key() {
        let why = MarshalError::missing_field("name").at_index(2).at_key("options");

        assert_eq!(why.to_string(), "options[2]: missing field `name`");
    }
}
