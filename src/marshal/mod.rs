//! The schema-driven conversion layer between models and JSON values.
//!
//! Every model implements [`Marshal`]. Plain structs get their implementation from a static
//! [`Schema`] table listing each field's JSON key and [`Presence`]; the values of the single
//! fields are converted by [`Resolve`] implementations picked from the field types.

mod error;
mod resolve;
mod schema;
mod settings;

pub use self::error::{MarshalError, MarshalErrorKind, PathSegment, ValueKind};
pub use self::resolve::Resolve;
#[doc(hidden)]
pub use self::schema::encode_field;
pub use self::schema::{Field, Presence, Schema};
pub use self::settings::{DecodePolicy, Settings};
use crate::json::{self, Value};

/// A type that can be decoded from and encoded to a JSON value.
pub trait Marshal: Sized {
    /// Decodes a value using the given settings.
    ///
    /// # Errors
    ///
    /// Returns a [`MarshalError`] naming the path of the first field that failed.
    fn decode_with(value: &Value, settings: &Settings) -> Result<Self, MarshalError>;

    /// Encodes the model using the given settings.
    fn encode_with(&self, settings: &Settings) -> Value;

    /// Decodes a value using the default settings.
    ///
    /// # Errors
    ///
    /// Returns a [`MarshalError`] naming the path of the first field that failed.
    fn decode(value: &Value) -> Result<Self, MarshalError> {
        Self::decode_with(value, &Settings::default())
    }

    /// Encodes the model using the default settings.
    fn encode(&self) -> Value {
        self.encode_with(&Settings::default())
    }

    /// Decodes a value and replaces `self` with the result. On failure `self` is left as it was.
    ///
    /// # Errors
    ///
    /// Returns a [`MarshalError`] naming the path of the first field that failed.
    fn decode_into(&mut self, value: &Value) -> Result<(), MarshalError> {
        *self = Self::decode(value)?;
        Ok(())
    }

    /// Parses JSON text and decodes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not valid JSON, or [`Error::Marshal`] if the
    /// parsed value does not fit the model.
    ///
    /// [`Error::Json`]: crate::Error::Json
    /// [`Error::Marshal`]: crate::Error::Marshal
    fn from_json_str(s: &str) -> crate::Result<Self> {
        Self::from_json_str_with(s, &Settings::default())
    }

    /// Parses JSON text and decodes it using the given settings.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_json_str`].
    fn from_json_str_with(s: &str, settings: &Settings) -> crate::Result<Self> {
        let value: Value = json::from_str(s)?;
        Ok(Self::decode_with(&value, settings)?)
    }

    /// Encodes the model and prints it as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if printing fails.
    ///
    /// [`Error::Json`]: crate::Error::Json
    fn to_json_string(&self) -> crate::Result<String> {
        json::to_string(&self.encode())
    }
}

/// Raw values marshal as themselves.
impl Marshal for Value {
    fn decode_with(value: &Value, _: &Settings) -> Result<Self, MarshalError> {
        Ok(value.clone())
    }

    fn encode_with(&self, _: &Settings) -> Value {
        self.clone()
    }
}

/// A plain struct model, marshaled through its [`Schema`] table.
pub trait Entity: Marshal + Default + 'static {
    /// The schema table of this type.
    fn schema() -> &'static Schema<Self>;

    /// Decodes an object over this entity: fields present in the object are replaced, absent
    /// optional fields keep their values.
    ///
    /// # Errors
    ///
    /// Returns a [`MarshalError`] if any field fails, in which case `self` is not modified.
    fn merge(&mut self, value: &Value) -> Result<(), MarshalError>
    where
        Self: Clone,
    {
        self.merge_with(value, &Settings::default())
    }

    /// Like [`Self::merge`], using the given settings.
    ///
    /// # Errors
    ///
    /// Returns a [`MarshalError`] if any field fails, in which case `self` is not modified.
    fn merge_with(&mut self, value: &Value, settings: &Settings) -> Result<(), MarshalError>
    where
        Self: Clone,
    {
        Self::schema().merge(self, value, settings)
    }
}
