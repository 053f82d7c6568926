//! This module exports the JSON value types the marshaling layer works on.
//!
//! The generic value tree is `serde_json`'s; this module only names it once so the rest of the
//! crate does not depend on the concrete backend.

use serde::de::Deserialize;
use serde::ser::Serialize;

use crate::Result;

pub type Value = serde_json::Value;

pub use serde_json::json;
pub use serde_json::Error as JsonError;

pub type JsonMap = serde_json::Map<String, Value>;

pub const NULL: Value = Value::Null;

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn to_string<T>(v: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string(v)?)
}

#[allow(clippy::missing_errors_doc)] // It's obvious
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(s)?)
}

#[cfg(test)]
#[track_caller]
pub(crate) fn assert_json<T>(data: &T, json: Value)
where
    T: crate::marshal::Marshal + PartialEq + std::fmt::Debug,
{
    // test encoding
    let encoded = data.encode();
    assert!(encoded == json, "data->JSON encoding failed\nexpected: {json:?}\n     got: {encoded:?}");

    // test decoding
    let decoded = T::decode(&json).unwrap();
    assert!(
        &decoded == data,
        "JSON->data decoding failed\nexpected: {data:?}\n     got: {decoded:?}"
    );
}
