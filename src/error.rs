use std::error::Error as StdError;
use std::fmt;

use crate::json::JsonError;
use crate::marshal::MarshalError;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one type, rather than the
/// usual 2 (`Result<T, Error>`). This is because all functions that return a result return
/// the crate's [`Error`], so this is implied, and a "simpler" result is used.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A common error enum returned by most of the library's functionality within a custom
/// [`Result`].
///
/// The most common error, the [`MarshalError`], is wrapped in the [`Self::Marshal`] variant and
/// carries the path of the field that failed.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An error while converting between a typed model and its JSON value.
    Marshal(MarshalError),
    /// An error from the `serde_json` crate, raised while parsing or printing JSON text.
    Json(JsonError),
}

impl From<MarshalError> for Error {
    fn from(e: MarshalError) -> Error {
        Error::Marshal(e)
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Error {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marshal(inner) => fmt::Display::fmt(&inner, f),
            Self::Json(inner) => fmt::Display::fmt(&inner, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Marshal(inner) => Some(inner),
            Self::Json(inner) => Some(inner),
        }
    }
}
