//! Utilities for parsing and formatting RFC 3339 timestamps.
//!
//! # Formatting
//! ```
//! # use serenity_interactions::model::id::GuildId;
//! # use serenity_interactions::model::Timestamp;
//! #
//! let timestamp: Timestamp = GuildId(175928847299117063).created_at();
//! assert_eq!(timestamp.unix_timestamp(), 1462015105);
//! assert_eq!(timestamp.to_string(), "2016-04-30T11:18:25.796Z");
//! ```
//!
//! # Parsing RFC 3339 string
//! ```
//! # use serenity_interactions::model::Timestamp;
//! #
//! let timestamp = Timestamp::parse("2016-04-30T11:18:25Z").unwrap();
//! let timestamp = Timestamp::parse("2016-04-30T11:18:25+00:00").unwrap();
//! let timestamp: Timestamp = "2016-04-30T11:18:25.796Z".parse().unwrap();
//!
//! assert!(Timestamp::parse("2016-04-30T11:18:25").is_err());
//! assert!(Timestamp::parse("2016-04-30T11:18").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use dep_time::error::Parse as InnerError;
use dep_time::format_description::well_known::Rfc3339;
use dep_time::{Duration, OffsetDateTime};

use crate::constants::DISCORD_EPOCH;
use crate::internal::prelude::*;

/// Representation of a Unix timestamp.
///
/// The struct implements the `std::fmt::Display` trait to format the underlying type as an RFC
/// 3339 date and string such as `2016-04-30T11:18:25.796Z`. It is marshaled as that string.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub(crate) fn from_discord_id(id: u64) -> Timestamp {
        // `(u64::MAX >> 22) + DISCORD_EPOCH` still fits an i64 of milliseconds.
        Self(OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(((id >> 22) + DISCORD_EPOCH) as i64))
    }

    /// Create a new `Timestamp` from a UNIX timestamp.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is out of the supported range.
    pub fn from_unix_timestamp(secs: i64) -> Result<Self, InvalidTimestamp> {
        let dt = OffsetDateTime::from_unix_timestamp(secs).map_err(|_| InvalidTimestamp)?;
        Ok(Self(dt))
    }

    /// Returns the number of non-leap seconds since January 1, 1970 0:00:00 UTC
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0.unix_timestamp()
    }

    /// Parse a timestamp from an RFC 3339 date and time string.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a valid RFC 3339 date and time string.
    pub fn parse(input: &str) -> Result<Timestamp, ParseError> {
        OffsetDateTime::parse(input, &Rfc3339).map(Self).map_err(ParseError)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self(OffsetDateTime::UNIX_EPOCH)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::ops::Deref for Timestamp {
    type Target = OffsetDateTime;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(dt: OffsetDateTime) -> Self {
        Self(dt)
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

impl Resolve for Timestamp {
    fn read(value: &Value, _: &Settings) -> StdResult<Self, MarshalError> {
        let s = value.as_str().ok_or_else(|| MarshalError::type_mismatch("timestamp string", value))?;
        Timestamp::parse(s).map_err(|why| MarshalError::invalid_value("timestamp", why.to_string()))
    }

    fn write(&self, _: &Settings) -> Value {
        Value::String(self.to_string())
    }
}

#[derive(Debug)]
pub struct InvalidTimestamp;

impl std::error::Error for InvalidTimestamp {}

impl fmt::Display for InvalidTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid UNIX timestamp value")
    }
}

/// Signifies the failure to parse the `Timestamp` from an RFC 3339 string.
#[derive(Debug)]
pub struct ParseError(InnerError);

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;
    use crate::internal::prelude::*;
    use crate::json::json;
    use crate::marshal::MarshalErrorKind;

    #[test]
    fn from_unix_timestamp() {
        let timestamp = Timestamp::from_unix_timestamp(1462015105).unwrap();
        assert_eq!(timestamp.unix_timestamp(), 1462015105);
        assert_eq!(timestamp.to_string(), "2016-04-30T11:18:25Z");
    }

    #[test]
    fn resolves_from_rfc3339_strings() {
        let settings = Settings::default();
        let timestamp = Timestamp::read(&json!("2021-08-10T12:38:33.157Z"), &settings).unwrap();
        assert_eq!(timestamp.unix_timestamp(), 1628599113);
        assert_eq!(timestamp.write(&settings), json!("2021-08-10T12:38:33.157Z"));

        let why = Timestamp::read(&json!("yesterday"), &settings).unwrap_err();
        assert!(matches!(why.kind(), MarshalErrorKind::InvalidValue { expected: "timestamp", .. }));

        let why = Timestamp::read(&json!(1628599113), &settings).unwrap_err();
        assert!(matches!(why.kind(), MarshalErrorKind::TypeMismatch { .. }));
    }
}
