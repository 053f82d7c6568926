//! Mappings of objects exchanged with the API for application commands and interactions.
//!
//! Every model implements [`Marshal`], converting it from and to a JSON [`Value`]. Most models
//! are plain structs marshaled through the static schema table returned by [`Entity::schema`].
//!
//! [`Marshal`]: crate::marshal::Marshal
//! [`Entity::schema`]: crate::marshal::Entity::schema
//! [`Value`]: crate::json::Value

pub mod application;
pub mod channel;
pub mod guild;
pub mod id;
pub mod permissions;
pub mod prelude;
mod timestamp;
pub mod user;

pub use self::permissions::Permissions;
pub use self::timestamp::{InvalidTimestamp, ParseError as TimestampParseError, Timestamp};
