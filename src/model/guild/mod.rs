//! Models relating to guilds and types that it owns.

mod member;

pub use self::member::*;
