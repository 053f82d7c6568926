//! A set of exports which can be helpful to use.
//!
//! Note that the `MarshalingError` re-export is equivalent to [`serenity_interactions::Error`],
//! although is re-exported as a separate name to remove likely ambiguity with other crate error
//! enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use serenity_interactions::prelude::*;
//! ```
//!
//! [`serenity_interactions::Error`]: crate::Error

pub use crate::error::Error as MarshalingError;
pub use crate::marshal::{DecodePolicy, Entity, Marshal, MarshalError, MarshalErrorKind, Settings};
pub use crate::model::prelude::*;
