//! Serenity-interactions converts Discord application command and interaction models from and to
//! JSON values.
//!
//! Each model is a plain Rust type implementing [`Marshal`]. Structs list their fields in a
//! static [`Schema`] table, naming the JSON key of every field and whether it must be present;
//! the field values are converted by the [`Resolve`] implementation of their type. Decoding
//! errors carry the path of the value that failed, such as `options[0].choices[1].value`.
//!
//! Responses to interactions are envelopes whose payload type depends on their callback type.
//! [`InteractionResponse`] picks the payload type from the callback type while decoding, and
//! [`Response`] fixes it at compile time.
//!
//! # Examples
//!
//! ```rust
//! use serenity_interactions::json::json;
//! use serenity_interactions::prelude::*;
//!
//! let value = json!({
//!     "id": "1",
//!     "application_id": "2",
//!     "type": 1,
//!     "name": "ping",
//!     "description": "Replies with pong",
//! });
//!
//! let command = Command::decode(&value)?;
//! assert_eq!(command.name, "ping");
//! assert_eq!(command.encode()["id"], "1");
//! # Ok::<(), serenity_interactions::Error>(())
//! ```
//!
//! Note that, although this documentation will try to be as up-to-date and accurate as possible,
//! Discord hosts [official documentation][docs]. If you need to be sure that some information
//! piece is sanctioned by Discord, refer to their own documentation.
//!
//! [`Marshal`]: crate::marshal::Marshal
//! [`Schema`]: crate::marshal::Schema
//! [`Resolve`]: crate::marshal::Resolve
//! [`InteractionResponse`]: crate::model::application::InteractionResponse
//! [`Response`]: crate::model::application::Response
//! [docs]: https://discord.com/developers/docs/interactions/application-commands
#![doc(html_root_url = "https://docs.rs/serenity-interactions/*")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::non_ascii_literal,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::unreadable_literal,
    clippy::cast_possible_wrap,
    clippy::wildcard_imports,
    clippy::cast_sign_loss,
    clippy::too_many_lines,
    clippy::doc_markdown,
    clippy::missing_panics_doc,
    clippy::doc_link_with_quotes
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
mod internal;

pub mod constants;
pub mod json;
pub mod marshal;
pub mod model;
pub mod prelude;

mod error;

pub use crate::error::{Error, Result};
