//! Models about application commands and the interactions they create.

mod command;
pub use command::*;
mod component;
pub use component::*;
mod interaction;
pub use interaction::*;
mod response;
pub use response::*;
