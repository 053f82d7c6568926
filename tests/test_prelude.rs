#![allow(unused_imports)]

use serenity_interactions::prelude::{MarshalingError, Marshal, Entity, Settings, DecodePolicy};

// model re-exports
use serenity_interactions::prelude::{Command, Interaction, InteractionResponse, Timestamp, UserId};
