//! A collection of newtypes defining type-strong IDs.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::Timestamp;
use crate::internal::prelude::*;

macro_rules! id_u64 {
    ($($name:ident;)*) => {
        $(
            impl $name {
                /// Creates a new Id from a u64.
                #[must_use]
                pub const fn new(id: u64) -> Self {
                    Self(id)
                }

                /// Retrieves the inner `id` as a [`u64`].
                #[must_use]
                pub const fn get(self) -> u64 {
                    self.0
                }

                /// Retrieves the time that the Id was created at.
                #[must_use]
                pub fn created_at(&self) -> Timestamp {
                    Timestamp::from_discord_id(self.0)
                }
            }

            impl From<u64> for $name {
                fn from(id: u64) -> $name {
                    $name(id)
                }
            }

            impl From<$name> for u64 {
                fn from(id: $name) -> u64 {
                    id.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }

            impl FromStr for $name {
                type Err = ParseIntError;

                fn from_str(s: &str) -> StdResult<Self, Self::Err> {
                    s.parse().map(Self)
                }
            }

            impl Resolve for $name {
                fn read(value: &Value, settings: &Settings) -> StdResult<Self, MarshalError> {
                    read_snowflake(value, settings).map(Self)
                }

                fn write(&self, _: &Settings) -> Value {
                    Value::String(self.0.to_string())
                }
            }
        )*
    }
}

/// Snowflakes are sent as decimal strings, but plain integers are accepted too.
fn read_snowflake(value: &Value, settings: &Settings) -> StdResult<u64, MarshalError> {
    match value {
        Value::String(s) => s
            .parse()
            .map_err(|why: ParseIntError| MarshalError::invalid_value("snowflake", format!("{s:?}: {why}"))),
        Value::Number(_) => u64::read(value, settings),
        _ => Err(MarshalError::type_mismatch("snowflake", value)),
    }
}

/// An identifier for an Application.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ApplicationId(pub u64);

/// An identifier for a Channel
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ChannelId(pub u64);

/// An identifier for a slash command.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CommandId(pub u64);

/// An identifier for a slash command permission Id. Can contain a [`RoleId`] or [`UserId`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CommandPermissionId(pub u64);

/// An identifier for a slash command version Id.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CommandVersionId(pub u64);

/// An identifier for an entity whose kind is only known from context, such as the value of a
/// mentionable or attachment command option.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct GenericId(pub u64);

/// An identifier for a Guild
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct GuildId(pub u64);

/// An identifier for an Interaction.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct InteractionId(pub u64);

/// An identifier for a Message
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct MessageId(pub u64);

/// An identifier for a Role
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct RoleId(pub u64);

/// An identifier for the target of a context menu command: a [`UserId`] or a [`MessageId`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct TargetId(pub u64);

/// An identifier for a User
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct UserId(pub u64);

id_u64! {
    ApplicationId;
    ChannelId;
    CommandId;
    CommandPermissionId;
    CommandVersionId;
    GenericId;
    GuildId;
    InteractionId;
    MessageId;
    RoleId;
    TargetId;
    UserId;
}

impl TargetId {
    /// Converts this [`TargetId`] to [`UserId`].
    #[must_use]
    pub fn to_user_id(self) -> UserId {
        self.0.into()
    }

    /// Converts this [`TargetId`] to [`MessageId`].
    #[must_use]
    pub fn to_message_id(self) -> MessageId {
        self.0.into()
    }
}

impl From<MessageId> for TargetId {
    fn from(id: MessageId) -> Self {
        Self(id.0)
    }
}

impl From<UserId> for TargetId {
    fn from(id: UserId) -> Self {
        Self(id.0)
    }
}

impl From<TargetId> for MessageId {
    fn from(id: TargetId) -> Self {
        Self(id.0)
    }
}

impl From<TargetId> for UserId {
    fn from(id: TargetId) -> Self {
        Self(id.0)
    }
}

impl CommandPermissionId {
    /// Converts this [`CommandPermissionId`] to [`UserId`].
    #[must_use]
    pub fn to_user_id(self) -> UserId {
        self.0.into()
    }

    /// Converts this [`CommandPermissionId`] to [`RoleId`].
    #[must_use]
    pub fn to_role_id(self) -> RoleId {
        self.0.into()
    }
}

impl From<RoleId> for CommandPermissionId {
    fn from(id: RoleId) -> Self {
        Self(id.0)
    }
}

impl From<UserId> for CommandPermissionId {
    fn from(id: UserId) -> Self {
        Self(id.0)
    }
}

impl From<CommandPermissionId> for RoleId {
    fn from(id: CommandPermissionId) -> Self {
        Self(id.0)
    }
}

impl From<CommandPermissionId> for UserId {
    fn from(id: CommandPermissionId) -> Self {
        Self(id.0)
    }
}
