//! A set of permissions for a role or user.
//!
//! Commands use them to declare the permissions a member needs to see and invoke them
//! ([`Command::default_member_permissions`]), and interactions carry the permissions of the
//! invoking member and of the application in the channel.
//!
//! Discord sends permission sets as decimal strings, since they no longer fit a 53 bit integer.
//! Bits without a constant here are kept as they are.
//!
//! [`Command::default_member_permissions`]: super::application::Command::default_member_permissions

use bitflags::bitflags;

use crate::internal::prelude::*;

bitflags! {
    /// A set of permissions that can be assigned to users and roles.
    ///
    /// [Discord docs](https://discord.com/developers/docs/topics/permissions#permissions-bitwise-permission-flags).
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialEq)]
    pub struct Permissions: u64 {
        /// Allows for the creation of invites.
        const CREATE_INSTANT_INVITE = 1 << 0;
        /// Allows for the kicking of guild members.
        const KICK_MEMBERS = 1 << 1;
        /// Allows the banning of guild members.
        const BAN_MEMBERS = 1 << 2;
        /// Allows all permissions, bypassing channel permission overwrites.
        const ADMINISTRATOR = 1 << 3;
        /// Allows management and editing of guild channels.
        const MANAGE_CHANNELS = 1 << 4;
        /// Allows management and editing of the guild.
        const MANAGE_GUILD = 1 << 5;
        /// Members with this permission can add new reactions to a message.
        const ADD_REACTIONS = 1 << 6;
        /// Allows viewing a guild's audit logs.
        const VIEW_AUDIT_LOG = 1 << 7;
        /// Allows reading messages in a guild channel. If a user does not have this permission,
        /// then they will not be able to see the channel.
        const VIEW_CHANNEL = 1 << 10;
        /// Allows sending messages in a guild channel.
        const SEND_MESSAGES = 1 << 11;
        /// Allows the sending of text-to-speech messages in a channel.
        const SEND_TTS_MESSAGES = 1 << 12;
        /// Allows the deleting of other messages in a guild channel.
        ///
        /// **Note**: This does not allow the editing of other messages.
        const MANAGE_MESSAGES = 1 << 13;
        /// Allows links from this user - or users of this role - to be embedded.
        const EMBED_LINKS = 1 << 14;
        /// Allows uploading of files.
        const ATTACH_FILES = 1 << 15;
        /// Allows the reading of a channel's message history.
        const READ_MESSAGE_HISTORY = 1 << 16;
        /// Allows the usage of the `@everyone` mention.
        const MENTION_EVERYONE = 1 << 17;
        /// Allows the usage of custom emojis from other guilds.
        const USE_EXTERNAL_EMOJIS = 1 << 18;
        /// Allows members to change their own nickname in the guild.
        const CHANGE_NICKNAME = 1 << 26;
        /// Allows members to change other members' nicknames.
        const MANAGE_NICKNAMES = 1 << 27;
        /// Allows management and editing of roles below their own.
        const MANAGE_ROLES = 1 << 28;
        /// Allows management of webhooks.
        const MANAGE_WEBHOOKS = 1 << 29;
        /// Allows using slash commands and context menu commands.
        const USE_APPLICATION_COMMANDS = 1 << 31;
        /// Allows for deleting and archiving threads, and viewing all private threads.
        const MANAGE_THREADS = 1 << 34;
        /// Allows for timing out users.
        const MODERATE_MEMBERS = 1 << 40;
    }
}

impl Resolve for Permissions {
    fn read(value: &Value, settings: &Settings) -> StdResult<Self, MarshalError> {
        let bits = match value {
            Value::String(s) => s.parse().map_err(|_| {
                MarshalError::invalid_value("permissions", format!("{s:?} is not a decimal bit set"))
            })?,
            Value::Number(_) => u64::read(value, settings)?,
            _ => return Err(MarshalError::type_mismatch("permissions string", value)),
        };

        Ok(Self::from_bits_retain(bits))
    }

    fn write(&self, _: &Settings) -> Value {
        Value::String(self.bits().to_string())
    }
}
