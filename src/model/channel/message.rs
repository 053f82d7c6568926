//! Models relating to Discord channels.

use bitflags::bitflags;

use crate::internal::prelude::*;
use crate::model::application::Component;
use crate::model::prelude::*;

/// A representation of a message over a guild's text channel, a group, or a private channel.
///
/// Interactions of components carry the message the component is attached to.
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#message-object).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Message {
    /// The unique Id of the message. Can be used to calculate the creation date of the message.
    pub id: MessageId,
    /// The Id of the [`Channel`] that the message was sent to.
    ///
    /// [`Channel`]: https://discord.com/developers/docs/resources/channel#channel-object
    pub channel_id: ChannelId,
    /// The Id of the guild that the message was sent in.
    pub guild_id: Option<GuildId>,
    /// The user that sent the message.
    pub author: User,
    /// The content of the message.
    pub content: String,
    /// Initial message creation timestamp, calculated from its Id.
    pub timestamp: Timestamp,
    /// The timestamp of the last time the message was updated, if it was.
    pub edited_timestamp: Option<Timestamp>,
    /// Indicator of whether the command is to be played back via text-to-speech.
    ///
    /// In the client, this is done via the `/tts` slash command.
    pub tts: bool,
    /// Indicator of whether the message mentions everyone.
    pub mention_everyone: bool,
    /// Array of embeds sent with the message.
    pub embeds: Vec<Embed>,
    /// Array of message action rows.
    pub components: Vec<Component>,
    /// Indicator of whether the message is pinned.
    pub pinned: bool,
    /// The message flags.
    pub flags: Option<MessageFlags>,
    /// The Id of the application that sent the message, for interaction responses.
    pub application_id: Option<ApplicationId>,
}

schema!(Message {
    id: "id" => Required,
    channel_id: "channel_id" => Required,
    guild_id: "guild_id" => Optional,
    author: "author" => Required,
    content: "content" => Optional,
    timestamp: "timestamp" => Required,
    edited_timestamp: "edited_timestamp" => Optional,
    tts: "tts" => Optional,
    mention_everyone: "mention_everyone" => Optional,
    embeds: "embeds" => Optional,
    components: "components" => Optional,
    pinned: "pinned" => Optional,
    flags: "flags" => Optional,
    application_id: "application_id" => Optional,
});

impl Message {
    /// Whether the message was sent by the given application as an interaction response.
    #[must_use]
    pub fn is_from_application(&self, application_id: ApplicationId) -> bool {
        self.application_id == Some(application_id)
    }

    /// Whether the message is only visible to the user who invoked the interaction.
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.flags.is_some_and(|flags| flags.contains(MessageFlags::EPHEMERAL))
    }
}

bitflags! {
    /// Describes extra features of the message.
    ///
    /// [Discord docs](https://discord.com/developers/docs/resources/channel#message-object-message-flags).
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// This message has been published to subscribed channels (via Channel Following).
        const CROSSPOSTED = 1 << 0;
        /// This message originated from a message in another channel (via Channel Following).
        const IS_CROSSPOST = 1 << 1;
        /// Do not include any embeds when serializing this message.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// This message is only visible to the user who invoked the Interaction.
        const EPHEMERAL = crate::constants::EPHEMERAL_FLAG;
        /// This message is an Interaction Response and the bot is "thinking".
        const LOADING = 1 << 7;
        /// This message will not trigger push and desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
    }
}

impl Resolve for MessageFlags {
    fn read(value: &Value, settings: &Settings) -> StdResult<Self, MarshalError> {
        u64::read(value, settings).map(Self::from_bits_retain)
    }

    fn write(&self, _: &Settings) -> Value {
        Value::from(self.bits())
    }
}

/// A mention type that is parsed from the content of a message.
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#allowed-mentions-object-allowed-mention-types).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ParseValue {
    Everyone,
    Users,
    Roles,
}

impl ParseValue {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Everyone => "everyone",
            Self::Users => "users",
            Self::Roles => "roles",
        }
    }
}

impl Resolve for ParseValue {
    fn read(value: &Value, _: &Settings) -> StdResult<Self, MarshalError> {
        match value.as_str() {
            Some("everyone") => Ok(Self::Everyone),
            Some("users") => Ok(Self::Users),
            Some("roles") => Ok(Self::Roles),
            Some(other) => Err(MarshalError::invalid_value("mention type", format!("{other:?}"))),
            None => Err(MarshalError::type_mismatch("string", value)),
        }
    }

    fn write(&self, _: &Settings) -> Value {
        Value::from(self.name())
    }
}

/// Controls which mentions in the content of a sent message notify their target.
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#allowed-mentions-object).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AllowedMentions {
    /// The mention types to parse from the content.
    pub parse: Vec<ParseValue>,
    /// Users that are allowed to be mentioned.
    pub users: Vec<UserId>,
    /// Roles that are allowed to be mentioned.
    pub roles: Vec<RoleId>,
    /// Whether the author of the message being replied to is mentioned.
    pub replied_user: Option<bool>,
}

schema!(AllowedMentions {
    parse: "parse" => Optional,
    users: "users" => Optional,
    roles: "roles" => Optional,
    replied_user: "replied_user" => Optional,
});

impl AllowedMentions {
    /// Allowed mentions that never notify anyone.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Allows the given mention type to be parsed from the content.
    #[must_use]
    pub fn parse(mut self, value: ParseValue) -> Self {
        if !self.parse.contains(&value) {
            self.parse.push(value);
        }
        self
    }

    /// Allows the given user to be mentioned.
    #[must_use]
    pub fn user(mut self, user_id: impl Into<UserId>) -> Self {
        self.users.push(user_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn allowed_mentions() {
        let mentions = AllowedMentions::none().parse(ParseValue::Roles).user(UserId(7));

        assert_json(
            &mentions,
            json!({"parse": ["roles"], "users": ["7"], "roles": []}),
        );

        let why = AllowedMentions::decode(&json!({"parse": ["here"]})).unwrap_err();
        assert_eq!(why.path(), "parse[0]");
    }

    #[test]
    fn message_flags_keep_unknown_bits() {
        let settings = Settings::default();
        let flags = MessageFlags::read(&json!(64 | 4096 | (1 << 30)), &settings).unwrap();

        assert!(flags.contains(MessageFlags::EPHEMERAL | MessageFlags::SUPPRESS_NOTIFICATIONS));
        assert_eq!(flags.write(&settings), json!(64 | 4096 | (1 << 30)));
    }

    #[test]
    fn component_message() {
        let message = Message::decode(&json!({
            "id": "1",
            "channel_id": "2",
            "author": {"id": "3", "username": "bot", "bot": true},
            "content": "Pick one",
            "timestamp": "2021-08-10T12:38:33.157Z",
            "flags": 64,
            "application_id": "4",
            "components": [{
                "type": 1,
                "components": [{"type": 2, "style": 1, "label": "Yes", "custom_id": "yes"}],
            }],
        }))
        .unwrap();

        assert!(message.is_ephemeral());
        assert!(message.is_from_application(ApplicationId(4)));
        assert!(message.author.bot);
        assert_eq!(message.components[0].components[0].custom_id.as_deref(), Some("yes"));
    }
}
