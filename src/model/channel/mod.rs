//! Models relating to channels and types within channels.

mod embed;
mod message;

pub use self::embed::*;
pub use self::message::*;

enum_number! {
    /// A representation of a type of channel.
    ///
    /// Used by channel options of commands to restrict the selectable channels.
    ///
    /// [Discord docs](https://discord.com/developers/docs/resources/channel#channel-object-channel-types).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
    #[non_exhaustive]
    pub enum ChannelType {
        /// An indicator that the channel is a text guild channel.
        #[default]
        Text = 0,
        /// An indicator that the channel is a private channel.
        Private = 1,
        /// An indicator that the channel is a voice guild channel.
        Voice = 2,
        /// An indicator that the channel is a group DM.
        GroupDm = 3,
        /// An indicator that the channel is a channel category.
        Category = 4,
        /// An indicator that the channel is a `NewsChannel`.
        News = 5,
        /// An indicator that the channel is a news thread.
        NewsThread = 10,
        /// An indicator that the channel is a public thread.
        PublicThread = 11,
        /// An indicator that the channel is a private thread.
        PrivateThread = 12,
        /// An indicator that the channel is a stage channel.
        Stage = 13,
        /// An indicator that the channel is a directory of guilds in a hub.
        Directory = 14,
        /// An indicator that the channel is a forum channel.
        Forum = 15,
        /// An indicator that the channel is a media channel.
        Media = 16,
        _ => Unknown(i64),
    }
}

impl ChannelType {
    #[must_use]
    pub const fn name(&self) -> &str {
        match *self {
            Self::Private => "private",
            Self::Text => "text",
            Self::Voice => "voice",
            Self::GroupDm => "group_dm",
            Self::Category => "category",
            Self::News => "news",
            Self::NewsThread => "news_thread",
            Self::PublicThread => "public_thread",
            Self::PrivateThread => "private_thread",
            Self::Stage => "stage",
            Self::Directory => "directory",
            Self::Forum => "forum",
            Self::Media => "media",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Whether the type is one of the thread types.
    #[must_use]
    pub const fn is_thread(&self) -> bool {
        matches!(self, Self::NewsThread | Self::PublicThread | Self::PrivateThread)
    }
}

#[cfg(test)]
mod tests {
    use super::ChannelType;
    use crate::internal::prelude::*;
    use crate::json::json;

    #[test]
    fn unknown_channel_types_keep_their_code() {
        let settings = Settings::default();

        let kind = ChannelType::read(&json!(99), &settings).unwrap();
        assert_eq!(kind, ChannelType::Unknown(99));
        assert_eq!(kind.name(), "unknown");
        assert_eq!(kind.write(&settings), json!(99));

        assert_eq!(ChannelType::read(&json!(11), &settings).unwrap(), ChannelType::PublicThread);
        assert!(ChannelType::PublicThread.is_thread());
    }
}
