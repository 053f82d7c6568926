//! User information-related models.

use super::id::UserId;

/// Information about a user, as sent along with interactions and messages.
///
/// [Discord docs](https://discord.com/developers/docs/resources/user#user-object).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct User {
    /// The unique Id of the user. Can be used to calculate the account's creation date.
    pub id: UserId,
    /// The account's username. Changing username will trigger a discriminator change if the
    /// username+discriminator pair becomes non-unique.
    pub name: String,
    /// The account's discriminator to differentiate the user from others with the same
    /// [`Self::name`]. `"0"` for users who migrated to unique usernames.
    pub discriminator: String,
    /// The account's display name, if it is set. For bots this is the application name.
    pub global_name: Option<String>,
    /// Optional avatar hash.
    pub avatar: Option<String>,
    /// Indicator of whether the user is a bot.
    pub bot: bool,
    /// Whether the user is an Official Discord System user (part of the urgent message system).
    pub system: bool,
}

schema!(User {
    id: "id" => Required,
    name: "username" => Required,
    discriminator: "discriminator" => Optional,
    global_name: "global_name" => Optional,
    avatar: "avatar" => Optional,
    bot: "bot" => Optional,
    system: "system" => Optional,
});

impl User {
    /// Returns the name shown for the user: the global name if set, the username otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.name)
    }
}

impl From<User> for UserId {
    /// Gets the Id of a `User`.
    fn from(user: User) -> UserId {
        user.id
    }
}

impl<'a> From<&'a User> for UserId {
    /// Gets the Id of a `User`.
    fn from(user: &User) -> UserId {
        user.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    fn user() -> User {
        User {
            id: UserId(210),
            name: "test".to_string(),
            discriminator: "1432".to_string(),
            global_name: None,
            avatar: Some("a_e3f9".to_string()),
            bot: false,
            system: false,
        }
    }

    #[test]
    fn user_marshaling() {
        assert_json(
            &user(),
            json!({
                "id": "210",
                "username": "test",
                "discriminator": "1432",
                "avatar": "a_e3f9",
                "bot": false,
                "system": false,
            }),
        );
    }

    #[test]
    fn display_name_prefers_the_global_name() {
        let mut user = user();
        assert_eq!(user.display_name(), "test");

        user.global_name = Some("Tester".to_string());
        assert_eq!(user.display_name(), "Tester");
    }
}
