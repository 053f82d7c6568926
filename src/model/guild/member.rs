use crate::model::prelude::*;

/// Information about a member of a guild, as sent with interactions invoked in a guild.
///
/// [Discord docs](https://discord.com/developers/docs/resources/guild#guild-member-object).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Member {
    /// Attached User struct. Left out when the member is nested in a [`Message`] mention.
    pub user: Option<User>,
    /// The member's nickname, if present.
    ///
    /// Can't be longer than 32 characters.
    pub nick: Option<String>,
    /// The guild avatar hash
    pub avatar: Option<String>,
    /// Vector of Ids of roles given to the member.
    pub roles: Vec<RoleId>,
    /// Timestamp representing the date when the member joined.
    pub joined_at: Option<Timestamp>,
    /// Timestamp representing the date since the member is boosting the guild.
    pub premium_since: Option<Timestamp>,
    /// Indicator of whether the member can hear in voice channels.
    pub deaf: bool,
    /// Indicator of whether the member can speak in voice channels.
    pub mute: bool,
    /// Indicator that the member hasn't accepted the rules of the guild yet.
    pub pending: bool,
    /// The total permissions of the member in the channel an interaction was invoked in.
    pub permissions: Option<Permissions>,
}

schema!(Member {
    user: "user" => Optional,
    nick: "nick" => Optional,
    avatar: "avatar" => Optional,
    roles: "roles" => Optional,
    joined_at: "joined_at" => Optional,
    premium_since: "premium_since" => Optional,
    deaf: "deaf" => Optional,
    mute: "mute" => Optional,
    pending: "pending" => Optional,
    permissions: "permissions" => Optional,
});

impl Member {
    /// Returns the nickname of the member if set, falling back to the name of the user.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.nick.as_deref().or_else(|| self.user.as_ref().map(User::display_name))
    }

    /// Whether the member has been given the role.
    #[must_use]
    pub fn has_role(&self, role_id: impl Into<RoleId>) -> bool {
        self.roles.contains(&role_id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::json;
    use crate::marshal::Marshal;

    #[test]
    fn member_with_permissions() {
        let member = Member::decode(&json!({
            "user": {"id": "53908232506183680", "username": "Mason", "discriminator": "0"},
            "nick": null,
            "roles": ["539082325061836999"],
            "joined_at": "2017-03-13T19:19:14.040000+00:00",
            "deaf": false,
            "mute": false,
            "permissions": "2147483647",
        }))
        .unwrap();

        assert_eq!(member.display_name(), Some("Mason"));
        assert!(member.has_role(RoleId(539082325061836999)));
        assert_eq!(member.joined_at.unwrap().unix_timestamp(), 1489432754);
        assert!(member.permissions.unwrap().contains(Permissions::ADMINISTRATOR));
    }
}
