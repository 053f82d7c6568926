use super::command::{CommandOptionType, CommandType};
use super::component::ComponentType;
use crate::constants::INTERACTION_VERSION;
use crate::internal::prelude::*;
use crate::model::prelude::*;

/// An interaction received by the application: a command invocation, a component click, an
/// autocomplete request, or a ping.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-structure).
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Interaction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    pub application_id: ApplicationId,
    /// The type of interaction.
    pub kind: InteractionType,
    /// The data of the interaction. Absent for pings.
    pub data: Option<InteractionData>,
    /// The guild Id this interaction was sent from, if there is one.
    pub guild_id: Option<GuildId>,
    /// The channel Id this interaction was sent from.
    pub channel_id: Option<ChannelId>,
    /// The `member` data for the invoking user.
    ///
    /// **Note**: It is only present if the interaction is triggered in a guild.
    pub member: Option<Member>,
    /// The `user` object for the invoking user.
    ///
    /// **Note**: It is only present if the interaction is triggered in DMs.
    pub user: Option<User>,
    /// A continuation token for responding to the interaction.
    pub token: String,
    /// Always `1`.
    pub version: u8,
    /// The message the component was attached to, for component interactions.
    pub message: Option<Box<Message>>,
    /// The selected language of the invoking user.
    pub locale: Option<String>,
    /// The guild's preferred locale.
    pub guild_locale: Option<String>,
    /// Permissions the app or bot has within the channel the interaction was sent from.
    pub app_permissions: Option<Permissions>,
}

schema!(Interaction {
    id: "id" => Required,
    application_id: "application_id" => Optional,
    kind: "type" => Required,
    data: "data" => Optional,
    guild_id: "guild_id" => Optional,
    channel_id: "channel_id" => Optional,
    member: "member" => Optional,
    user: "user" => Optional,
    token: "token" => Optional,
    version: "version" => Optional,
    message: "message" => Optional,
    locale: "locale" => Optional,
    guild_locale: "guild_locale" => Optional,
    app_permissions: "app_permissions" => Optional,
});

impl Default for Interaction {
    fn default() -> Self {
        Self {
            id: InteractionId::default(),
            application_id: ApplicationId::default(),
            kind: InteractionType::default(),
            data: None,
            guild_id: None,
            channel_id: None,
            member: None,
            user: None,
            token: String::new(),
            version: INTERACTION_VERSION,
            message: None,
            locale: None,
            guild_locale: None,
            app_permissions: None,
        }
    }
}

impl Interaction {
    /// The invoking user: the member's user in guilds, the user otherwise.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.member.as_ref().and_then(|member| member.user.as_ref()).or(self.user.as_ref())
    }

    /// Whether the interaction was triggered in a guild.
    #[must_use]
    pub fn is_guild(&self) -> bool {
        self.guild_id.is_some()
    }
}

enum_number! {
    /// The type of an Interaction.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-type).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
    #[non_exhaustive]
    pub enum InteractionType {
        #[default]
        Ping = 1,
        ApplicationCommand = 2,
        MessageComponent = 3,
        Autocomplete = 4,
        ModalSubmit = 5,
        _ => Unknown(i64),
    }
}

/// The data of an [`Interaction`]. Which fields are set depends on the interaction type: command
/// fields for command and autocomplete interactions, component fields for component ones.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-data).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InteractionData {
    /// The Id of the invoked command.
    pub id: Option<CommandId>,
    /// The name of the invoked command.
    pub name: Option<String>,
    /// The application command type of the triggered application command.
    pub kind: Option<CommandType>,
    /// The parameters and the given values. The converted objects from the given options.
    pub options: Vec<InteractionDataOption>,
    /// The custom id of the component.
    pub custom_id: Option<String>,
    /// The type of the component.
    pub component_type: Option<ComponentType>,
    /// The given values of the [`SelectMenu`]s
    ///
    /// [`SelectMenu`]: ComponentType::StringSelect
    pub values: Vec<String>,
    /// The targeted user or message, if the triggered application command type is [`User`] or
    /// [`Message`].
    ///
    /// [`User`]: CommandType::User
    /// [`Message`]: CommandType::Message
    pub target_id: Option<TargetId>,
}

schema!(InteractionData {
    id: "id" => Optional,
    name: "name" => Optional,
    kind: "type" => Optional,
    options: "options" => Optional,
    custom_id: "custom_id" => Optional,
    component_type: "component_type" => Optional,
    values: "values" => Optional,
    target_id: "target_id" => Optional,
});

impl InteractionData {
    /// Returns the focused option of an autocomplete interaction, searching nested options of
    /// sub-commands too.
    #[must_use]
    pub fn focused_option(&self) -> Option<&InteractionDataOption> {
        fn find_focused(options: &[InteractionDataOption]) -> Option<&InteractionDataOption> {
            options.iter().find_map(|option| {
                if option.focused {
                    Some(option)
                } else {
                    find_focused(&option.options)
                }
            })
        }

        find_focused(&self.options)
    }

    /// Looks up a top-level option by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&InteractionDataOption> {
        self.options.iter().find(|option| option.name == name)
    }
}

/// A set of a parameter and a value from the user.
///
/// All options have names and an option can either be a parameter and input `value` or it can
/// denote a sub-command or group, in which case it will contain a top-level key and another
/// vector of `options`.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-application-command-interaction-data-option-structure).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InteractionDataOption {
    /// The name of the parameter.
    pub name: String,
    /// The given type.
    pub kind: CommandOptionType,
    /// The value given by the user. Its type depends on [`Self::kind`]; for the focused option of
    /// an autocomplete interaction it is the partial input as a string.
    pub value: Value,
    /// The nested options.
    ///
    /// **Note**: It is only present if the option is a group or a subcommand.
    pub options: Vec<InteractionDataOption>,
    /// Whether this is the option the user is currently typing in an autocomplete interaction.
    pub focused: bool,
}

schema!(InteractionDataOption {
    name: "name" => Optional,
    kind: "type" => Optional,
    value: "value" => Optional,
    options: "options" => Optional,
    focused: "focused" => Optional,
});

/// The value of an [`InteractionDataOption`], typed by the option kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum OptionValue<'a> {
    /// The partial input of the focused option of an autocomplete interaction.
    Autocomplete { kind: CommandOptionType, value: &'a str },
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(&'a str),
    SubCommand(&'a [InteractionDataOption]),
    SubCommandGroup(&'a [InteractionDataOption]),
    Attachment(GenericId),
    Channel(ChannelId),
    Mentionable(GenericId),
    Role(RoleId),
    User(UserId),
    Unknown(i64),
}

impl InteractionDataOption {
    /// Reads the value as the given type.
    ///
    /// # Errors
    ///
    /// Returns a [`MarshalError`] if the value is of another kind.
    pub fn get<T: Resolve>(&self) -> StdResult<T, MarshalError> {
        T::read(&self.value, &Settings::default()).map_err(|why| why.at_key("value"))
    }

    /// Reads the value into `target`, returning whether it succeeded. On failure `target` is not
    /// modified.
    pub fn get_into<T: Resolve>(&self, target: &mut T) -> bool {
        match self.get() {
            Ok(value) => {
                *target = value;
                true
            },
            Err(_) => false,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_str()
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.get().ok()
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    /// Converts the value according to [`Self::kind`].
    ///
    /// # Errors
    ///
    /// Returns a [`MarshalError`] if the value does not fit the kind of the option.
    pub fn resolved(&self) -> StdResult<OptionValue<'_>, MarshalError> {
        if self.focused {
            let value = self.value.as_str().ok_or_else(|| {
                MarshalError::type_mismatch("string", &self.value).at_key("value")
            })?;

            return Ok(OptionValue::Autocomplete {
                kind: self.kind,
                value,
            });
        }

        Ok(match self.kind {
            CommandOptionType::SubCommand => OptionValue::SubCommand(&self.options),
            CommandOptionType::SubCommandGroup => OptionValue::SubCommandGroup(&self.options),
            CommandOptionType::String => OptionValue::String(self.value.as_str().ok_or_else(|| {
                MarshalError::type_mismatch("string", &self.value).at_key("value")
            })?),
            CommandOptionType::Integer => OptionValue::Integer(self.get()?),
            CommandOptionType::Boolean => OptionValue::Boolean(self.get()?),
            CommandOptionType::Number => OptionValue::Number(self.get()?),
            CommandOptionType::User => OptionValue::User(self.get()?),
            CommandOptionType::Channel => OptionValue::Channel(self.get()?),
            CommandOptionType::Role => OptionValue::Role(self.get()?),
            CommandOptionType::Mentionable => OptionValue::Mentionable(self.get()?),
            CommandOptionType::Attachment => OptionValue::Attachment(self.get()?),
            CommandOptionType::None => OptionValue::Unknown(0),
            CommandOptionType::Unknown(code) => OptionValue::Unknown(code),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};
    use crate::marshal::MarshalErrorKind;

    #[test]
    fn ping() {
        let interaction = Interaction::decode(&json!({
            "id": "1",
            "application_id": "2",
            "type": 1,
            "token": "abc",
            "version": 1,
        }))
        .unwrap();

        assert_eq!(interaction.kind, InteractionType::Ping);
        assert_eq!(interaction.data, None);
        assert_eq!(interaction.user(), None);
        assert_eq!(interaction.version, 1);
    }

    #[test]
    fn version_defaults_to_one() {
        let interaction = Interaction::decode(&json!({"id": "1", "type": 2})).unwrap();

        assert_eq!(interaction.version, INTERACTION_VERSION);
        assert_eq!(interaction.kind, InteractionType::ApplicationCommand);
    }

    #[test]
    fn missing_type_fails() {
        let why = Interaction::decode(&json!({"id": "1"})).unwrap_err();

        assert_eq!(why.kind(), &MarshalErrorKind::MissingField("type"));
    }

    #[test]
    fn unknown_interaction_type_is_kept() {
        let interaction = Interaction::decode(&json!({"id": "1", "type": 77})).unwrap();

        assert_eq!(interaction.kind, InteractionType::Unknown(77));
    }

    #[test]
    fn negative_interaction_type_is_kept() {
        let interaction = Interaction::decode(&json!({"id": "1", "type": -1})).unwrap();

        assert_eq!(interaction.kind, InteractionType::Unknown(-1));
        assert_eq!(interaction.encode()["type"], -1);

        let why = Interaction::decode(&json!({"id": "1", "type": 1.5})).unwrap_err();
        assert_eq!(why.path(), "type");
    }

    #[test]
    fn options_without_a_type_still_decode() {
        let value = json!({
            "name": "cmd",
            "options": [{"name": "a", "value": 1}, {"name": "b", "type": 3, "value": "x"}],
        });

        let data = InteractionData::decode(&value).unwrap();
        assert_eq!(data.options.len(), 2);
        assert_eq!(data.options[0].kind, CommandOptionType::None);
        assert_eq!(data.options[0].as_i64(), Some(1));
        assert_eq!(data.option("b").unwrap().resolved().unwrap(), OptionValue::String("x"));
    }

    #[test]
    fn lenient_decoding_keeps_the_well_formed_options() {
        let value = json!({
            "name": "cmd",
            "options": ["oops", {"name": 5}, {"name": "b", "type": 3, "value": "x"}],
        });

        let why = InteractionData::decode(&value).unwrap_err();
        assert_eq!(why.path(), "options[0]");

        let data = InteractionData::decode_with(&value, &Settings::lenient()).unwrap();
        assert_eq!(data.options.len(), 2);
        assert_eq!(data.options[0].name, "");
        assert_eq!(data.options[1].name, "b");
        assert_eq!(data.options[1].resolved().unwrap(), OptionValue::String("x"));
    }

    #[test]
    fn nested_options() {
        let option = InteractionDataOption {
            name: "subcommand_group".into(),
            kind: CommandOptionType::SubCommandGroup,
            value: NULL,
            options: vec![InteractionDataOption {
                name: "subcommand".into(),
                kind: CommandOptionType::SubCommand,
                value: NULL,
                options: vec![InteractionDataOption {
                    name: "channel".into(),
                    kind: CommandOptionType::Channel,
                    value: json!("3"),
                    options: vec![],
                    focused: false,
                }],
                focused: false,
            }],
            focused: false,
        };

        assert_json(
            &option,
            json!({
                "name": "subcommand_group",
                "type": 2,
                "focused": false,
                "options": [{
                    "name": "subcommand",
                    "type": 1,
                    "focused": false,
                    "options": [{"name": "channel", "type": 7, "value": "3", "options": [], "focused": false}],
                }]
            }),
        );

        let OptionValue::SubCommandGroup(inner) = option.resolved().unwrap() else {
            panic!("expected a sub-command group");
        };
        let OptionValue::SubCommand(inner) = inner[0].resolved().unwrap() else {
            panic!("expected a sub-command");
        };
        assert_eq!(inner[0].resolved().unwrap(), OptionValue::Channel(ChannelId(3)));
    }

    #[test]
    fn typed_option_values() {
        let data = InteractionData::decode(&json!({
            "id": "5",
            "name": "settings",
            "type": 1,
            "options": [
                {"name": "boolean", "type": 5, "value": true},
                {"name": "integer", "type": 4, "value": 1},
                {"name": "number", "type": 10, "value": 2.5},
                {"name": "string", "type": 3, "value": "foobar"},
                {"name": "user", "type": 6, "value": "7"},
            ],
        }))
        .unwrap();

        assert_eq!(data.option("boolean").unwrap().as_bool(), Some(true));
        assert_eq!(data.option("integer").unwrap().resolved().unwrap(), OptionValue::Integer(1));
        assert_eq!(data.option("number").unwrap().as_f64(), Some(2.5));
        assert_eq!(data.option("string").unwrap().as_str(), Some("foobar"));
        assert_eq!(data.option("user").unwrap().resolved().unwrap(), OptionValue::User(UserId(7)));

        let mut count = 0_i64;
        assert!(!data.option("string").unwrap().get_into(&mut count));
        assert!(data.option("integer").unwrap().get_into(&mut count));
        assert_eq!(count, 1);
        assert!(data.focused_option().is_none());
    }

    #[test]
    fn malformed_option_values_fail_to_resolve() {
        let option = InteractionDataOption::decode(&json!({"name": "n", "type": 4, "value": "x"})).unwrap();

        let why = option.resolved().unwrap_err();
        assert_eq!(why.path(), "value");
    }

    #[test]
    fn focused_option_is_found_in_sub_commands() {
        let data = InteractionData::decode(&json!({
            "name": "search",
            "type": 1,
            "options": [{
                "name": "books",
                "type": 1,
                "options": [
                    {"name": "author", "type": 3, "value": "Ada"},
                    {"name": "year", "type": 4, "value": "19", "focused": true},
                ],
            }],
        }))
        .unwrap();

        let focused = data.focused_option().unwrap();
        assert_eq!(focused.name, "year");
        assert_eq!(focused.resolved().unwrap(), OptionValue::Autocomplete {
            kind: CommandOptionType::Integer,
            value: "19",
        });
    }
}
