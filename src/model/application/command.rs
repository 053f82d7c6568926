use std::collections::HashMap;

use crate::internal::prelude::*;
use crate::model::channel::ChannelType;
use crate::model::id::{
    ApplicationId,
    ChannelId,
    CommandId,
    CommandPermissionId,
    CommandVersionId,
    GuildId,
    RoleId,
    UserId,
};
use crate::model::Permissions;

/// The base command model that belongs to an application.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-structure).
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Command {
    /// The command Id.
    pub id: CommandId,
    /// The parent application Id.
    pub application_id: ApplicationId,
    /// The application command kind. Defaults to [`CommandType::ChatInput`] when absent.
    pub kind: CommandType,
    /// The command name.
    pub name: String,
    /// The command description. Empty for user and message commands.
    pub description: String,
    /// Whether the command is enabled by default when the application is added to a guild.
    ///
    /// Defaults to true.
    pub default_permission: bool,
    /// The parameters for the command.
    pub options: Vec<CommandOption>,
    /// The command guild Id, if it is a guild command.
    pub guild_id: Option<GuildId>,
    /// An autoincremented version identifier updated during substantial record changes.
    pub version: Option<CommandVersionId>,
    /// All localized command names, with locale as key.
    pub name_localizations: Option<HashMap<String, String>>,
    /// All localized command descriptions, with locale as key.
    pub description_localizations: Option<HashMap<String, String>>,
    /// The default permissions required to execute the command.
    pub default_member_permissions: Option<Permissions>,
    /// Indicates whether the command is available in DMs with the app, only for globally-scoped
    /// commands. By default, commands are visible.
    pub dm_permission: Option<bool>,
    /// Indicates whether the command is age-restricted.
    pub nsfw: bool,
}

schema!(Command {
    id: "id" => Required,
    application_id: "application_id" => Required,
    kind: "type" => Optional,
    name: "name" => Required,
    description: "description" => Optional,
    default_permission: "default_permission" => Optional,
    options: "options" => Optional,
    guild_id: "guild_id" => Optional,
    version: "version" => Optional,
    name_localizations: "name_localizations" => Optional,
    description_localizations: "description_localizations" => Optional,
    default_member_permissions: "default_member_permissions" => Optional,
    dm_permission: "dm_permission" => Optional,
    nsfw: "nsfw" => Optional,
});

impl Default for Command {
    fn default() -> Self {
        Self {
            id: CommandId::default(),
            application_id: ApplicationId::default(),
            kind: CommandType::ChatInput,
            name: String::new(),
            description: String::new(),
            default_permission: true,
            options: Vec::new(),
            guild_id: None,
            version: None,
            name_localizations: None,
            description_localizations: None,
            default_member_permissions: None,
            dm_permission: None,
            nsfw: false,
        }
    }
}

impl Command {
    /// Creates a chat input (slash) command.
    ///
    /// # Examples
    ///
    /// Create a command that echoes what is inserted:
    ///
    /// ```rust
    /// use serenity_interactions::model::application::{Command, CommandOption, CommandOptionType};
    ///
    /// let command = Command::chat_input("echo", "Makes the bot send a message").add_option(
    ///     CommandOption::of::<String>("message", "The message to send").required(true),
    /// );
    ///
    /// assert_eq!(command.options[0].kind, CommandOptionType::String);
    /// ```
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Adds an option to the command.
    #[must_use]
    pub fn add_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Looks up a top-level option by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&CommandOption> {
        self.options.iter().find(|option| option.name == name)
    }
}

enum_number! {
    /// The type of an application command.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-types).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
    #[non_exhaustive]
    pub enum CommandType {
        /// Not set yet. Never sent by Discord.
        #[default]
        None = 0,
        ChatInput = 1,
        User = 2,
        Message = 3,
        _ => Unknown(i64),
    }
}

/// The parameters for a [`Command`].
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-option-structure).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CommandOption {
    /// The option type.
    pub kind: CommandOptionType,
    /// The option name.
    pub name: String,
    /// The option description.
    pub description: String,
    /// Whether the parameter is optional or required.
    pub required: bool,
    /// Whether this is the default sub-command. Absent in most payloads, which is kept apart from
    /// an explicit `false`.
    pub default: OptionDefault,
    /// Choices the user must pick from.
    ///
    /// **Note**: Only available for [`String`], [`Integer`] and [`Number`]
    /// [`CommandOptionType`].
    ///
    /// [`String`]: CommandOptionType::String
    /// [`Integer`]: CommandOptionType::Integer
    /// [`Number`]: CommandOptionType::Number
    pub choices: Vec<CommandOptionChoice>,
    /// The nested options.
    ///
    /// **Note**: Only available for [`SubCommand`] or [`SubCommandGroup`].
    ///
    /// [`SubCommand`]: CommandOptionType::SubCommand
    /// [`SubCommandGroup`]: CommandOptionType::SubCommandGroup
    pub options: Vec<CommandOption>,
    /// If the option is a [`Channel`], it will only be able to show these types.
    ///
    /// [`Channel`]: CommandOptionType::Channel
    pub channel_types: Vec<ChannelType>,
    /// Minimum permitted value for Integer or Number options
    pub min_value: Option<f64>,
    /// Maximum permitted value for Integer or Number options
    pub max_value: Option<f64>,
    /// Minimum permitted length for String options
    pub min_length: Option<u16>,
    /// Maximum permitted length for String options
    pub max_length: Option<u16>,
    /// Whether the values of this option are completed through autocomplete interactions.
    pub autocomplete: bool,
    /// Localizations of the option name, with locale as key
    pub name_localizations: Option<HashMap<String, String>>,
    /// Localizations of the option description, with locale as key
    pub description_localizations: Option<HashMap<String, String>>,
}

schema!(CommandOption {
    kind: "type" => Required,
    name: "name" => Required,
    description: "description" => Optional,
    required: "required" => Optional,
    default: "default" => Optional,
    choices: "choices" => Optional,
    options: "options" => Optional,
    channel_types: "channel_types" => Optional,
    min_value: "min_value" => Optional,
    max_value: "max_value" => Optional,
    min_length: "min_length" => Optional,
    max_length: "max_length" => Optional,
    autocomplete: "autocomplete" => Optional,
    name_localizations: "name_localizations" => Optional,
    description_localizations: "description_localizations" => Optional,
});

impl CommandOption {
    /// Creates an option of the given type, with nothing else set.
    pub fn new(kind: CommandOptionType, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Creates an option whose kind is the one matching the Rust type of its values.
    pub fn of<T: OptionKindOf>(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(T::KIND, name, description)
    }

    /// Sets whether the user must fill the option in.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Adds a choice to the option.
    #[must_use]
    pub fn add_choice(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.choices.push(CommandOptionChoice::new(name, value));
        self
    }

    /// Adds a nested option, for sub-commands and sub-command groups.
    #[must_use]
    pub fn add_sub_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// The minimum value, or NaN if none is set.
    #[must_use]
    pub fn min_value_or_nan(&self) -> f64 {
        self.min_value.unwrap_or(f64::NAN)
    }

    /// The maximum value, or NaN if none is set.
    #[must_use]
    pub fn max_value_or_nan(&self) -> f64 {
        self.max_value.unwrap_or(f64::NAN)
    }

    /// Whether the values of all choices are of the kind of this option.
    ///
    /// Integral values are accepted by [`CommandOptionType::Number`] options.
    #[must_use]
    pub fn choices_match_kind(&self) -> bool {
        self.choices.iter().all(|choice| {
            let kind = choice.kind();
            kind == self.kind
                || (self.kind == CommandOptionType::Number && kind == CommandOptionType::Integer)
        })
    }
}

/// The tri-state `default` flag of a [`CommandOption`]. [`Self::Undefined`] is left out of
/// encoded options instead of being sent as `false`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OptionDefault {
    /// Sent as `true`.
    True,
    /// Sent as `false`.
    False,
    /// Not sent.
    #[default]
    Undefined,
}

impl OptionDefault {
    /// The flag as a boolean, if it is defined.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Undefined => None,
        }
    }
}

impl From<bool> for OptionDefault {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<Option<bool>> for OptionDefault {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Undefined, Self::from)
    }
}

impl Resolve for OptionDefault {
    fn read(value: &Value, settings: &Settings) -> StdResult<Self, MarshalError> {
        Option::<bool>::read(value, settings).map(Self::from)
    }

    fn write(&self, _: &Settings) -> Value {
        self.as_bool().map_or(NULL, Value::Bool)
    }

    fn is_absent(&self) -> bool {
        *self == Self::Undefined
    }
}

enum_number! {
    /// The type of an [`CommandOption`].
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-option-type).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
    #[non_exhaustive]
    pub enum CommandOptionType {
        /// Not set yet. Never sent by Discord.
        #[default]
        None = 0,
        SubCommand = 1,
        SubCommandGroup = 2,
        String = 3,
        Integer = 4,
        Boolean = 5,
        User = 6,
        Channel = 7,
        Role = 8,
        Mentionable = 9,
        Number = 10,
        Attachment = 11,
        _ => Unknown(i64),
    }
}

/// Maps a Rust type to the [`CommandOptionType`] of options carrying values of that type.
pub trait OptionKindOf {
    const KIND: CommandOptionType;
}

macro_rules! option_kind_of {
    ($kind:ident: $($ty:ty),*) => {
        $(
            impl OptionKindOf for $ty {
                const KIND: CommandOptionType = CommandOptionType::$kind;
            }
        )*
    };
}

option_kind_of!(String: String, &str);
option_kind_of!(Integer: i8, i16, i32, i64, u8, u16, u32, u64);
option_kind_of!(Number: f32, f64);
option_kind_of!(Boolean: bool);
option_kind_of!(User: UserId);
option_kind_of!(Channel: ChannelId);
option_kind_of!(Role: RoleId);

/// Infers the option kind from the JSON kind of a value: strings are [`String`], integral numbers
/// are [`Integer`], other numbers are [`Number`] and booleans are [`Boolean`]. Anything else is
/// [`None`].
///
/// [`String`]: CommandOptionType::String
/// [`Integer`]: CommandOptionType::Integer
/// [`Number`]: CommandOptionType::Number
/// [`Boolean`]: CommandOptionType::Boolean
/// [`None`]: CommandOptionType::None
#[must_use]
pub fn infer_kind(value: &Value) -> CommandOptionType {
    match value {
        Value::String(_) => CommandOptionType::String,
        Value::Number(n) if n.is_i64() || n.is_u64() => CommandOptionType::Integer,
        Value::Number(_) => CommandOptionType::Number,
        Value::Bool(_) => CommandOptionType::Boolean,
        _ => CommandOptionType::None,
    }
}

/// The only valid values a user can pick in an [`CommandOption`].
///
/// The value is kept as a raw JSON value, since its type depends on the kind of the parent
/// option. Cloning a choice copies the whole value.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-option-choice-structure).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CommandOptionChoice {
    /// The choice name.
    pub name: String,
    /// The choice value.
    pub value: Value,
    /// Localizations of the choice name, with locale as key
    pub name_localizations: Option<HashMap<String, String>>,
}

schema!(CommandOptionChoice {
    name: "name" => Required,
    value: "value" => Required,
    name_localizations: "name_localizations" => Optional,
});

impl CommandOptionChoice {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            name_localizations: None,
        }
    }

    /// Reads the value as the given type.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalErrorKind::TypeMismatch`] if the value is of another kind, such as a
    /// string read as an integer.
    ///
    /// [`MarshalErrorKind::TypeMismatch`]: crate::marshal::MarshalErrorKind::TypeMismatch
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

    /// Replaces the value.
    pub fn set(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Replaces the value with a copy of `value`.
    pub fn set_copy<T: Resolve>(&mut self, value: &T) {
        self.value = value.write(&Settings::default());
    }

    pub fn set_null(&mut self) {
        self.value = NULL;
    }

    /// The option kind matching the current value.
    #[must_use]
    pub fn kind(&self) -> CommandOptionType {
        infer_kind(&self.value)
    }
}

/// The permissions of a [`Command`] in a guild.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-permissions-object-guild-application-command-permissions-structure).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CommandPermissions {
    /// The id of the command.
    pub id: CommandId,
    /// The id of the application the command belongs to.
    pub application_id: ApplicationId,
    /// The id of the guild.
    pub guild_id: GuildId,
    /// The permissions for the command in the guild.
    pub permissions: Vec<CommandPermissionData>,
}

schema!(CommandPermissions {
    id: "id" => Required,
    application_id: "application_id" => Required,
    guild_id: "guild_id" => Required,
    permissions: "permissions" => Required,
});

/// The [`CommandPermissions`] data.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-permissions-object-application-command-permissions-structure).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CommandPermissionData {
    /// The [`RoleId`], [`UserId`] or channel Id, depending on the `kind` value.
    pub id: CommandPermissionId,
    /// The type of data this permissions applies to.
    pub kind: CommandPermissionType,
    /// Whether or not the provided data can use the command or not.
    pub permission: bool,
}

schema!(CommandPermissionData {
    id: "id" => Required,
    kind: "type" => Required,
    permission: "permission" => Required,
});

impl CommandPermissionData {
    /// Allows or denies the command to the members of a role.
    pub fn role(id: RoleId, permission: bool) -> Self {
        Self {
            id: id.into(),
            kind: CommandPermissionType::Role,
            permission,
        }
    }

    /// Allows or denies the command to a user.
    pub fn user(id: UserId, permission: bool) -> Self {
        Self {
            id: id.into(),
            kind: CommandPermissionType::User,
            permission,
        }
    }
}

enum_number! {
    /// The type of an [`CommandPermissionData`].
    ///
    /// Unknown values fail to decode: a permission entry applied to the wrong kind of target would
    /// grant or deny the command to the wrong users.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/application-commands#application-command-permissions-object-application-command-permission-type).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
    pub enum CommandPermissionType {
        #[default]
        Role = 1,
        User = 2,
        Channel = 3,
    }
}
