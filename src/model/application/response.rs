//! Responses to interactions.
//!
//! A response is an envelope of a [`CallbackType`] and a `data` payload whose type is determined
//! by the callback type: nothing for [`Pong`], a [`ResponseMessage`] for the message callbacks,
//! and an [`AutocompleteResult`] for autocomplete results.
//!
//! [`InteractionResponse`] holds any of them, with the payload type picked from the callback
//! type while decoding. [`Response`] fixes the callback type at compile time through one of the
//! marker types in [`callback`].
//!
//! [`Pong`]: CallbackType::Pong

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use super::command::CommandOptionChoice;
use super::component::Component;
use crate::internal::prelude::*;
use crate::marshal::{MarshalErrorKind, ValueKind};
use crate::model::channel::{AllowedMentions, Embed, MessageFlags};

enum_number! {
    /// The type of an interaction response.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-interaction-callback-type).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
    #[non_exhaustive]
    pub enum CallbackType {
        /// Not a valid callback type. It is the type of payloads without a callback of their
        /// own, such as raw values, and responses of this type can't be sent.
        #[default]
        None = 0,
        /// ACK a ping.
        Pong = 1,
        /// Respond to an interaction with a message.
        ChannelMessageWithSource = 4,
        /// ACK an interaction and edit a response later, the user sees a loading state.
        DeferredChannelMessageWithSource = 5,
        /// For components, ACK an interaction and edit the original message later; the user does
        /// not see a loading state.
        DeferredUpdateMessage = 6,
        /// For components, edit the message the component was attached to.
        UpdateMessage = 7,
        /// Respond to an autocomplete interaction with suggested choices.
        ApplicationCommandAutocompleteResult = 8,
        /// Respond to an interaction with a popup modal.
        Modal = 9,
        _ => Unknown(i64),
    }
}

impl CallbackType {
    /// Whether the callback type has a typed payload. Responses of other types keep their payload
    /// as a raw value.
    #[must_use]
    pub const fn has_payload_mapping(self) -> bool {
        matches!(
            self,
            Self::Pong
                | Self::ChannelMessageWithSource
                | Self::DeferredChannelMessageWithSource
                | Self::DeferredUpdateMessage
                | Self::UpdateMessage
                | Self::ApplicationCommandAutocompleteResult
        )
    }
}

/// The payload of a [`CallbackType::Pong`] response.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct EmptyData {}

schema!(EmptyData {});

/// The message sent as, or edited by, an interaction response.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-messages).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResponseMessage {
    /// Whether the message is text-to-speech.
    pub tts: bool,
    /// The message content.
    pub content: Option<String>,
    /// Up to 10 embeds.
    pub embeds: Vec<Embed>,
    /// Controls which mentions in the content notify their target.
    pub allowed_mentions: Option<AllowedMentions>,
    /// Message flags. Only [`MessageFlags::SUPPRESS_EMBEDS`] and [`MessageFlags::EPHEMERAL`] can
    /// be set.
    pub flags: Option<MessageFlags>,
    /// The action rows of the message.
    pub components: Vec<Component>,
}

schema!(ResponseMessage {
    tts: "tts" => Optional,
    content: "content" => Optional,
    embeds: "embeds" => Optional,
    allowed_mentions: "allowed_mentions" => Optional,
    flags: "flags" => Optional,
    components: "components" => Optional,
});

impl ResponseMessage {
    /// Creates a message with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self::default().content(content)
    }

    /// Sets the content of the message.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets whether the message is text-to-speech.
    #[must_use]
    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Appends an embed to the message.
    #[must_use]
    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Sets the action rows of the message.
    #[must_use]
    pub fn components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    /// Sets which mentions in the content notify their target.
    #[must_use]
    pub fn allowed_mentions(mut self, allowed_mentions: AllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    /// Makes the message visible only to the user who invoked the interaction.
    #[must_use]
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        let mut flags = self.flags.unwrap_or_default();
        flags.set(MessageFlags::EPHEMERAL, ephemeral);
        self.flags = (!flags.is_empty()).then_some(flags);
        self
    }

    /// Whether nothing is set on the message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The choices suggested in response to an autocomplete interaction.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-autocomplete).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AutocompleteResult {
    /// Up to 25 choices.
    pub choices: Vec<CommandOptionChoice>,
}

schema!(AutocompleteResult {
    choices: "choices" => Required,
});

impl AutocompleteResult {
    /// Suggests a choice of a string option.
    #[must_use]
    pub fn add_string_choice(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.choices.push(CommandOptionChoice::new(name, value.into()));
        self
    }

    /// Suggests a choice of an integer option.
    #[must_use]
    pub fn add_int_choice(mut self, name: impl Into<String>, value: i64) -> Self {
        self.choices.push(CommandOptionChoice::new(name, value));
        self
    }

    /// Suggests a choice of a number option.
    #[must_use]
    pub fn add_number_choice(mut self, name: impl Into<String>, value: f64) -> Self {
        self.choices.push(CommandOptionChoice::new(name, value));
        self
    }
}

/// A payload of an interaction response, knowing its own canonical callback type.
pub trait CallbackData: Marshal {
    /// The callback type used when the payload is sent on its own, through
    /// [`InteractionResponse::from_data`]. [`CallbackType::None`] for payloads which need an
    /// explicit callback type.
    const CALLBACK_TYPE: CallbackType = CallbackType::None;

    /// Pairs the payload with a callback type.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalErrorKind::PayloadMismatch`] if the callback type carries another
    /// payload type.
    fn into_response(self, kind: CallbackType) -> StdResult<InteractionResponse, MarshalError>;
}

fn payload_mismatch(kind: CallbackType) -> MarshalError {
    MarshalError::new(MarshalErrorKind::PayloadMismatch(kind.into()))
}

impl CallbackData for EmptyData {
    const CALLBACK_TYPE: CallbackType = CallbackType::Pong;

    fn into_response(self, kind: CallbackType) -> StdResult<InteractionResponse, MarshalError> {
        match kind {
            CallbackType::Pong => Ok(InteractionResponse::Pong),
            kind => Err(payload_mismatch(kind)),
        }
    }
}

impl CallbackData for ResponseMessage {
    const CALLBACK_TYPE: CallbackType = CallbackType::ChannelMessageWithSource;

    fn into_response(self, kind: CallbackType) -> StdResult<InteractionResponse, MarshalError> {
        Ok(match kind {
            CallbackType::ChannelMessageWithSource => {
                InteractionResponse::ChannelMessageWithSource(self)
            },
            CallbackType::DeferredChannelMessageWithSource => {
                InteractionResponse::DeferredChannelMessageWithSource(self)
            },
            CallbackType::DeferredUpdateMessage => InteractionResponse::DeferredUpdateMessage(self),
            CallbackType::UpdateMessage => InteractionResponse::UpdateMessage(self),
            kind => return Err(payload_mismatch(kind)),
        })
    }
}

impl CallbackData for AutocompleteResult {
    const CALLBACK_TYPE: CallbackType = CallbackType::ApplicationCommandAutocompleteResult;

    fn into_response(self, kind: CallbackType) -> StdResult<InteractionResponse, MarshalError> {
        match kind {
            CallbackType::ApplicationCommandAutocompleteResult => {
                Ok(InteractionResponse::Autocomplete(self))
            },
            kind => Err(payload_mismatch(kind)),
        }
    }
}

/// Raw payloads are decoded into the payload type of the callback type, if it has one.
impl CallbackData for Value {
    fn into_response(self, kind: CallbackType) -> StdResult<InteractionResponse, MarshalError> {
        let data = (!self.is_null()).then_some(&self);
        InteractionResponse::from_parts(kind, data, &Settings::default())
            .map_err(|why| why.at_key("data"))
    }
}

/// A callback type known at compile time, and the payload type it carries.
pub trait CallbackKind {
    const TYPE: CallbackType;
    type Data: CallbackData + Clone + fmt::Debug + Default + PartialEq;

    /// Wraps a payload into the matching [`InteractionResponse`] variant.
    fn wrap(data: Self::Data) -> InteractionResponse;
}

/// Marker types of the callback types with a payload mapping.
pub mod callback {
    use super::{
        AutocompleteResult,
        CallbackKind,
        CallbackType,
        EmptyData,
        InteractionResponse,
        ResponseMessage,
    };

    macro_rules! callback_kinds {
        ($($(#[$attr:meta])* $name:ident($data:ty) => $wrap:expr;)*) => {
            $(
                $(#[$attr])*
                #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
                pub struct $name;

                impl CallbackKind for $name {
                    const TYPE: CallbackType = CallbackType::$name;
                    type Data = $data;

                    fn wrap(data: Self::Data) -> InteractionResponse {
                        $wrap(data)
                    }
                }
            )*
        };
    }

    callback_kinds! {
        /// ACK of a ping.
        Pong(EmptyData) => |_| InteractionResponse::Pong;
        ChannelMessageWithSource(ResponseMessage) => InteractionResponse::ChannelMessageWithSource;
        DeferredChannelMessageWithSource(ResponseMessage) => InteractionResponse::DeferredChannelMessageWithSource;
        DeferredUpdateMessage(ResponseMessage) => InteractionResponse::DeferredUpdateMessage;
        UpdateMessage(ResponseMessage) => InteractionResponse::UpdateMessage;
        ApplicationCommandAutocompleteResult(AutocompleteResult) => InteractionResponse::Autocomplete;
    }
}

/// Reads the callback type of a response envelope.
fn read_callback_type(map: &JsonMap, settings: &Settings) -> StdResult<CallbackType, MarshalError> {
    let value = map.get("type").ok_or_else(|| MarshalError::missing_field("type"))?;
    CallbackType::read(value, settings).map_err(|why| why.at_key("type"))
}

/// Decodes a payload, or returns the default payload if it is absent.
fn read_payload<D>(data: Option<&Value>, settings: &Settings) -> StdResult<D, MarshalError>
where
    D: Marshal + Default,
{
    data.map_or_else(|| Ok(D::default()), |data| D::decode_with(data, settings))
}

/// Builds a response envelope. A payload equal to the default of its type is left out.
fn write_envelope<D>(kind: CallbackType, data: &D, settings: &Settings) -> Value
where
    D: Marshal + Default + PartialEq,
{
    let mut map = JsonMap::new();
    map.insert("type".to_owned(), kind.write(settings));
    if *data != D::default() {
        map.insert("data".to_owned(), data.encode_with(settings));
    }

    Value::Object(map)
}

fn envelope_object(value: &Value) -> StdResult<&JsonMap, MarshalError> {
    value.as_object().ok_or_else(|| MarshalError::shape_mismatch(ValueKind::Object, value))
}

/// The raw payload of a callback type without a payload mapping.
///
/// The callback type is checked on construction, so a raw payload never stands in for one of the
/// typed payloads.
#[derive(Clone, Debug, PartialEq)]
pub struct RawCallback {
    kind: CallbackType,
    data: Value,
}

impl RawCallback {
    /// Pairs a raw payload with a callback type.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalErrorKind::PayloadMismatch`] if the callback type has a typed payload.
    pub fn new(kind: CallbackType, data: Value) -> StdResult<Self, MarshalError> {
        if kind.has_payload_mapping() {
            return Err(payload_mismatch(kind));
        }

        Ok(Self {
            kind,
            data,
        })
    }

    #[must_use]
    pub fn kind(&self) -> CallbackType {
        self.kind
    }

    /// The payload exactly as received, or `null` if there was none.
    #[must_use]
    pub fn data(&self) -> &Value {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Value {
        self.data
    }
}

/// A response to an interaction, with a payload of the type matching its callback type.
///
/// # Examples
///
/// ```rust
/// use serenity_interactions::json::json;
/// use serenity_interactions::marshal::Marshal;
/// use serenity_interactions::model::application::InteractionResponse;
///
/// let response = InteractionResponse::decode(&json!({"type": 4, "data": {"content": "hi"}})).unwrap();
///
/// match response {
///     InteractionResponse::ChannelMessageWithSource(message) => {
///         assert_eq!(message.content.as_deref(), Some("hi"));
///     },
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum InteractionResponse {
    /// [`CallbackType::Pong`]
    Pong,
    /// [`CallbackType::ChannelMessageWithSource`]
    ChannelMessageWithSource(ResponseMessage),
    /// [`CallbackType::DeferredChannelMessageWithSource`]
    DeferredChannelMessageWithSource(ResponseMessage),
    /// [`CallbackType::DeferredUpdateMessage`]
    DeferredUpdateMessage(ResponseMessage),
    /// [`CallbackType::UpdateMessage`]
    UpdateMessage(ResponseMessage),
    /// [`CallbackType::ApplicationCommandAutocompleteResult`]
    Autocomplete(AutocompleteResult),
    /// A callback type without a payload mapping, with its payload kept as a raw value.
    Other(RawCallback),
}

impl InteractionResponse {
    /// Creates a response from a callback type and a payload.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalErrorKind::PayloadMismatch`] if the callback type carries another
    /// payload type.
    pub fn new<D: CallbackData>(kind: CallbackType, data: D) -> StdResult<Self, MarshalError> {
        data.into_response(kind)
    }

    /// Creates a response with the canonical callback type of the payload.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_data<D: CallbackData>(data: D) -> StdResult<Self, MarshalError> {
        data.into_response(D::CALLBACK_TYPE)
    }

    /// Creates a response sending a message.
    #[must_use]
    pub fn message(message: ResponseMessage) -> Self {
        Self::ChannelMessageWithSource(message)
    }

    /// Creates a response suggesting autocomplete choices.
    #[must_use]
    pub fn autocomplete(result: AutocompleteResult) -> Self {
        Self::Autocomplete(result)
    }

    /// The callback type of the response.
    #[must_use]
    pub fn kind(&self) -> CallbackType {
        match self {
            Self::Pong => CallbackType::Pong,
            Self::ChannelMessageWithSource(_) => CallbackType::ChannelMessageWithSource,
            Self::DeferredChannelMessageWithSource(_) => CallbackType::DeferredChannelMessageWithSource,
            Self::DeferredUpdateMessage(_) => CallbackType::DeferredUpdateMessage,
            Self::UpdateMessage(_) => CallbackType::UpdateMessage,
            Self::Autocomplete(_) => CallbackType::ApplicationCommandAutocompleteResult,
            Self::Other(raw) => raw.kind,
        }
    }

    /// The message payload, for the message callback types.
    #[must_use]
    pub fn message_data(&self) -> Option<&ResponseMessage> {
        match self {
            Self::ChannelMessageWithSource(message)
            | Self::DeferredChannelMessageWithSource(message)
            | Self::DeferredUpdateMessage(message)
            | Self::UpdateMessage(message) => Some(message),
            _ => None,
        }
    }

    /// Checks that the response can be sent.
    ///
    /// # Errors
    ///
    /// Returns [`MarshalErrorKind::UnknownDiscriminator`] for the [`CallbackType::None`] type.
    pub fn validate(&self) -> StdResult<(), MarshalError> {
        match self.kind() {
            CallbackType::None => Err(MarshalError::new(MarshalErrorKind::UnknownDiscriminator(0))),
            _ => Ok(()),
        }
    }

    /// Picks the payload type from the callback type and decodes the payload into it.
    fn from_parts(
        kind: CallbackType,
        data: Option<&Value>,
        settings: &Settings,
    ) -> StdResult<Self, MarshalError> {
        Ok(match kind {
            CallbackType::Pong => {
                read_payload::<EmptyData>(data, settings)?;
                Self::Pong
            },
            CallbackType::ChannelMessageWithSource => {
                Self::ChannelMessageWithSource(read_payload(data, settings)?)
            },
            CallbackType::DeferredChannelMessageWithSource => {
                Self::DeferredChannelMessageWithSource(read_payload(data, settings)?)
            },
            CallbackType::DeferredUpdateMessage => {
                Self::DeferredUpdateMessage(read_payload(data, settings)?)
            },
            CallbackType::UpdateMessage => Self::UpdateMessage(read_payload(data, settings)?),
            CallbackType::ApplicationCommandAutocompleteResult => {
                Self::Autocomplete(read_payload(data, settings)?)
            },
            kind if settings.passthrough_unknown_callbacks => {
                debug!(?kind, "keeping payload of unmapped callback type as a raw value");
                Self::Other(RawCallback {
                    kind,
                    data: data.cloned().unwrap_or(NULL),
                })
            },
            kind => {
                return Err(MarshalError::new(MarshalErrorKind::UnknownDiscriminator(kind.into())))
            },
        })
    }
}

impl Marshal for InteractionResponse {
    #[cfg_attr(feature = "tracing_instrument", tracing::instrument(skip_all))]
    fn decode_with(value: &Value, settings: &Settings) -> StdResult<Self, MarshalError> {
        let map = envelope_object(value)?;
        let kind = read_callback_type(map, settings)?;
        let data = map.get("data").filter(|data| !data.is_null());

        Self::from_parts(kind, data, settings).map_err(|why| {
            if matches!(why.kind(), MarshalErrorKind::UnknownDiscriminator(_)) {
                why.at_key("type")
            } else {
                why.at_key("data")
            }
        })
    }

    fn encode_with(&self, settings: &Settings) -> Value {
        let kind = self.kind();
        match self {
            Self::Pong => write_envelope(kind, &EmptyData {}, settings),
            Self::ChannelMessageWithSource(message)
            | Self::DeferredChannelMessageWithSource(message)
            | Self::DeferredUpdateMessage(message)
            | Self::UpdateMessage(message) => write_envelope(kind, message, settings),
            Self::Autocomplete(result) => write_envelope(kind, result, settings),
            Self::Other(raw) => write_envelope(kind, &raw.data, settings),
        }
    }
}

impl Resolve for InteractionResponse {
    fn read(value: &Value, settings: &Settings) -> StdResult<Self, MarshalError> {
        Self::decode_with(value, settings)
    }

    fn write(&self, settings: &Settings) -> Value {
        self.encode_with(settings)
    }
}

impl_serde_via_marshal!(InteractionResponse);

impl<K: CallbackKind> From<Response<K>> for InteractionResponse {
    fn from(response: Response<K>) -> Self {
        K::wrap(response.data)
    }
}

/// A response to an interaction with a callback type fixed at compile time.
///
/// # Examples
///
/// ```rust
/// use serenity_interactions::json::json;
/// use serenity_interactions::marshal::Marshal;
/// use serenity_interactions::model::application::callback::ApplicationCommandAutocompleteResult;
/// use serenity_interactions::model::application::{AutocompleteResult, Response};
///
/// let response = Response::<ApplicationCommandAutocompleteResult>::new(
///     AutocompleteResult::default().add_string_choice("A", "a"),
/// );
///
/// assert_eq!(
///     response.encode(),
///     json!({"type": 8, "data": {"choices": [{"name": "A", "value": "a"}]}})
/// );
/// ```
pub struct Response<K: CallbackKind> {
    pub data: K::Data,
    kind: PhantomData<K>,
}

impl<K: CallbackKind> Response<K> {
    /// Creates a response carrying the given payload.
    pub fn new(data: K::Data) -> Self {
        Self {
            data,
            kind: PhantomData,
        }
    }

    /// The callback type of the response.
    #[must_use]
    pub fn kind(&self) -> CallbackType {
        K::TYPE
    }
}

impl<K: CallbackKind> Clone for Response<K> {
    fn clone(&self) -> Self {
        Self::new(self.data.clone())
    }
}

impl<K: CallbackKind> fmt::Debug for Response<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response").field("kind", &K::TYPE).field("data", &self.data).finish()
    }
}

impl<K: CallbackKind> Default for Response<K> {
    fn default() -> Self {
        Self::new(K::Data::default())
    }
}

impl<K: CallbackKind> PartialEq for Response<K> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K: CallbackKind> Marshal for Response<K> {
    fn decode_with(value: &Value, settings: &Settings) -> StdResult<Self, MarshalError> {
        let map = envelope_object(value)?;
        let kind = read_callback_type(map, settings)?;
        if kind != K::TYPE {
            return Err(payload_mismatch(kind).at_key("type"));
        }

        let data = map.get("data").filter(|data| !data.is_null());
        read_payload(data, settings).map(Self::new).map_err(|why| why.at_key("data"))
    }

    fn encode_with(&self, settings: &Settings) -> Value {
        write_envelope(K::TYPE, &self.data, settings)
    }
}

impl<K: CallbackKind> serde::Serialize for Response<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.encode(), serializer)
    }
}

impl<'de, K: CallbackKind> serde::Deserialize<'de> for Response<K> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Self::decode(&value).map_err(<D::Error as serde::de::Error>::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::callback;
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn pong() {
        let response = InteractionResponse::decode(&json!({"type": 1})).unwrap();

        assert_eq!(response, InteractionResponse::Pong);
        assert_eq!(response.encode(), json!({"type": 1}));
        assert_eq!(InteractionResponse::from_data(EmptyData {}).unwrap(), response);
    }

    #[test]
    fn message() {
        let response = InteractionResponse::message(ResponseMessage::new("hi"));

        assert_json(
            &response,
            json!({
                "type": 4,
                "data": {"tts": false, "content": "hi", "embeds": [], "components": []},
            }),
        );

        let decoded = InteractionResponse::decode(&json!({"type": 4, "data": {"content": "hi"}})).unwrap();
        assert_eq!(decoded.message_data().unwrap().content.as_deref(), Some("hi"));
    }

    #[test]
    fn deferred_message_without_data() {
        let response = InteractionResponse::decode(&json!({"type": 5})).unwrap();

        assert_eq!(response, InteractionResponse::DeferredChannelMessageWithSource(ResponseMessage::default()));
        assert_eq!(response.encode(), json!({"type": 5}));
    }

    #[test]
    fn autocomplete() {
        let response = InteractionResponse::decode(&json!({
            "type": 8,
            "data": {"choices": [{"name": "A", "value": "a"}]},
        }))
        .unwrap();

        let InteractionResponse::Autocomplete(result) = &response else {
            panic!("expected an autocomplete result, got {response:?}");
        };
        assert_eq!(result.choices.len(), 1);
        assert_eq!(result.choices[0].name, "A");
        assert_eq!(result.choices[0].get::<String>().unwrap(), "a");
    }

    #[test]
    fn autocomplete_without_choices_fails() {
        let why = InteractionResponse::decode(&json!({"type": 8, "data": {}})).unwrap_err();

        assert_eq!(why.to_string(), "data: missing field `choices`");
    }

    #[test]
    fn unknown_callback_types_pass_through() {
        let value = json!({"type": 42, "data": {"anything": [1, 2]}});

        let response = InteractionResponse::decode(&value).unwrap();
        assert_eq!(response.kind(), CallbackType::Unknown(42));
        assert_eq!(response.encode(), value);

        let modal = InteractionResponse::decode(&json!({"type": 9, "data": {"custom_id": "m"}})).unwrap();
        let InteractionResponse::Other(raw) = &modal else {
            panic!("expected a raw payload, got {modal:?}");
        };
        assert_eq!(raw.kind(), CallbackType::Modal);
        assert_eq!(raw.data(), &json!({"custom_id": "m"}));

        let mut settings = Settings::default();
        settings.passthrough_unknown_callbacks = false;
        let why = InteractionResponse::decode_with(&value, &settings).unwrap_err();
        assert_eq!(why.kind(), &MarshalErrorKind::UnknownDiscriminator(42));
        assert_eq!(why.path(), "type");
    }

    #[test]
    fn envelope_errors() {
        let why = InteractionResponse::decode(&json!({"data": {}})).unwrap_err();
        assert_eq!(why.kind(), &MarshalErrorKind::MissingField("type"));

        let why = InteractionResponse::decode(&json!([])).unwrap_err();
        assert!(matches!(why.kind(), MarshalErrorKind::ShapeMismatch { .. }));

        let why = InteractionResponse::decode(&json!({"type": 4, "data": {"tts": "yes"}})).unwrap_err();
        assert_eq!(why.path(), "data.tts");
    }

    #[test]
    fn reverse_mapping() {
        assert_eq!(EmptyData::CALLBACK_TYPE, CallbackType::Pong);
        assert_eq!(ResponseMessage::CALLBACK_TYPE, CallbackType::ChannelMessageWithSource);
        assert_eq!(AutocompleteResult::CALLBACK_TYPE, CallbackType::ApplicationCommandAutocompleteResult);
        assert_eq!(<Value as CallbackData>::CALLBACK_TYPE, CallbackType::None);
    }

    #[test]
    fn payloads_must_match_the_callback_type() {
        let why = InteractionResponse::new(CallbackType::Pong, ResponseMessage::new("x")).unwrap_err();
        assert_eq!(why.kind(), &MarshalErrorKind::PayloadMismatch(1));

        let response =
            InteractionResponse::new(CallbackType::UpdateMessage, ResponseMessage::new("x")).unwrap();
        assert_eq!(response.kind(), CallbackType::UpdateMessage);
    }

    #[test]
    fn raw_payloads_are_decoded_for_mapped_types() {
        let response = InteractionResponse::new(CallbackType::ChannelMessageWithSource, json!({"content": "hi"}))
            .unwrap();
        assert_eq!(response, InteractionResponse::message(ResponseMessage::new("hi")));

        let response = InteractionResponse::new(CallbackType::Modal, json!({"title": "t"})).unwrap();
        assert!(response.validate().is_ok());

        let response = InteractionResponse::from_data(json!({})).unwrap();
        assert_eq!(response.kind(), CallbackType::None);
        assert_eq!(response.validate().unwrap_err().kind(), &MarshalErrorKind::UnknownDiscriminator(0));
    }

    #[test]
    fn raw_payloads_cannot_take_a_mapped_callback_type() {
        let why = RawCallback::new(CallbackType::Pong, json!({})).unwrap_err();
        assert_eq!(why.kind(), &MarshalErrorKind::PayloadMismatch(1));

        let why = RawCallback::new(CallbackType::UpdateMessage, json!({"content": "x"})).unwrap_err();
        assert_eq!(why.kind(), &MarshalErrorKind::PayloadMismatch(7));

        let raw = RawCallback::new(CallbackType::Modal, json!({"title": "t"})).unwrap();
        let response = InteractionResponse::Other(raw);
        assert!(response.validate().is_ok());
        assert_eq!(response.encode(), json!({"type": 9, "data": {"title": "t"}}));
    }

    #[test]
    fn callback_codes_outside_the_byte_range_pass_through() {
        let value = json!({"type": 300, "data": {"x": 1}});

        let response = InteractionResponse::decode(&value).unwrap();
        assert_eq!(response.kind(), CallbackType::Unknown(300));
        assert_eq!(response.encode(), value);

        let response = InteractionResponse::decode(&json!({"type": -1})).unwrap();
        assert_eq!(response.kind(), CallbackType::Unknown(-1));
        assert_eq!(response.encode(), json!({"type": -1}));

        let mut settings = Settings::default();
        settings.passthrough_unknown_callbacks = false;
        let why = InteractionResponse::decode_with(&value, &settings).unwrap_err();
        assert_eq!(why.kind(), &MarshalErrorKind::UnknownDiscriminator(300));
    }

    #[test]
    fn typed_responses() {
        let response = Response::<callback::ChannelMessageWithSource>::new(
            ResponseMessage::new("secret").ephemeral(true),
        );
        assert_eq!(response.kind(), CallbackType::ChannelMessageWithSource);

        let value = response.encode();
        assert_eq!(value["data"]["flags"], 64);
        assert_eq!(Response::<callback::ChannelMessageWithSource>::decode(&value).unwrap(), response);
        assert_eq!(InteractionResponse::decode(&value).unwrap(), InteractionResponse::from(response));

        let why = Response::<callback::Pong>::decode(&value).unwrap_err();
        assert_eq!(why.kind(), &MarshalErrorKind::PayloadMismatch(4));
        assert_eq!(why.path(), "type");

        let pong = Response::<callback::Pong>::default();
        assert_eq!(pong.encode(), json!({"type": 1}));
        assert_eq!(InteractionResponse::from(pong), InteractionResponse::Pong);
    }

    #[test]
    fn ephemeral_flag_toggles() {
        let message = ResponseMessage::default().ephemeral(true);
        assert_eq!(message.flags, Some(MessageFlags::EPHEMERAL));

        let message = message.ephemeral(false);
        assert_eq!(message.flags, None);
        assert!(message.is_empty());
    }
}
