use crate::model::Timestamp;

/// Represents a rich embed which allows using richer markdown, multiple fields and more. This was
/// heavily inspired by [slack's attachments].
///
/// You can include an embed in a response message through
/// [`ResponseMessage::embed`].
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#embed-object).
///
/// [slack's attachments]: https://api.slack.com/docs/message-attachments
/// [`ResponseMessage::embed`]: crate::model::application::ResponseMessage::embed
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Embed {
    /// The title of the embed.
    pub title: Option<String>,
    /// The type of the embed. For embeds sent by bots this is always `"rich"`.
    pub kind: Option<String>,
    /// The description of the embed.
    ///
    /// The maximum value for this field is 2048 unicode codepoints.
    pub description: Option<String>,
    /// The URL of the embed.
    pub url: Option<String>,
    /// Timestamp information.
    pub timestamp: Option<Timestamp>,
    /// The colour code of the embed.
    pub colour: Option<u32>,
    /// The footer of the embed.
    pub footer: Option<EmbedFooter>,
    /// Information about the author of the embed.
    pub author: Option<EmbedAuthor>,
    /// The array of fields.
    ///
    /// The maximum number of fields is 25.
    pub fields: Vec<EmbedField>,
}

schema!(Embed {
    title: "title" => Optional,
    kind: "type" => Optional,
    description: "description" => Optional,
    url: "url" => Optional,
    timestamp: "timestamp" => Optional,
    colour: "color" => Optional,
    footer: "footer" => Optional,
    author: "author" => Optional,
    fields: "fields" => Optional,
});

impl Embed {
    /// Creates an empty rich embed.
    #[must_use]
    pub fn rich() -> Self {
        Self {
            kind: Some("rich".to_string()),
            ..Self::default()
        }
    }

    /// Sets the title of the embed.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description of the embed.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field to the embed.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField::new(name, value, inline));
        self
    }
}

/// Information about the author of an embed.
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#embed-object-embed-author-structure).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EmbedAuthor {
    /// The name of the author.
    pub name: String,
    /// The URL of the author.
    pub url: Option<String>,
    /// The URL of the author icon.
    ///
    /// This only supports HTTP(S) and attachments.
    pub icon_url: Option<String>,
}

schema!(EmbedAuthor {
    name: "name" => Required,
    url: "url" => Optional,
    icon_url: "icon_url" => Optional,
});

/// A field object in an embed.
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#embed-object-embed-field-structure).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EmbedField {
    /// The name of the field.
    ///
    /// The maximum length of this field is 512 unicode codepoints.
    pub name: String,
    /// The value of the field.
    ///
    /// The maximum length of this field is 1024 unicode codepoints.
    pub value: String,
    /// Indicator of whether the field should display as inline.
    pub inline: bool,
}

schema!(EmbedField {
    name: "name" => Required,
    value: "value" => Required,
    inline: "inline" => Optional,
});

impl EmbedField {
    /// Creates a new embed field.
    ///
    /// **Note**: Refer to the [`Self::name`] and [`Self::value`] documentation for maximum
    /// lengths.
    pub fn new<T, U>(name: T, value: U, inline: bool) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Footer information for an embed.
///
/// [Discord docs](https://discord.com/developers/docs/resources/channel#embed-object-embed-footer-structure).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EmbedFooter {
    /// The associated text with the footer.
    pub text: String,
    /// The URL of the footer icon.
    ///
    /// This only supports HTTP(S) and attachments.
    pub icon_url: Option<String>,
}

schema!(EmbedFooter {
    text: "text" => Required,
    icon_url: "icon_url" => Optional,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};

    #[test]
    fn embed_marshaling() {
        let embed = Embed::rich().title("Results").field("Score", "10", true);

        assert_json(
            &embed,
            json!({
                "title": "Results",
                "type": "rich",
                "fields": [{"name": "Score", "value": "10", "inline": true}],
            }),
        );
    }
}
