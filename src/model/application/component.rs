use crate::model::channel::ChannelType;

enum_number! {
    /// The type of a component
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/message-components#component-object-component-types).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
    #[non_exhaustive]
    pub enum ComponentType {
        #[default]
        ActionRow = 1,
        Button = 2,
        StringSelect = 3,
        InputText = 4,
        UserSelect = 5,
        RoleSelect = 6,
        MentionableSelect = 7,
        ChannelSelect = 8,
        _ => Unknown(i64),
    }
}

enum_number! {
    /// The style of a button.
    ///
    /// [Discord docs](https://discord.com/developers/docs/interactions/message-components#button-object-button-styles).
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
    #[non_exhaustive]
    pub enum ButtonStyle {
        #[default]
        Primary = 1,
        Secondary = 2,
        Success = 3,
        Danger = 4,
        /// Navigates to [`Component::url`] instead of sending an interaction.
        Link = 5,
        _ => Unknown(i64),
    }
}

/// A message component: an action row, or one of the interactive components placed in a row.
///
/// All component kinds share this one shape; which fields are meaningful depends on
/// [`Self::kind`].
///
/// [Discord docs](https://discord.com/developers/docs/interactions/message-components#component-object).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Component {
    /// The type of the component.
    pub kind: ComponentType,
    /// The developer defined identifier sent back in the interaction, unless the component is
    /// an action row or link button.
    pub custom_id: Option<String>,
    /// The text on a button.
    pub label: Option<String>,
    /// The style of a button.
    pub style: Option<ButtonStyle>,
    /// The target of a link button.
    pub url: Option<String>,
    /// Whether the component is disabled. Not set on action rows.
    pub disabled: Option<bool>,
    /// The placeholder text of a select menu.
    pub placeholder: Option<String>,
    /// The minimum number of items that must be chosen in a select menu.
    pub min_values: Option<u8>,
    /// The maximum number of items that can be chosen in a select menu.
    pub max_values: Option<u8>,
    /// The choices of a string select menu.
    pub options: Vec<SelectMenuOption>,
    /// The channel types a channel select menu shows.
    pub channel_types: Vec<ChannelType>,
    /// The components of an action row.
    pub components: Vec<Component>,
    /// The submitted value of an input text.
    pub value: Option<String>,
}

schema!(Component {
    kind: "type" => Required,
    custom_id: "custom_id" => Optional,
    label: "label" => Optional,
    style: "style" => Optional,
    url: "url" => Optional,
    disabled: "disabled" => Optional,
    placeholder: "placeholder" => Optional,
    min_values: "min_values" => Optional,
    max_values: "max_values" => Optional,
    options: "options" => Optional,
    channel_types: "channel_types" => Optional,
    components: "components" => Optional,
    value: "value" => Optional,
});

impl Component {
    /// Creates an action row holding the given components.
    #[must_use]
    pub fn action_row(components: Vec<Component>) -> Self {
        Self {
            kind: ComponentType::ActionRow,
            components,
            ..Self::default()
        }
    }

    /// Creates a button which sends an interaction carrying `custom_id` when clicked.
    pub fn button(custom_id: impl Into<String>, style: ButtonStyle, label: impl Into<String>) -> Self {
        Self {
            kind: ComponentType::Button,
            custom_id: Some(custom_id.into()),
            style: Some(style),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Creates a button which opens a URL when clicked.
    pub fn link_button(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: ComponentType::Button,
            style: Some(ButtonStyle::Link),
            url: Some(url.into()),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Creates a select menu over the given string options.
    pub fn string_select(custom_id: impl Into<String>, options: Vec<SelectMenuOption>) -> Self {
        Self {
            kind: ComponentType::StringSelect,
            custom_id: Some(custom_id.into()),
            options,
            ..Self::default()
        }
    }

    /// Sets whether the component is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }
}

/// A select menu option.
///
/// [Discord docs](https://discord.com/developers/docs/interactions/message-components#select-menu-object-select-option-structure).
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SelectMenuOption {
    /// The text displayed on this option.
    pub label: String,
    /// The value to be sent for this option.
    pub value: String,
    /// The description shown for this option.
    pub description: Option<String>,
    /// Render this option as the default selection.
    pub default: bool,
}

schema!(SelectMenuOption {
    label: "label" => Required,
    value: "value" => Required,
    description: "description" => Optional,
    default: "default" => Optional,
});

impl SelectMenuOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{assert_json, json};
    use crate::marshal::Settings;

    #[test]
    fn action_row_with_buttons() {
        let row = Component::action_row(vec![
            Component::button("yes", ButtonStyle::Success, "Yes"),
            Component::link_button("https://example.com", "Docs"),
        ]);

        let mut settings = Settings::default();
        settings.omit_empty = true;
        assert_eq!(
            crate::marshal::Marshal::encode_with(&row, &settings),
            json!({
                "type": 1,
                "components": [
                    {"type": 2, "custom_id": "yes", "label": "Yes", "style": 3},
                    {"type": 2, "label": "Docs", "style": 5, "url": "https://example.com"},
                ],
            })
        );
    }

    #[test]
    fn disabled_is_written_only_when_set() {
        let button = Component::button("no", ButtonStyle::Danger, "No").disabled(true);
        let row = Component::action_row(vec![button]);

        let value = crate::marshal::Marshal::encode(&row);
        assert!(value.get("disabled").is_none());
        assert_eq!(value["components"][0]["disabled"], true);

        let decoded = <Component as crate::marshal::Marshal>::decode(&json!({"type": 2, "disabled": false})).unwrap();
        assert_eq!(decoded.disabled, Some(false));
    }

    #[test]
    fn select_menu() {
        let menu = Component::string_select("colour", vec![SelectMenuOption::new("Red", "red")]);

        assert_json(
            &menu,
            json!({
                "type": 3,
                "custom_id": "colour",
                "options": [{"label": "Red", "value": "red", "default": false}],
                "channel_types": [],
                "components": [],
            }),
        );
    }
}
