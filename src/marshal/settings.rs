/// How the marshaler reacts to a malformed optional field.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DecodePolicy {
    /// Any malformed field fails the whole decode.
    #[default]
    Strict,
    /// A malformed optional field is logged and left at its default, so the rest of the payload
    /// still decodes. A malformed element of a sequence or map is dropped the same way, keeping
    /// its siblings. Malformed or missing required fields still fail.
    Lenient,
}

/// Settings for decoding and encoding models.
///
/// # Examples
///
/// Create new settings that keep the valid subset of a malformed payload:
///
/// ```rust
/// use serenity_interactions::marshal::{DecodePolicy, Settings};
///
/// let mut settings = Settings::default();
/// settings.policy = DecodePolicy::Lenient;
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Settings {
    /// What to do with malformed optional fields.
    ///
    /// Defaults to [`DecodePolicy::Strict`].
    pub policy: DecodePolicy,
    /// Whether optional fields holding an empty string, sequence or map are left out when
    /// encoding.
    ///
    /// Defaults to false.
    pub omit_empty: bool,
    /// Whether interaction responses with a callback type that has no known payload keep their
    /// data as a raw value. When disabled, such responses fail to decode.
    ///
    /// Defaults to true.
    pub passthrough_unknown_callbacks: bool,
}

impl Settings {
    /// Creates the default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            policy: DecodePolicy::Strict,
            omit_empty: false,
            passthrough_unknown_callbacks: true,
        }
    }

    /// Creates settings using [`DecodePolicy::Lenient`].
    #[must_use]
    pub const fn lenient() -> Self {
        let mut settings = Self::new();
        settings.policy = DecodePolicy::Lenient;
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
