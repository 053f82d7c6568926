//! A set of macros for easily working with internals.

/// Defines an enum that is encoded as its integer code.
///
/// With a trailing `_ => Unknown(i64)` arm the enum is open: any integer code with no variant,
/// including negative ones and ones wider than a byte, decodes into `Unknown(code)` instead of
/// failing, so values added to the protocol later pass through. Without it the enum is closed and
/// an unassigned code fails with [`MarshalErrorKind::UnknownCode`].
///
/// [`MarshalErrorKind::UnknownCode`]: crate::marshal::MarshalErrorKind::UnknownCode
macro_rules! enum_number {
    (
        $(#[$outer:meta])*
        $vis:vis enum $Enum:ident {
            $(
                $(#[$inner:meta])*
                $Variant:ident = $value:literal,
            )*
            _ => Unknown($T:ty),
        }
    ) => {
        $(#[$outer])*
        $vis enum $Enum {
            $(
                $(#[$inner])*
                $Variant,
            )*
            /// Variant value is unknown.
            Unknown($T),
        }

        impl From<$T> for $Enum {
            fn from(value: $T) -> Self {
                #[allow(unreachable_patterns)]
                match value {
                    $($value => Self::$Variant,)*
                    unknown => Self::Unknown(unknown),
                }
            }
        }

        impl From<$Enum> for $T {
            fn from(value: $Enum) -> Self {
                match value {
                    $($Enum::$Variant => $value,)*
                    $Enum::Unknown(unknown) => unknown,
                }
            }
        }

        impl $crate::marshal::Resolve for $Enum {
            fn read(
                value: &$crate::json::Value,
                settings: &$crate::marshal::Settings,
            ) -> ::std::result::Result<Self, $crate::marshal::MarshalError> {
                let code = <$T as $crate::marshal::Resolve>::read(value, settings)?;
                let kind = Self::from(code);
                if let Self::Unknown(code) = kind {
                    ::tracing::debug!(code, kind = stringify!($Enum), "unknown code decoded to sentinel");
                }

                Ok(kind)
            }

            fn write(&self, settings: &$crate::marshal::Settings) -> $crate::json::Value {
                <$T as $crate::marshal::Resolve>::write(&<$T>::from(*self), settings)
            }
        }
    };
    (
        $(#[$outer:meta])*
        $vis:vis enum $Enum:ident {
            $(
                $(#[$inner:meta])*
                $Variant:ident = $value:literal,
            )*
        }
    ) => {
        $(#[$outer])*
        $vis enum $Enum {
            $(
                $(#[$inner])*
                $Variant,
            )*
        }

        impl TryFrom<u8> for $Enum {
            type Error = u8;

            fn try_from(value: u8) -> ::std::result::Result<Self, u8> {
                match value {
                    $($value => Ok(Self::$Variant),)*
                    unknown => Err(unknown),
                }
            }
        }

        impl From<$Enum> for u8 {
            fn from(value: $Enum) -> Self {
                match value {
                    $($Enum::$Variant => $value,)*
                }
            }
        }

        impl $crate::marshal::Resolve for $Enum {
            fn read(
                value: &$crate::json::Value,
                settings: &$crate::marshal::Settings,
            ) -> ::std::result::Result<Self, $crate::marshal::MarshalError> {
                let code = <u8 as $crate::marshal::Resolve>::read(value, settings)?;
                Self::try_from(code).map_err(|code| {
                    $crate::marshal::MarshalError::unknown_code(stringify!($Enum), u64::from(code))
                })
            }

            fn write(&self, settings: &$crate::marshal::Settings) -> $crate::json::Value {
                <u8 as $crate::marshal::Resolve>::write(&u8::from(*self), settings)
            }
        }
    };
}

/// Builds the schema table of an entity and wires it into the marshaling traits.
///
/// Each line binds a struct field to its JSON key and [`Presence`]. The table is a `static`, so it
/// is built at compile time and shared read-only between all threads.
///
/// [`Presence`]: crate::marshal::Presence
macro_rules! schema {
    ($ty:ident { $($field:ident: $key:literal => $presence:ident),* $(,)? }) => {
        impl $crate::marshal::Entity for $ty {
            fn schema() -> &'static $crate::marshal::Schema<Self> {
                static SCHEMA: $crate::marshal::Schema<$ty> = $crate::marshal::Schema {
                    name: stringify!($ty),
                    fields: &[$(
                        $crate::marshal::Field {
                            key: $key,
                            presence: $crate::marshal::Presence::$presence,
                            decode: |target: &mut $ty,
                                     value: &$crate::json::Value,
                                     settings: &$crate::marshal::Settings| {
                                target.$field = $crate::marshal::Resolve::read(value, settings)?;
                                Ok(())
                            },
                            encode: |source: &$ty,
                                     presence: $crate::marshal::Presence,
                                     settings: &$crate::marshal::Settings| {
                                $crate::marshal::encode_field(&source.$field, presence, settings)
                            },
                        },
                    )*],
                };

                &SCHEMA
            }
        }

        impl $crate::marshal::Marshal for $ty {
            fn decode_with(
                value: &$crate::json::Value,
                settings: &$crate::marshal::Settings,
            ) -> ::std::result::Result<Self, $crate::marshal::MarshalError> {
                <Self as $crate::marshal::Entity>::schema().decode(value, settings)
            }

            fn encode_with(&self, settings: &$crate::marshal::Settings) -> $crate::json::Value {
                <Self as $crate::marshal::Entity>::schema().encode(self, settings)
            }
        }

        impl $crate::marshal::Resolve for $ty {
            fn read(
                value: &$crate::json::Value,
                settings: &$crate::marshal::Settings,
            ) -> ::std::result::Result<Self, $crate::marshal::MarshalError> {
                <Self as $crate::marshal::Marshal>::decode_with(value, settings)
            }

            fn write(&self, settings: &$crate::marshal::Settings) -> $crate::json::Value {
                <Self as $crate::marshal::Marshal>::encode_with(self, settings)
            }
        }

        impl_serde_via_marshal!($ty);
    };
}

/// Implements `serde::Serialize` and `serde::Deserialize` on top of [`Marshal`], so entities can
/// be embedded in any serde data structure.
///
/// [`Marshal`]: crate::marshal::Marshal
macro_rules! impl_serde_via_marshal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ::serde::Serialize for $ty {
                fn serialize<S: ::serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> ::std::result::Result<S::Ok, S::Error> {
                    ::serde::Serialize::serialize(
                        &$crate::marshal::Marshal::encode(self),
                        serializer,
                    )
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D: ::serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> ::std::result::Result<Self, D::Error> {
                    let value = <$crate::json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                    <Self as $crate::marshal::Marshal>::decode(&value)
                        .map_err(<D::Error as ::serde::de::Error>::custom)
                }
            }
        )*
    };
}
