/// Defines a string-backed identifier enum.
///
/// Each variant maps to a lowercase wire token (used in YAML/JSON and on the
/// prompt line) and a display name. Unknown tokens deserialize into
/// `Custom(String)` so documents written by newer versions still load.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal : $display_name:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from_token(&s).unwrap_or(Self::Custom(s)))
            }
        }

        impl $enum_name {
            /// Wire token
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $token,
                    )*
                    Self::Custom(name) => name,
                }
            }

            pub fn name(&self) -> String {
                match self {
                    $(
                        Self::$variant => $display_name.to_string(),
                    )*
                    Self::Custom(name) => name.clone(),
                }
            }

            /// Case-insensitive lookup by token, display name or alias
            pub fn from_token(token: &str) -> Option<Self> {
                $(
                    if token.eq_ignore_ascii_case($token)
                        || token.eq_ignore_ascii_case($display_name)
                        $( || token.eq_ignore_ascii_case($alias) )*
                    {
                        return Some(Self::$variant);
                    }
                )*
                None
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
