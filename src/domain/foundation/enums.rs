//! Declarative helper for enums stored and transported as text.

/// Declares a closed enum whose variants map one-to-one onto lowercase text.
///
/// The same text is used for JSON, query strings and database columns, so
/// a value written by one layer always reads back in another.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::foundation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err($crate::domain::foundation::ValidationError::invalid_format(
                        stringify!($name),
                        format!("unknown value '{}'", other),
                    )),
                }
            }
        }
    };
}

pub(crate) use text_enum;

#[cfg(test)]
mod tests {
    use super::text_enum;
    use crate::domain::foundation::ValidationError;

    text_enum!(
        /// Test-only colour.
        Colour {
            Red => "red",
            DarkBlue => "dark_blue",
        }
    );

    #[test]
    fn text_round_trips_through_from_str() {
        for colour in Colour::ALL {
            assert_eq!(colour.as_str().parse::<Colour>().unwrap(), *colour);
        }
    }

    #[test]
    fn serde_uses_same_text() {
        assert_eq!(serde_json::to_string(&Colour::DarkBlue).unwrap(), "\"dark_blue\"");
        let parsed: Colour = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(parsed, Colour::Red);
    }

    #[test]
    fn unknown_text_is_a_validation_error() {
        assert!(matches!(
            "green".parse::<Colour>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
