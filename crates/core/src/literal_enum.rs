//! Enumerations stored and transmitted as fixed string literals.

/// Define an enum whose variants map one-to-one onto string literals.
///
/// Generates serde (de)serialization using the literals, `as_str`, `ALL`,
/// `Display`, and a `FromStr` that rejects anything outside the set with a
/// [`CoreError::Validation`](crate::error::CoreError::Validation).
macro_rules! define_literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $lit)] $variant ),+
        }

        impl $name {
            /// Every allowed value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The literal stored in the database and sent over the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $lit ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $lit => Ok($name::$variant), )+
                    other => Err($crate::error::CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        $label,
                        $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))),
                }
            }
        }
    };
}
