//! Coded value enums: variants that carry a stable integer code and an
//! upper-case display name, both accepted when parsing external input.

macro_rules! define_coded_enum {
    (
        $(#[doc = $doc:expr])*
        $name:ident {
            $( $(#[doc = $vdoc:expr])* $variant:ident = $code:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[doc = $vdoc])* $variant ),+
        }

        impl $name {
            /// Every variant, in code order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// Stable integer code used for display and numeric input.
            #[must_use]
            pub fn code(self) -> u8 {
                match self {
                    $( Self::$variant => $code ),+
                }
            }

            /// Look a variant up by its integer code.
            #[must_use]
            pub fn from_code(code: i64) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Upper-case name, e.g. `"HIGH"`.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            /// Case-insensitive exact match against the variant names.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.name().eq_ignore_ascii_case(name))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
