//
//  azure-devops-rest
//  api/common/enums.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Declarative macros for the server's numeric enums.
//!
//! The REST contract declares enums with fixed integer values. The server writes
//! them as camelCase names by default but also accepts (and sometimes returns)
//! the integers, so both forms must be read.
//!
//! - [`vss_enum!`] declares a plain enum with exact discriminants.
//! - [`vss_flags!`] declares a bit-flag newtype that stays combinable with `|`
//!   and is written as the server's comma separated name list (`"edit, rename"`).

use serde::Deserialize;

/// Wire form of an enum value: either its integer or its name.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum WireValue {
    Number(i64),
    Name(String),
}

macro_rules! vss_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Numeric value declared by the REST contract.
            pub const fn value(self) -> i32 {
                self as i32
            }

            /// Name used on the wire.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            pub fn from_value(value: i64) -> Option<Self> {
                $(
                    if value == $value {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            pub fn from_name(name: &str) -> Option<Self> {
                $(
                    if name.eq_ignore_ascii_case($wire) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::from_name(s)
                    .or_else(|| s.parse::<i64>().ok().and_then(Self::from_value))
                    .ok_or_else(|| format!("unknown {} value '{}'", stringify!($name), s))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use $crate::api::common::WireValue;

                match <WireValue as ::serde::Deserialize>::deserialize(deserializer)? {
                    WireValue::Number(n) => Self::from_value(n).ok_or_else(|| {
                        ::serde::de::Error::custom(format!(
                            "unknown {} value {}",
                            stringify!($name),
                            n
                        ))
                    }),
                    WireValue::Name(s) => s.parse().map_err(::serde::de::Error::custom),
                }
            }
        }
    };
}

macro_rules! vss_flags {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                const $flag:ident = $value:literal => $wire:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name(u32);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$fmeta])*
                pub const $flag: Self = Self($value);
            )+

            const NAMED: &'static [(&'static str, u32)] = &[ $( ($wire, $value), )+ ];

            pub const fn from_bits(bits: u32) -> Self {
                Self(bits)
            }

            pub const fn bits(self) -> u32 {
                self.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Returns true when every bit of `other` is set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Names of the flags making up this value, as the server writes them.
            ///
            /// An exact match (including composite values such as `all`) wins;
            /// otherwise the value is decomposed into its single-bit flags.
            pub fn names(self) -> Vec<&'static str> {
                if let Some((name, _)) = Self::NAMED.iter().find(|(_, v)| *v == self.0) {
                    return vec![*name];
                }
                Self::NAMED
                    .iter()
                    .filter(|(_, v)| v.count_ones() == 1 && self.0 & *v == *v)
                    .map(|(name, _)| *name)
                    .collect()
            }

            /// Parses `"edit, rename"` style lists or a plain integer.
            pub fn parse(s: &str) -> Option<Self> {
                let s = s.trim();
                if let Ok(bits) = s.parse::<u32>() {
                    return Some(Self(bits));
                }
                let mut bits = 0u32;
                for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                    let (_, value) = Self::NAMED
                        .iter()
                        .find(|(name, _)| name.eq_ignore_ascii_case(part))?;
                    bits |= *value;
                }
                Some(Self(bits))
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let names = self.names();
                if names.is_empty() {
                    write!(f, "{}", self.0)
                } else {
                    f.write_str(&names.join(", "))
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use $crate::api::common::WireValue;

                match <WireValue as ::serde::Deserialize>::deserialize(deserializer)? {
                    WireValue::Number(n) => u32::try_from(n)
                        .map(Self)
                        .map_err(::serde::de::Error::custom),
                    WireValue::Name(s) => Self::parse(&s).ok_or_else(|| {
                        ::serde::de::Error::custom(format!(
                            "unknown {} value '{}'",
                            stringify!($name),
                            s
                        ))
                    }),
                }
            }
        }
    };
}

pub(crate) use vss_enum;
pub(crate) use vss_flags;

#[cfg(test)]
mod tests {
    vss_enum! {
        enum Visibility {
            Unchanged = -1 => "unchanged",
            Private = 0 => "private",
            Public = 2 => "public",
        }
    }

    vss_flags! {
        struct Expands {
            const None = 0 => "none";
            const Environments = 2 => "environments";
            const Artifacts = 4 => "artifacts";
            const Everything = 6 => "everything";
        }
    }

    #[test]
    fn test_enum_reads_names_and_numbers() {
        let named: Visibility = serde_json::from_str(r#""Public""#).unwrap();
        let numeric: Visibility = serde_json::from_str("-1").unwrap();

        assert_eq!(named, Visibility::Public);
        assert_eq!(named.value(), 2);
        assert_eq!(numeric, Visibility::Unchanged);
        assert!(serde_json::from_str::<Visibility>("7").is_err());
    }

    #[test]
    fn test_enum_writes_names() {
        assert_eq!(
            serde_json::to_string(&Visibility::Private).unwrap(),
            r#""private""#
        );
        assert_eq!("public".parse::<Visibility>(), Ok(Visibility::Public));
    }

    #[test]
    fn test_flags_compose_and_render() {
        let both = Expands::Environments | Expands::Artifacts;
        assert!(both.contains(Expands::Artifacts));
        assert_eq!(both, Expands::Everything);
        assert_eq!(both.to_string(), "everything");
        assert_eq!(Expands::None.to_string(), "none");
    }

    #[test]
    fn test_flags_parse_lists_and_numbers() {
        let parsed: Expands = serde_json::from_str(r#""environments, artifacts""#).unwrap();
        assert_eq!(parsed.bits(), 6);

        let numeric: Expands = serde_json::from_str("4").unwrap();
        assert_eq!(numeric, Expands::Artifacts);
        assert_eq!(Expands::parse("bogus"), None);
    }
}
