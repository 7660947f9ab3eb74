use serde::{Deserialize, Deserializer};
use std::{fmt, str::FromStr};

/// The `kind` field of a wire union.
///
/// Discriminators are transmitted as strings. A string this version of the
/// schema doesn't know about is kept as [`Discriminator::Unrecognized`]
/// rather than rejected during deserialization, so the decoder can report
/// the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Discriminator<K> {
    /// A discriminator known to the schema.
    Known(K),

    /// A discriminator produced by a newer schema.
    Unrecognized(Box<str>),
}

impl<K> From<K> for Discriminator<K> {
    fn from(kind: K) -> Self {
        Discriminator::Known(kind)
    }
}

impl<K: fmt::Display> fmt::Display for Discriminator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discriminator::Known(kind) => kind.fmt(f),
            Discriminator::Unrecognized(raw) => raw.fmt(f),
        }
    }
}

impl<'de, K: FromStr> Deserialize<'de> for Discriminator<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        Ok(match raw.parse() {
            Ok(kind) => Discriminator::Known(kind),
            Err(_) => Discriminator::Unrecognized(raw.into_boxed_str()),
        })
    }
}

/// A wire record encoding a discriminated union.
pub trait Union {
    /// The set of discriminators known to the schema.
    type Kind: Copy + fmt::Display;

    /// The name of the union, used in diagnostics.
    const NAME: &'static str;

    /// The discriminator selecting the active payload slot.
    fn kind(&self) -> &Discriminator<Self::Kind>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
    enum Color {
        Red,
        Green,
    }

    #[test]
    fn known_discriminator() {
        let kind: Discriminator<Color> = serde_json::from_str(r#""Green""#).unwrap();
        assert_eq!(kind, Discriminator::Known(Color::Green));
        assert_eq!(kind.to_string(), "Green");
    }

    #[test]
    fn unrecognized_discriminator_is_kept() {
        let kind: Discriminator<Color> = serde_json::from_str(r#""Ultraviolet""#).unwrap();
        assert_eq!(kind, Discriminator::Unrecognized("Ultraviolet".into()));
        assert_eq!(kind.to_string(), "Ultraviolet");
    }

    #[test]
    fn non_string_discriminator_is_rejected() {
        assert!(serde_json::from_str::<Discriminator<Color>>("3").is_err());
    }
}
