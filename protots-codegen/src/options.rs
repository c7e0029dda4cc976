//! Generation options.
//!
//! Options are resolved once by the configuration loader and shared
//! read-only for the duration of a run. The legacy boolean form of
//! `useOptionals` is normalized to the enum here, at load time, so the
//! boolean/string duality never reaches the policy logic.

use serde::Deserialize;
use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Controls how field absence is expressed in generated declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UseOptionals {
    /// Absence is embedded in the type expression (`string | undefined`).
    #[default]
    None,
    /// Message-typed properties are optional; scalars keep the union form.
    Messages,
    /// Every property is optional.
    All,
}

impl UseOptionals {
    /// Parses the mode from its configuration string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "messages" => Some(Self::Messages),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Normalizes the legacy boolean configuration form.
    #[must_use]
    pub const fn from_legacy_bool(value: bool) -> Self {
        if value { Self::All } else { Self::None }
    }
}

impl<'de> Deserialize<'de> for UseOptionals {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UseOptionalsVisitor;

        impl Visitor<'_> for UseOptionalsVisitor {
            type Value = UseOptionals;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("\"none\", \"messages\", \"all\", or a legacy boolean")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(UseOptionals::from_legacy_bool(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                UseOptionals::parse(value)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(UseOptionalsVisitor)
    }
}

/// Generator-wide options, immutable for the run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenOptions {
    /// How field absence is expressed.
    pub use_optionals: UseOptionals,
}

impl GenOptions {
    /// Creates options with the given optionality mode.
    #[must_use]
    pub fn with_use_optionals(use_optionals: UseOptionals) -> Self {
        Self { use_optionals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(UseOptionals::parse("none"), Some(UseOptionals::None));
        assert_eq!(UseOptionals::parse("messages"), Some(UseOptionals::Messages));
        assert_eq!(UseOptionals::parse("all"), Some(UseOptionals::All));
        assert_eq!(UseOptionals::parse("ALL"), Some(UseOptionals::All));
        assert_eq!(UseOptionals::parse("invalid"), None);
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(UseOptionals::default(), UseOptionals::None);
        assert_eq!(GenOptions::default().use_optionals, UseOptionals::None);
    }

    #[test]
    fn test_legacy_bool_normalization() {
        assert_eq!(UseOptionals::from_legacy_bool(true), UseOptionals::All);
        assert_eq!(UseOptionals::from_legacy_bool(false), UseOptionals::None);
    }

    #[test]
    fn test_deserialize_string_form() {
        let opts: GenOptions = serde_json::from_str(r#"{"useOptionals": "messages"}"#).unwrap();
        assert_eq!(opts.use_optionals, UseOptionals::Messages);
    }

    #[test]
    fn test_deserialize_legacy_bool_form() {
        let opts: GenOptions = serde_json::from_str(r#"{"useOptionals": true}"#).unwrap();
        assert_eq!(opts.use_optionals, UseOptionals::All);

        let opts: GenOptions = serde_json::from_str(r#"{"useOptionals": false}"#).unwrap();
        assert_eq!(opts.use_optionals, UseOptionals::None);
    }

    #[test]
    fn test_deserialize_missing_key_defaults() {
        let opts: GenOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.use_optionals, UseOptionals::None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_string() {
        let result: Result<GenOptions, _> = serde_json::from_str(r#"{"useOptionals": "maybe"}"#);
        assert!(result.is_err());
    }
}
