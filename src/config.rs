//! Conversion settings
//!
//! Settings are plain serde structs so the UI can hand them over as a JS
//! object, and native callers can keep them in a JSON or YAML file:
//!
//! ```yaml
//! unknown_tokens: verbatim
//! default_scale: "s r2 g3 m1 p d2 n3"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do with a token the note table does not know
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTokenPolicy {
    /// Fail the whole conversion
    #[default]
    Strict,
    /// Copy the token into the output as written and keep going
    Verbatim,
}

/// Settings applied to every conversion made by a `Converter`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Unknown-token handling
    pub unknown_tokens: UnknownTokenPolicy,

    /// Scale used when the caller passes a blank one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_scale: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConversionSettings {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Pick the scale for a call: the caller's, or the configured default
    /// when the caller's is blank
    pub fn effective_scale<'a>(&'a self, scale: &'a str) -> &'a str {
        match &self.default_scale {
            Some(default) if scale.trim().is_empty() => default.as_str(),
            _ => scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ConversionSettings::default();
        assert_eq!(settings.unknown_tokens, UnknownTokenPolicy::Strict);
        assert!(settings.default_scale.is_none());
    }

    #[test]
    fn test_from_json() {
        let settings =
            ConversionSettings::from_json(r#"{"unknown_tokens": "verbatim"}"#).unwrap();
        assert_eq!(settings.unknown_tokens, UnknownTokenPolicy::Verbatim);
        assert!(settings.default_scale.is_none());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "unknown_tokens: strict\ndefault_scale: \"s r2 g3\"\n";
        let settings = ConversionSettings::from_yaml(yaml).unwrap();
        assert_eq!(settings.unknown_tokens, UnknownTokenPolicy::Strict);
        assert_eq!(settings.default_scale.as_deref(), Some("s r2 g3"));
    }

    #[test]
    fn test_empty_documents_use_defaults() {
        assert_eq!(ConversionSettings::from_json("{}").unwrap(), ConversionSettings::default());
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let err = ConversionSettings::from_json(r#"{"unknown_tokens": "loose"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("Invalid JSON settings"));
    }

    #[test]
    fn test_effective_scale() {
        let settings = ConversionSettings {
            default_scale: Some("r2 g3".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.effective_scale(""), "r2 g3");
        assert_eq!(settings.effective_scale("  "), "r2 g3");
        assert_eq!(settings.effective_scale("r1"), "r1");

        let plain = ConversionSettings::default();
        assert_eq!(plain.effective_scale(""), "");
    }
}
