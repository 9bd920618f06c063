//! Configuration for the Deserialiser

use ard_domain::SetterConvention;
use serde::{Deserialize, Serialize};

/// Which field of the target type a chunk populates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// First field carrying a pattern declaration; an empty one captures the whole chunk
    #[default]
    FirstWithPattern,
    /// First field without a pattern declaration; always captures the whole chunk
    FirstWithoutPattern,
}

/// Configuration for the Deserialiser
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeserialiserConfig {
    /// Field selection policy
    #[serde(default)]
    pub field_policy: FieldPolicy,

    /// Naming convention for the setter fallback
    #[serde(default)]
    pub setter_convention: SetterConvention,

    /// Maximum input text length (characters); unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_text_length: Option<usize>,
}

impl DeserialiserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == Some(0) {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DeserialiserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.field_policy, FieldPolicy::FirstWithPattern);
        assert_eq!(config.setter_convention, SetterConvention::JavaBean);
        assert_eq!(config.max_text_length, None);
    }

    #[test]
    fn test_invalid_max_text_length() {
        let config = DeserialiserConfig {
            max_text_length: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml() {
        let config = DeserialiserConfig::from_toml(
            r#"
            field_policy = "first_without_pattern"
            setter_convention = "snake_case"
            max_text_length = 4096
            "#,
        )
        .unwrap();
        assert_eq!(config.field_policy, FieldPolicy::FirstWithoutPattern);
        assert_eq!(config.setter_convention, SetterConvention::SnakeCase);
        assert_eq!(config.max_text_length, Some(4096));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = DeserialiserConfig::from_toml("").unwrap();
        assert_eq!(config, DeserialiserConfig::default());
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result = DeserialiserConfig::from_toml(r#"field_policy = "last""#);
        assert!(result.unwrap_err().starts_with("Failed to parse TOML"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DeserialiserConfig {
            field_policy: FieldPolicy::FirstWithoutPattern,
            setter_convention: SetterConvention::SnakeCase,
            max_text_length: Some(10),
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = DeserialiserConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
