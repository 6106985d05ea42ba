// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    pub recursive: bool,
    pub cache_layouts: bool,
    pub show_padding: bool,
    pub indent_width: usize,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            cache_layouts: true,
            show_padding: true,
            indent_width: 2,
        }
    }
}

impl InspectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_layout_cache(mut self, enabled: bool) -> Self {
        self.cache_layouts = enabled;
        self
    }

    pub fn with_padding_rows(mut self, show: bool) -> Self {
        self.show_padding = show;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.indent_width > 8 {
            return Err("indent_width must be at most 8".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = InspectorConfig::from_json(r#"{ "recursive": false }"#).unwrap();
        assert!(!config.recursive);
        assert!(config.cache_layouts);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_invalid_indent_rejected() {
        let err = InspectorConfig::from_json(r#"{ "indent_width": 40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            InspectorConfig::from_json("{ recursive"),
            Err(ConfigError::Parse(_))
        ));
    }
}
