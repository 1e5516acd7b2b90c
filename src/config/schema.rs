// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from commitgate.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for commitgate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GateConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl GateConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum length of the subject line, in characters.
    pub max_subject_length: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_subject_length: 72,
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to prefix results with emoji markers.
    pub emoji: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            emoji: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(config.rules.max_subject_length, 72);
        assert!(config.ui.color);
        assert!(config.ui.emoji);
    }

    #[test]
    fn test_config_serialization() {
        let config = GateConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("max_subject_length = 72"));
        assert!(toml_str.contains("emoji = true"));
    }
}
