//! Tunables for the linked-list toolkit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid toolkit config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// Node slots reserved when an arena is created.
    pub initial_capacity: usize,
    /// Longest list `merge_sort` handles recursively; longer lists are
    /// merged bottom-up so stack depth stays flat.
    pub recursive_sort_limit: usize,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            recursive_sort_limit: 4096,
        }
    }
}

impl ToolkitConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = ToolkitConfig::from_json(r#"{ "recursive_sort_limit": 16 }"#).unwrap();
        assert_eq!(config.recursive_sort_limit, 16);
        assert_eq!(config.initial_capacity, ToolkitConfig::default().initial_capacity);
        assert_eq!(ToolkitConfig::from_json("{}").unwrap(), ToolkitConfig::default());
    }

    #[test]
    fn rejects_unknown_and_malformed_input() {
        assert!(matches!(
            ToolkitConfig::from_json(r#"{ "recursion": 3 }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(ToolkitConfig::from_json("not json").is_err());
        assert!(ToolkitConfig::from_json(r#"{ "initial_capacity": -1 }"#).is_err());
    }

    #[test]
    fn survives_a_round_trip() {
        let config = ToolkitConfig {
            initial_capacity: 8,
            recursive_sort_limit: 2,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ToolkitConfig::from_json(&json).unwrap(), config);
    }
}
