use serde::{Deserialize, Serialize};
use tictactoe_engine::MAX_SEARCH_DEPTH;

/// Match settings loadable from a YAML file. Command-line flags override
/// whatever the file says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub depth_limit: usize,
    pub pruning_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth_limit: MAX_SEARCH_DEPTH,
            pruning_enabled: true,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Config, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;
        let config: Config = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.depth_limit > MAX_SEARCH_DEPTH {
            return Err(format!(
                "depth_limit must be between 0 and {}, got {}",
                MAX_SEARCH_DEPTH, self.depth_limit
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.depth_limit, MAX_SEARCH_DEPTH);
        assert!(config.pruning_enabled);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            depth_limit: 4,
            pruning_enabled: false,
        };
        let serialized = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_parse_yaml_document() {
        let parsed: Config =
            serde_yaml_ng::from_str("depth_limit: 6\npruning_enabled: true\n").unwrap();
        assert_eq!(parsed.depth_limit, 6);
        assert!(parsed.pruning_enabled);
    }

    #[test]
    fn test_validate_rejects_excess_depth() {
        let config = Config {
            depth_limit: 9,
            pruning_enabled: true,
        };
        assert!(config.validate().is_err());
    }
}
