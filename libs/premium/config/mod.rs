use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Monitor configuration
///
/// Every field has a built-in default pointing at the real endpoints, so the
/// binaries run without any file present; a YAML file is an override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub binance: BinanceConfig,
    pub yahoo: YahooConfig,
    pub poll: PollConfig,
}

/// Binance P2P advertisement-search source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BinanceConfig {
    pub base_url: String,
    /// How many best-priced advertisements to request per direction
    pub rows: u32,
}

/// Yahoo Finance chart source for the reference rate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YahooConfig {
    pub base_url: String,
    /// USD/CNY expressed as CNY per USD
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub interval_secs: u64,
    pub request_timeout_secs: u64,
    pub history_capacity: usize,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://p2p.binance.com".to_string(),
            rows: 5,
        }
    }
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            symbol: "CNY=X".to_string(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: 5,
            request_timeout_secs: 5,
            history_capacity: 100,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            binance: BinanceConfig::default(),
            yahoo: YahooConfig::default(),
            poll: PollConfig::default(),
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl MonitorConfig {
    /// Load configuration from a YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let config: MonitorConfig = serde_yaml::from_str(&yaml_content)?;

        config.validate()?;

        Ok(config)
    }

    /// Load from a YAML file if it exists, otherwise use the defaults
    pub fn load_or_default(config_path: impl AsRef<Path>) -> Result<Self> {
        if config_path.as_ref().exists() {
            Self::load(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "poll.interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.poll.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "poll.request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.poll.history_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "poll.history_capacity must be greater than 0".to_string(),
            ));
        }

        if self.binance.rows == 0 {
            return Err(ConfigError::ValidationError(
                "binance.rows must be greater than 0".to_string(),
            ));
        }

        if self.binance.base_url.is_empty() || self.yahoo.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "source base URLs must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = MonitorConfig::default();
        assert!(config.validate().is_ok());

        assert_eq!(config.poll.interval_secs, 5);
        assert_eq!(config.poll.history_capacity, 100);
        assert_eq!(config.binance.rows, 5);
        assert_eq!(config.yahoo.symbol, "CNY=X");
    }

    #[test]
    fn test_zero_values_rejected() {
        let mut config = MonitorConfig::default();
        config.poll.interval_secs = 0;
        assert!(config.validate().is_err());

        let mut config = MonitorConfig::default();
        config.poll.history_capacity = 0;
        assert!(config.validate().is_err());

        let mut config = MonitorConfig::default();
        config.binance.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let yaml = "poll:\n  interval_secs: 10\n";
        let config: MonitorConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.poll.interval_secs, 10);
        // Unspecified sections keep their defaults
        assert_eq!(config.poll.history_capacity, 100);
        assert_eq!(config.binance.base_url, "https://p2p.binance.com");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "binance:\n  rows: 10\npoll:\n  interval_secs: 30").unwrap();

        let config = MonitorConfig::load(file.path()).unwrap();
        assert_eq!(config.binance.rows, 10);
        assert_eq!(config.poll.interval_secs, 30);
    }

    #[test]
    fn test_load_or_default_with_missing_file() {
        let config = MonitorConfig::load_or_default("does/not/exist.yaml").unwrap();
        assert_eq!(config.poll.interval_secs, 5);
    }
}
