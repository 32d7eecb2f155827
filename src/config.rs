//! Runtime configuration
//!
//! Loaded from TOML (with the `cli` feature) at an explicit path or
//! `~/.rusty-xe/config.toml`. Every field has a default:
//!
//! ```toml
//! target_currency = "EUR"
//! lookback_days = 7
//! endpoint = "https://api.exchangeratesapi.io"
//!
//! [engine]
//! missing_rate_policy = "zero_fill"
//!
//! [http]
//! retry_count = 3
//! retry_wait_ms = 500
//! retry_max_wait_ms = 1000
//! timeout_ms = 500
//! ```

use crate::currency::Currency;
use crate::data::sources::{RetryPolicy, EXCHANGE_RATES_BASE_URL};
use crate::data::DEFAULT_LOOKBACK_DAYS;
use crate::engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_target_currency")]
    pub target_currency: Currency,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Rate provider client settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub retry_count: u32,
    pub retry_wait_ms: u64,
    pub retry_max_wait_ms: u64,
    pub timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            retry_count: policy.retry_count,
            retry_wait_ms: policy.wait.as_millis() as u64,
            retry_max_wait_ms: policy.max_wait.as_millis() as u64,
            timeout_ms: policy.timeout.as_millis() as u64,
        }
    }
}

impl HttpConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            retry_count: self.retry_count,
            wait: Duration::from_millis(self.retry_wait_ms),
            max_wait: Duration::from_millis(self.retry_max_wait_ms),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

fn default_target_currency() -> Currency {
    Currency::TARGET
}

fn default_lookback_days() -> u32 {
    DEFAULT_LOOKBACK_DAYS
}

fn default_endpoint() -> String {
    EXCHANGE_RATES_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_currency: default_target_currency(),
            lookback_days: default_lookback_days(),
            endpoint: default_endpoint(),
            engine: EngineConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

#[cfg(feature = "cli")]
mod file {
    use super::Config;
    use crate::error::{Result, XeError};
    use std::fs;
    use std::path::{Path, PathBuf};

    impl Config {
        /// Parse a TOML document
        pub fn from_toml_str(contents: &str) -> Result<Self> {
            toml::from_str(contents).map_err(|e| XeError::ConfigError(e.to_string()))
        }

        /// Read and parse a TOML file
        pub fn from_file(path: &Path) -> Result<Self> {
            Self::from_toml_str(&fs::read_to_string(path)?)
        }

        /// `~/.rusty-xe/config.toml`
        pub fn default_path() -> Option<PathBuf> {
            dirs::home_dir().map(|home| home.join(".rusty-xe").join("config.toml"))
        }

        /// Load from `path`, else the default location, else defaults.
        ///
        /// Unreadable or malformed files are logged and skipped.
        pub fn load(path: Option<&Path>) -> Self {
            let candidate = match path {
                Some(p) => Some(p.to_path_buf()),
                None => Self::default_path().filter(|p| p.exists()),
            };

            match candidate {
                Some(p) => match Self::from_file(&p) {
                    Ok(config) => {
                        log::debug!("Loaded configuration from {}", p.display());
                        config
                    }
                    Err(e) => {
                        log::warn!("Ignoring configuration {}: {}", p.display(), e);
                        Config::default()
                    }
                },
                None => Config::default(),
            }
        }
    }
}
