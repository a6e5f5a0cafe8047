//! Runtime configuration for the binary.
//!
//! Values come from the process environment, after `.env` has been loaded
//! with `dotenv`.

use crate::models::check_prefix;
use std::error::Error;
use std::str::FromStr;

pub const ENV_DEFAULT_PREFIX: &str = "IPV4_TOOLKIT_DEFAULT_PREFIX";
pub const ENV_LOG_CONFIG: &str = "IPV4_TOOLKIT_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "IPV4_TOOLKIT_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix used when none is given on the command line.
    pub default_prefix: u8,
    /// log4rs YAML file.
    pub log_config: String,
    /// Level for the fallback console logger when `log_config` is missing.
    pub log_level: log::LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_prefix: 24,
            log_config: "log4rs.yml".to_string(),
            log_level: log::LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(prefix) = lookup(ENV_DEFAULT_PREFIX) {
            let prefix: u8 = prefix
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_DEFAULT_PREFIX}={prefix}: {e}"))?;
            config.default_prefix = check_prefix(prefix)?;
        }
        if let Some(log_config) = lookup(ENV_LOG_CONFIG) {
            config.log_config = log_config;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = log::LevelFilter::from_str(level.trim())
                .map_err(|e| format!("Invalid {ENV_LOG_LEVEL}={level}: {e}"))?;
        }

        Ok(config)
    }
}
