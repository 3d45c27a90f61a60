use super::{ConfigError, ConfigResult};

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

pub const DEFAULT_MIN_AGE: u32 = 18;
pub const MAX_MIN_AGE: u32 = 150;
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
        }
    }
}

/// Settings for the User store.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserConfig {
    /// Youngest age, in whole years, a stored user may have
    pub min_age: u32,
    /// Capacity of the request channel in front of the store actor
    pub channel_buffer: usize,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl UserConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_age > MAX_MIN_AGE {
            return Err(ConfigError::invalid(format!(
                "users.min_age must be 0-{}, got {}",
                MAX_MIN_AGE, self.min_age
            )));
        }

        if self.channel_buffer == 0 {
            return Err(ConfigError::invalid("users.channel_buffer must be at least 1"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !LOG_LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::invalid(format!(
                "logging.level must be one of {}, got {}",
                LOG_LEVELS.join("/"),
                self.level
            )));
        }
        Ok(())
    }
}
