//! # Configuration
//!
//! Settings for the registry binary, loaded once at startup.
//!
//! Loading order:
//! 1. Built-in defaults
//! 2. The TOML file named by `USER_REGISTRY_CONFIG`, else `./config.toml` if present
//! 3. `USER_REGISTRY_*` environment overrides
//!
//! `load()` does not validate; call [`Config::validate`] afterwards.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [users]
//! min_age = 18
//!
//! [logging]
//! level = "debug"
//! ```

mod error;
mod sections;

pub use error::{ConfigError, ConfigResult};
pub use sections::*;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::info;

pub const CONFIG_PATH_VAR: &str = "USER_REGISTRY_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub users: UserConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the file system and process environment.
    pub fn load() -> ConfigResult<Self> {
        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::load_toml(Path::new(&path))?,
            Err(_) => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_toml(&default_path)?
                } else {
                    Config::default()
                }
            }
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;

        Ok(config)
    }

    /// Load and parse a TOML file. Sections and keys it omits keep their defaults.
    pub fn load_toml(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply `USER_REGISTRY_*` overrides, reading variables through `lookup`.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<()> {
        if let Some(host) = lookup("USER_REGISTRY_HOST") {
            self.server.host = host;
        }
        Self::apply_parse(&lookup, "USER_REGISTRY_PORT", &mut self.server.port)?;
        Self::apply_parse(&lookup, "USER_REGISTRY_MIN_AGE", &mut self.users.min_age)?;
        if let Some(level) = lookup("USER_REGISTRY_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    fn apply_parse<T: FromStr>(
        lookup: &impl Fn(&str) -> Option<String>,
        name: &str,
        target: &mut T,
    ) -> ConfigResult<()> {
        if let Some(raw) = lookup(name) {
            *target = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid(format!("{name} is not a valid value: {raw}")))?;
        }
        Ok(())
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.users.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!(
            bind = %self.bind_addr(),
            min_age = self.users.min_age,
            channel_buffer = self.users.channel_buffer,
            log_level = %self.logging.level,
            "Configuration loaded"
        );
    }
}
