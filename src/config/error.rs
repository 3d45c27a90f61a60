use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config error: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        ConfigError::Invalid(message.into())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
