//! Environment supplied by the launcher for query mode.

use std::path::PathBuf;
use thiserror::Error;

pub const OUTPUT_ENV_KEY: &str = "OUTPUT";
pub const IDENTIFIER_ENV_KEY: &str = "IDENTIFIER";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Where to write the response and who to attribute it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub output: PathBuf,
    pub identifier: String,
}

impl QueryConfig {
    /// Build from any key lookup. Both keys must be present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = lookup(OUTPUT_ENV_KEY).ok_or(ConfigError::MissingVar(OUTPUT_ENV_KEY))?;
        let identifier =
            lookup(IDENTIFIER_ENV_KEY).ok_or(ConfigError::MissingVar(IDENTIFIER_ENV_KEY))?;
        Ok(Self {
            output: PathBuf::from(output),
            identifier,
        })
    }
}
