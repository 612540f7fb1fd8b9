//! Error types for boss data and option loading

use std::path::PathBuf;
use thiserror::Error;

/// Integrity failures in the bundled boss table
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no boss named {name} in boss data")]
    MissingBoss { name: String },

    #[error("expected exactly one boss named {name}, found {count}")]
    DuplicateBoss { name: String, count: usize },
}

/// Errors while loading placement options
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse placement options")]
    Parse(#[from] toml::de::Error),
}
