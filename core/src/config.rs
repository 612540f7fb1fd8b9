//! Placement option loading
//!
//! Options live in a small TOML file next to the host's other settings:
//!
//! ```toml
//! enable_dlc = true
//! randomize_weapons = false
//! ```
//!
//! Missing keys fall back to [`PlacementOptions::default`].

use std::fs;
use std::path::Path;

use ds3_rando_types::PlacementOptions;

use crate::error::ConfigError;

/// Load placement options from a TOML file
pub fn load_options(path: &Path) -> Result<PlacementOptions, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let options: PlacementOptions =
        toml::from_str(&content).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        enable_dlc = options.enable_dlc,
        randomize_weapons = options.randomize_weapons,
        "loaded placement options"
    );
    Ok(options)
}

/// Parse placement options from a TOML string
pub fn parse_options(content: &str) -> Result<PlacementOptions, ConfigError> {
    Ok(toml::from_str(content)?)
}
