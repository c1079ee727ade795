//! Configuration for structure validation.
//!
//! A configuration is read from a JSON file (or the `validate-structure`
//! key of `package.json`), merged over a preset when it names one, and
//! deserialized into a [`RuleConfig`]. When no file is found the `react`
//! preset is used as is.
//!
//! # Example
//!
//! ```
//! use structure_validator_core::config::{resolve_config, validate_config};
//!
//! let config = resolve_config(serde_json::json!({
//!     "preset": "react",
//!     "severity": "warning"
//! }))
//! .unwrap();
//! assert!(validate_config(&config).is_empty());
//! ```

mod loader;
mod merge;
mod model;
mod presets;
mod validation;

pub use loader::{
    CONFIG_FILE_NAMES, ConfigSource, DEFAULT_PRESET, LoadedConfig, PACKAGE_JSON_KEY,
    find_config_file, load_config, read_config_value, resolve_config,
};
pub use merge::merge_with_preset;
pub use model::{
    ColocationConfig, FileNamingRule, FileNamingRules, FilePattern, FolderRule, RuleConfig, Rules,
};
pub use presets::{PRESETS, Preset, find_preset, load_preset, preset_names};
pub use validation::validate_config;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON.
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration does not have the expected shape.
    #[error("invalid configuration: {0}")]
    Invalid(#[source] serde_json::Error),

    /// The named preset does not exist.
    #[error("Preset \"{name}\" not found. Available presets: {available}")]
    UnknownPreset { name: String, available: String },

    /// A built-in preset failed to parse.
    #[error("built-in preset '{name}' is malformed: {source}")]
    InvalidPreset {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Creates a read error for `path`.
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a parse error for `path`.
    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an unknown preset error listing the available presets.
    pub fn unknown_preset(name: &str) -> Self {
        Self::UnknownPreset {
            name: name.to_string(),
            available: preset_names().join(", "),
        }
    }
}
