//! Configuration discovery and loading.

use super::merge::merge_with_preset;
use super::presets::load_preset;
use super::{ConfigError, RuleConfig};
use log::{debug, trace};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File names searched for in each directory, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".validate-structurerc",
    ".validate-structurerc.json",
    "validate-structure.config.json",
];

/// Key holding the configuration inside `package.json`.
pub const PACKAGE_JSON_KEY: &str = "validate-structure";

/// Preset used when no configuration file is found.
pub const DEFAULT_PRESET: &str = "react";

const PACKAGE_JSON: &str = "package.json";

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file was found; the default preset was used.
    DefaultPreset,
}

/// A resolved configuration together with its source.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: RuleConfig,
    pub source: ConfigSource,
}

/// Searches `start` and its ancestors for a configuration file.
///
/// In each directory the dedicated file names are tried first, then a
/// `package.json` containing a `validate-structure` key. A `package.json`
/// that cannot be read or parsed is skipped.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        trace!("Searching for configuration in {}", dir.display());
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        let package = dir.join(PACKAGE_JSON);
        if package.is_file() && package_has_config(&package) {
            return Some(package);
        }
    }
    None
}

fn package_has_config(path: &Path) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };
    match serde_json::from_str::<Value>(&content) {
        Ok(value) => value.get(PACKAGE_JSON_KEY).is_some(),
        Err(e) => {
            debug!("Skipping unparseable {}: {}", path.display(), e);
            false
        }
    }
}

/// Reads the raw configuration value from a file.
///
/// For a `package.json` the value under the `validate-structure` key is
/// returned.
pub fn read_config_value(path: &Path) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| ConfigError::parse(path, e))?;

    if path.file_name().is_some_and(|name| name == PACKAGE_JSON) {
        return Ok(value.get(PACKAGE_JSON_KEY).cloned().unwrap_or(Value::Null));
    }
    Ok(value)
}

/// Resolves a raw configuration value into a typed configuration.
///
/// If the value names a `preset`, it is merged over that preset first.
pub fn resolve_config(value: Value) -> Result<RuleConfig, ConfigError> {
    let value = match value.get("preset").and_then(Value::as_str) {
        Some(name) => {
            debug!("Merging configuration with preset '{}'", name);
            merge_with_preset(load_preset(name)?, value)
        }
        None => value,
    };
    serde_json::from_value(value).map_err(ConfigError::Invalid)
}

/// Loads the configuration for a run.
///
/// An explicit path is read directly. Otherwise the search starts at
/// `search_from`, and the default preset is used when nothing is found.
pub fn load_config(explicit: Option<&Path>, search_from: &Path) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(search_from),
    };

    match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let value = read_config_value(&path)?;
            let config = resolve_config(value)?;
            Ok(LoadedConfig {
                config,
                source: ConfigSource::File(path),
            })
        }
        None => {
            debug!("No configuration file found, using '{}' preset", DEFAULT_PRESET);
            let config = resolve_config(load_preset(DEFAULT_PRESET)?)?;
            Ok(LoadedConfig {
                config,
                source: ConfigSource::DefaultPreset,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Severity;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_config_in_start_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".validate-structurerc.json"), "{}").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join(".validate-structurerc.json"));
    }

    #[test]
    fn file_names_are_tried_in_priority_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("validate-structure.config.json"), "{}").unwrap();
        fs::write(dir.path().join(".validate-structurerc"), "{}").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join(".validate-structurerc"));
    }

    #[test]
    fn finds_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("packages/app");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("validate-structure.config.json"), "{}").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join("validate-structure.config.json"));
    }

    #[test]
    fn package_json_needs_the_key() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "app" }"#).unwrap();
        assert_ne!(
            find_config_file(dir.path()),
            Some(dir.path().join("package.json"))
        );

        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "app", "validate-structure": { "severity": "warning" } }"#,
        )
        .unwrap();
        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("package.json"));

        let config = resolve_config(read_config_value(&found).unwrap()).unwrap();
        assert_eq!(config.severity, Severity::Warning);
    }

    #[test]
    fn explicit_path_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "severity": "warning", "ignore": ["dist"] }"#).unwrap();

        let loaded = load_config(Some(&path), dir.path()).unwrap();
        assert_eq!(loaded.source, ConfigSource::File(path));
        assert_eq!(loaded.config.severity, Severity::Warning);
        assert_eq!(loaded.config.ignore, vec!["dist"]);
        assert!(loaded.config.rules.component_colocation.is_none());
    }

    #[test]
    fn preset_is_merged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".validate-structurerc.json");
        fs::write(&path, r#"{ "preset": "react", "ignore": ["**/tmp/**"] }"#).unwrap();

        let loaded = load_config(None, dir.path()).unwrap();
        let config = loaded.config;
        assert!(config.rules.component_colocation.unwrap().enabled);
        assert_eq!(config.ignore.last().map(String::as_str), Some("**/tmp/**"));
        assert!(config.ignore.contains(&"**/node_modules/**".to_string()));
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_config(Some(&path), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_config(Some(&path), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn wrong_shape_is_invalid() {
        let err = resolve_config(serde_json::json!({ "ignore": "dist" })).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = resolve_config(serde_json::json!({ "preset": "angular" })).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset { .. }));
    }

    #[test]
    fn default_preset_config_resolves() {
        let config = resolve_config(load_preset(DEFAULT_PRESET).unwrap()).unwrap();
        assert_eq!(config.preset.as_deref(), Some(DEFAULT_PRESET));
        assert!(config.rules.folder_structure.is_some());
    }
}
