//! Configuration handling for the CLI.
//!
//! This module turns CLI arguments into a validated run configuration and
//! writes starter configuration files for `init`.

use crate::cli::CheckArgs;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use structure_validator_core::config::{
    ConfigSource, RuleConfig, find_preset, load_config, validate_config,
};
use structure_validator_core::{ConfigError as LoadError, ValidationResult};
use thiserror::Error;

/// Name of the file written by `init`.
pub const INIT_FILE_NAME: &str = ".validate-structurerc.json";

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The loaded configuration is inconsistent.
    #[error("configuration has {} problem(s)", .0.len())]
    Problems(Vec<String>),

    /// `init` would overwrite an existing file.
    #[error("configuration file already exists at: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Validation passed successfully.
    Success = 0,
    /// Application startup failed (wrong configuration or internal error).
    StartupFailure = 1,
    /// Application terminated by signal (SIGINT/SIGTERM).
    Terminated = 2,
    /// Validation failed (errors were found).
    ValidationFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Validated and processed configuration for running the validator.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Canonical path to the project root.
    pub root: PathBuf,
    /// The resolved rule configuration.
    pub rule_config: RuleConfig,
    /// Where the rule configuration came from.
    pub source: ConfigSource,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from `check` arguments.
    ///
    /// Without `--config`, configuration files are searched for starting
    /// at the root.
    pub fn from_args(args: &CheckArgs) -> Result<Self, ConfigError> {
        let root = args.root.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!(
                "root directory '{}' is invalid: {}",
                args.root.display(),
                e
            ))
        })?;

        if !root.is_dir() {
            return Err(ConfigError::Invalid(format!(
                "root '{}' is not a directory",
                args.root.display()
            )));
        }

        let loaded = load_config(args.config.as_deref(), &root)?;

        let problems = validate_config(&loaded.config);
        if !problems.is_empty() {
            return Err(ConfigError::Problems(problems));
        }

        Ok(Self {
            root,
            rule_config: loaded.config,
            source: loaded.source,
            json_output: args.json,
        })
    }

    /// Determines the exit code based on validation results.
    pub fn exit_code_for_result(&self, result: &ValidationResult) -> ExitCode {
        if result.valid {
            ExitCode::Success
        } else {
            ExitCode::ValidationFailed
        }
    }
}

/// Writes a starter configuration for `preset` into `dir`.
///
/// Returns the path of the new file. Refuses to overwrite an existing one.
pub fn write_init_config(dir: &Path, preset: &str) -> Result<PathBuf, ConfigError> {
    let path = dir.join(INIT_FILE_NAME);
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path));
    }

    if find_preset(preset).is_none() {
        return Err(LoadError::unknown_preset(preset).into());
    }

    let config = json!({
        "preset": preset,
        "rules": {
            "componentColocation": {
                "enabled": true
            }
        }
    });
    let content = serde_json::to_string_pretty(&config)
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    fs::write(&path, content + "\n")?;
    Ok(path)
}
