//! Structure Validator Core
//!
//! A library for validating the folder structure and naming conventions of
//! a project tree.
//!
//! # Features
//!
//! - **Co-location**: Require tests, stories, and other files next to each
//!   component
//! - **File naming**: Enforce PascalCase, camelCase, kebab-case, snake_case,
//!   or UPPER_CASE names on files selected by glob
//! - **Folder structure**: Require folders and restrict the extensions and
//!   names of the files inside them
//! - **Presets**: Start from a built-in configuration and override only what
//!   differs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use structure_validator_core::config::load_config;
//! use structure_validator_core::validate::ProjectValidator;
//!
//! let root = Path::new(".");
//! let loaded = load_config(None, root).unwrap();
//!
//! let mut validator = ProjectValidator::new(loaded.config, root);
//! let result = validator.validate().unwrap();
//!
//! for error in &result.errors {
//!     eprintln!("{}: {}", error.location().unwrap_or("-"), error);
//! }
//! println!(
//!     "{} files, {} directories scanned",
//!     result.files_scanned, result.directories_scanned
//! );
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration model, presets, and discovery
//! - [`validate`]: The validator, its checks, and finding types
//! - [`naming`]: Naming convention matching and conversion
//! - [`scan`]: Project tree walking
//! - [`matching`]: Glob matching for configuration patterns

pub mod config;
pub mod matching;
pub mod naming;
pub mod scan;
pub mod validate;

// Re-export commonly used types at the crate root
pub use config::{ConfigError, RuleConfig, load_config};
pub use naming::NamingConvention;
pub use validate::checks::{Check, CheckContext};
pub use validate::{
    Finding, FindingKind, ProjectValidator, Severity, ValidationResult, ValidatorError,
};
