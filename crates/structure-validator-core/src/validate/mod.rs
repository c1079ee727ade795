//! Structure validation for project trees.
//!
//! A [`ProjectValidator`] scans a project, runs the built-in checks, and
//! collects their findings into a [`ValidationResult`].
//!
//! # Example
//!
//! ```rust,no_run
//! use structure_validator_core::config::load_preset;
//! use structure_validator_core::config::resolve_config;
//! use structure_validator_core::validate::ProjectValidator;
//!
//! let config = resolve_config(load_preset("react").unwrap()).unwrap();
//! let mut validator = ProjectValidator::new(config, ".");
//!
//! match validator.validate() {
//!     Ok(result) if result.valid => println!("Project structure is valid!"),
//!     Ok(result) => {
//!         for finding in &result.errors {
//!             eprintln!("{}", finding);
//!         }
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod checks;
mod error;
mod validator;

// Re-export public types
pub use error::{Finding, FindingKind, Severity, ValidationResult, ValidatorError};
pub use validator::{ProjectValidator, ValidatorState};
