//! The validation orchestrator.

use super::checks::{Check, CheckContext, default_checks};
use super::{ValidationResult, ValidatorError};
use crate::config::RuleConfig;
use crate::scan::DirectoryScanner;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Where a [`ProjectValidator`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorState {
    /// Not started, or the last run failed.
    Idle,
    /// Walking the project tree.
    Scanning,
    /// Running checks over the scanned entries.
    Evaluating,
    /// The last run completed and its result was returned.
    Aggregated,
}

/// Runs every check over one project tree.
///
/// The validator owns its configuration and a scanner built from it. Each
/// call to [`validate`](Self::validate) starts from scratch, so a
/// validator can be reused.
pub struct ProjectValidator {
    config: RuleConfig,
    scanner: DirectoryScanner,
    checks: Vec<Box<dyn Check>>,
    state: ValidatorState,
}

impl ProjectValidator {
    /// Creates a validator for the project at `root`.
    pub fn new(config: RuleConfig, root: impl Into<PathBuf>) -> Self {
        let scanner = DirectoryScanner::new(root, &config.ignore);
        Self {
            config,
            scanner,
            checks: default_checks(),
            state: ValidatorState::Idle,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Returns the project root.
    pub fn root(&self) -> &Path {
        self.scanner.root()
    }

    /// Returns the current state.
    pub fn state(&self) -> ValidatorState {
        self.state
    }

    /// Scans the project and runs all checks.
    ///
    /// Checks run in a fixed order and their findings keep that order
    /// within the errors and warnings lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is missing, not a directory, or
    /// unreadable. The validator is left idle in that case.
    pub fn validate(&mut self) -> Result<ValidationResult, ValidatorError> {
        info!("Validating project structure at {}", self.root().display());
        self.state = ValidatorState::Scanning;

        let entries = match self.scanner.scan_all() {
            Ok(entries) => entries,
            Err(e) => {
                self.state = ValidatorState::Idle;
                return Err(e);
            }
        };
        let files_scanned = entries.iter().filter(|e| !e.is_directory).count();
        let directories_scanned = entries.len() - files_scanned;
        debug!(
            "Scanned {} files and {} directories",
            files_scanned, directories_scanned
        );

        self.state = ValidatorState::Evaluating;
        let ctx = CheckContext::new(&self.scanner, &entries, &self.config);
        let mut findings = Vec::new();

        for check in &self.checks {
            debug!("Running check: {}", check.name());
            let check_findings = check.run(&ctx);
            debug!(
                "Check '{}' found {} issues",
                check.name(),
                check_findings.len()
            );
            findings.extend(check_findings);
        }

        let result =
            ValidationResult::from_findings(findings, files_scanned, directories_scanned);
        self.state = ValidatorState::Aggregated;

        info!(
            "Validation complete: {} errors, {} warnings",
            result.errors.len(),
            result.warnings.len()
        );
        Ok(result)
    }
}

impl std::fmt::Debug for ProjectValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectValidator")
            .field("config", &self.config)
            .field("scanner", &self.scanner)
            .field("checks", &self.checks.iter().map(|c| c.name()).collect::<Vec<_>>())
            .field("state", &self.state)
            .finish()
    }
}
