//! Finding and result types for structure validation.
//!
//! Rule violations are data, not failures: every rule produces
//! [`Finding`]s and the orchestrator sorts them into errors and warnings.
//! Only conditions that make a run meaningless surface as
//! [`ValidatorError`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, but does not fail the run.
    Warning,
    /// Fails the run.
    #[default]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// The kind of rule violation a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// A component is missing a required co-located file.
    MissingFile,
    /// A file or directory name breaks a naming convention.
    NamingViolation,
    /// A required directory does not exist.
    StructureViolation,
    /// A file has an extension that is not allowed where it lives.
    ForbiddenFile,
}

impl FindingKind {
    /// Returns the tag used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingFile => "missing-file",
            Self::NamingViolation => "naming-violation",
            Self::StructureViolation => "structure-violation",
            Self::ForbiddenFile => "forbidden-file",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule violation found in the project tree.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct Finding {
    /// What kind of violation this is.
    #[serde(rename = "type")]
    pub kind: FindingKind,
    /// Whether the violation fails the run.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// The offending file, relative to the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// The directory involved, relative to the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// The name or pattern that was expected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// The name that was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// How to fix the violation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    fn new(kind: FindingKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            file: None,
            directory: None,
            expected: None,
            actual: None,
            suggestion: None,
        }
    }

    /// Creates a missing co-located file finding.
    ///
    /// `label` is the pattern's description, or the expanded pattern when
    /// it has none.
    pub fn missing_file(
        severity: Severity,
        directory: impl Into<String>,
        label: &str,
        expected_pattern: impl Into<String>,
    ) -> Self {
        let directory = directory.into();
        let expected_pattern = expected_pattern.into();
        let mut finding = Self::new(
            FindingKind::MissingFile,
            severity,
            format!("Missing required file: {}", label),
        );
        finding.suggestion = Some(format!("Create {} in {}/", expected_pattern, directory));
        finding.expected = Some(expected_pattern);
        finding.directory = Some(directory);
        finding
    }

    /// Creates a naming violation for a component directory.
    pub fn directory_naming(
        severity: Severity,
        directory: impl Into<String>,
        convention: &str,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        let expected = expected.into();
        let mut finding = Self::new(
            FindingKind::NamingViolation,
            severity,
            format!(
                "Component directory name doesn't follow {} convention",
                convention
            ),
        );
        finding.suggestion = Some(format!("Rename directory to {}", expected));
        finding.directory = Some(directory.into());
        finding.actual = Some(actual.into());
        finding.expected = Some(expected);
        finding
    }

    /// Creates a naming violation for a file.
    ///
    /// `message` describes which rule the file broke.
    pub fn file_naming(
        severity: Severity,
        message: impl Into<String>,
        file: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        let expected = expected.into();
        let mut finding = Self::new(FindingKind::NamingViolation, severity, message);
        finding.suggestion = Some(format!("Rename to {}", expected));
        finding.file = Some(file.into());
        finding.actual = Some(actual.into());
        finding.expected = Some(expected);
        finding
    }

    /// Creates a missing required directory finding.
    pub fn missing_directory(severity: Severity, name: &str, path: impl Into<String>) -> Self {
        let path = path.into();
        let mut finding = Self::new(
            FindingKind::StructureViolation,
            severity,
            format!("Required directory not found: {}", name),
        );
        finding.suggestion = Some(format!("Create directory at {}", path));
        finding.directory = Some(path);
        finding
    }

    /// Creates a forbidden file extension finding.
    ///
    /// These are always warnings.
    pub fn forbidden_file(
        file: impl Into<String>,
        extension: &str,
        rule_name: &str,
        allowed: &[String],
    ) -> Self {
        let mut finding = Self::new(
            FindingKind::ForbiddenFile,
            Severity::Warning,
            format!("File extension {} not allowed in {}", extension, rule_name),
        );
        finding.file = Some(file.into());
        finding.suggestion = Some(format!("Allowed extensions: {}", allowed.join(", ")));
        finding
    }

    /// Returns the path this finding points at, preferring the file.
    pub fn location(&self) -> Option<&str> {
        self.file.as_deref().or(self.directory.as_deref())
    }
}

/// The outcome of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff there are no errors. Warnings never affect this.
    pub valid: bool,
    /// Findings with error severity, in the order they were found.
    pub errors: Vec<Finding>,
    /// Findings with warning severity, in the order they were found.
    pub warnings: Vec<Finding>,
    /// Number of files in the scan.
    pub files_scanned: usize,
    /// Number of directories in the scan.
    pub directories_scanned: usize,
}

impl ValidationResult {
    /// Builds a result by partitioning findings by severity.
    pub fn from_findings(
        findings: impl IntoIterator<Item = Finding>,
        files_scanned: usize,
        directories_scanned: usize,
    ) -> Self {
        let (warnings, errors): (Vec<_>, Vec<_>) = findings
            .into_iter()
            .partition(|f| f.severity == Severity::Warning);

        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            files_scanned,
            directories_scanned,
        }
    }

    /// Returns true if validation passed.
    pub fn is_ok(&self) -> bool {
        self.valid
    }

    /// Returns true if there are errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true if there are warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns true if nothing at all was reported.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// A failure that prevents validation from running at all.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The root directory does not exist or is not a directory.
    #[error("root directory '{}' does not exist or is not a directory", path.display())]
    RootNotFound {
        /// The configured root.
        path: PathBuf,
    },

    /// The root directory exists but cannot be read.
    #[error("cannot read root directory '{}': {source}", path.display())]
    RootUnreadable {
        /// The configured root.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_finding() {
        let finding = Finding::missing_file(
            Severity::Error,
            "src/components/Button",
            "Test file for component",
            "Button.test.{ts,tsx}",
        );
        assert_eq!(finding.kind, FindingKind::MissingFile);
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(
            finding.to_string(),
            "Missing required file: Test file for component"
        );
        assert_eq!(finding.expected.as_deref(), Some("Button.test.{ts,tsx}"));
        assert_eq!(
            finding.suggestion.as_deref(),
            Some("Create Button.test.{ts,tsx} in src/components/Button/")
        );
        assert_eq!(finding.location(), Some("src/components/Button"));
    }

    #[test]
    fn forbidden_file_is_always_a_warning() {
        let allowed = vec![".ts".to_string(), ".tsx".to_string()];
        let finding = Finding::forbidden_file("src/hooks/data.json", ".json", "hooks", &allowed);
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.kind, FindingKind::ForbiddenFile);
        assert_eq!(finding.suggestion.as_deref(), Some("Allowed extensions: .ts, .tsx"));
        assert!(finding.to_string().contains(".json"));
    }

    #[test]
    fn missing_directory_finding() {
        let finding = Finding::missing_directory(Severity::Warning, "hooks", "src/hooks");
        assert_eq!(finding.kind, FindingKind::StructureViolation);
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.directory.as_deref(), Some("src/hooks"));
        assert!(finding.file.is_none());
    }

    #[test]
    fn finding_serializes_with_kebab_case_type() {
        let finding = Finding::file_naming(
            Severity::Error,
            "File name doesn't follow PascalCase convention",
            "src/components/button.tsx",
            "button.tsx",
            "Button.tsx",
        );
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type"], "naming-violation");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["expected"], "Button.tsx");
        assert!(json.get("directory").is_none());
    }

    #[test]
    fn severity_ordering_and_default() {
        assert!(Severity::Warning < Severity::Error);
        assert_eq!(Severity::default(), Severity::Error);
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn result_partitions_by_severity() {
        let findings = vec![
            Finding::missing_directory(Severity::Error, "utils", "src/utils"),
            Finding::forbidden_file("src/a.json", ".json", "src", &[]),
            Finding::missing_directory(Severity::Error, "hooks", "src/hooks"),
        ];
        let result = ValidationResult::from_findings(findings, 10, 3);

        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.errors[0].directory.as_deref(), Some("src/utils"));
        assert_eq!(result.errors[1].directory.as_deref(), Some("src/hooks"));
        assert!(result.errors.iter().all(|f| f.severity == Severity::Error));
        assert!(result.warnings.iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn warnings_alone_keep_result_valid() {
        let findings = vec![Finding::forbidden_file("a.json", ".json", "src", &[])];
        let result = ValidationResult::from_findings(findings, 1, 0);
        assert!(result.valid);
        assert!(result.is_ok());
        assert!(result.has_warnings());
        assert!(!result.is_clean());
    }

    #[test]
    fn result_serializes_with_camel_case_counts() {
        let result = ValidationResult::from_findings(Vec::new(), 4, 2);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["filesScanned"], 4);
        assert_eq!(json["directoriesScanned"], 2);
    }
}
