//! Typed configuration model.
//!
//! Field names follow the JSON configuration file (`componentColocation`,
//! `fileNaming`, ...). Keys the model does not know are ignored.

use crate::naming::NamingConvention;
use crate::validate::Severity;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// The complete rule configuration for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    /// Name of the preset this configuration was merged with.
    #[serde(default)]
    pub preset: Option<String>,
    /// The rule sections.
    #[serde(default)]
    pub rules: Rules,
    /// Glob patterns excluded from scanning, together with their subtrees.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Severity used by rules that do not set their own.
    #[serde(default)]
    pub severity: Severity,
}

impl RuleConfig {
    /// Creates an empty configuration with error severity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ignore patterns.
    pub fn with_ignore(mut self, patterns: Vec<String>) -> Self {
        self.ignore = patterns;
        self
    }

    /// Sets the global severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the component co-location section.
    pub fn with_colocation(mut self, colocation: ColocationConfig) -> Self {
        self.rules.component_colocation = Some(colocation);
        self
    }

    /// Sets the file naming section.
    pub fn with_file_naming(mut self, rules: FileNamingRules) -> Self {
        self.rules.file_naming = Some(rules);
        self
    }

    /// Sets the folder structure section.
    pub fn with_folder_structure(mut self, rules: Vec<FolderRule>) -> Self {
        self.rules.folder_structure = Some(rules);
        self
    }
}

/// The optional rule sections. An absent section disables its check.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    /// Component co-location rules.
    #[serde(default)]
    pub component_colocation: Option<ColocationConfig>,
    /// File naming rules keyed by glob pattern.
    #[serde(default)]
    pub file_naming: Option<FileNamingRules>,
    /// Required folders and what may live in them.
    #[serde(default)]
    pub folder_structure: Option<Vec<FolderRule>>,
}

/// Requirements for component directories.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColocationConfig {
    /// The check only runs when enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Directories whose subdirectories are components.
    #[serde(default)]
    pub component_dirs: Vec<String>,
    /// Files expected next to each component.
    #[serde(default)]
    pub required_files: Vec<FilePattern>,
    /// Convention for component directory names.
    #[serde(default)]
    pub naming_convention: Option<NamingConvention>,
}

/// A file expected inside a component directory.
///
/// Every `*` in the pattern is replaced with the component name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilePattern {
    /// Glob matched against sibling file names.
    pub pattern: String,
    /// Only required patterns are checked.
    #[serde(default)]
    pub required: bool,
    /// Shown in findings instead of the pattern.
    #[serde(default)]
    pub description: Option<String>,
}

impl FilePattern {
    /// Creates a required file pattern.
    pub fn required(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            required: true,
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A naming convention applied to files matching a glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNamingRule {
    /// Glob matched against root-relative file paths.
    pub pattern: String,
    /// Convention the file's base name must follow.
    pub convention: NamingConvention,
    /// Overrides the global severity.
    pub severity: Option<Severity>,
}

impl FileNamingRule {
    /// Creates a rule without its own severity.
    pub fn new(pattern: impl Into<String>, convention: NamingConvention) -> Self {
        Self {
            pattern: pattern.into(),
            convention,
            severity: None,
        }
    }

    /// Sets the rule's own severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }
}

/// The body of one `fileNaming` entry.
#[derive(Deserialize)]
struct FileNamingSpec {
    convention: NamingConvention,
    #[serde(default)]
    severity: Option<Severity>,
}

/// File naming rules in configuration order.
///
/// Configured as a JSON object mapping glob pattern to
/// `{ "convention": ..., "severity": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileNamingRules(Vec<FileNamingRule>);

impl FileNamingRules {
    /// Creates an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: FileNamingRule) {
        self.0.push(rule);
    }

    /// Iterates over the rules in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileNamingRule> {
        self.0.iter()
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<FileNamingRule> for FileNamingRules {
    fn from_iter<I: IntoIterator<Item = FileNamingRule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FileNamingRules {
    type Item = &'a FileNamingRule;
    type IntoIter = std::slice::Iter<'a, FileNamingRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for FileNamingRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RulesVisitor;

        impl<'de> Visitor<'de> for RulesVisitor {
            type Value = FileNamingRules;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of glob patterns to naming rules")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut rules = FileNamingRules::new();
                while let Some((pattern, spec)) = map.next_entry::<String, FileNamingSpec>()? {
                    rules.push(FileNamingRule {
                        pattern,
                        convention: spec.convention,
                        severity: spec.severity,
                    });
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(RulesVisitor)
    }
}

/// A folder that must exist, with optional constraints on its files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRule {
    /// Display name used in findings.
    pub name: String,
    /// Root-relative directory path.
    pub path: String,
    /// Convention for every file in the folder's subtree.
    #[serde(default)]
    pub naming_convention: Option<NamingConvention>,
    /// Extensions (with dot) allowed in the folder's subtree.
    #[serde(default)]
    pub allowed_extensions: Option<Vec<String>>,
}

impl FolderRule {
    /// Creates a rule that only requires the folder to exist.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            naming_convention: None,
            allowed_extensions: None,
        }
    }

    /// Sets the naming convention.
    pub fn with_naming_convention(mut self, convention: NamingConvention) -> Self {
        self.naming_convention = Some(convention);
        self
    }

    /// Sets the allowed extensions.
    pub fn with_allowed_extensions<S: Into<String>>(
        mut self,
        extensions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.allowed_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default_config() {
        let config: RuleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuleConfig::default());
        assert_eq!(config.severity, Severity::Error);
        assert!(config.rules.component_colocation.is_none());
    }

    #[test]
    fn full_config_deserializes() {
        let json = r#"{
            "rules": {
                "componentColocation": {
                    "enabled": true,
                    "componentDirs": ["src/components"],
                    "requiredFiles": [
                        { "pattern": "*.test.tsx", "required": true, "description": "Test file" },
                        { "pattern": "index.ts" }
                    ],
                    "namingConvention": "PascalCase"
                },
                "fileNaming": {
                    "src/hooks/**/*.ts": { "convention": "camelCase" },
                    "src/constants/**/*.ts": { "convention": "UPPER_CASE", "severity": "warning" }
                },
                "folderStructure": [
                    { "name": "hooks", "path": "src/hooks", "allowedExtensions": [".ts"], "maxDepth": 2 }
                ]
            },
            "ignore": ["**/node_modules/**"],
            "severity": "warning"
        }"#;

        let config: RuleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.severity, Severity::Warning);
        assert_eq!(config.ignore, vec!["**/node_modules/**"]);

        let colocation = config.rules.component_colocation.unwrap();
        assert!(colocation.enabled);
        assert_eq!(colocation.required_files.len(), 2);
        assert!(colocation.required_files[0].required);
        assert!(!colocation.required_files[1].required);
        assert_eq!(colocation.naming_convention, Some(NamingConvention::PascalCase));

        let naming = config.rules.file_naming.unwrap();
        let patterns: Vec<_> = naming.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["src/hooks/**/*.ts", "src/constants/**/*.ts"]);
        assert_eq!(naming.iter().nth(1).unwrap().severity, Some(Severity::Warning));

        let folders = config.rules.folder_structure.unwrap();
        assert_eq!(folders[0].allowed_extensions, Some(vec![".ts".to_string()]));
        assert!(folders[0].naming_convention.is_none());
    }

    #[test]
    fn file_naming_keeps_document_order() {
        let json = r#"{ "z/**": { "convention": "camelCase" }, "a/**": { "convention": "PascalCase" } }"#;
        let rules: FileNamingRules = serde_json::from_str(json).unwrap();
        let patterns: Vec<_> = rules.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["z/**", "a/**"]);
    }

    #[test]
    fn file_naming_rejects_non_objects() {
        assert!(serde_json::from_str::<FileNamingRules>("[]").is_err());
    }

    #[test]
    fn unknown_convention_is_kept() {
        let json = r#"{ "name": "x", "path": "x", "namingConvention": "Train-Case" }"#;
        let rule: FolderRule = serde_json::from_str(json).unwrap();
        assert_eq!(
            rule.naming_convention,
            Some(NamingConvention::Unknown("Train-Case".to_string()))
        );
    }

    #[test]
    fn builders() {
        let config = RuleConfig::new()
            .with_severity(Severity::Warning)
            .with_ignore(vec!["dist".to_string()])
            .with_folder_structure(vec![
                FolderRule::new("hooks", "src/hooks").with_allowed_extensions([".ts", ".tsx"]),
            ]);
        assert_eq!(config.severity, Severity::Warning);
        let folders = config.rules.folder_structure.unwrap();
        assert_eq!(
            folders[0].allowed_extensions,
            Some(vec![".ts".to_string(), ".tsx".to_string()])
        );
    }
}
