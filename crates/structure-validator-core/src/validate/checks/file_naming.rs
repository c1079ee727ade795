//! File naming check.
//!
//! Each scanned file is tested against every `fileNaming` rule in
//! configuration order. A file that matches several rules can produce one
//! finding per rule.

use super::{Check, CheckContext};
use crate::config::FileNamingRule;
use crate::matching::Pattern;
use crate::naming;
use crate::validate::Finding;
use log::{debug, warn};

/// A check that enforces naming conventions on files selected by glob.
#[derive(Debug, Clone, Default)]
pub struct FileNamingCheck;

impl FileNamingCheck {
    /// Creates a new file naming check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for FileNamingCheck {
    fn name(&self) -> &'static str {
        "file-naming"
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Finding> {
        let Some(rules) = ctx.config.rules.file_naming.as_ref() else {
            debug!("No file naming rules, skipping");
            return Vec::new();
        };

        let compiled: Vec<(Pattern, &FileNamingRule)> = rules
            .iter()
            .filter_map(|rule| match Pattern::new(&rule.pattern) {
                Some(pattern) => Some((pattern, rule)),
                None => {
                    warn!("Skipping invalid file naming pattern '{}'", rule.pattern);
                    None
                }
            })
            .collect();

        let mut findings = Vec::new();
        for file in ctx.files() {
            for (pattern, rule) in &compiled {
                if !pattern.matches(&file.path) || naming::validate(&file.name, &rule.convention) {
                    continue;
                }
                findings.push(Finding::file_naming(
                    rule.severity.unwrap_or(ctx.config.severity),
                    format!("File name doesn't follow {} convention", rule.convention),
                    &file.path,
                    &file.name,
                    naming::expected_name(&file.name, &rule.convention),
                ));
            }
        }

        debug!("File naming check found {} issues", findings.len());
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileNamingRules, RuleConfig};
    use crate::naming::NamingConvention;
    use crate::scan::{DirectoryScanner, ScannedEntry};
    use crate::validate::{FindingKind, Severity};

    fn rules() -> FileNamingRules {
        [
            FileNamingRule::new("src/hooks/**/*.ts", NamingConvention::CamelCase),
            FileNamingRule::new("src/constants/*.ts", NamingConvention::UpperCase)
                .with_severity(Severity::Warning),
            FileNamingRule::new("src/**/*.ts", NamingConvention::KebabCase),
        ]
        .into_iter()
        .collect()
    }

    fn run(paths: &[&str], config: &RuleConfig) -> Vec<Finding> {
        let scanner = DirectoryScanner::new("/project", &[] as &[&str]);
        let entries: Vec<_> = paths
            .iter()
            .map(|p| ScannedEntry::new(*p, !p.contains('.')))
            .collect();
        let ctx = CheckContext::new(&scanner, &entries, config);
        FileNamingCheck::new().run(&ctx)
    }

    #[test]
    fn only_failing_rules_report() {
        let config = RuleConfig::new().with_file_naming(rules());
        let findings = run(&["src", "src/hooks", "src/hooks/use-auth.ts"], &config);
        // camelCase fails for use-auth, kebab-case passes
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].expected.as_deref(), Some("useAuth.ts"));
    }

    #[test]
    fn violation_fields() {
        let config = RuleConfig::new().with_file_naming(
            [FileNamingRule::new("src/hooks/*.ts", NamingConvention::CamelCase)]
                .into_iter()
                .collect(),
        );
        let findings = run(&["src/hooks/UseAuth.ts"], &config);

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.kind, FindingKind::NamingViolation);
        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.message, "File name doesn't follow camelCase convention");
        assert_eq!(finding.file.as_deref(), Some("src/hooks/UseAuth.ts"));
        assert_eq!(finding.actual.as_deref(), Some("UseAuth.ts"));
        assert_eq!(finding.expected.as_deref(), Some("useAuth.ts"));
        assert_eq!(finding.suggestion.as_deref(), Some("Rename to useAuth.ts"));
    }

    #[test]
    fn one_finding_per_failing_rule_in_rule_order() {
        let config = RuleConfig::new().with_file_naming(rules());
        let findings = run(&["src/constants/apiUrl.ts"], &config);

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].expected.as_deref(), Some("API_URL.ts"));
        assert_eq!(findings[1].severity, Severity::Error);
        assert_eq!(findings[1].expected.as_deref(), Some("api-url.ts"));
    }

    #[test]
    fn files_outer_rules_inner() {
        let config = RuleConfig::new().with_file_naming(rules());
        let findings = run(&["src/hooks/UseA.ts", "src/hooks/UseB.ts"], &config);

        let files: Vec<_> = findings.iter().map(|f| f.file.as_deref().unwrap()).collect();
        assert_eq!(
            files,
            vec![
                "src/hooks/UseA.ts",
                "src/hooks/UseA.ts",
                "src/hooks/UseB.ts",
                "src/hooks/UseB.ts"
            ]
        );
    }

    #[test]
    fn unmatched_files_and_directories_are_ignored() {
        let config = RuleConfig::new().with_file_naming(rules());
        assert!(run(&["lib/Bad_Name.ts", "src/hooks/BadDir"], &config).is_empty());
    }

    #[test]
    fn invalid_patterns_are_skipped() {
        let config = RuleConfig::new().with_file_naming(
            [
                FileNamingRule::new("src/[", NamingConvention::CamelCase),
                FileNamingRule::new("src/*.ts", NamingConvention::CamelCase),
            ]
            .into_iter()
            .collect(),
        );
        assert_eq!(run(&["src/BadName.ts"], &config).len(), 1);
    }

    #[test]
    fn absent_section_does_nothing() {
        assert!(run(&["src/hooks/Bad.ts"], &RuleConfig::default()).is_empty());
    }
}
