//! Folder structure check.

use super::{Check, CheckContext};
use crate::config::FolderRule;
use crate::naming;
use crate::scan::{ScannedEntry, normalize_relative};
use crate::validate::{Finding, Severity};
use log::debug;

/// A check that requires folders to exist and constrains the files in them.
///
/// For each rule, in order:
/// - a missing folder yields one structure violation and nothing else
/// - files in the folder's subtree with a disallowed extension yield
///   forbidden-file warnings
/// - files in the subtree whose names break the folder's convention yield
///   naming violations
///
/// All extension findings of a rule come before its naming findings.
#[derive(Debug, Clone, Default)]
pub struct FolderStructureCheck;

impl FolderStructureCheck {
    /// Creates a new folder structure check.
    pub fn new() -> Self {
        Self
    }
}

/// Returns true if `path` starts with `dir`.
///
/// This is a plain string prefix, not a segment match: `src/hooks` also
/// covers `src/hooks-legacy/a.ts`. An empty `dir` covers everything.
fn is_within(path: &str, dir: &str) -> bool {
    path.starts_with(dir)
}

fn check_folder(rule: &FolderRule, ctx: &CheckContext, severity: Severity) -> Vec<Finding> {
    if !ctx.scanner.is_directory(&rule.path) {
        return vec![Finding::missing_directory(severity, &rule.name, &rule.path)];
    }

    let dir = normalize_relative(&rule.path);
    let files: Vec<&ScannedEntry> = ctx.files().filter(|f| is_within(&f.path, &dir)).collect();
    let mut findings = Vec::new();

    if let Some(allowed) = &rule.allowed_extensions {
        for file in &files {
            if !allowed.iter().any(|ext| *ext == file.extension) {
                findings.push(Finding::forbidden_file(
                    &file.path,
                    &file.extension,
                    &rule.name,
                    allowed,
                ));
            }
        }
    }

    if let Some(convention) = &rule.naming_convention {
        for file in &files {
            if !naming::validate(&file.name, convention) {
                findings.push(Finding::file_naming(
                    severity,
                    format!("File in {} doesn't follow {} convention", rule.name, convention),
                    &file.path,
                    &file.name,
                    naming::expected_name(&file.name, convention),
                ));
            }
        }
    }

    findings
}

impl Check for FolderStructureCheck {
    fn name(&self) -> &'static str {
        "folder-structure"
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Finding> {
        let Some(rules) = ctx.config.rules.folder_structure.as_ref() else {
            debug!("No folder structure rules, skipping");
            return Vec::new();
        };

        let findings: Vec<Finding> = rules
            .iter()
            .flat_map(|rule| check_folder(rule, ctx, ctx.config.severity))
            .collect();

        debug!("Folder structure check found {} issues", findings.len());
        findings
    }
}
