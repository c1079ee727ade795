//! Component co-location check.
//!
//! Every subdirectory of a configured component directory is a component.
//! A component is only checked if it contains its main file, a file whose
//! stem equals the directory name (exactly, or ignoring case). Each
//! required file pattern then has to match one of the component's files.

use super::{Check, CheckContext};
use crate::matching::Pattern;
use crate::naming::{self, split_extension};
use crate::scan::ScannedEntry;
use crate::validate::Finding;
use log::{debug, trace, warn};

/// A check that verifies required files sit next to each component.
#[derive(Debug, Clone, Default)]
pub struct ColocationCheck;

impl ColocationCheck {
    /// Creates a new co-location check.
    pub fn new() -> Self {
        Self
    }
}

/// Finds the file whose stem is the component name.
///
/// An exact match wins over a case-insensitive one.
fn find_main_file<'a>(contents: &'a [ScannedEntry], component: &str) -> Option<&'a ScannedEntry> {
    let files = || contents.iter().filter(|e| !e.is_directory);
    let lowered = component.to_lowercase();

    files()
        .find(|e| split_extension(&e.name).0 == component)
        .or_else(|| files().find(|e| split_extension(&e.name).0.to_lowercase() == lowered))
}

impl Check for ColocationCheck {
    fn name(&self) -> &'static str {
        "colocation"
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Finding> {
        let Some(colocation) = ctx
            .config
            .rules
            .component_colocation
            .as_ref()
            .filter(|c| c.enabled)
        else {
            debug!("Component co-location disabled, skipping");
            return Vec::new();
        };

        let severity = ctx.config.severity;
        let mut findings = Vec::new();

        for dir in ctx.scanner.find_component_directories(&colocation.component_dirs) {
            let component = dir.rsplit('/').next().unwrap_or(&dir);
            let contents = ctx.scanner.list_one_level(&dir);

            if find_main_file(&contents, component).is_none() {
                trace!("No main file in '{}', not a component", dir);
                continue;
            }

            for required in colocation.required_files.iter().filter(|f| f.required) {
                let expected = required.pattern.replace('*', component);
                let Some(pattern) = Pattern::new(&expected) else {
                    warn!("Skipping invalid required file pattern '{}'", expected);
                    continue;
                };

                let found = contents
                    .iter()
                    .any(|e| !e.is_directory && pattern.matches(&e.name));
                if !found {
                    let label = required.description.as_deref().unwrap_or(&expected);
                    findings.push(Finding::missing_file(severity, &dir, label, &expected));
                }
            }

            if let Some(convention) = &colocation.naming_convention
                && !naming::validate(component, convention)
            {
                findings.push(Finding::directory_naming(
                    severity,
                    &dir,
                    convention.as_str(),
                    component,
                    naming::expected_name(component, convention),
                ));
            }
        }

        debug!("Co-location check found {} issues", findings.len());
        findings
    }
}
