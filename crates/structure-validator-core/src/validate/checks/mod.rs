//! Check trait and built-in structure checks.
//!
//! Each check inspects one rule section of the configuration and returns
//! the findings it produced. The validator runs them in a fixed order:
//! component co-location, then file naming, then folder structure.

mod colocation;
mod file_naming;
mod folder_structure;

pub use colocation::ColocationCheck;
pub use file_naming::FileNamingCheck;
pub use folder_structure::FolderStructureCheck;

use crate::config::RuleConfig;
use crate::scan::{DirectoryScanner, ScannedEntry};
use crate::validate::Finding;

/// Context provided to checks.
#[derive(Debug)]
pub struct CheckContext<'a> {
    /// Scanner for on-demand directory queries.
    pub scanner: &'a DirectoryScanner,
    /// Every non-ignored entry under the root, in walk order.
    pub entries: &'a [ScannedEntry],
    /// The active configuration.
    pub config: &'a RuleConfig,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    pub fn new(
        scanner: &'a DirectoryScanner,
        entries: &'a [ScannedEntry],
        config: &'a RuleConfig,
    ) -> Self {
        Self {
            scanner,
            entries,
            config,
        }
    }

    /// Iterates over the scanned files, skipping directories.
    pub fn files(&self) -> impl Iterator<Item = &'a ScannedEntry> {
        self.entries.iter().filter(|e| !e.is_directory)
    }
}

/// A structure check.
pub trait Check: Send + Sync {
    /// Returns the name of this check.
    fn name(&self) -> &'static str;

    /// Runs the check and returns its findings in discovery order.
    fn run(&self, ctx: &CheckContext) -> Vec<Finding>;
}

/// Returns the built-in checks in evaluation order.
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(ColocationCheck::new()),
        Box::new(FileNamingCheck::new()),
        Box::new(FolderStructureCheck::new()),
    ]
}
