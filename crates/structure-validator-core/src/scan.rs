//! Directory scanning.
//!
//! The scanner walks the project tree once and hands every evaluator the
//! same flat list of entries. Evaluators that need a narrower view
//! (one directory's children, component directories) ask the scanner for
//! targeted listings instead of walking on their own.

use crate::matching::PatternSet;
use crate::validate::ValidatorError;
use log::{debug, trace, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file or directory found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedEntry {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    /// Base name.
    pub name: String,
    /// Containing directory relative to the root; empty for top-level entries.
    pub directory: String,
    /// Extension including the dot, or empty.
    pub extension: String,
    /// Whether the entry is a directory.
    pub is_directory: bool,
}

impl ScannedEntry {
    /// Builds an entry from a root-relative path.
    pub fn new(path: impl Into<String>, is_directory: bool) -> Self {
        let path = path.into();
        let (directory, name) = match path.rfind('/') {
            Some(idx) => (path[..idx].to_string(), path[idx + 1..].to_string()),
            None => (String::new(), path.clone()),
        };
        let extension = extension_of(&name).to_string();

        Self {
            path,
            name,
            directory,
            extension,
            is_directory,
        }
    }
}

/// Returns the extension of a base name, including the dot.
///
/// Names without a dot, and names whose only dots are leading (such as
/// `.gitignore`), have no extension.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => &name[idx..],
        _ => "",
    }
}

/// Joins a relative directory and a name with `/`.
fn join_relative(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Normalizes a root-relative path to forward slashes without a trailing `/`.
pub(crate) fn normalize_relative(path: &str) -> String {
    let path = path.replace('\\', "/");
    let trimmed = path.trim_matches('/');
    if trimmed == "." {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// Walks a project tree, honoring a fixed set of ignore patterns.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    root: PathBuf,
    ignore: PatternSet,
}

impl DirectoryScanner {
    /// Creates a scanner rooted at `root`.
    ///
    /// The ignore patterns are fixed for the scanner's lifetime.
    pub fn new<S: AsRef<str>>(root: impl Into<PathBuf>, ignore_patterns: &[S]) -> Self {
        Self {
            root: root.into(),
            ignore: PatternSet::new(ignore_patterns),
        }
    }

    /// Returns the scan root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the compiled ignore patterns.
    pub fn ignore_patterns(&self) -> &PatternSet {
        &self.ignore
    }

    /// Returns true if a root-relative path is excluded from scanning.
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.ignore.is_match(relative)
    }

    /// Converts an absolute path under the root to a normalized relative path.
    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        Some(normalize_relative(&relative.to_string_lossy()))
    }

    /// Recursively lists every non-ignored entry under the root.
    ///
    /// Entries come out depth-first in pre-order: a directory is followed
    /// by its whole subtree before its next sibling, and siblings are
    /// sorted by name. Ignored entries are dropped together with their
    /// subtrees. A directory that cannot be read is logged and treated as
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the root itself is missing, not a directory, or
    /// unreadable.
    pub fn scan_all(&self) -> Result<Vec<ScannedEntry>, ValidatorError> {
        self.check_root()?;
        debug!("Scanning {:?} ({} ignore patterns)", self.root, self.ignore.len());

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                // Pruning here keeps the walker out of ignored directories
                if e.depth() == 0 {
                    return true;
                }
                self.relative_path(e.path())
                    .is_none_or(|relative| !self.is_ignored(&relative))
            });

        let mut entries = Vec::new();
        for item in walker {
            match item {
                Ok(entry) => {
                    if let Some(relative) = self.relative_path(entry.path()) {
                        entries.push(ScannedEntry::new(relative, entry.file_type().is_dir()));
                    }
                }
                Err(e) => {
                    let location = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    warn!("Error scanning directory {}: {}", location, e);
                }
            }
        }

        debug!("Found {} entries", entries.len());
        trace!("Entries: {:?}", entries.iter().map(|e| &e.path).collect::<Vec<_>>());
        Ok(entries)
    }

    fn check_root(&self) -> Result<(), ValidatorError> {
        let is_dir = fs::metadata(&self.root).is_ok_and(|m| m.is_dir());
        if !is_dir {
            return Err(ValidatorError::RootNotFound {
                path: self.root.clone(),
            });
        }
        fs::read_dir(&self.root).map_err(|source| ValidatorError::RootUnreadable {
            path: self.root.clone(),
            source,
        })?;
        Ok(())
    }

    /// Lists the immediate, non-ignored children of a root-relative directory.
    ///
    /// Returns an empty list if the directory is missing or unreadable.
    pub fn list_one_level(&self, dir: &str) -> Vec<ScannedEntry> {
        let dir = normalize_relative(dir);
        let read_dir = match fs::read_dir(self.root.join(&dir)) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                debug!("Cannot list directory '{}': {}", dir, e);
                return Vec::new();
            }
        };

        let mut entries: Vec<ScannedEntry> = read_dir
            .filter_map(|item| item.ok())
            .filter_map(|item| {
                let name = item.file_name().to_string_lossy().into_owned();
                let relative = join_relative(&dir, &name);
                if self.is_ignored(&relative) {
                    return None;
                }
                let is_dir = item.file_type().is_ok_and(|ft| ft.is_dir());
                Some(ScannedEntry::new(relative, is_dir))
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Lists the subdirectories of each candidate directory.
    ///
    /// Each non-ignored subdirectory is one candidate component unit.
    /// Candidates that do not exist are skipped.
    pub fn find_component_directories<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<String> {
        let mut dirs = Vec::new();

        for candidate in candidates {
            let candidate = candidate.as_ref();
            if !self.is_directory(candidate) {
                trace!("Component directory '{}' not found, skipping", candidate);
                continue;
            }

            dirs.extend(
                self.list_one_level(candidate)
                    .into_iter()
                    .filter(|e| e.is_directory)
                    .map(|e| e.path),
            );
        }

        debug!("Found {} component directories", dirs.len());
        dirs
    }

    /// Returns true if a root-relative path exists.
    pub fn exists(&self, path: &str) -> bool {
        self.root.join(normalize_relative(path)).exists()
    }

    /// Returns true if a root-relative path is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        fs::metadata(self.root.join(normalize_relative(path))).is_ok_and(|m| m.is_dir())
    }
}
