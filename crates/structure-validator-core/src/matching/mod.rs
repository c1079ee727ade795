//! Glob matching for configuration patterns.
//!
//! Patterns are matched against paths relative to the project root, always
//! written with forward slashes:
//!
//! - `*` matches any sequence of non-slash characters
//! - `**` matches any sequence of path segments
//! - `{a,b}` matches either alternative
//! - `?` and `[abc]` match a single character
//!
//! Patterns are not anchored or rewritten: `components/**/*.tsx` only
//! matches paths that start with `components/`.
//!
//! Dotfiles get no special treatment. `*` and `**` match names and folders
//! that start with `.`, so `src/utils/**/*.{ts,js}` selects
//! `src/utils/.eslintrc.js` too. Exclude such files with an ignore pattern.

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use log::warn;

/// Suffix that makes a pattern match everything below a directory.
const SUBTREE_SUFFIX: &str = "/**";

fn build_glob(pattern: &str) -> Result<Glob, globset::Error> {
    // Use literal_separator to ensure * doesn't match /
    GlobBuilder::new(pattern).literal_separator(true).build()
}

/// A compiled glob pattern that can match relative paths.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The original pattern string.
    original: String,
    /// The compiled glob matcher.
    matcher: GlobMatcher,
}

impl Pattern {
    /// Compiles a glob pattern.
    ///
    /// Returns `None` if the pattern is invalid.
    pub fn new(pattern: &str) -> Option<Self> {
        let matcher = build_glob(pattern).ok()?.compile_matcher();
        Some(Self {
            original: pattern.to_string(),
            matcher,
        })
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Checks if this pattern matches the given path.
    ///
    /// A leading `/` on the path is ignored.
    pub fn matches(&self, path: &str) -> bool {
        let path = path.strip_prefix('/').unwrap_or(path);
        self.matcher.is_match(path)
    }
}

/// Returns a description of why `pattern` fails to compile, if it does.
pub fn pattern_error(pattern: &str) -> Option<String> {
    build_glob(pattern).err().map(|e| e.to_string())
}

/// A set of ignore patterns that excludes paths together with their subtrees.
///
/// A pattern ending in `/**` also matches the directory it names, so
/// `**/node_modules/**` excludes `node_modules` itself and the walker never
/// descends into it.
#[derive(Debug, Clone)]
pub struct PatternSet {
    /// The glob set for batch matching.
    glob_set: GlobSet,
    /// The source patterns that compiled successfully.
    patterns: Vec<String>,
}

impl PatternSet {
    /// Creates a pattern set from ignore patterns.
    ///
    /// Patterns that fail to compile are skipped with a warning.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut compiled = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = match build_glob(pattern) {
                Ok(glob) => glob,
                Err(e) => {
                    warn!("Skipping invalid ignore pattern '{}': {}", pattern, e);
                    continue;
                }
            };
            builder.add(glob);

            if let Some(dir) = pattern.strip_suffix(SUBTREE_SUFFIX)
                && !dir.is_empty()
                && let Ok(dir_glob) = build_glob(dir)
            {
                builder.add(dir_glob);
            }

            compiled.push(pattern.to_string());
        }

        let glob_set = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build ignore set, ignoring nothing: {}", e);
            GlobSet::empty()
        });

        Self {
            glob_set,
            patterns: compiled,
        }
    }

    /// Creates a set that matches nothing.
    pub fn empty() -> Self {
        Self {
            glob_set: GlobSet::empty(),
            patterns: Vec::new(),
        }
    }

    /// Returns true if any pattern matches the path.
    pub fn is_match(&self, path: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let path = path.strip_prefix('/').unwrap_or(path);
        self.glob_set.is_match(path)
    }

    /// Returns the patterns in this set.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the number of patterns in the set.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the set contains no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::empty()
    }
}
