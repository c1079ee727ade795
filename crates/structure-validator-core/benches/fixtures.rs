//! Benchmark fixtures - synthetic project trees generated at runtime.
//!
//! Trees are created lazily on first access in temporary directories that
//! live for the duration of the benchmark run. Generation is
//! deterministic: every fourth component is missing its stories file and
//! every tenth hook has a PascalCase name, so checks have findings to
//! report.

use std::fs::{self, File};
use std::path::Path;
use std::sync::LazyLock;
use tempfile::TempDir;

/// Shape of a generated project.
struct TreeSize {
    components: usize,
    hooks: usize,
    utils: usize,
}

static SMALL: LazyLock<TempDir> = LazyLock::new(|| generate(&TreeSize {
    components: 10,
    hooks: 10,
    utils: 10,
}));
static MEDIUM: LazyLock<TempDir> = LazyLock::new(|| generate(&TreeSize {
    components: 100,
    hooks: 50,
    utils: 50,
}));
static LARGE: LazyLock<TempDir> = LazyLock::new(|| generate(&TreeSize {
    components: 1000,
    hooks: 250,
    utils: 250,
}));

fn touch(root: &Path, path: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    File::create(full).expect("Failed to create fixture file");
}

fn generate(size: &TreeSize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();

    for i in 0..size.components {
        let name = format!("Component{i}");
        let base = format!("src/components/{name}");
        touch(root, &format!("{base}/{name}.tsx"));
        touch(root, &format!("{base}/{name}.test.tsx"));
        if i % 4 != 0 {
            touch(root, &format!("{base}/{name}.stories.tsx"));
        }
        touch(root, &format!("{base}/index.ts"));
    }

    for i in 0..size.hooks {
        let name = if i % 10 == 0 {
            format!("UseThing{i}")
        } else {
            format!("useThing{i}")
        };
        touch(root, &format!("src/hooks/{name}.ts"));
    }

    for i in 0..size.utils {
        touch(root, &format!("src/utils/format{i}.ts"));
    }

    fs::create_dir_all(root.join("src/types")).expect("Failed to create types dir");
    for i in 0..size.utils {
        touch(root, &format!("node_modules/pkg{i}/index.js"));
    }

    dir
}

/// Generated project roots by name.
pub fn trees() -> [(&'static str, &'static Path); 3] {
    [
        ("small", SMALL.path()),
        ("medium", MEDIUM.path()),
        ("large", LARGE.path()),
    ]
}

/// Names used for naming convention benchmarks.
pub const NAMES: &[&str] = &[
    "Button.tsx",
    "useAuthState.ts",
    "date-picker.test.tsx",
    "API_BASE_URL.ts",
    "user_profile_card.stories.jsx",
    "XMLHttpRequestWrapper.ts",
    "index.d.ts",
];
