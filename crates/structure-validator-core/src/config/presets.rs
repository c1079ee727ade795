//! Built-in configuration presets.
//!
//! Presets are stored as JSON so they merge with user configuration the
//! same way a configuration file would.

use super::ConfigError;
use serde_json::Value;

/// A built-in preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Name used in configuration files and on the command line.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    json: &'static str,
}

impl Preset {
    /// Parses the preset into a configuration value.
    pub fn value(&self) -> Result<Value, ConfigError> {
        serde_json::from_str(self.json).map_err(|source| ConfigError::InvalidPreset {
            name: self.name.to_string(),
            source,
        })
    }
}

const REACT_PRESET: &str = r#"{
  "preset": "react",
  "rules": {
    "componentColocation": {
      "enabled": true,
      "componentDirs": ["src/components", "src/pages", "src/features"],
      "requiredFiles": [
        {
          "pattern": "*.test.{ts,tsx,js,jsx}",
          "required": true,
          "description": "Test file"
        },
        {
          "pattern": "*.stories.{ts,tsx,js,jsx}",
          "required": true,
          "description": "Storybook stories file"
        },
        {
          "pattern": "index.{ts,tsx,js,jsx}",
          "required": false,
          "description": "Barrel export file"
        }
      ],
      "namingConvention": "PascalCase"
    },
    "fileNaming": {
      "src/components/**/*.{tsx,jsx}": { "convention": "PascalCase", "severity": "error" },
      "src/hooks/**/*.{ts,tsx,js,jsx}": { "convention": "camelCase", "severity": "error" },
      "src/utils/**/*.{ts,js}": { "convention": "camelCase", "severity": "error" },
      "src/types/**/*.{ts,tsx}": { "convention": "PascalCase", "severity": "error" },
      "src/constants/**/*.{ts,js}": { "convention": "UPPER_CASE", "severity": "warning" }
    },
    "folderStructure": [
      {
        "name": "components",
        "path": "src/components",
        "namingConvention": "PascalCase",
        "allowedExtensions": [".tsx", ".ts", ".jsx", ".js", ".css", ".scss", ".module.css"]
      },
      {
        "name": "hooks",
        "path": "src/hooks",
        "namingConvention": "camelCase",
        "allowedExtensions": [".ts", ".tsx", ".js", ".jsx"]
      },
      {
        "name": "utils",
        "path": "src/utils",
        "namingConvention": "camelCase",
        "allowedExtensions": [".ts", ".js"]
      },
      {
        "name": "types",
        "path": "src/types",
        "namingConvention": "PascalCase",
        "allowedExtensions": [".ts", ".d.ts"]
      }
    ]
  },
  "ignore": [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/.next/**",
    "**/coverage/**",
    "**/.git/**"
  ],
  "severity": "error"
}"#;

/// All built-in presets.
pub const PRESETS: &[Preset] = &[Preset {
    name: "react",
    description: "React project with component co-location, tests, and stories",
    json: REACT_PRESET,
}];

/// Names of all built-in presets.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// Looks up a preset by name.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Loads a preset's configuration value by name.
pub fn load_preset(name: &str) -> Result<Value, ConfigError> {
    find_preset(name)
        .ok_or_else(|| ConfigError::unknown_preset(name))?
        .value()
}
