//! Consistency checks for a loaded configuration.

use super::RuleConfig;
use crate::matching::pattern_error;

/// Placeholder substituted for `*` when checking required file patterns.
const COMPONENT_PLACEHOLDER: &str = "Component";

/// Checks a configuration for problems that would make validation
/// meaningless. Returns one message per problem; an empty list means the
/// configuration is usable.
pub fn validate_config(config: &RuleConfig) -> Vec<String> {
    let mut problems = Vec::new();

    if let Some(colocation) = &config.rules.component_colocation {
        if colocation.enabled {
            if colocation.component_dirs.is_empty() {
                problems.push(
                    "componentColocation.componentDirs must be specified when enabled".to_string(),
                );
            }
            if colocation.required_files.is_empty() {
                problems.push(
                    "componentColocation.requiredFiles must be specified when enabled".to_string(),
                );
            }
        }
        for file in &colocation.required_files {
            let expanded = file.pattern.replace('*', COMPONENT_PLACEHOLDER);
            if let Some(e) = pattern_error(&expanded) {
                problems.push(format!(
                    "componentColocation.requiredFiles pattern '{}' is invalid: {}",
                    file.pattern, e
                ));
            }
        }
    }

    if let Some(rules) = &config.rules.file_naming {
        for rule in rules {
            if let Some(e) = pattern_error(&rule.pattern) {
                problems.push(format!("fileNaming pattern '{}' is invalid: {}", rule.pattern, e));
            }
        }
    }

    for pattern in &config.ignore {
        if let Some(e) = pattern_error(pattern) {
            problems.push(format!("ignore pattern '{}' is invalid: {}", pattern, e));
        }
    }

    problems
}
