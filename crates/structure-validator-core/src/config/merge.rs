//! Merging user configuration over a preset.
//!
//! Merging happens on raw JSON values before the typed model is built, so
//! a user file only has to mention what it changes:
//!
//! - top-level keys from the user replace the preset's
//! - `rules.componentColocation` is merged key by key
//! - `rules.fileNaming` is merged by pattern, keeping the preset's order
//! - `rules.folderStructure` from the user replaces the preset's list
//! - `ignore` lists are concatenated, preset first

use serde_json::{Map, Value};

/// Merges `user` over `preset`.
///
/// Non-object inputs are treated as empty objects.
pub fn merge_with_preset(preset: Value, user: Value) -> Value {
    let mut preset = into_object(preset);
    let mut user = into_object(user);

    let rules = merge_rules(
        take_object(&mut preset, "rules"),
        take_object(&mut user, "rules"),
    );
    let mut ignore = take_array(&mut preset, "ignore");
    ignore.extend(take_array(&mut user, "ignore"));

    let mut merged = preset;
    merged.extend(user);
    merged.insert("rules".to_string(), Value::Object(rules));
    merged.insert("ignore".to_string(), Value::Array(ignore));
    Value::Object(merged)
}

fn merge_rules(mut preset: Map<String, Value>, mut user: Map<String, Value>) -> Map<String, Value> {
    let colocation = merge_shallow(
        preset.remove("componentColocation"),
        user.remove("componentColocation"),
    );
    let file_naming = merge_shallow(preset.remove("fileNaming"), user.remove("fileNaming"));
    let folders = match user.remove("folderStructure") {
        Some(Value::Null) | None => preset.remove("folderStructure"),
        Some(list) => Some(list),
    };

    let mut merged = preset;
    merged.extend(user);
    if let Some(colocation) = colocation {
        merged.insert("componentColocation".to_string(), colocation);
    }
    if let Some(file_naming) = file_naming {
        merged.insert("fileNaming".to_string(), file_naming);
    }
    if let Some(folders) = folders {
        merged.insert("folderStructure".to_string(), folders);
    }
    merged
}

/// Overlays the keys of `overlay` on `base` when both are objects.
fn merge_shallow(base: Option<Value>, overlay: Option<Value>) -> Option<Value> {
    match (base, overlay) {
        (Some(Value::Object(mut base)), Some(Value::Object(overlay))) => {
            // Map::insert keeps the position of existing keys.
            for (key, value) in overlay {
                base.insert(key, value);
            }
            Some(Value::Object(base))
        }
        (base, None | Some(Value::Null)) => base,
        (_, overlay) => overlay,
    }
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn take_object(map: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    map.remove(key).map(into_object).unwrap_or_default()
}

fn take_array(map: &mut Map<String, Value>, key: &str) -> Vec<Value> {
    match map.remove(key) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn preset() -> Value {
        json!({
            "preset": "react",
            "rules": {
                "componentColocation": {
                    "enabled": true,
                    "componentDirs": ["src/components"],
                    "namingConvention": "PascalCase"
                },
                "fileNaming": {
                    "a/**": { "convention": "camelCase" },
                    "b/**": { "convention": "PascalCase" }
                },
                "folderStructure": [{ "name": "hooks", "path": "src/hooks" }]
            },
            "ignore": ["**/node_modules/**"],
            "severity": "error"
        })
    }

    #[test]
    fn empty_user_config_keeps_preset() {
        let merged = merge_with_preset(preset(), json!({}));
        assert_eq!(merged, preset());
    }

    #[test]
    fn top_level_keys_are_replaced() {
        let merged = merge_with_preset(preset(), json!({ "severity": "warning" }));
        assert_eq!(merged["severity"], "warning");
        assert_eq!(merged["preset"], "react");
    }

    #[test]
    fn colocation_is_merged_per_key() {
        let merged = merge_with_preset(
            preset(),
            json!({ "rules": { "componentColocation": { "enabled": false } } }),
        );
        let colocation = &merged["rules"]["componentColocation"];
        assert_eq!(colocation["enabled"], false);
        assert_eq!(colocation["componentDirs"], json!(["src/components"]));
        assert_eq!(colocation["namingConvention"], "PascalCase");
    }

    #[test]
    fn file_naming_is_merged_by_pattern_in_preset_order() {
        let merged = merge_with_preset(
            preset(),
            json!({ "rules": { "fileNaming": {
                "c/**": { "convention": "kebab-case" },
                "a/**": { "convention": "snake_case" }
            } } }),
        );
        let naming = merged["rules"]["fileNaming"].as_object().unwrap();
        let keys: Vec<_> = naming.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a/**", "b/**", "c/**"]);
        assert_eq!(naming["a/**"]["convention"], "snake_case");
    }

    #[test]
    fn folder_structure_is_replaced() {
        let merged = merge_with_preset(
            preset(),
            json!({ "rules": { "folderStructure": [{ "name": "lib", "path": "lib" }] } }),
        );
        assert_eq!(
            merged["rules"]["folderStructure"],
            json!([{ "name": "lib", "path": "lib" }])
        );

        let cleared = merge_with_preset(preset(), json!({ "rules": { "folderStructure": [] } }));
        assert_eq!(cleared["rules"]["folderStructure"], json!([]));
    }

    #[test]
    fn ignore_lists_are_concatenated() {
        let merged = merge_with_preset(preset(), json!({ "ignore": ["**/tmp/**"] }));
        assert_eq!(merged["ignore"], json!(["**/node_modules/**", "**/tmp/**"]));
    }

    #[test]
    fn user_sections_missing_from_preset_are_kept() {
        let merged = merge_with_preset(
            json!({}),
            json!({ "rules": { "componentColocation": { "enabled": true } } }),
        );
        assert_eq!(merged["rules"]["componentColocation"]["enabled"], true);
        assert_eq!(merged["ignore"], json!([]));
    }
}
