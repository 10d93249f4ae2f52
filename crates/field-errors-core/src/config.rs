//! Configuration for [`crate::DeepValidator`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key used for usage-error entries when no other key is configured.
pub const DEFAULT_ROOT_KEY: &str = "root";

/// Options for building a validator.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (`root-key`, `templates`). Missing
/// fields take their defaults, so a config file may set only what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ValidatorOptions {
    /// Report key for usage errors (unsupported top-level shapes).
    pub root_key: String,
    /// Template overrides, tag → template. Placeholders: `{field}`, `{param}`.
    pub templates: BTreeMap<String, String>,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            root_key: DEFAULT_ROOT_KEY.to_string(),
            templates: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults_fill_missing_fields() {
        let opts: ValidatorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ValidatorOptions::default());
        assert_eq!(opts.root_key, "root");
        assert!(opts.templates.is_empty());
    }

    #[test]
    fn test_options_kebab_case_keys() {
        let opts: ValidatorOptions = serde_json::from_str(
            r#"{
                "root-key": "_input",
                "templates": { "required": "{field} cannot be blank" }
            }"#,
        )
        .unwrap();

        assert_eq!(opts.root_key, "_input");
        assert_eq!(
            opts.templates.get("required").map(String::as_str),
            Some("{field} cannot be blank")
        );

        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains("\"root-key\""));
    }
}
