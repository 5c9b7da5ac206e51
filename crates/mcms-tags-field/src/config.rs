//! # Tags Field Configuration
//!
//! This module builds the validated [`TagConfig`] from the free-form options
//! mapping a host application passes to the tags field. Options mappings come
//! from application code and are not validated up front, so every key is read
//! leniently: anything malformed degrades to the default instead of erroring.
//!
//! ## Recognized keys
//!
//! - **`max`**: upper bound on the number of tags. Falsy or non-integer
//!   values mean no limit.
//! - **`enforce`**: whether the front-end rejects tags outside the
//!   whitelist. Read with Python-style truthiness.
//! - **`options`**: the whitelist itself. Anything that is not a sequence
//!   normalizes to the empty whitelist.
//!
//! The configuration is exposed to Python via PyO3 bindings.

use crate::pyjson::py_to_json;
use mcms_tags_widget::InputConfig;
use pyo3::prelude::*;
use serde_json::Value;

/// Python-style truthiness of a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|float| float != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Normalize the raw `options` value into the whitelist.
///
/// Only sequences are accepted; any other shape (or no value at all) yields
/// the empty whitelist.
pub fn normalize_allow_list(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// Validated configuration of a tags field.
#[pyclass]
#[derive(Debug, PartialEq, Clone, Default)]
pub struct TagConfig {
    /// Upper bound on the number of tags, `None` for no limit.
    #[pyo3(get)]
    pub max_count: Option<u64>,

    /// Whether the front-end rejects tags outside the whitelist.
    /// Enforcement happens client-side only; decoding accepts any tag.
    #[pyo3(get)]
    pub enforce: bool,

    /// Allowed tag values, shipped to the front-end as JSON.
    pub whitelist: Vec<Value>,
}

impl TagConfig {
    /// Build a configuration from a raw options mapping.
    ///
    /// A missing mapping, or anything that is not a mapping, yields the
    /// default configuration.
    pub fn build(options: Option<&Value>) -> Self {
        let fields = match options.and_then(Value::as_object) {
            Some(fields) => fields,
            None => return Self::default(),
        };

        let max_count = fields
            .get("max")
            .filter(|value| is_truthy(value))
            .and_then(Value::as_u64);
        let enforce = fields.get("enforce").map(is_truthy).unwrap_or(false);
        let whitelist = normalize_allow_list(fields.get("options"));

        TagConfig {
            max_count,
            enforce,
            whitelist,
        }
    }

    /// JSON text of the whitelist, exactly as shipped in `data-options`.
    pub fn options_json(&self) -> String {
        Value::Array(self.whitelist.clone()).to_string()
    }

    /// The widget-facing slice of this configuration.
    pub fn input_config(&self) -> InputConfig {
        InputConfig {
            max_count: self.max_count,
            enforce: self.enforce,
            whitelist_json: self.options_json(),
        }
    }
}

#[pymethods]
impl TagConfig {
    #[new]
    #[pyo3(signature = (options=None))]
    fn py_new(options: Option<&Bound<'_, PyAny>>) -> Self {
        let raw = options.and_then(py_to_json);
        Self::build(raw.as_ref())
    }

    /// JSON text of the whitelist, exactly as shipped in `data-options`.
    #[pyo3(name = "options_json")]
    fn py_options_json(&self) -> String {
        self.options_json()
    }

    fn __eq__(&self, other: &TagConfig) -> bool {
        self.max_count == other.max_count
            && self.enforce == other.enforce
            && self.whitelist == other.whitelist
    }

    fn __repr__(&self) -> String {
        format!(
            "TagConfig(max_count={:?}, enforce={}, whitelist={})",
            self.max_count,
            self.enforce,
            self.options_json()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_missing_options() {
        let config = TagConfig::build(None);
        assert_eq!(
            config,
            TagConfig {
                max_count: None,
                enforce: false,
                whitelist: vec![],
            }
        );
    }

    #[test]
    fn test_build_non_mapping_options() {
        assert_eq!(TagConfig::build(Some(&json!("max"))), TagConfig::default());
        assert_eq!(
            TagConfig::build(Some(&json!(["max", 5]))),
            TagConfig::default()
        );
        assert_eq!(TagConfig::build(Some(&json!(null))), TagConfig::default());
    }

    #[test]
    fn test_build_full_mapping() {
        let options = json!({
            "max": 5,
            "enforce": true,
            "options": ["news", "blog"],
        });
        assert_eq!(
            TagConfig::build(Some(&options)),
            TagConfig {
                max_count: Some(5),
                enforce: true,
                whitelist: vec![json!("news"), json!("blog")],
            }
        );
    }

    #[test]
    fn test_build_falsy_max_means_no_limit() {
        for max in [json!(0), json!(false), json!(null), json!("")] {
            let options = json!({ "max": max });
            assert_eq!(TagConfig::build(Some(&options)).max_count, None);
        }
    }

    #[test]
    fn test_build_non_integer_max_means_no_limit() {
        for max in [json!(2.5), json!("5"), json!(true), json!(-1)] {
            let options = json!({ "max": max });
            assert_eq!(TagConfig::build(Some(&options)).max_count, None);
        }
    }

    #[test]
    fn test_build_enforce_truthiness() {
        assert!(TagConfig::build(Some(&json!({"enforce": true}))).enforce);
        assert!(TagConfig::build(Some(&json!({"enforce": "yes"}))).enforce);
        assert!(TagConfig::build(Some(&json!({"enforce": 1}))).enforce);
        // Any non-empty text is truthy, including the text "false".
        assert!(TagConfig::build(Some(&json!({"enforce": "false"}))).enforce);
        assert!(!TagConfig::build(Some(&json!({"enforce": false}))).enforce);
        assert!(!TagConfig::build(Some(&json!({"enforce": 0}))).enforce);
        assert!(!TagConfig::build(Some(&json!({"enforce": ""}))).enforce);
        assert!(!TagConfig::build(Some(&json!({"enforce": []}))).enforce);
        assert!(!TagConfig::build(Some(&json!({}))).enforce);
    }

    #[test]
    fn test_normalize_allow_list_sequences() {
        assert_eq!(
            normalize_allow_list(Some(&json!(["news", "blog"]))),
            vec![json!("news"), json!("blog")]
        );
        // Entries are kept as-is, whatever their type.
        assert_eq!(
            normalize_allow_list(Some(&json!([1, {"value": "news"}]))),
            vec![json!(1), json!({"value": "news"})]
        );
    }

    #[test]
    fn test_normalize_allow_list_rejects_non_sequences() {
        assert_eq!(normalize_allow_list(None), Vec::<Value>::new());
        assert_eq!(
            normalize_allow_list(Some(&json!("news"))),
            Vec::<Value>::new()
        );
        assert_eq!(
            normalize_allow_list(Some(&json!({"0": "news"}))),
            Vec::<Value>::new()
        );
    }

    #[test]
    fn test_options_json() {
        let config = TagConfig::build(Some(&json!({"options": ["news", "blog"]})));
        assert_eq!(config.options_json(), r#"["news","blog"]"#);
        assert_eq!(TagConfig::default().options_json(), "[]");
    }

    #[test]
    fn test_input_config() {
        let config = TagConfig::build(Some(&json!({
            "max": 2,
            "enforce": 1,
            "options": ["news"],
        })));
        assert_eq!(
            config.input_config(),
            InputConfig {
                max_count: Some(2),
                enforce: true,
                whitelist_json: r#"["news"]"#.to_string(),
            }
        );
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-2)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(["x"])));
        assert!(is_truthy(&json!({"k": 0})));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
    }
}
