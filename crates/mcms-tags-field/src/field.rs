//! # Tags Field
//!
//! This module describes the tags form field itself: the fixed descriptor
//! strings, the default column value for new rows, and the context the host
//! form layer needs to render the widget (template name, media files, and
//! the resolved input attributes).

use crate::config::TagConfig;
use crate::pyjson::py_to_json;
use mcms_tags_widget::{tag_input_attrs, AttrValue, MEDIA_CSS, MEDIA_JS, TEMPLATE_NAME};
use pyo3::prelude::*;
use serde_json::{json, Map, Value};

/// Description of the field shown in admin listings.
pub const DESCRIPTION: &str = "Tags";

/// Help text rendered next to the input.
pub const HELP_TEXT: &str = "Type and press Enter ...";

/// The tags form field: a JSON column holding a list of tag strings.
#[pyclass]
#[derive(Debug, PartialEq, Clone)]
pub struct TagsField {
    /// Configuration forwarded to the widget.
    #[pyo3(get)]
    pub config: TagConfig,
}

impl TagsField {
    /// Create a field from a raw options mapping.
    pub fn new(configs: Option<&Value>) -> Self {
        TagsField {
            config: TagConfig::build(configs),
        }
    }

    /// Default column value for new rows: the empty list, not `null`.
    pub fn default_value() -> Value {
        json!([])
    }

    /// Context the host form layer needs to render the widget.
    ///
    /// The attribute mapping contains only attributes that render: `false`
    /// flags are dropped, `true` flags become JSON `true`, text stays text.
    pub fn widget_context(&self) -> Value {
        let mut rendered = Map::new();
        for (name, value) in tag_input_attrs(Some(&self.config.input_config()), &[]) {
            match value {
                AttrValue::Flag(false) => {}
                AttrValue::Flag(true) => {
                    rendered.insert(name, Value::Bool(true));
                }
                AttrValue::Text(text) => {
                    rendered.insert(name, Value::String(text));
                }
            }
        }

        json!({
            "template_name": TEMPLATE_NAME,
            "css": MEDIA_CSS,
            "js": MEDIA_JS,
            "attrs": Value::Object(rendered),
        })
    }
}

#[pymethods]
impl TagsField {
    #[new]
    #[pyo3(signature = (configs=None))]
    fn py_new(configs: Option<&Bound<'_, PyAny>>) -> Self {
        let raw = configs.and_then(py_to_json);
        Self::new(raw.as_ref())
    }

    #[getter]
    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    #[getter]
    fn help_text(&self) -> &'static str {
        HELP_TEXT
    }

    /// JSON text of the default column value.
    #[pyo3(name = "default_value_json")]
    fn py_default_value_json(&self) -> String {
        Self::default_value().to_string()
    }

    /// JSON text of the widget rendering context.
    #[pyo3(name = "widget_context_json")]
    fn py_widget_context_json(&self) -> String {
        self.widget_context().to_string()
    }

    fn __eq__(&self, other: &TagsField) -> bool {
        self.config == other.config
    }

    fn __repr__(&self) -> String {
        format!("TagsField(config={:?})", self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_strings() {
        assert_eq!(DESCRIPTION, "Tags");
        assert_eq!(HELP_TEXT, "Type and press Enter ...");
    }

    #[test]
    fn test_default_value_is_empty_list() {
        assert_eq!(TagsField::default_value(), json!([]));
        assert_eq!(TagsField::default_value().to_string(), "[]");
    }

    #[test]
    fn test_widget_context_defaults() {
        let field = TagsField::new(None);
        assert_eq!(
            field.widget_context(),
            json!({
                "template_name": "mayacms/forms/widgets/tags.html",
                "css": ["forms/css/vendor/tagify.min.css"],
                "js": ["forms/js/vendor/tagify.min.js", "forms/js/tags-widget.js"],
                "attrs": {
                    "data-options": "[]",
                    "data-provides": "mayacms.forms.widgets.tags",
                },
            })
        );
    }

    #[test]
    fn test_widget_context_configured() {
        let field = TagsField::new(Some(&json!({
            "max": 3,
            "enforce": true,
            "options": ["news", "blog"],
        })));
        assert_eq!(
            field.widget_context(),
            json!({
                "template_name": "mayacms/forms/widgets/tags.html",
                "css": ["forms/css/vendor/tagify.min.css"],
                "js": ["forms/js/vendor/tagify.min.js", "forms/js/tags-widget.js"],
                "attrs": {
                    "data-max": "3",
                    "data-enforce": "true",
                    "data-options": r#"["news","blog"]"#,
                    "data-provides": "mayacms.forms.widgets.tags",
                },
            })
        );
    }

    #[test]
    fn test_field_from_non_mapping_configs() {
        let field = TagsField::new(Some(&json!("bogus")));
        assert_eq!(field.config, TagConfig::default());
    }
}
