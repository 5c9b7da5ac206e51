//! # Tag Input Attributes
//!
//! This module builds the `data-*` attribute set that the tag input widget
//! renders on its `<input>` element. The attribute set is what wires the
//! server-side field configuration to the front-end script that upgrades a
//! plain text input into a tag editor.
//!
//! ## Attribute semantics
//!
//! Attribute values follow form-attribute rendering rules:
//!
//! - **`Flag(false)`**: the attribute is omitted entirely
//! - **`Flag(true)`**: the attribute is rendered bare, like `required`
//! - **`Text`**: the attribute is rendered as `name="value"`
//!
//! ## Defaults
//!
//! Every tag input starts from the same base set:
//!
//! - **`data-max`**: `Flag(false)` - no limit on the number of tags
//! - **`data-options`**: `"[]"` - no whitelist
//! - **`data-provides`**: the hook the bootstrap script scans for
//!
//! Extra attributes from the caller are merged over the defaults, and the
//! attributes derived from the field configuration are applied last, so the
//! configuration always wins.

/// Template the host form layer renders for the tag input widget.
pub const TEMPLATE_NAME: &str = "mayacms/forms/widgets/tags.html";

/// Stylesheets loaded by the widget media.
pub const MEDIA_CSS: &[&str] = &["forms/css/vendor/tagify.min.css"];

/// Scripts loaded by the widget media. The vendor script must come before
/// the bootstrap script that configures it.
pub const MEDIA_JS: &[&str] = &["forms/js/vendor/tagify.min.js", "forms/js/tags-widget.js"];

/// Value of the `data-provides` hook attribute.
pub const PROVIDES: &str = "mayacms.forms.widgets.tags";

/// A widget attribute value with form-attribute rendering semantics.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AttrValue {
    /// Boolean attribute: `true` renders bare, `false` omits the attribute.
    Flag(bool),
    /// Plain attribute rendered as `name="value"`.
    Text(String),
}

/// Widget-facing slice of the tags field configuration.
#[derive(Debug, PartialEq, Clone)]
pub struct InputConfig {
    /// Upper bound on the number of tags. `None` leaves `data-max` unset.
    pub max_count: Option<u64>,
    /// Whether the front-end rejects tags outside the whitelist.
    pub enforce: bool,
    /// JSON text of the allowed options, shipped verbatim in `data-options`.
    pub whitelist_json: String,
}

/// Build the ordered attribute set for a tag input element.
///
/// Defaults come first, then `extra` attributes from the caller, then the
/// attributes derived from `config`. Later entries update earlier ones in
/// place, so an overridden default keeps its position in the set.
pub fn tag_input_attrs(
    config: Option<&InputConfig>,
    extra: &[(String, AttrValue)],
) -> Vec<(String, AttrValue)> {
    let mut attrs = vec![
        ("data-max".to_string(), AttrValue::Flag(false)),
        ("data-options".to_string(), AttrValue::Text("[]".to_string())),
        (
            "data-provides".to_string(),
            AttrValue::Text(PROVIDES.to_string()),
        ),
    ];

    for (name, value) in extra {
        upsert(&mut attrs, name, value.clone());
    }

    if let Some(config) = config {
        let max = match config.max_count {
            Some(count) => AttrValue::Text(count.to_string()),
            None => AttrValue::Flag(false),
        };
        upsert(&mut attrs, "data-max", max);

        // The bootstrap script compares the attribute text against "true",
        // so the flag ships as literal text rather than a bare attribute.
        let enforce = if config.enforce {
            AttrValue::Text("true".to_string())
        } else {
            AttrValue::Flag(false)
        };
        upsert(&mut attrs, "data-enforce", enforce);

        upsert(
            &mut attrs,
            "data-options",
            AttrValue::Text(config.whitelist_json.clone()),
        );
    }

    attrs
}

fn upsert(attrs: &mut Vec<(String, AttrValue)>, name: &str, value: AttrValue) {
    match attrs.iter_mut().find(|(existing, _)| existing.as_str() == name) {
        Some((_, slot)) => *slot = value,
        None => attrs.push((name.to_string(), value)),
    }
}
