//! # Tag Value Codec
//!
//! This module converts raw tag values into the canonical tag list and back.
//! Raw values arrive from several sources (the database column, the bound
//! form payload, or application defaults) and each source ships a different
//! shape: JSON text, plain comma-separated text, an already-decoded list, or
//! nothing at all.
//!
//! ## Decoding
//!
//! The raw value is classified once into one of the accepted shapes, and each
//! shape decodes through exactly one branch:
//!
//! - **Null**: no value, JSON `null`, or the literal text `"null"` decodes to
//!   the empty list
//! - **Sequence**: an already-decoded list; each element is stringified as-is
//! - **JsonText**: text that parses as JSON; a parsed array is normalized
//!   element by element, anything else decodes to the empty list
//! - **PlainText**: text that does not parse as JSON is split on commas
//!
//! Tags are never deduplicated, filtered, or reordered: the decoded list
//! preserves the submitted order, including empty strings inside JSON arrays.
//!
//! ## Error Handling
//!
//! Decoding and encoding never fail; malformed input degrades to the empty
//! list. Only [`validate`] returns an error, for values that cannot be
//! serialized to JSON text.

use crate::config::is_truthy;
use crate::error::FieldError;
use serde_json::Value;

/// Shape of a raw tag value, resolved once per decode call.
#[derive(Debug)]
enum RawShape<'a> {
    /// No value: absent, JSON `null`, or the literal text `"null"`.
    Null,
    /// An already-decoded sequence.
    Sequence(&'a [Value]),
    /// Text that parsed as JSON.
    JsonText(Value),
    /// Text that did not parse as JSON.
    PlainText(&'a str),
    /// Any other scalar or mapping.
    Other,
}

fn classify(raw: Option<&Value>) -> RawShape<'_> {
    match raw {
        None | Some(Value::Null) => RawShape::Null,
        Some(Value::Array(items)) => RawShape::Sequence(items),
        Some(Value::String(text)) => {
            if text == "null" {
                return RawShape::Null;
            }
            match serde_json::from_str(text) {
                Ok(parsed) => RawShape::JsonText(parsed),
                Err(_) => RawShape::PlainText(text),
            }
        }
        Some(_) => RawShape::Other,
    }
}

/// Decode a raw tag value into the canonical tag list.
pub fn decode(raw: Option<&Value>) -> Vec<String> {
    match classify(raw) {
        RawShape::Null | RawShape::Other => Vec::new(),
        RawShape::Sequence(items) => items.iter().map(stringify).collect(),
        RawShape::JsonText(parsed) => match parsed {
            Value::Array(items) => normalize_tags(&items),
            _ => Vec::new(),
        },
        RawShape::PlainText(text) => text
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Normalize the elements of a decoded JSON array into tag strings.
///
/// An object carrying a `value` key yields that value's text, which is the
/// shape the tag editor submits. Everything else is stringified as-is. One
/// output element per input element, order preserved.
pub fn normalize_tags(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            if let Value::Object(fields) = item {
                if let Some(value) = fields.get("value") {
                    return stringify(value);
                }
            }
            stringify(item)
        })
        .collect()
}

// Text form of a JSON value: strings pass through unquoted, everything else
// is serialized to JSON text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Encode a stored value into the text the widget displays.
///
/// Falsy values (no value, `null`, empty text, empty containers, zero, and
/// `false`) encode to the empty string. Text that is already valid JSON is
/// kept unchanged; everything else is serialized to JSON text.
pub fn encode(value: Option<&Value>) -> String {
    let value = match value {
        Some(value) if is_truthy(value) => value,
        _ => return String::new(),
    };

    if let Value::String(text) = value {
        if serde_json::from_str::<Value>(text).is_ok() {
            return text.clone();
        }
    }

    value.to_string()
}

/// Whether the stored value and the submitted value differ.
///
/// No value and JSON `null` both count as the empty list, so a field that
/// starts out unset and comes back empty is unchanged.
pub fn has_changed(initial: Option<&Value>, current: Option<&Value>) -> bool {
    let empty = Value::Array(Vec::new());
    let initial = match initial {
        None | Some(Value::Null) => &empty,
        Some(value) => value,
    };
    let current = match current {
        None | Some(Value::Null) => &empty,
        Some(value) => value,
    };
    initial != current
}

/// Validate that a value can be stored in the JSON column.
pub fn validate(value: &Value) -> Result<(), FieldError> {
    serde_json::to_string(value)?;
    Ok(())
}
