//! # Tag Input Markup Transform
//!
//! This module applies a widget attribute set to already-rendered form markup
//! in a single pass. The host form layer renders its usual text input, and the
//! transform rewrites the first `<input>` element with the tag input
//! attributes, leaving the rest of the markup untouched.
//!
//! ## Behavior
//!
//! - Only the first `<input>` element is rewritten, whether self-closing or not
//! - Attributes in the new set replace existing ones in place; the rest are
//!   appended after the existing attributes
//! - Bare boolean attributes already on the element, like `required`, are
//!   kept and re-emitted with an empty value
//! - `Flag(false)` attributes are removed from the element entirely
//! - `Flag(true)` attributes are written with an empty value, like `required=""`
//! - All other markup (elements, text, comments) is copied through unchanged
//!
//! ## Error Handling
//!
//! The transform returns `TransformError` for markup without an `<input>`
//! element and for markup the parser cannot process. Errors convert to a
//! Python `ValueError` at the module boundary.

use crate::attrs::AttrValue;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Malformed widget markup: {0}")]
    Markup(#[from] quick_xml::Error),
    #[error("Malformed attribute in widget markup: {0}")]
    Attribute(#[from] AttrError),
    #[error("Invalid escape sequence in widget markup: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("Failed to write widget markup: {0}")]
    Write(#[from] std::io::Error),
    #[error("Widget markup contains no <input> element")]
    MissingInput,
    #[error("Widget markup is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Rewrite the first `<input>` element of `html` with the given attributes.
pub fn apply_input_attributes(
    html: &str,
    attrs: &[(String, AttrValue)],
) -> Result<String, TransformError> {
    let mut reader = Reader::from_str(html);
    // Rendered form markup is HTML, so unmatched end tags must not error.
    reader.config_mut().check_end_names = false;

    let mut writer = Writer::new(Vec::new());
    let mut patched = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Empty(element) if !patched && is_input(&element) => {
                writer.write_event(Event::Empty(merge_attributes(&element, attrs)?))?;
                patched = true;
            }
            Event::Start(element) if !patched && is_input(&element) => {
                writer.write_event(Event::Start(merge_attributes(&element, attrs)?))?;
                patched = true;
            }
            event => writer.write_event(event)?,
        }
    }

    if !patched {
        return Err(TransformError::MissingInput);
    }

    Ok(String::from_utf8(writer.into_inner())?)
}

fn is_input(element: &BytesStart<'_>) -> bool {
    element.name().as_ref().eq_ignore_ascii_case(b"input")
}

/// Merge the new attributes into the element. Existing attributes keep their
/// position when replaced; attributes not on the element yet are appended.
fn merge_attributes(
    element: &BytesStart<'_>,
    attrs: &[(String, AttrValue)],
) -> Result<BytesStart<'static>, TransformError> {
    let name = String::from_utf8(element.name().as_ref().to_vec())?;
    let mut merged = BytesStart::new(name);
    let mut consumed = vec![false; attrs.len()];

    // Rendered form markup may carry bare boolean attributes like required,
    // so the attributes are read with the HTML rules, not the XML ones.
    for attribute in element.html_attributes() {
        let attribute = attribute?;
        let key = String::from_utf8(attribute.key.as_ref().to_vec())?;
        match attrs.iter().position(|(new_name, _)| new_name.as_str() == key) {
            Some(index) => {
                consumed[index] = true;
                push_attr(&mut merged, &key, &attrs[index].1);
            }
            None => {
                let value = attribute.unescape_value()?;
                merged.push_attribute((key.as_str(), value.as_ref()));
            }
        }
    }

    for (index, (name, value)) in attrs.iter().enumerate() {
        if !consumed[index] {
            push_attr(&mut merged, name, value);
        }
    }

    Ok(merged)
}

fn push_attr(element: &mut BytesStart<'static>, name: &str, value: &AttrValue) {
    match value {
        AttrValue::Flag(false) => {}
        AttrValue::Flag(true) => element.push_attribute((name, "")),
        AttrValue::Text(text) => element.push_attribute((name, text.as_str())),
    }
}
