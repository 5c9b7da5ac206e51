//! # Python API Functions
//!
//! This module defines the functions exposed to Python. Each function accepts
//! arbitrary Python objects, converts them to JSON values at the boundary, and
//! delegates to the codec and widget crates. The functions are registered in
//! the singular extension module of the workspace.

use crate::codec;
use crate::config::TagConfig;
use crate::pyjson::py_to_json;
use mcms_tags_widget::AttrValue;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict};

/// Decode a raw tag value into the canonical list of tag strings.
#[pyfunction]
#[pyo3(signature = (value=None))]
pub fn decode_tags(value: Option<&Bound<'_, PyAny>>) -> Vec<String> {
    let raw = value.and_then(py_to_json);
    crate::decode_tags(raw.as_ref())
}

/// Encode a stored tag value into the text the widget displays.
#[pyfunction]
#[pyo3(signature = (value=None))]
pub fn encode_tags(value: Option<&Bound<'_, PyAny>>) -> String {
    let raw = value.and_then(py_to_json);
    crate::encode_tags(raw.as_ref())
}

/// Whether the stored value and the submitted value differ.
#[pyfunction]
#[pyo3(signature = (initial=None, current=None))]
pub fn has_changed(initial: Option<&Bound<'_, PyAny>>, current: Option<&Bound<'_, PyAny>>) -> bool {
    let initial = initial.and_then(py_to_json);
    let current = current.and_then(py_to_json);
    codec::has_changed(initial.as_ref(), current.as_ref())
}

/// Validate that a value can be stored in the JSON column.
#[pyfunction]
pub fn validate_tags(value: &Bound<'_, PyAny>) -> PyResult<()> {
    match py_to_json(value) {
        Some(json) => codec::validate(&json).map_err(PyErr::from),
        None => Err(PyValueError::new_err("Value must be valid JSON")),
    }
}

/// Rewrite the first `<input>` of rendered form markup into a tag input.
#[pyfunction]
#[pyo3(signature = (html, configs=None, attrs=None))]
pub fn render_input(
    html: &str,
    configs: Option<&Bound<'_, PyAny>>,
    attrs: Option<&Bound<'_, PyDict>>,
) -> PyResult<String> {
    // Configuration attributes apply only when the configs are a mapping,
    // mirroring the field-to-widget hand-off.
    let config = configs
        .and_then(py_to_json)
        .filter(|raw| raw.is_object())
        .map(|raw| TagConfig::build(Some(&raw)).input_config());

    let mut extra = Vec::new();
    if let Some(attrs) = attrs {
        for (key, value) in attrs.iter() {
            let name = key.str()?.extract::<String>()?;
            if value.is_instance_of::<PyBool>() {
                extra.push((name, AttrValue::Flag(value.extract::<bool>()?)));
            } else {
                extra.push((name, AttrValue::Text(value.str()?.extract::<String>()?)));
            }
        }
    }

    mcms_tags_widget::render_input(html, config.as_ref(), &extra)
        .map_err(|error| PyValueError::new_err(error.to_string()))
}
