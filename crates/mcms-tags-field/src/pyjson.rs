//! # Python To JSON Conversion
//!
//! This module converts Python objects into the JSON values the codec and the
//! configuration builder work with. The conversion mirrors what `json.dumps`
//! accepts: `None`, booleans, numbers, text, sequences, and mappings. Anything
//! outside that model converts to `None`, and callers fall back to their safe
//! default instead of raising.

use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};
use serde_json::{Map, Number, Value};

/// Convert a Python object into the JSON value it would serialize to.
pub fn py_to_json(object: &Bound<'_, PyAny>) -> Option<Value> {
    if object.is_none() {
        return Some(Value::Null);
    }
    // Check bools before integers: Python bools are a subclass of int.
    if object.is_instance_of::<PyBool>() {
        return object.extract::<bool>().ok().map(Value::Bool);
    }
    if object.is_instance_of::<PyInt>() {
        if let Ok(number) = object.extract::<i64>() {
            return Some(Value::from(number));
        }
        return object.extract::<u64>().ok().map(Value::from);
    }
    if object.is_instance_of::<PyFloat>() {
        return object
            .extract::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number);
    }
    if object.is_instance_of::<PyString>() {
        return object.extract::<String>().ok().map(Value::String);
    }
    if let Ok(items) = object.cast::<PyList>() {
        return items
            .iter()
            .map(|item| py_to_json(&item))
            .collect::<Option<Vec<Value>>>()
            .map(Value::Array);
    }
    if let Ok(items) = object.cast::<PyTuple>() {
        return items
            .iter()
            .map(|item| py_to_json(&item))
            .collect::<Option<Vec<Value>>>()
            .map(Value::Array);
    }
    if let Ok(fields) = object.cast::<PyDict>() {
        let mut map = Map::new();
        for (key, value) in fields.iter() {
            // Non-text keys are coerced to text, like json.dumps does.
            let key = key.str().ok()?.extract::<String>().ok()?;
            map.insert(key, py_to_json(&value)?);
        }
        return Some(Value::Object(map));
    }
    None
}
