use mcms_tags_field::api::{decode_tags, encode_tags, has_changed, render_input, validate_tags};
use mcms_tags_field::{TagConfig, TagsField};
use pyo3::prelude::*;

/// A Python module implemented in Rust for the mayacms form widget internals.
#[pymodule]
fn mcms_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<TagConfig>()?;
    m.add_class::<TagsField>()?;
    m.add_function(wrap_pyfunction!(decode_tags, m)?)?;
    m.add_function(wrap_pyfunction!(encode_tags, m)?)?;
    m.add_function(wrap_pyfunction!(has_changed, m)?)?;
    m.add_function(wrap_pyfunction!(validate_tags, m)?)?;
    m.add_function(wrap_pyfunction!(render_input, m)?)?;
    Ok(())
}
