use pyo3::exceptions::PyValueError;
use pyo3::PyErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Value must be valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<FieldError> for PyErr {
    fn from(error: FieldError) -> Self {
        PyValueError::new_err(error.to_string())
    }
}
