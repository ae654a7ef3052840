//! Python bindings for the classifier.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::api::{Classification, MimeSniffer};
use crate::config::SniffConfig;

fn to_dict<'py>(py: Python<'py>, result: Classification) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("status", result.status())?;
    dict.set_item("mime", result.mime())?;
    Ok(dict)
}

/// Classify a bytes object. Returns `{"status": int, "mime": str | None}`.
#[pyfunction]
#[pyo3(signature = (data, try_text = true))]
pub fn sniff<'py>(py: Python<'py>, data: &[u8], try_text: bool) -> PyResult<Bound<'py, PyDict>> {
    let config = SniffConfig {
        try_text,
        ..SniffConfig::default()
    };
    let result = MimeSniffer::with_config(config).sniff(data);
    to_dict(py, result)
}

/// Classify the leading bytes of a file.
#[pyfunction]
#[pyo3(signature = (path, config = None))]
pub fn sniff_path<'py>(
    py: Python<'py>,
    path: std::path::PathBuf,
    config: Option<SniffConfig>,
) -> PyResult<Bound<'py, PyDict>> {
    let sniffer = MimeSniffer::with_config(config.unwrap_or_default());
    let result = sniffer.sniff_path(&path)?;
    to_dict(py, result)
}

/// Register all Python bindings with the module.
pub fn register_python_bindings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SniffConfig>()?;
    m.add_function(wrap_pyfunction!(sniff, m)?)?;
    m.add_function(wrap_pyfunction!(sniff_path, m)?)?;
    m.add_function(wrap_pyfunction!(crate::logging::init_logging, m)?)?;
    Ok(())
}
