//! Python bindings for time-series loading

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::io::{read_csv_with, LoaderConfig};

/// Read the first two columns of a CSV file
/// 
/// Args:
///     file_path: Path to the CSV file
///     has_headers: Whether the first row holds column names (default: True)
///     delimiter: Single-character field delimiter (default: ",")
/// 
/// Returns:
///     Tuple of (time, measured_data) numpy arrays
#[pyfunction]
#[pyo3(signature = (file_path, has_headers=true, delimiter=','))]
pub fn read_csv_py<'py>(
    py: Python<'py>,
    file_path: &str,
    has_headers: bool,
    delimiter: char,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    if !delimiter.is_ascii() {
        return Err(pyo3::exceptions::PyValueError::new_err(
            format!("Delimiter must be a single ASCII character, got {:?}", delimiter),
        ));
    }

    let config = LoaderConfig {
        has_headers,
        delimiter: delimiter as u8,
    };
    let (time, values) = read_csv_with(file_path, &config)?.into_parts();

    Ok((PyArray1::from_vec(py, time), PyArray1::from_vec(py, values)))
}
