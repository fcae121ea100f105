//! Python bindings for plot rendering

use pyo3::prelude::*;
use pyo3::types::PyBytes;
use numpy::PyReadonlyArray1;
use super::as_samples;
use crate::plot::{generate_plot_with, PlotConfig};

/// Render an x/y line plot
/// 
/// Args:
///     x: X coordinates as numpy array
///     y: Y coordinates (same length as x)
///     x_label: X axis description
///     y_label: Y axis description
///     title: Chart title
///     width: Image width in pixels (default: 1024)
///     height: Image height in pixels (default: 768)
/// 
/// Returns:
///     PNG image as bytes
#[pyfunction]
#[pyo3(signature = (x, y, x_label, y_label, title, width=1024, height=768))]
#[allow(clippy::too_many_arguments)]
pub fn generate_plot_py<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<f64>,
    y: PyReadonlyArray1<f64>,
    x_label: &str,
    y_label: &str,
    title: &str,
    width: u32,
    height: u32,
) -> PyResult<&'py PyBytes> {
    let config = PlotConfig {
        width,
        height,
        ..PlotConfig::default()
    };
    let png = generate_plot_with(&as_samples(&x), &as_samples(&y), x_label, y_label, title, &config)?;
    Ok(PyBytes::new(py, &png))
}
