//! PyO3 bindings for Python integration

use pyo3::prelude::*;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use numpy::PyReadonlyArray1;
use std::borrow::Cow;
use crate::error::PipelineError;

mod io_bindings;
mod spectrum_bindings;
mod plot_bindings;

impl From<PipelineError> for PyErr {
    fn from(err: PipelineError) -> PyErr {
        let message = err.to_string();
        match err {
            PipelineError::Format { .. }
            | PipelineError::LengthMismatch { .. }
            | PipelineError::InvalidParameter(_) => PyValueError::new_err(message),
            PipelineError::Csv(_) | PipelineError::Io(_) => PyIOError::new_err(message),
            PipelineError::Transform(_)
            | PipelineError::Plot(_)
            | PipelineError::Encode(_) => PyRuntimeError::new_err(message),
        }
    }
}

/// Borrow a numpy array as a slice, copying only if it is not contiguous
fn as_samples<'a>(array: &'a PyReadonlyArray1<'_, f64>) -> Cow<'a, [f64]> {
    match array.as_slice() {
        Ok(slice) => Cow::Borrowed(slice),
        Err(_) => Cow::Owned(array.as_array().to_vec()),
    }
}

/// Python module definition
#[pymodule]
fn fft_rust_in_python(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(io_bindings::read_csv_py, m)?)?;

    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_fft_py, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_ifft_py, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::fft_shift_py, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::ifft_shift_py, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_magnitude_py, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::generate_frequencies_py, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::fft_shift_frequencies_py, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::analyze_py, m)?)?;

    m.add_function(wrap_pyfunction!(plot_bindings::generate_plot_py, m)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numpy::PyArray1;

    #[test]
    fn test_error_mapping() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let err: PyErr = PipelineError::LengthMismatch { expected: 2, actual: 1 }.into();
            assert!(err.is_instance_of::<PyValueError>(py));
            assert!(err.to_string().contains("expected 2, got 1"));

            let err: PyErr = PipelineError::InvalidParameter("bad".to_string()).into();
            assert!(err.is_instance_of::<PyValueError>(py));

            let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
            let err: PyErr = PipelineError::Io(io).into();
            assert!(err.is_instance_of::<PyIOError>(py));

            let err: PyErr = PipelineError::Plot("no font".to_string()).into();
            assert!(err.is_instance_of::<PyRuntimeError>(py));
        });
    }

    #[test]
    fn test_module_registers_functions() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let module = PyModule::new(py, "fft_rust_in_python").unwrap();
            fft_rust_in_python(py, module).unwrap();

            for name in ["read_csv_py", "compute_fft_py", "fft_shift_py", "generate_plot_py", "analyze_py"] {
                assert!(module.hasattr(name).unwrap(), "missing {}", name);
            }
        });
    }

    #[test]
    fn test_as_samples_non_contiguous() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let full = PyArray1::from_vec(py, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
            let strided: &PyArray1<f64> = full
                .call_method1("__getitem__", (pyo3::types::PySlice::new(py, 0, 5, 2),))
                .unwrap()
                .downcast()
                .unwrap();
            let readonly = strided.readonly();

            assert_eq!(as_samples(&readonly).as_ref(), &[0.0, 2.0, 4.0]);
        });
    }
}
