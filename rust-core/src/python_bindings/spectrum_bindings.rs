//! Python bindings for spectral operations

use pyo3::prelude::*;
use pyo3::types::PyDict;
use numpy::{PyArray1, PyReadonlyArray1};
use super::as_samples;
use crate::spectrum::{
    analyze_with_interval, compute_fft, compute_ifft, compute_magnitude, fft_shift,
    fft_shift_frequencies, generate_frequencies, ifft_shift,
};

type ArrayPair<'py> = (&'py PyArray1<f64>, &'py PyArray1<f64>);

/// Compute the FFT of a real signal
/// 
/// Args:
///     data: Input signal as numpy array
/// 
/// Returns:
///     Tuple of (real, imag) numpy arrays, one bin per input sample
#[pyfunction]
pub fn compute_fft_py<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
) -> PyResult<ArrayPair<'py>> {
    let (real, imag) = compute_fft(&as_samples(&data))?.into_parts();
    Ok((PyArray1::from_vec(py, real), PyArray1::from_vec(py, imag)))
}

/// Inverse FFT, scaled by 1/n
/// 
/// Returns:
///     Real part of the reconstructed signal
#[pyfunction]
pub fn compute_ifft_py<'py>(
    py: Python<'py>,
    real: PyReadonlyArray1<f64>,
    imag: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let signal = compute_ifft(&as_samples(&real), &as_samples(&imag))?;
    Ok(PyArray1::from_vec(py, signal))
}

/// Shift the zero-frequency component to the center of the spectrum
#[pyfunction]
pub fn fft_shift_py<'py>(
    py: Python<'py>,
    real: PyReadonlyArray1<f64>,
    imag: PyReadonlyArray1<f64>,
) -> PyResult<ArrayPair<'py>> {
    let (real, imag) = fft_shift(as_samples(&real).into_owned(), as_samples(&imag).into_owned())?;
    Ok((PyArray1::from_vec(py, real), PyArray1::from_vec(py, imag)))
}

/// Undo `fft_shift_py`
#[pyfunction]
pub fn ifft_shift_py<'py>(
    py: Python<'py>,
    real: PyReadonlyArray1<f64>,
    imag: PyReadonlyArray1<f64>,
) -> PyResult<ArrayPair<'py>> {
    let (real, imag) = ifft_shift(as_samples(&real).into_owned(), as_samples(&imag).into_owned())?;
    Ok((PyArray1::from_vec(py, real), PyArray1::from_vec(py, imag)))
}

/// Magnitude sqrt(real^2 + imag^2) of each bin
#[pyfunction]
pub fn compute_magnitude_py<'py>(
    py: Python<'py>,
    real: PyReadonlyArray1<f64>,
    imag: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let magnitude = compute_magnitude(&as_samples(&real), &as_samples(&imag))?;
    Ok(PyArray1::from_vec(py, magnitude))
}

/// Frequency bins for an FFT of length `len`
/// 
/// Args:
///     len: Number of samples
///     sampling_interval: Time between samples in seconds
#[pyfunction]
pub fn generate_frequencies_py<'py>(
    py: Python<'py>,
    len: usize,
    sampling_interval: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let freqs = generate_frequencies(len, sampling_interval)?;
    Ok(PyArray1::from_vec(py, freqs))
}

/// Shift frequency bins so zero frequency is centered
#[pyfunction]
pub fn fft_shift_frequencies_py<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let shifted = fft_shift_frequencies(as_samples(&data).into_owned());
    Ok(PyArray1::from_vec(py, shifted))
}

/// Run FFT, shift and magnitude in one call
/// 
/// Returns:
///     Dictionary with keys: 'frequencies', 'magnitude', 'real', 'imag'
#[pyfunction]
pub fn analyze_py<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    sampling_interval: f64,
) -> PyResult<&'py PyDict> {
    let report = analyze_with_interval(&as_samples(&data), sampling_interval)?;
    let (real, imag) = report.spectrum.into_parts();

    let dict = PyDict::new(py);
    dict.set_item("frequencies", PyArray1::from_vec(py, report.frequencies))?;
    dict.set_item("magnitude", PyArray1::from_vec(py, report.magnitude))?;
    dict.set_item("real", PyArray1::from_vec(py, real))?;
    dict.set_item("imag", PyArray1::from_vec(py, imag))?;

    Ok(dict)
}
