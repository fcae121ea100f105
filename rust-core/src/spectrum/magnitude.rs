//! Magnitude of complex spectrum components

use crate::error::{ensure_same_len, PipelineResult};
use num_complex::Complex;

/// Elementwise magnitude sqrt(re² + im²)
///
/// # Errors
/// `PipelineError::LengthMismatch` if `real` and `imag` differ in length
pub fn compute_magnitude(real: &[f64], imag: &[f64]) -> PipelineResult<Vec<f64>> {
    ensure_same_len(real.len(), imag.len())?;

    Ok(real
        .iter()
        .zip(imag.iter())
        .map(|(&re, &im)| Complex::new(re, im).norm())
        .collect())
}

/// Magnitude in dB: 20*log10(|X|/reference)
///
/// Magnitudes are clamped at 1e-10 to avoid log(0).
pub fn compute_magnitude_db(real: &[f64], imag: &[f64], reference: f64) -> PipelineResult<Vec<f64>> {
    let magnitude = compute_magnitude(real, imag)?;
    Ok(magnitude
        .iter()
        .map(|&mag| {
            let mag_clamped = mag.max(1e-10);
            20.0 * (mag_clamped / reference).log10()
        })
        .collect())
}
