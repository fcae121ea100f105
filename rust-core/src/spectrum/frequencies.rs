//! Frequency bins for a DFT of given length and sample spacing

use crate::error::{PipelineError, PipelineResult};

/// Frequency of each FFT bin in cycles per unit time
///
/// Bins follow the unshifted transform order:
/// `[0, 1, ..., ceil(n/2)-1, -floor(n/2), ..., -1] / (n * d)`
///
/// # Arguments
/// * `len` - Transform length n (must be positive)
/// * `sampling_interval` - Sample spacing d (must be finite and positive)
pub fn generate_frequencies(len: usize, sampling_interval: f64) -> PipelineResult<Vec<f64>> {
    if len == 0 {
        return Err(PipelineError::InvalidParameter(
            "length must be positive".to_string(),
        ));
    }
    if !sampling_interval.is_finite() || sampling_interval <= 0.0 {
        return Err(PipelineError::InvalidParameter(format!(
            "sampling interval must be positive, got {}",
            sampling_interval
        )));
    }

    let total_duration = len as f64 * sampling_interval;
    let positive = (len + 1) / 2;

    Ok((0..len)
        .map(|k| {
            if k < positive {
                k as f64 / total_duration
            } else {
                -((len - k) as f64) / total_duration
            }
        })
        .collect())
}
