//! Full spectrum analysis of a time series
//!
//! Combines the FFT engine, frequency bins, shifting and magnitude into
//! one call that returns a zero-centered spectrum ready for plotting.

use super::fft::{FftEngine, Spectrum};
use super::frequencies::generate_frequencies;
use super::magnitude::compute_magnitude;
use super::shift::{fft_shift, fft_shift_frequencies};
use crate::error::{ensure_same_len, PipelineError, PipelineResult};
use crate::io::TimeSeries;

/// Relative deviation in sample spacing tolerated before warning
const SPACING_TOLERANCE: f64 = 1e-6;

/// Zero-centered spectrum of one signal
///
/// All fields share the signal length and are index-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectrumReport {
    /// Frequency bins in ascending order (cycles per unit time)
    pub frequencies: Vec<f64>,

    /// Shifted complex spectrum
    pub spectrum: Spectrum,

    /// Shifted magnitude |X[k]|
    pub magnitude: Vec<f64>,
}

impl SpectrumReport {
    /// Frequency and magnitude of the strongest bin
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(self.magnitude.iter())
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(&f, &m)| (f, m))
    }
}

/// Analyze a loaded time series
///
/// The sampling interval is taken from the first two time stamps.
///
/// # Errors
/// * `PipelineError::InvalidParameter` with fewer than two samples or a
///   non-positive sampling interval
/// * `PipelineError::LengthMismatch` if time and values differ in length
pub fn analyze(series: &TimeSeries) -> PipelineResult<SpectrumReport> {
    ensure_same_len(series.time.len(), series.values.len())?;

    let interval = series.sampling_interval().ok_or_else(|| {
        PipelineError::InvalidParameter(format!(
            "need at least two samples to infer the sampling interval, got {}",
            series.len()
        ))
    })?;

    if !is_uniform(&series.time, interval) {
        log::warn!(
            "Time stamps are not uniformly spaced; using interval {} from the first two samples",
            interval
        );
    }

    analyze_with_interval(&series.values, interval)
}

/// Analyze a signal sampled at a known interval
pub fn analyze_with_interval(signal: &[f64], sampling_interval: f64) -> PipelineResult<SpectrumReport> {
    let frequencies = generate_frequencies(signal.len(), sampling_interval)?;

    let mut engine = FftEngine::new();
    let (real, imag) = engine.forward(signal)?.into_parts();

    let (real, imag) = fft_shift(real, imag)?;
    let frequencies = fft_shift_frequencies(frequencies);
    let magnitude = compute_magnitude(&real, &imag)?;

    log::debug!(
        "Analyzed {} samples at interval {}",
        signal.len(),
        sampling_interval
    );

    Ok(SpectrumReport {
        frequencies,
        spectrum: Spectrum { real, imag },
        magnitude,
    })
}

fn is_uniform(time: &[f64], interval: f64) -> bool {
    let tolerance = interval.abs() * SPACING_TOLERANCE;
    time.windows(2)
        .all(|w| ((w[1] - w[0]) - interval).abs() <= tolerance)
}
