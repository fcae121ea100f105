//! FFT engine built on realfft and rustfft
//!
//! Forward transforms of real signals use realfft and rebuild the upper
//! half of the spectrum from Hermitian symmetry. Inverse transforms use a
//! complex rustfft plan. Normalization follows the usual convention:
//! the forward transform is unscaled and the inverse applies 1/n.

use crate::error::{ensure_same_len, PipelineError, PipelineResult};
use num_complex::Complex;
use realfft::RealFftPlanner;
use rustfft::FftPlanner;

/// Complex spectrum as parallel real/imaginary sequences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    pub real: Vec<f64>,
    pub imag: Vec<f64>,
}

impl Spectrum {
    /// Build from separate components
    ///
    /// # Errors
    /// `PipelineError::LengthMismatch` if the components differ in length
    pub fn new(real: Vec<f64>, imag: Vec<f64>) -> PipelineResult<Self> {
        ensure_same_len(real.len(), imag.len())?;
        Ok(Self { real, imag })
    }

    pub fn from_complex(bins: &[Complex<f64>]) -> Self {
        Self {
            real: bins.iter().map(|c| c.re).collect(),
            imag: bins.iter().map(|c| c.im).collect(),
        }
    }

    pub fn to_complex(&self) -> Vec<Complex<f64>> {
        self.real
            .iter()
            .zip(self.imag.iter())
            .map(|(&re, &im)| Complex::new(re, im))
            .collect()
    }

    /// Number of frequency bins
    pub fn len(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Split into `(real, imag)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.real, self.imag)
    }
}

/// FFT engine with cached planners
pub struct FftEngine {
    /// Real-to-complex planner for forward transforms
    real_planner: RealFftPlanner<f64>,

    /// Complex planner for inverse transforms
    complex_planner: FftPlanner<f64>,
}

impl FftEngine {
    pub fn new() -> Self {
        Self {
            real_planner: RealFftPlanner::new(),
            complex_planner: FftPlanner::new(),
        }
    }

    /// Forward DFT of a real signal
    ///
    /// Any length is accepted. Output has one bin per input sample, in the
    /// standard order (DC, positive frequencies, then negative frequencies).
    pub fn forward(&mut self, signal: &[f64]) -> PipelineResult<Spectrum> {
        let n = signal.len();
        if n == 0 {
            return Ok(Spectrum::default());
        }

        let r2c = self.real_planner.plan_fft_forward(n);
        let mut input = signal.to_vec();
        let mut half = r2c.make_output_vec();

        r2c.process(&mut input, &mut half)
            .map_err(|e| PipelineError::Transform(e.to_string()))?;

        // X[n - k] = conj(X[k]) for real input
        let mut bins = Vec::with_capacity(n);
        bins.extend_from_slice(&half);
        let mirrored = n - half.len();
        bins.extend(half[1..mirrored + 1].iter().rev().map(|c| c.conj()));

        log::debug!("Forward FFT of {} samples", n);
        Ok(Spectrum::from_complex(&bins))
    }

    /// Inverse DFT, returning the real part scaled by 1/n
    pub fn inverse(&mut self, spectrum: &Spectrum) -> PipelineResult<Vec<f64>> {
        ensure_same_len(spectrum.real.len(), spectrum.imag.len())?;

        let n = spectrum.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let ifft = self.complex_planner.plan_fft_inverse(n);
        let mut buffer = spectrum.to_complex();
        ifft.process(&mut buffer);

        let scale = 1.0 / n as f64;
        Ok(buffer.iter().map(|c| c.re * scale).collect())
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the DFT of a real signal
pub fn compute_fft(signal: &[f64]) -> PipelineResult<Spectrum> {
    FftEngine::new().forward(signal)
}

/// Compute the inverse DFT from separate real/imaginary components
///
/// # Errors
/// `PipelineError::LengthMismatch` if `real` and `imag` differ in length
pub fn compute_ifft(real: &[f64], imag: &[f64]) -> PipelineResult<Vec<f64>> {
    let spectrum = Spectrum::new(real.to_vec(), imag.to_vec())?;
    FftEngine::new().inverse(&spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_close(a: &[f64], b: &[f64], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!((x - y).abs() < tol, "index {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_fft_known_values() {
        let spectrum = compute_fft(&[1.0, 2.0, 3.0, 4.0]).unwrap();

        assert_close(&spectrum.real, &[10.0, -2.0, -2.0, -2.0], 1e-12);
        assert_close(&spectrum.imag, &[0.0, 2.0, 0.0, -2.0], 1e-12);
    }

    #[test]
    fn test_fft_dc_signal() {
        let spectrum = compute_fft(&vec![1.0; 100]).unwrap();

        assert_eq!(spectrum.len(), 100);
        assert!((spectrum.real[0] - 100.0).abs() < 1e-9);

        for k in 1..100 {
            assert!(spectrum.real[k].abs() < 1e-9);
            assert!(spectrum.imag[k].abs() < 1e-9);
        }
    }

    #[test]
    fn test_odd_length_matches_complex_fft() {
        let signal: Vec<f64> = (0..9).map(|i| (i as f64 * 0.7).sin() + 0.3 * i as f64).collect();
        let spectrum = compute_fft(&signal).unwrap();

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(signal.len());
        let mut reference: Vec<Complex<f64>> =
            signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
        fft.process(&mut reference);
        let reference = Spectrum::from_complex(&reference);

        assert_close(&spectrum.real, &reference.real, 1e-9);
        assert_close(&spectrum.imag, &reference.imag, 1e-9);
    }

    #[test]
    fn test_sine_wave_peak() {
        let n = 64;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 5.0 * i as f64 / n as f64).sin())
            .collect();

        let spectrum = compute_fft(&signal).unwrap();

        // Pure sine of 5 cycles: energy at bins 5 and n - 5
        assert!((spectrum.imag[5] + n as f64 / 2.0).abs() < 1e-9);
        assert!((spectrum.imag[n - 5] - n as f64 / 2.0).abs() < 1e-9);
        assert!(spectrum.real[3].abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let mut engine = FftEngine::new();

        for &n in &[1usize, 2, 7, 16, 33] {
            let signal: Vec<f64> = (0..n).map(|i| ((i * i) % 11) as f64 - 4.5).collect();
            let spectrum = engine.forward(&signal).unwrap();
            let restored = engine.inverse(&spectrum).unwrap();
            assert_close(&restored, &signal, 1e-9);
        }
    }

    #[test]
    fn test_empty_signal() {
        let spectrum = compute_fft(&[]).unwrap();
        assert!(spectrum.is_empty());
        assert!(compute_ifft(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_ifft_length_mismatch() {
        let result = compute_ifft(&[1.0, 2.0], &[0.0]);
        assert!(matches!(
            result,
            Err(PipelineError::LengthMismatch { expected: 2, actual: 1 })
        ));
    }
}
