//! Zero-frequency centering
//!
//! `fft_shift` rotates right by floor(n/2), so bin 0 lands at index
//! floor(n/2). `ifft_shift` undoes it for both odd and even lengths.
//! Spectrum components and frequency bins use the same rotation and stay
//! index-aligned.

use crate::error::{ensure_same_len, PipelineResult};

/// Center the zero-frequency element in place
pub fn fft_shift_inplace<T>(data: &mut [T]) {
    let half = data.len() / 2;
    data.rotate_right(half);
}

/// Undo `fft_shift_inplace`
pub fn ifft_shift_inplace<T>(data: &mut [T]) {
    let half = data.len() / 2;
    data.rotate_left(half);
}

/// Shift real and imaginary spectrum components
///
/// # Errors
/// `PipelineError::LengthMismatch` if the components differ in length
pub fn fft_shift(mut real: Vec<f64>, mut imag: Vec<f64>) -> PipelineResult<(Vec<f64>, Vec<f64>)> {
    ensure_same_len(real.len(), imag.len())?;

    fft_shift_inplace(&mut real);
    fft_shift_inplace(&mut imag);

    Ok((real, imag))
}

/// Inverse of `fft_shift`
pub fn ifft_shift(mut real: Vec<f64>, mut imag: Vec<f64>) -> PipelineResult<(Vec<f64>, Vec<f64>)> {
    ensure_same_len(real.len(), imag.len())?;

    ifft_shift_inplace(&mut real);
    ifft_shift_inplace(&mut imag);

    Ok((real, imag))
}

/// Shift a frequency-bin sequence
pub fn fft_shift_frequencies(mut frequencies: Vec<f64>) -> Vec<f64> {
    fft_shift_inplace(&mut frequencies);
    frequencies
}

/// Inverse of `fft_shift_frequencies`
pub fn ifft_shift_frequencies(mut frequencies: Vec<f64>) -> Vec<f64> {
    ifft_shift_inplace(&mut frequencies);
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::spectrum::frequencies::generate_frequencies;

    #[test]
    fn test_shift_even() {
        let shifted = fft_shift_frequencies(vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(shifted, vec![2.0, 3.0, 0.0, 1.0]);
    }

    #[test]
    fn test_shift_odd_puts_zero_at_floor_half() {
        let shifted = fft_shift_frequencies(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(shifted, vec![3.0, 4.0, 0.0, 1.0, 2.0]);
        assert_eq!(shifted[5 / 2], 0.0);
    }

    #[test]
    fn test_inverse_restores_original() {
        for n in 0..9 {
            let data: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let restored = ifft_shift_frequencies(fft_shift_frequencies(data.clone()));
            assert_eq!(restored, data);
        }
    }

    #[test]
    fn test_spectrum_and_bins_stay_aligned() {
        let n = 7;
        let freqs = generate_frequencies(n, 0.5).unwrap();
        let real: Vec<f64> = freqs.clone();
        let imag: Vec<f64> = freqs.iter().map(|f| -f).collect();

        let (shifted_real, shifted_imag) = fft_shift(real, imag).unwrap();
        let shifted_freqs = fft_shift_frequencies(freqs);

        assert_eq!(shifted_real, shifted_freqs);
        for (im, f) in shifted_imag.iter().zip(shifted_freqs.iter()) {
            assert_eq!(*im, -f);
        }

        // Bins ascend after the shift
        assert!(shifted_freqs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_spectrum_round_trip() {
        let real = vec![1.0, 2.0, 3.0];
        let imag = vec![4.0, 5.0, 6.0];

        let (r, i) = fft_shift(real.clone(), imag.clone()).unwrap();
        let (r, i) = ifft_shift(r, i).unwrap();

        assert_eq!(r, real);
        assert_eq!(i, imag);
    }

    #[test]
    fn test_shift_length_mismatch() {
        let result = fft_shift(vec![1.0, 2.0], vec![1.0]);
        assert!(matches!(result, Err(PipelineError::LengthMismatch { .. })));
    }
}
