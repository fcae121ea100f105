//! Spectral transform, shifting, magnitude and frequency bins

pub mod fft;
pub mod shift;
pub mod magnitude;
pub mod frequencies;
pub mod analysis;

pub use fft::{compute_fft, compute_ifft, FftEngine, Spectrum};
pub use shift::{fft_shift, fft_shift_frequencies, ifft_shift, ifft_shift_frequencies};
pub use magnitude::{compute_magnitude, compute_magnitude_db};
pub use frequencies::generate_frequencies;
pub use analysis::{analyze, analyze_with_interval, SpectrumReport};
