//! FFT Pipeline - Time-Series Spectral Analysis Core
//! 
//! Loads two-column time series, computes and centers their spectra, and
//! renders x/y plots to PNG, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod io;
pub mod plot;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{PipelineError, PipelineResult};
pub use io::{read_csv, read_csv_with, LoaderConfig, TimeSeries};
pub use plot::{generate_plot, generate_plot_with, PlotConfig};
pub use spectrum::{
    analyze, compute_fft, compute_ifft, compute_magnitude, fft_shift, fft_shift_frequencies,
    generate_frequencies, ifft_shift, ifft_shift_frequencies, FftEngine, Spectrum, SpectrumReport,
};
