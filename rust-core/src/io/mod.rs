//! Time-series input from delimited text files

pub mod loader;

pub use loader::{read_csv, read_csv_with, read_time_series_from_reader, LoaderConfig, TimeSeries};
