//! CSV loader for two-column time series
//!
//! Reads the first two columns (time, measured value) of every row.
//! Additional columns are ignored.

use crate::error::{PipelineError, PipelineResult};
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

/// Loader configuration
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// First row holds column names and is skipped
    pub has_headers: bool,

    /// Field delimiter byte
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
        }
    }
}

/// Time series as two parallel sequences in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    pub time: Vec<f64>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Spacing between the first two time stamps
    ///
    /// Assumes uniform sampling. Returns `None` with fewer than two samples.
    pub fn sampling_interval(&self) -> Option<f64> {
        match self.time.as_slice() {
            [t0, t1, ..] => Some(t1 - t0),
            _ => None,
        }
    }

    /// Split into `(time, values)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.values)
    }
}

/// Read a CSV file with the default configuration (header row, comma delimited)
pub fn read_csv<P: AsRef<Path>>(path: P) -> PipelineResult<TimeSeries> {
    read_csv_with(path, &LoaderConfig::default())
}

/// Read a delimited text file with an explicit configuration
///
/// # Errors
/// * `PipelineError::Io` if the file cannot be opened
/// * otherwise as `read_time_series_from_reader`
pub fn read_csv_with<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> PipelineResult<TimeSeries> {
    let path = path.as_ref();
    log::debug!("Reading time series from {}", path.display());

    let file = std::fs::File::open(path)?;
    read_time_series_from_reader(file, config)
}

/// Parse a time series from any reader
///
/// # Errors
/// * `PipelineError::Format` if a row lacks two numeric fields
/// * `PipelineError::Csv` if a record can't be decoded or the reader fails
pub fn read_time_series_from_reader<R: Read>(
    reader: R,
    config: &LoaderConfig,
) -> PipelineResult<TimeSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(config.has_headers)
        .delimiter(config.delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut series = TimeSeries::default();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;

        series.time.push(parse_field(&record, row, 0)?);
        series.values.push(parse_field(&record, row, 1)?);
    }

    log::debug!("Loaded {} rows", series.len());
    Ok(series)
}

fn parse_field(record: &csv::StringRecord, row: usize, column: usize) -> PipelineResult<f64> {
    let field = record.get(column).unwrap_or("");
    field.parse::<f64>().map_err(|_| PipelineError::Format {
        row,
        column: column + 1,
        value: field.to_string(),
    })
}
