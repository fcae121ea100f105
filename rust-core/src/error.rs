//! Error types for the FFT pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// A data row is missing a field or holds a non-numeric value
    #[error("Row {row}, column {column}: '{value}' is not a number")]
    Format {
        row: usize,
        column: usize,
        value: String,
    },

    /// Paired sequences have different lengths
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("FFT processing failed: {0}")]
    Transform(String),

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to draw plot: {0}")]
    Plot(String),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Check that two paired sequences have the same length
pub(crate) fn ensure_same_len(expected: usize, actual: usize) -> PipelineResult<()> {
    if expected != actual {
        return Err(PipelineError::LengthMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_same_len() {
        assert!(ensure_same_len(3, 3).is_ok());

        match ensure_same_len(2, 1) {
            Err(PipelineError::LengthMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_format_message() {
        let err = PipelineError::Format {
            row: 4,
            column: 2,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Row 4, column 2: 'abc' is not a number");
    }
}
