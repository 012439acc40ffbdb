//! Error types for the csvscrub cleaning pipeline.
//!
//! Two layers, converted automatically via `From` so `?` works across
//! boundaries:
//!
//! - [`CsvError`] - loading and writing delimited files
//! - [`PipelineError`] - top-level orchestration
//!
//! Row-level malformation is deliberately *not* an error value: a row that
//! does not match the header's field count is skipped and counted in the
//! load report, and processing continues.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Errors (loader + writer)
// =============================================================================

/// Errors while reading or writing a delimited file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Input file unreadable or output path unwritable.
    #[error("cannot access '{}': {}", .path.display(), .source)]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O failure on an already-open handle.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural failure reported by the CSV layer.
    #[error("CSV format error: {0}")]
    Format(#[from] csv::Error),

    /// Input bytes could not be decoded to text.
    #[error("failed to decode input: {0}")]
    Encoding(String),

    /// File has no content at all.
    #[error("CSV file is empty")]
    EmptyFile,

    /// Header row exists but every column name is blank.
    #[error("no headers found in CSV")]
    NoHeaders,

    /// Delimiters must be single ASCII characters.
    #[error("invalid delimiter '{0}': must be a single ASCII character")]
    InvalidDelimiter(char),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level errors returned by [`crate::scrub::pipeline::scrub_csv`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV read/write error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// I/O error outside the CSV layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV read/write operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));
    }

    #[test]
    fn test_file_access_message_names_path() {
        let err = CsvError::FileAccess {
            path: PathBuf::from("/no/such/file.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/file.csv"));
    }

    #[test]
    fn test_invalid_delimiter_message() {
        let err = CsvError::InvalidDelimiter('€');
        assert!(err.to_string().contains('€'));
    }
}
