//! Error types for tcoperon
//!
//! Only structural problems are errors. A lookup miss (unknown GI, unknown
//! UniProt accession, family without a transport cluster) is data, not an
//! error, and never reaches this type.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for tcoperon operations
pub type Result<T> = std::result::Result<T, TcError>;

/// Main error type for tcoperon
#[derive(Error, Debug)]
pub enum TcError {
    /// Input table could not be opened or read
    #[error("Failed to read '{}': {source}. Verify the file path exists and you have read permissions.", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input table could not be decoded as delimited text
    #[error("Failed to parse '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row has fewer columns than the table requires
    #[error("Invalid row in '{}' at line {line}: {message}", .path.display())]
    Format {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Required setting missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report or summary could not be written
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl TcError {
    /// Create an I/O error for the given input path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a CSV decoding error for the given input path
    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a row format error
    pub fn format(path: impl AsRef<Path>, line: u64, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.as_ref().to_path_buf(),
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_names_file_and_line() {
        let err = TcError::format("operons.txt", 12, "expected 2 columns, got 1");
        let msg = err.to_string();
        assert!(msg.contains("operons.txt"));
        assert!(msg.contains("line 12"));
        assert!(msg.contains("expected 2 columns"));
    }

    #[test]
    fn test_io_error_names_file() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = TcError::io("/data/gi2uni.tsv", source);
        assert!(err.to_string().contains("/data/gi2uni.tsv"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
