//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quizdedup operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Row that cannot be processed, with its location
    #[error("Malformed row in {file}:{line}: {message}")]
    MalformedRow {
        file: PathBuf,
        line: u64,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Schema validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV decode errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a malformed row error with location
    pub fn malformed_row(file: impl Into<PathBuf>, line: u64, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_system_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::file_system("failed to open questions.csv", "questions.csv", io);
        match err {
            Error::FileSystem { path, source, .. } => {
                assert_eq!(path, Some(PathBuf::from("questions.csv")));
                assert!(source.is_some());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn malformed_row_display_names_location() {
        let err = Error::malformed_row("bank.csv", 7, "row has 1 field, key column is 2");
        assert_eq!(
            err.to_string(),
            "Malformed row in bank.csv:7: row has 1 field, key column is 2"
        );
    }
}
