//! Error types for Q/A ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading Q/A categories.
///
/// Malformed rows are not represented here: they are skipped and logged.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Not Found ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Resource directory missing from an embedded package.
    #[error("resource path '{path}' not found in package '{package}'")]
    ResourceNotFound { package: String, path: String },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    // === File System Errors ===
    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Content Errors ===
    /// File bytes are not valid in the configured encoding.
    #[error("file {path} is not valid {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// CSV reader failed on the file content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Configuration Errors ===
    /// Delimiter is empty or not a single ASCII character.
    #[error("invalid delimiter {delimiter:?}: expected a single ASCII character")]
    InvalidDelimiter { delimiter: String },

    /// Encoding label not recognized.
    #[error("unsupported encoding label '{label}'")]
    UnsupportedEncoding { label: String },

    /// Failed to read a configuration file.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for loader options.
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl IngestError {
    /// Returns true for the "location does not exist" class of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::ResourceNotFound { .. } | Self::FileNotFound { .. }
        )
    }

    /// Maps an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn from_file_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source: err }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
