//! File sources the loader reads CSV content from.
//!
//! A source lists entry names and reads their bytes. The loader handles
//! extension filtering, decoding, and parsing, so every source shares the
//! same row semantics.

mod directory;
mod embedded;
mod paths;

pub use directory::DirectorySource;
pub use embedded::{DEFAULT_RESOURCE_PATH, EmbeddedSource, ResourcePackage};
pub use paths::PathListSource;

use std::path::PathBuf;

use crate::error::Result;

/// A flat, enumerable set of files.
pub trait CsvSource {
    /// Human-readable location used in logs.
    fn describe(&self) -> String;

    /// Entry names in load order. Nested directories are not included.
    fn list(&self) -> Result<Vec<String>>;

    /// Full contents of the entry called `name`.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Path used for error and log context when `name` fails to load.
    fn locate(&self, name: &str) -> PathBuf {
        PathBuf::from(name)
    }

    /// Whether the loader should keep only entries with a CSV extension.
    fn filters_extensions(&self) -> bool {
        true
    }
}
