//! Question/answer ingestion from CSV files.
//!
//! This crate discovers CSV files in a directory or an embedded resource
//! package, splits each row into a question and an answer, and groups the
//! pairs by category (the file name without its extension).
//!
//! # Features
//!
//! - **Directory loading**: every CSV file directly inside a folder
//! - **Package loading**: CSV files embedded with `include_dir!`
//! - **Column roles**: question from the left, right, or an explicit column
//! - **Lenient rows**: malformed rows are skipped, never fatal
//! - **Configuration**: builder-style [`LoaderOptions`], loadable from TOML
//!
//! # Example
//!
//! ```ignore
//! use qa_ingest::{ColumnRole, Loader};
//!
//! let loader = Loader::new(",", ColumnRole::Left, false)?;
//! let categories = loader.load_from_directory("data/flashcards")?;
//!
//! for (category, pairs) in &categories {
//!     println!("{category}: {} cards", pairs.len());
//! }
//! ```

mod csv;
mod discovery;
mod error;
mod loader;
mod options;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use loader::Loader;
pub use options::LoaderOptions;

// === CSV Parsing ===
pub use self::csv::{ColumnSelection, ParsedRows, RowParser, decode_text};

// === File Discovery ===
pub use discovery::{category_for, has_csv_extension, list_csv_files, list_files};

// === Sources ===
pub use source::{
    CsvSource, DEFAULT_RESOURCE_PATH, DirectorySource, EmbeddedSource, PathListSource,
    ResourcePackage,
};

// === Model Re-exports ===
pub use qa_model::{CategoryMap, ColumnRole, QaPair};
