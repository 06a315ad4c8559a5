//! Data model for CSV-backed question/answer sets.
//!
//! The types in this crate carry no I/O. Loading lives in `qa-ingest`.
//!
//! - [`ColumnRole`]: which CSV column supplies the question
//! - [`QaPair`]: one question/answer tuple taken from a single row
//! - [`CategoryMap`]: category name to ordered pairs, the loader's output

pub mod category;
pub mod column;
pub mod error;
pub mod pair;

pub use category::CategoryMap;
pub use column::ColumnRole;
pub use error::ModelError;
pub use pair::QaPair;
