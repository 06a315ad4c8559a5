//! CSV row parsing and column selection.

mod columns;
mod reader;

pub use columns::ColumnSelection;
pub use reader::{ParsedRows, RowParser, decode_text};
