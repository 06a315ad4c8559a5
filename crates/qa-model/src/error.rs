use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Column role text was neither `left`, `right`, nor a non-negative index.
    #[error("invalid column role '{value}': expected 'left', 'right', or a zero-based index")]
    InvalidColumnRole { value: String },
}
