//! Question column selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Which column of a row holds the question.
///
/// The answer is taken from the "other end" of the row unless the loader is
/// configured with an explicit answer column:
///
/// - `Left`: question = first field, answer = last field
/// - `Right`: question = last field, answer = first field
/// - `Index(i)`: question = field `i`, answer = first field when `i != 0`,
///   otherwise the last field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// First column.
    #[default]
    Left,
    /// Last column.
    Right,
    /// Explicit zero-based column index.
    Index(usize),
}

impl ColumnRole {
    /// Concrete column index for a row of `width` fields.
    ///
    /// Returns `None` for an empty row or an out-of-bounds explicit index.
    pub const fn resolve(self, width: usize) -> Option<usize> {
        if width == 0 {
            return None;
        }
        match self {
            Self::Left => Some(0),
            Self::Right => Some(width - 1),
            Self::Index(index) if index < width => Some(index),
            Self::Index(_) => None,
        }
    }

    /// Index of the answer column when none is configured explicitly.
    ///
    /// Only meaningful for rows with at least two fields; returns `None`
    /// for narrower rows.
    pub const fn opposite_end(self, width: usize) -> Option<usize> {
        if width < 2 {
            return None;
        }
        match self {
            Self::Left => Some(width - 1),
            Self::Right => Some(0),
            Self::Index(0) => Some(width - 1),
            Self::Index(_) => Some(0),
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl FromStr for ColumnRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("left") {
            return Ok(Self::Left);
        }
        if value.eq_ignore_ascii_case("right") {
            return Ok(Self::Right);
        }
        value
            .parse::<usize>()
            .map(Self::Index)
            .map_err(|_| ModelError::InvalidColumnRole {
                value: s.to_string(),
            })
    }
}

impl From<usize> for ColumnRole {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}
