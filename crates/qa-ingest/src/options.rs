//! Loader configuration.

use std::path::Path;

use encoding_rs::Encoding;
use qa_model::ColumnRole;
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Options controlling how CSV files are split into Q/A pairs.
///
/// Deserializable from TOML:
///
/// ```toml
/// delimiter = ";"
/// question_column = "right"
/// has_header = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Field separator. Must be a single ASCII character.
    pub delimiter: String,

    /// Column holding the question.
    pub question_column: ColumnRole,

    /// Column holding the answer.
    /// `None` takes the answer from the opposite end of the row.
    pub answer_column: Option<ColumnRole>,

    /// Skip the first non-blank row of every file.
    pub has_header: bool,

    /// WHATWG encoding label used to decode file bytes.
    pub encoding: String,

    /// Trim surrounding whitespace from selected fields.
    pub trim: bool,

    /// File extensions treated as CSV (case-insensitive, no leading dot).
    pub extensions: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            question_column: ColumnRole::Left,
            answer_column: None,
            has_header: false,
            encoding: "utf-8".to_string(),
            trim: true,
            extensions: vec!["csv".to_string(), "tsv".to_string()],
        }
    }
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_question_column(mut self, role: ColumnRole) -> Self {
        self.question_column = role;
        self
    }

    pub fn with_answer_column(mut self, role: Option<ColumnRole>) -> Self {
        self.answer_column = role;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Parses options from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reads options from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IngestError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| IngestError::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Checks the delimiter and encoding label.
    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        self.resolve_encoding()?;
        Ok(())
    }

    /// Delimiter as the single byte the CSV reader expects.
    pub(crate) fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(IngestError::InvalidDelimiter {
                delimiter: self.delimiter.clone(),
            }),
        }
    }

    pub(crate) fn resolve_encoding(&self) -> Result<&'static Encoding> {
        Encoding::for_label(self.encoding.trim().as_bytes()).ok_or_else(|| {
            IngestError::UnsupportedEncoding {
                label: self.encoding.clone(),
            }
        })
    }
}
