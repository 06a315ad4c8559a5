use std::path::PathBuf;

use crate::error::{IngestError, Result};

use super::CsvSource;

/// An explicit list of files, loaded regardless of extension.
#[derive(Debug, Clone, Default)]
pub struct PathListSource {
    paths: Vec<PathBuf>,
}

impl PathListSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl CsvSource for PathListSource {
    fn describe(&self) -> String {
        format!("{} listed file(s)", self.paths.len())
    }

    /// Names are the paths as given, in caller order.
    fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .paths
            .iter()
            .map(|path| path.display().to_string())
            .collect())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self
            .paths
            .iter()
            .find(|path| path.display().to_string() == name)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(name));
        std::fs::read(&path).map_err(|e| IngestError::from_file_io(path, e))
    }

    fn filters_extensions(&self) -> bool {
        false
    }
}
