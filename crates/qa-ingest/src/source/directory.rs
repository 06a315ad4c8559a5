use std::path::{Path, PathBuf};

use crate::discovery::read_dir_files;
use crate::error::{IngestError, Result};

use super::CsvSource;

/// Files directly inside a filesystem directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Opens `root`, failing with `DirectoryNotFound` if it is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(IngestError::DirectoryNotFound { path: root });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CsvSource for DirectorySource {
    fn locate(&self, name: &str) -> PathBuf {
        let direct = self.root.join(name);
        if direct.symlink_metadata().is_ok() {
            return direct;
        }
        // Names that are not valid UTF-8 were listed lossily.
        read_dir_files(&self.root)
            .ok()
            .and_then(|files| {
                files.into_iter().find(|path| {
                    path.file_name()
                        .is_some_and(|file_name| file_name.to_string_lossy() == name)
                })
            })
            .unwrap_or(direct)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(read_dir_files(&self.root)?
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.locate(name);
        std::fs::read(&path).map_err(|e| IngestError::from_file_io(path, e))
    }
}
