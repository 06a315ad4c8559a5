//! CSV file discovery and category naming.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists files directly inside `dir`.
///
/// Returns files sorted by filename. Subdirectories are not descended into.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    read_dir_files(dir)
}

/// Non-directory entries of `dir`, sorted by filename.
///
/// Symlinks that do not resolve are kept so that reading them fails loudly.
/// The caller has already checked that `dir` is a directory.
pub(crate) fn read_dir_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_dir() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Lists CSV files in a directory, matching `extensions` case-insensitively.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = list_files(dir)?;
    files.retain(|path| has_csv_extension(path, extensions));
    Ok(files)
}

/// Returns true if `path` ends in one of `extensions` (case-insensitive).
pub fn has_csv_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Category name for a file: its base name without the extension.
pub fn category_for(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
