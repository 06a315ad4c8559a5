//! CSV files embedded into the binary with `include_dir!`.

use std::path::PathBuf;

use include_dir::Dir;

use crate::error::{IngestError, Result};

use super::CsvSource;

/// Conventional location of CSV resources inside a package.
pub const DEFAULT_RESOURCE_PATH: &str = "resources/csv";

/// A named bundle of files embedded at compile time.
///
/// ```rust,ignore
/// use include_dir::{Dir, include_dir};
/// use qa_ingest::ResourcePackage;
///
/// static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");
/// const FLASHCARDS: ResourcePackage<'static> = ResourcePackage::new("flashcards", &ASSETS);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResourcePackage<'a> {
    name: &'a str,
    root: &'a Dir<'a>,
}

impl<'a> ResourcePackage<'a> {
    pub const fn new(name: &'a str, root: &'a Dir<'a>) -> Self {
        Self { name, root }
    }

    pub const fn name(&self) -> &'a str {
        self.name
    }

    pub const fn root(&self) -> &'a Dir<'a> {
        self.root
    }
}

/// Files directly inside one directory of a [`ResourcePackage`].
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource<'a> {
    package: ResourcePackage<'a>,
    dir: &'a Dir<'a>,
}

impl<'a> EmbeddedSource<'a> {
    /// Opens `resource_path` (relative to the package root).
    ///
    /// An empty path or `/` selects the package root itself. The package
    /// root may itself be a subdirectory of an `include_dir!` tree.
    pub fn open(package: ResourcePackage<'a>, resource_path: &str) -> Result<Self> {
        let relative = resource_path.trim_matches('/');
        let dir = if relative.is_empty() {
            package.root
        } else {
            package
                .root
                .get_dir(package.root.path().join(relative))
                .ok_or_else(|| IngestError::ResourceNotFound {
                    package: package.name.to_string(),
                    path: resource_path.to_string(),
                })?
        };
        Ok(Self { package, dir })
    }

    pub const fn package(&self) -> ResourcePackage<'a> {
        self.package
    }
}

impl CsvSource for EmbeddedSource<'_> {
    fn locate(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn describe(&self) -> String {
        format!("{}:{}", self.package.name, self.dir.path().display())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .dir
            .files()
            .filter_map(|file| file.path().file_name()?.to_str().map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.dir
            .files()
            .find(|file| file.path().file_name().and_then(|n| n.to_str()) == Some(name))
            .map(|file| file.contents().to_vec())
            .ok_or_else(|| IngestError::FileNotFound {
                path: self.locate(name),
            })
    }
}
