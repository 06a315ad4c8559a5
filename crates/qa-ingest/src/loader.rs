//! Category loading from CSV sources.

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use qa_model::{CategoryMap, ColumnRole, QaPair};

use crate::csv::{RowParser, decode_text};
use crate::discovery::{category_for, has_csv_extension};
use crate::error::Result;
use crate::options::LoaderOptions;
use crate::source::{
    CsvSource, DEFAULT_RESOURCE_PATH, DirectorySource, EmbeddedSource, PathListSource,
    ResourcePackage,
};

/// Loads Q/A pairs from CSV files, grouped by category.
///
/// Configuration is fixed at construction; every load returns an
/// independent [`CategoryMap`].
#[derive(Debug, Clone)]
pub struct Loader {
    options: LoaderOptions,
    parser: RowParser,
    encoding: &'static Encoding,
}

impl Loader {
    /// Creates a loader with default options for everything except the
    /// delimiter, question column, and header flag.
    pub fn new(delimiter: &str, question_column: ColumnRole, has_header: bool) -> Result<Self> {
        Self::with_options(
            LoaderOptions::default()
                .with_delimiter(delimiter)
                .with_question_column(question_column)
                .with_header(has_header),
        )
    }

    /// Creates a loader from a full option set, validating it first.
    pub fn with_options(options: LoaderOptions) -> Result<Self> {
        let parser = RowParser::from_options(&options)?;
        let encoding = options.resolve_encoding()?;
        Ok(Self {
            options,
            parser,
            encoding,
        })
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Loads every CSV file directly inside `path`.
    pub fn load_from_directory(&self, path: impl AsRef<Path>) -> Result<CategoryMap> {
        let source = DirectorySource::open(path.as_ref())?;
        self.load_from_source(&source)
    }

    /// Loads every CSV file in `resource_path` of an embedded package.
    pub fn load_from_package(
        &self,
        package: ResourcePackage<'_>,
        resource_path: &str,
    ) -> Result<CategoryMap> {
        let source = EmbeddedSource::open(package, resource_path)?;
        self.load_from_source(&source)
    }

    /// Loads from the package's [`DEFAULT_RESOURCE_PATH`].
    pub fn load_from_package_default(&self, package: ResourcePackage<'_>) -> Result<CategoryMap> {
        self.load_from_package(package, DEFAULT_RESOURCE_PATH)
    }

    /// Loads an explicit list of files. Extensions are not checked.
    pub fn load_from_files<I, P>(&self, paths: I) -> Result<CategoryMap>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.load_from_source(&PathListSource::new(paths))
    }

    /// Loads every qualifying entry of `source`.
    ///
    /// Files sharing a category are concatenated in the order the source
    /// lists them. A category whose rows were all skipped is kept with an
    /// empty list. Any read, decode, or parse failure aborts the whole load.
    pub fn load_from_source(&self, source: &dyn CsvSource) -> Result<CategoryMap> {
        let location = source.describe();
        let mut categories = CategoryMap::new();
        let mut files = 0usize;
        let mut skipped_rows = 0usize;

        for name in source.list()? {
            let entry = Path::new(&name);
            if source.filters_extensions() && !has_csv_extension(entry, &self.options.extensions) {
                continue;
            }
            let Some(category) = category_for(entry) else {
                tracing::warn!(source = %location, entry = %name, "Skipping entry without a usable name");
                continue;
            };

            let origin = source.locate(&name);
            let bytes = source.read(&name)?;
            let text = decode_text(&bytes, self.encoding, &origin)?;
            let parsed = self.parser.parse(&text, &origin)?;

            tracing::debug!(
                path = %origin.display(),
                category = %category,
                pairs = parsed.pairs.len(),
                skipped = parsed.skipped,
                "Loaded CSV file"
            );

            files += 1;
            skipped_rows += parsed.skipped;
            categories.extend_category(&category, parsed.pairs);
        }

        tracing::info!(
            source = %location,
            files,
            categories = categories.len(),
            pairs = categories.total_pairs(),
            skipped_rows,
            "Loaded Q/A categories"
        );

        Ok(categories)
    }

    /// Splits in-memory CSV text into pairs using this loader's options.
    pub fn parse_str(&self, text: &str) -> Result<Vec<QaPair>> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let parsed = self.parser.parse(text, Path::new("<memory>"))?;
        Ok(parsed.pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_loader_is_send_sync() {
        assert_send_sync::<Loader>();
    }

    #[test]
    fn test_new_rejects_bad_delimiter() {
        let result = Loader::new("", ColumnRole::Left, false);
        assert!(matches!(result, Err(IngestError::InvalidDelimiter { .. })));
    }

    #[test]
    fn test_with_options_rejects_bad_encoding() {
        let options = LoaderOptions::new().with_encoding("nope");
        assert!(matches!(
            Loader::with_options(options),
            Err(IngestError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn test_parse_str() {
        let loader = Loader::new("|", ColumnRole::Index(1), true).unwrap();
        let pairs = loader.parse_str("\u{feff}q|a|b\nx|y|z\n").unwrap();
        assert_eq!(pairs, vec![QaPair::new("y", "x")]);
    }
}
