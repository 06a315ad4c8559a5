//! Tests for loading CSV files embedded with `include_dir!`.

mod common;

use common::init_tracing;
use include_dir::{Dir, include_dir};
use qa_ingest::{ColumnRole, DEFAULT_RESOURCE_PATH, IngestError, Loader, QaPair, ResourcePackage};

static FIXTURES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures");

fn package() -> ResourcePackage<'static> {
    ResourcePackage::new("fixtures", &FIXTURES)
}

fn loader() -> Loader {
    Loader::new(",", ColumnRole::Left, false).expect("valid loader")
}

#[test]
fn default_resource_path_loads_csv_files() {
    init_tracing();
    assert_eq!(DEFAULT_RESOURCE_PATH, "resources/csv");

    let result = loader().load_from_package_default(package()).unwrap();

    // readme.txt is not CSV; archive/ is nested
    assert_eq!(result.categories().collect::<Vec<_>>(), vec!["animals", "colors"]);
    assert_eq!(
        result.get("colors").unwrap(),
        &[QaPair::new("red", "rouge"), QaPair::new("blue", "bleu")]
    );
    // "bird" has a single field
    assert_eq!(result.get("animals").unwrap().len(), 2);
}

#[test]
fn explicit_resource_path() {
    let result = loader().load_from_package(package(), "resources/other").unwrap();
    assert_eq!(result.get("numbers").unwrap()[1], ("two", "deux"));
}

#[test]
fn nested_resource_path() {
    let result = loader()
        .load_from_package(package(), "/resources/csv/archive/")
        .unwrap();
    assert_eq!(result.get("old").unwrap()[0], ("old", "vieux"));
}

#[test]
fn package_and_directory_agree() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/resources/csv");
    let loader = Loader::new(",", ColumnRole::Right, false).unwrap();

    let from_disk = loader.load_from_directory(&dir).unwrap();
    let from_package = loader.load_from_package_default(package()).unwrap();

    assert_eq!(from_disk, from_package);
}

#[test]
fn missing_resource_path_is_not_found() {
    let err = loader()
        .load_from_package(package(), "resources/json")
        .unwrap_err();
    assert!(matches!(err, IngestError::ResourceNotFound { .. }));
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "resource path 'resources/json' not found in package 'fixtures'"
    );
}

#[test]
fn file_resource_path_is_not_found() {
    let result = loader().load_from_package(package(), "resources/csv/colors.csv");
    assert!(matches!(result, Err(IngestError::ResourceNotFound { .. })));
}

#[test]
fn package_rooted_at_subdirectory() {
    let resources = FIXTURES.get_dir("resources").expect("fixture directory");
    let package = ResourcePackage::new("resources", resources);

    let result = loader().load_from_package(package, "csv").unwrap();
    assert_eq!(result.categories().collect::<Vec<_>>(), vec!["animals", "colors"]);

    let nested = loader().load_from_package(package, "csv/archive").unwrap();
    assert_eq!(nested.get("old").unwrap()[0], ("old", "vieux"));
}
