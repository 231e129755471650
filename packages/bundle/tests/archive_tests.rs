use pagex_bundle::{
    Archiver, BundleError, DirectoryArchiver, ExportBundle, ZipArchiver, INDEX_FILE, STYLE_FILE,
    ZIP_FILE_NAME,
};
use pagex_compiler_html::RenderContext;
use pagex_model::Page;
use std::fs::{self, File};
use std::io::Read;
use tempfile::TempDir;

fn bundle() -> ExportBundle {
    ExportBundle::build(&Page::default(), &RenderContext::new(2024))
}

#[test]
fn test_zip_contains_exactly_two_files() {
    let dir = TempDir::new().unwrap();
    let bundle = bundle();

    let path = ZipArchiver::new().package(&bundle, dir.path()).unwrap();
    assert_eq!(path, dir.path().join(ZIP_FILE_NAME));

    let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
    assert_eq!(archive.len(), 2);

    let mut index = String::new();
    archive
        .by_name(INDEX_FILE)
        .unwrap()
        .read_to_string(&mut index)
        .unwrap();
    assert_eq!(index, bundle.index_html);

    let mut style = String::new();
    archive
        .by_name(STYLE_FILE)
        .unwrap()
        .read_to_string(&mut style)
        .unwrap();
    assert_eq!(style, bundle.style_css);
}

#[test]
fn test_zip_leaves_no_staging_file() {
    let dir = TempDir::new().unwrap();

    ZipArchiver::new().package(&bundle(), dir.path()).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec![ZIP_FILE_NAME.to_string()]);
}

#[test]
fn test_zip_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("dist").join("nested");

    let path = ZipArchiver::new().package(&bundle(), &dest).unwrap();

    assert!(path.exists());
}

#[test]
fn test_zip_failure_leaves_nothing() {
    let dir = TempDir::new().unwrap();
    // A directory where the archive should go makes the final rename fail
    fs::create_dir(dir.path().join(ZIP_FILE_NAME)).unwrap();
    fs::write(dir.path().join(ZIP_FILE_NAME).join("keep"), "x").unwrap();

    let result = ZipArchiver::new().package(&bundle(), dir.path());

    assert!(matches!(result, Err(BundleError::Io(_))));
    assert!(!dir.path().join(format!("{}.tmp", ZIP_FILE_NAME)).exists());
}

#[test]
fn test_directory_archiver() {
    let dir = TempDir::new().unwrap();
    let bundle = bundle();

    let path = DirectoryArchiver::new().package(&bundle, dir.path()).unwrap();

    assert_eq!(path, dir.path());
    assert_eq!(
        fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap(),
        bundle.index_html
    );
    assert_eq!(
        fs::read_to_string(dir.path().join(STYLE_FILE)).unwrap(),
        bundle.style_css
    );
    assert!(!dir.path().join(".landing-page.tmp").exists());
}

#[test]
fn test_directory_archiver_overwrites_previous_export() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(STYLE_FILE), "old").unwrap();

    DirectoryArchiver::new().package(&bundle(), dir.path()).unwrap();

    let style = fs::read_to_string(dir.path().join(STYLE_FILE)).unwrap();
    assert!(style.contains("--primary-color"));
}

#[test]
fn test_directory_archiver_ignores_stale_staging_files() {
    let dir = TempDir::new().unwrap();
    let staging = dir.path().join(".landing-page.tmp");
    fs::create_dir(&staging).unwrap();
    fs::write(staging.join("leftover.js"), "alert(1)").unwrap();

    DirectoryArchiver::new().package(&bundle(), dir.path()).unwrap();

    assert!(!dir.path().join("leftover.js").exists());
    assert!(dir.path().join(INDEX_FILE).exists());
    assert!(!staging.exists());
}

#[test]
fn test_directory_archiver_refuses_directory_target() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(INDEX_FILE), "old index").unwrap();
    fs::create_dir(dir.path().join(STYLE_FILE)).unwrap();
    fs::write(dir.path().join(STYLE_FILE).join("keep"), "x").unwrap();

    let result = DirectoryArchiver::new().package(&bundle(), dir.path());

    assert!(matches!(result, Err(BundleError::TargetIsDirectory(_))));
    // Nothing was published, the previous index is untouched
    assert_eq!(
        fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap(),
        "old index"
    );
    assert!(dir.path().join(STYLE_FILE).join("keep").exists());
    assert!(!dir.path().join(".landing-page.tmp").exists());
}
