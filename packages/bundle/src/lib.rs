pub mod archive;
pub mod bundle;

pub use archive::{Archiver, DirectoryArchiver, ZipArchiver, ZIP_FILE_NAME};
pub use bundle::{BundleError, ExportBundle, INDEX_FILE, STYLE_FILE};
