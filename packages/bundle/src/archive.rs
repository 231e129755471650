use crate::bundle::{BundleError, ExportBundle};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const ZIP_FILE_NAME: &str = "landing-page.zip";

/// Writes an [`ExportBundle`] somewhere durable
pub trait Archiver {
    /// Package the bundle under `dest_dir`, returning the path written
    fn package(&self, bundle: &ExportBundle, dest_dir: &Path) -> Result<PathBuf, BundleError>;
}

/// `landing-page.zip` with both files, deflate-compressed
#[derive(Debug, Clone, Default)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }

    fn write_zip(bundle: &ExportBundle, path: &Path) -> Result<(), BundleError> {
        let file = File::create(path)?;
        let mut zip = ZipWriter::new(file);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, contents) in bundle.files() {
            zip.start_file(name, options)?;
            zip.write_all(contents.as_bytes())?;
        }

        let file = zip.finish()?;
        file.sync_all()?;
        Ok(())
    }
}

impl Archiver for ZipArchiver {
    fn package(&self, bundle: &ExportBundle, dest_dir: &Path) -> Result<PathBuf, BundleError> {
        fs::create_dir_all(dest_dir)?;

        let target = dest_dir.join(ZIP_FILE_NAME);
        let staging = dest_dir.join(format!("{}.tmp", ZIP_FILE_NAME));

        let result = Self::write_zip(bundle, &staging)
            .and_then(|()| fs::rename(&staging, &target).map_err(BundleError::from));
        if let Err(e) = result {
            // No partial archive is left behind
            let _ = fs::remove_file(&staging);
            return Err(e);
        }

        tracing::info!(path = %target.display(), "wrote zip archive");
        Ok(target)
    }
}

/// Plain `index.html` + `style.css` in the destination directory
///
/// Both files are written to a staging directory first, then moved into
/// place. Previous exports are kept aside until both moves succeed, so a
/// failure part-way restores them instead of leaving a mixed bundle.
#[derive(Debug, Clone, Default)]
pub struct DirectoryArchiver;

const STAGING_DIR: &str = ".landing-page.tmp";
const BACKUP_SUFFIX: &str = ".previous";

impl DirectoryArchiver {
    pub fn new() -> Self {
        Self
    }

    fn stage(bundle: &ExportBundle, staging: &Path) -> Result<(), BundleError> {
        // Leftovers from an interrupted export are never published
        match fs::remove_dir_all(staging) {
            Err(e) if e.kind() != ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }
        fs::create_dir_all(staging)?;
        for (name, contents) in bundle.files() {
            fs::write(staging.join(name), contents)?;
        }
        Ok(())
    }

    fn check_targets(names: &[&str], dest_dir: &Path) -> Result<(), BundleError> {
        for name in names {
            let target = dest_dir.join(name);
            match fs::symlink_metadata(&target) {
                Ok(meta) if meta.is_dir() => return Err(BundleError::TargetIsDirectory(target)),
                Err(e) if e.kind() != ErrorKind::NotFound => return Err(e.into()),
                _ => {}
            }
        }
        Ok(())
    }

    fn publish(names: &[&str], staging: &Path, dest_dir: &Path) -> Result<(), BundleError> {
        Self::check_targets(names, dest_dir)?;

        let mut moved = Vec::new();
        for name in names {
            if let Err(e) = Self::publish_file(name, staging, dest_dir) {
                Self::roll_back(&moved, staging, dest_dir);
                return Err(e);
            }
            moved.push(*name);
        }
        Ok(())
    }

    fn publish_file(name: &str, staging: &Path, dest_dir: &Path) -> Result<(), BundleError> {
        let target = dest_dir.join(name);
        let backup = staging.join(format!("{}{}", name, BACKUP_SUFFIX));

        if target.exists() {
            fs::rename(&target, &backup)?;
        }
        if let Err(e) = fs::rename(staging.join(name), &target) {
            if backup.exists() {
                let _ = fs::rename(&backup, &target);
            }
            return Err(e.into());
        }
        Ok(())
    }

    fn roll_back(moved: &[&str], staging: &Path, dest_dir: &Path) {
        for name in moved {
            let target = dest_dir.join(name);
            let backup = staging.join(format!("{}{}", name, BACKUP_SUFFIX));

            let restored = if backup.exists() {
                fs::rename(&backup, &target)
            } else {
                fs::remove_file(&target)
            };
            if let Err(e) = restored {
                tracing::error!(path = %target.display(), error = %e, "failed to restore previous export");
            }
        }
    }
}

impl Archiver for DirectoryArchiver {
    fn package(&self, bundle: &ExportBundle, dest_dir: &Path) -> Result<PathBuf, BundleError> {
        fs::create_dir_all(dest_dir)?;

        let names: Vec<&str> = bundle.files().map(|(name, _)| name).collect();
        let staging = dest_dir.join(STAGING_DIR);
        let result = Self::stage(bundle, &staging)
            .and_then(|()| Self::publish(&names, &staging, dest_dir));
        let _ = fs::remove_dir_all(&staging);
        result?;

        tracing::info!(path = %dest_dir.display(), "wrote export directory");
        Ok(dest_dir.to_path_buf())
    }
}
