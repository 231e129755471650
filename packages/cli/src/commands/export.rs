use crate::config::{ArchiveFormat, Config};
use super::open_session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagex_bundle::{Archiver, DirectoryArchiver, ExportBundle, ZipArchiver};
use pagex_compiler_html::RenderContext;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Packaging format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<ArchiveFormat>,

    /// Print index.html and style.css instead of writing files
    #[arg(long)]
    pub stdout: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let session = open_session(cwd)?;
    let bundle = ExportBundle::build(session.page(), &RenderContext::current());

    if args.stdout {
        for (name, contents) in bundle.files() {
            println!("/* {} */", name);
            println!("{}", contents);
        }
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };
    let format = args.format.unwrap_or(config.archive);

    println!("{}", "📦 Exporting landing page...".bright_blue().bold());

    let path = archiver(format).package(&bundle, &out_dir)?;

    println!("  {} {}", "✓".green(), path.display());
    println!();
    println!("{}", "✅ Export complete!".green().bold());
    Ok(())
}

fn archiver(format: ArchiveFormat) -> Box<dyn Archiver> {
    match format {
        ArchiveFormat::Zip => Box::new(ZipArchiver::new()),
        ArchiveFormat::Dir => Box::new(DirectoryArchiver::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagex_bundle::{INDEX_FILE, STYLE_FILE, ZIP_FILE_NAME};

    #[test]
    fn test_export_zip_to_default_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        export(ExportArgs { out_dir: None, format: None, stdout: false }, &cwd).unwrap();

        assert!(dir.path().join("dist").join(ZIP_FILE_NAME).exists());
    }

    #[test]
    fn test_export_directory_with_override() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        export(
            ExportArgs {
                out_dir: Some("site".to_string()),
                format: Some(ArchiveFormat::Dir),
                stdout: false,
            },
            &cwd,
        )
        .unwrap();

        let site = dir.path().join("site");
        assert!(site.join(INDEX_FILE).exists());
        assert!(site.join(STYLE_FILE).exists());
        assert!(!site.join(ZIP_FILE_NAME).exists());
    }
}
