use crate::config::{ArchiveFormat, Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagex_common::FileStorage;
use pagex_editor::save_page;
use pagex_model::Page;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Export format (zip, dir)
    #[arg(short, long, value_enum, default_value_t = ArchiveFormat::Zip)]
    pub archive: ArchiveFormat,

    /// Force overwrite existing config and page
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing landing page...".bright_blue().bold());

    let config = Config {
        archive: args.archive,
        ..Config::default()
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    // Initial page with the default blocks
    let mut storage = FileStorage::new(config.get_storage_dir(cwd));
    save_page(&mut storage, &Page::default())?;
    println!("  {} Created {}/", "✓".green(), config.storage_dir);

    println!();
    println!("{}", "✅ Landing page initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagex template product");
    println!("  2. Run: pagex set --title \"My Product\"");
    println!("  3. Run: pagex export");

    Ok(())
}
