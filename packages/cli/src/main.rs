mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, export, init, move_block, preview, remove, reset, save, set, show, template, AddArgs,
    ExportArgs, InitArgs, MoveArgs, PreviewArgs, RemoveArgs, SetArgs, TemplateArgs,
};
use tracing_subscriber::EnvFilter;

/// Pagex CLI - Landing pages from predefined blocks
#[derive(Parser, Debug)]
#[command(name = "pagex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new landing page in the current directory
    Init(InitArgs),

    /// List blocks and settings
    Show,

    /// Append a block
    Add(AddArgs),

    /// Remove a block by id
    Remove(RemoveArgs),

    /// Move a block up or down by one position
    Move(MoveArgs),

    /// Replace blocks and settings with a template
    Template(TemplateArgs),

    /// Restore the default blocks
    Reset,

    /// Update global settings
    Set(SetArgs),

    /// Render the live preview snippet
    Preview(PreviewArgs),

    /// Export index.html and style.css
    Export(ExportArgs),

    /// Persist the current page
    Save,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();
    tracing::debug!(%cwd, ?command, "running command");

    match command {
        Command::Init(args) => init(args, &cwd),
        Command::Show => show(&cwd),
        Command::Add(args) => add(args, &cwd),
        Command::Remove(args) => remove(args, &cwd),
        Command::Move(args) => move_block(args, &cwd),
        Command::Template(args) => template(args, &cwd),
        Command::Reset => reset(&cwd),
        Command::Set(args) => set(args, &cwd),
        Command::Preview(args) => preview(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Save => save(&cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli.command) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
