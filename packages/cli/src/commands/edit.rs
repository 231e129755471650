//! Page-editing subcommands. Each one loads the session, applies a single
//! mutation (persisted immediately) and reports the outcome.

use super::open_session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagex_common::FileStorage;
use pagex_editor::{EditSession, Mutation, MutationEffect, MutationResult, SettingsPatch};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Block type (hero, features, testimonials, pricing, portfolio, contact, cta, footer)
    pub block_type: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Id of the block to remove
    pub id: String,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Id of the block to move
    pub id: String,

    /// up or down
    pub direction: String,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Template name (product, leads, portfolio)
    pub name: String,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub headline: Option<String>,

    /// Call-to-action button text
    #[arg(long)]
    pub cta_text: Option<String>,

    /// #RGB or #RRGGBB
    #[arg(long)]
    pub primary_color: Option<String>,

    /// #RGB or #RRGGBB
    #[arg(long)]
    pub secondary_color: Option<String>,

    /// Hero background, any CSS gradient
    #[arg(long)]
    pub gradient: Option<String>,

    #[arg(long)]
    pub animate_background: Option<bool>,

    #[arg(long)]
    pub dark_mode: Option<bool>,
}

impl From<SetArgs> for SettingsPatch {
    fn from(args: SetArgs) -> Self {
        SettingsPatch {
            title: args.title,
            headline: args.headline,
            cta_text: args.cta_text,
            primary_color: args.primary_color,
            secondary_color: args.secondary_color,
            bg_gradient: args.gradient,
            animate_background: args.animate_background,
            dark_mode: args.dark_mode,
        }
    }
}

pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let mutation = Mutation::add_block(&args.block_type)?;
    let mut session = open_session(cwd)?;
    let result = session.apply(mutation)?;

    if let MutationEffect::Added(id) = result.effect {
        println!(
            "{} Added {} block {}",
            "✓".green(),
            args.block_type.bright_white(),
            format!("(id {})", id).dimmed()
        );
    }
    report_persistence(&result);
    Ok(())
}

pub fn remove(args: RemoveArgs, cwd: &str) -> Result<()> {
    let mutation = Mutation::remove_block(&args.id)?;
    let mut session = open_session(cwd)?;
    let result = session.apply(mutation)?;

    match result.effect {
        MutationEffect::Unchanged => {
            println!("{} No block with id {}", "⚠️".yellow(), args.id)
        }
        _ => println!("{} Removed block {}", "✓".green(), args.id),
    }
    report_persistence(&result);
    Ok(())
}

pub fn move_block(args: MoveArgs, cwd: &str) -> Result<()> {
    let mutation = Mutation::move_block(&args.id, &args.direction)?;
    let mut session = open_session(cwd)?;
    let result = session.apply(mutation)?;

    match result.effect {
        MutationEffect::Unchanged => println!(
            "{} Block {} cannot move {}",
            "⚠️".yellow(),
            args.id,
            args.direction
        ),
        _ => println!(
            "{} Moved block {} {}",
            "✓".green(),
            args.id,
            args.direction
        ),
    }
    report_persistence(&result);
    print_order(&session);
    Ok(())
}

pub fn template(args: TemplateArgs, cwd: &str) -> Result<()> {
    let mutation = Mutation::load_template(&args.name)?;
    let mut session = open_session(cwd)?;
    let result = session.apply(mutation)?;

    println!(
        "{} Loaded {} template",
        "✓".green(),
        args.name.bright_white()
    );
    report_persistence(&result);
    print_order(&session);
    Ok(())
}

pub fn reset(cwd: &str) -> Result<()> {
    let mut session = open_session(cwd)?;
    let result = session.apply(Mutation::LoadDefaultBlocks)?;

    println!("{} Restored default blocks", "✓".green());
    report_persistence(&result);
    print_order(&session);
    Ok(())
}

pub fn set(args: SetArgs, cwd: &str) -> Result<()> {
    let patch = SettingsPatch::from(args);
    if patch.is_empty() {
        println!("{} Nothing to set", "⚠️".yellow());
        return Ok(());
    }

    let mut session = open_session(cwd)?;
    let result = session.apply(Mutation::UpdateSettings { patch })?;

    println!("{} Settings updated", "✓".green());
    report_persistence(&result);
    Ok(())
}

/// Write the current page again, surfacing any storage error
pub fn save(cwd: &str) -> Result<()> {
    let mut session = open_session(cwd)?;
    session.save()?;

    println!("{} Page saved", "✓".green());
    Ok(())
}

fn report_persistence(result: &MutationResult) {
    if !result.persisted {
        eprintln!(
            "{} Change applied but could not be saved; run `pagex save` to retry",
            "⚠️".yellow()
        );
    }
}

fn print_order(session: &EditSession<FileStorage>) {
    let order: Vec<String> = session
        .page()
        .blocks
        .iter()
        .map(|b| format!("{}#{}", b.block_type.as_str(), b.id))
        .collect();
    println!("  {}", order.join(" → ").dimmed());
}
