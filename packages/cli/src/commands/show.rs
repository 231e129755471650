use super::open_session;
use anyhow::Result;
use colored::Colorize;

/// Print the block sequence and settings
pub fn show(cwd: &str) -> Result<()> {
    let session = open_session(cwd)?;
    let page = session.page();

    println!("{}", "📄 Blocks".bright_blue().bold());
    if page.blocks.is_empty() {
        println!("  {}", "(no blocks)".dimmed());
    }
    for (position, block) in page.blocks.iter().enumerate() {
        println!(
            "  {:>2}. {:<13} {}",
            position + 1,
            block.block_type.as_str().bright_white(),
            format!("id {}", block.id).dimmed()
        );
    }

    let settings = &page.settings;
    println!();
    println!("{}", "🎨 Settings".bright_blue().bold());
    println!("  title            {}", settings.title);
    println!("  headline         {}", settings.headline);
    println!("  ctaText          {}", settings.cta_text);
    println!("  primaryColor     {}", settings.primary_color);
    println!("  secondaryColor   {}", settings.secondary_color);
    println!("  bgGradient       {}", settings.bg_gradient);
    println!("  animateBackground {}", settings.animate_background);
    println!("  darkMode         {}", settings.dark_mode);

    Ok(())
}
