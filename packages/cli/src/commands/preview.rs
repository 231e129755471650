use super::open_session;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagex_compiler_css::compile_to_css;
use pagex_compiler_html::RenderContext;
use pagex_editor::{Pipeline, Preview};
use pagex_model::PageSettings;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Write the snippet to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn preview(args: PreviewArgs, cwd: &str) -> Result<()> {
    let session = open_session(cwd)?;
    let mut pipeline = Pipeline::new(session, RenderContext::current());
    let preview = pipeline.full_evaluate();
    let snippet = preview_snippet(&preview, &pipeline.session().page().settings);

    match args.out {
        Some(path) => {
            let path = if path.is_absolute() {
                path
            } else {
                PathBuf::from(cwd).join(path)
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, snippet)?;
            println!("{} Preview written to {}", "✓".green(), path.display());
        }
        None => print!("{}", snippet),
    }

    Ok(())
}

/// Block stylesheet, theme overrides and the block fragment, ready to drop
/// into a host page
fn preview_snippet(preview: &Preview, settings: &PageSettings) -> String {
    let mut classes = vec!["preview-container"];
    if settings.dark_mode {
        classes.push("dark-mode");
    }
    if settings.animate_background {
        classes.push("animated-background");
    }

    format!(
        "<style>\n{}{}</style>\n<div class=\"{}\">\n{}</div>\n",
        compile_to_css(settings),
        preview.css,
        classes.join(" "),
        preview.html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_classes() {
        let preview = Preview {
            html: "<div class=\"block-container\"></div>\n".to_string(),
            css: ":root {}\n".to_string(),
        };
        let mut settings = PageSettings::default();

        let snippet = preview_snippet(&preview, &settings);
        assert!(snippet.starts_with("<style>\n"));
        assert!(snippet.contains(":root {}\n</style>"));
        assert!(snippet.contains("<div class=\"preview-container\">"));

        settings.dark_mode = true;
        settings.animate_background = true;
        let snippet = preview_snippet(&preview, &settings);
        assert!(snippet.contains("class=\"preview-container dark-mode animated-background\""));
    }

    #[test]
    fn test_preview_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        preview(PreviewArgs { out: Some(PathBuf::from("out/preview.html")) }, &cwd).unwrap();

        let written = fs::read_to_string(dir.path().join("out/preview.html")).unwrap();
        assert!(written.contains("data-block-type=\"hero\""));
        assert!(written.contains("--primary-color: #4f46e5;"));
        // Block rules come first, theme overrides after them
        let grid = written.find(".features-grid").unwrap();
        let theme = written.find(".save-btn").unwrap();
        assert!(grid < theme);
        assert!(written.find("</style>").unwrap() < written.find("data-block-type").unwrap());
    }
}
