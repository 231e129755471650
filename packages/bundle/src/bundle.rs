//! # Export Bundle
//!
//! The two artifacts of an export, rendered from one page snapshot:
//!
//! - `index.html`: standalone document referencing `style.css`
//! - `style.css`: stylesheet with the current colors baked in
//!
//! Packaging them (zip, plain directory) is the job of an
//! [`Archiver`](crate::Archiver).

use pagex_compiler_css::compile_to_css;
use pagex_compiler_html::{compile_to_html, CompileOptions, RenderContext};
use pagex_model::Page;
use std::path::PathBuf;
use thiserror::Error;

pub const INDEX_FILE: &str = "index.html";
pub const STYLE_FILE: &str = "style.css";

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{0} is a directory")]
    TargetIsDirectory(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub index_html: String,
    pub style_css: String,
}

impl ExportBundle {
    /// Render both artifacts. Rendering is total, so this cannot fail.
    pub fn build(page: &Page, ctx: &RenderContext) -> Self {
        Self::build_with_options(page, ctx, &CompileOptions::default())
    }

    pub fn build_with_options(page: &Page, ctx: &RenderContext, options: &CompileOptions) -> Self {
        let bundle = Self {
            index_html: compile_to_html(page, ctx, options),
            style_css: compile_to_css(&page.settings),
        };
        tracing::debug!(
            html_bytes = bundle.index_html.len(),
            css_bytes = bundle.style_css.len(),
            "export bundle built"
        );
        bundle
    }

    /// `(file name, contents)` pairs in archive order
    pub fn files(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (INDEX_FILE, self.index_html.as_str()),
            (STYLE_FILE, self.style_css.as_str()),
        ]
        .into_iter()
    }
}
