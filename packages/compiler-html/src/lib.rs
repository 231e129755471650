//! # Pagex HTML Compiler
//!
//! Pure markup generation for a [`Page`](pagex_model::Page):
//!
//! - [`compile_to_html`]: the standalone `index.html` of the export bundle
//! - [`compile_preview`]: the same block markup wrapped for the live editor
//!
//! Both share one set of block templates, so preview and export cannot
//! drift apart. User text only reaches the output through [`Html`], whose
//! constructors escape it.

mod blocks;
mod compiler;
mod escape;
mod script;

#[cfg(test)]
mod tests;

pub use compiler::{compile_block, compile_preview, compile_to_html, CompileOptions, RenderContext};
pub use escape::{escape_html, Html};
pub use script::{EXPORT_SCRIPT, FONT_AWESOME_URL};
