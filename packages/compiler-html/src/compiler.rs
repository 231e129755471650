use crate::blocks::write_block;
use crate::escape::{open_tag, Html};
use crate::script::{EXPORT_SCRIPT, FONT_AWESOME_URL};
use chrono::Datelike;
use pagex_model::{Block, Page, PageSettings};

/// Inputs to rendering that are not part of the page itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Year shown in the footer copyright line
    pub year: i32,
}

impl RenderContext {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Context for "now", from the local clock
    pub fn current() -> Self {
        Self::new(chrono::Local::now().year())
    }
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

/// Line-oriented markup writer
pub(crate) struct Context<'a> {
    options: &'a CompileOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.options.indent);
            }
        }
        self.buffer.push_str(text);
        if self.options.pretty {
            self.buffer.push('\n');
        }
    }

    /// Opening tag on its own line; children are indented
    pub(crate) fn open(&mut self, name: &str, attributes: &[(&str, &str)]) {
        let tag = open_tag(name, attributes);
        self.add_line(&tag);
        self.depth += 1;
    }

    pub(crate) fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.add_line(&format!("</{}>", name));
    }

    /// Element with inline content on one line
    pub(crate) fn element(&mut self, name: &'static str, attributes: &[(&str, &str)], content: &Html) {
        let html = Html::tag(name, attributes, content);
        self.add_line(html.as_str());
    }

    /// Void element such as `<img>` or `<input>`
    pub(crate) fn void(&mut self, name: &str, attributes: &[(&str, &str)]) {
        let tag = open_tag(name, attributes);
        self.add_line(&tag);
    }

    /// Inline script, re-indented line by line when pretty printing
    fn script(&mut self, source: &str) {
        if !self.options.pretty {
            self.buffer.push_str(source);
            return;
        }
        for line in source.lines().filter(|l| !l.trim().is_empty()) {
            self.add_line(line);
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile the page to the standalone `index.html` document
pub fn compile_to_html(page: &Page, ctx: &RenderContext, options: &CompileOptions) -> String {
    let mut w = Context::new(options);

    w.add_line("<!DOCTYPE html>");
    w.open("html", &[("lang", "pt-BR")]);

    compile_head(&page.settings, &mut w);

    w.open("body", &[]);
    w.open("div", &[("class", "page-content")]);
    for block in &page.blocks {
        write_block(block.block_type, &page.settings, ctx, &mut w);
    }
    w.close("div");

    w.open("script", &[]);
    w.script(EXPORT_SCRIPT);
    w.close("script");

    w.close("body");
    w.close("html");

    tracing::debug!(blocks = page.blocks.len(), "compiled export document");
    w.get_output()
}

fn compile_head(settings: &PageSettings, w: &mut Context) {
    w.open("head", &[]);
    w.void("meta", &[("charset", "UTF-8")]);
    w.void(
        "meta",
        &[
            ("name", "viewport"),
            ("content", "width=device-width, initial-scale=1.0"),
        ],
    );
    w.element("title", &[], &Html::escape(&settings.title));
    w.void("link", &[("rel", "stylesheet"), ("href", FONT_AWESOME_URL)]);
    w.void("link", &[("rel", "stylesheet"), ("href", "style.css")]);
    w.close("head");
}

/// Compile the live-preview fragment
///
/// Each block is wrapped in a `block-container` carrying its id, followed
/// by move/remove action buttons for the editing surface to wire up.
pub fn compile_preview(page: &Page, ctx: &RenderContext, options: &CompileOptions) -> String {
    let mut w = Context::new(options);

    for block in &page.blocks {
        compile_preview_block(block, &page.settings, ctx, &mut w);
    }

    w.get_output()
}

fn compile_preview_block(block: &Block, settings: &PageSettings, ctx: &RenderContext, w: &mut Context) {
    let id = block.id.to_string();

    w.open(
        "div",
        &[
            ("class", "block-container"),
            ("data-block-id", id.as_str()),
            ("data-block-type", block.block_type.as_str()),
        ],
    );
    write_block(block.block_type, settings, ctx, w);

    w.open("div", &[("class", "block-actions")]);
    let actions = [
        ("move-up", "Mover para cima", "fas fa-arrow-up"),
        ("move-down", "Mover para baixo", "fas fa-arrow-down"),
        ("remove", "Remover bloco", "fas fa-trash"),
    ];
    for (action, title, icon) in actions {
        w.element(
            "button",
            &[
                ("type", "button"),
                ("data-action", action),
                ("data-block-id", id.as_str()),
                ("title", title),
            ],
            &Html::icon(icon),
        );
    }
    w.close("div");

    w.close("div");
}

/// Markup of a single block, without preview chrome
pub fn compile_block(block: &Block, settings: &PageSettings, ctx: &RenderContext, options: &CompileOptions) -> String {
    let mut w = Context::new(options);
    write_block(block.block_type, settings, ctx, &mut w);
    w.get_output()
}
