//! # Pagex CSS Compiler
//!
//! Stylesheets derived from [`PageSettings`](pagex_model::PageSettings):
//! the export `style.css` and the live preview theme. Output is built as an
//! ordered [`Stylesheet`] so the same settings always yield the same text.

mod color;
mod export;
mod preview;
pub mod stylesheet;

pub use color::adjust_color;
pub use export::compile_to_css;
pub use preview::compile_preview_css;
pub use stylesheet::{CssItem, CssRule, Stylesheet};

#[cfg(test)]
mod tests {
    use super::*;
    use pagex_model::PageSettings;

    #[test]
    fn test_compile_default_settings() {
        let css = compile_to_css(&PageSettings::default());

        println!("Generated CSS:\n{}", css);

        assert!(css.contains("--primary-color: #4f46e5;"));
        assert!(css.contains("--secondary-color: #10b981;"));
        assert!(css.contains(
            "background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);"
        ));
        assert!(css.contains("@media (max-width: 1200px)"));
        assert!(css.contains("@media (max-width: 768px)"));
    }

    #[test]
    fn test_hover_colors_are_darkened() {
        let settings = PageSettings {
            primary_color: "#808080".to_string(),
            ..Default::default()
        };
        let css = compile_to_css(&settings);

        assert!(css.contains(".cta-button:hover {\n    background: #6c6c6c;"));
        assert!(css.contains(".carousel-control:hover {\n    background: #6c6c6c;"));
    }

    #[test]
    fn test_short_color_is_bound_verbatim() {
        let settings = PageSettings {
            primary_color: "#F00".to_string(),
            ..Default::default()
        };
        let css = compile_to_css(&settings);

        assert!(css.contains("--primary-color: #F00;"));
        assert!(css.contains("background: #eb0000;"));
    }

    #[test]
    fn test_every_block_is_styled() {
        let css = compile_to_css(&PageSettings::default());

        for class in [
            ".hero-block {",
            ".features-block {",
            ".testimonials-block {",
            ".pricing-block {",
            ".portfolio-block {",
            ".contact-block {",
            ".cta-block {",
            ".footer-block {",
        ] {
            assert!(css.contains(class), "missing {}", class);
        }
    }

    #[test]
    fn test_stylesheet_is_deterministic() {
        let settings = PageSettings::default();
        assert_eq!(compile_to_css(&settings), compile_to_css(&settings));
        assert_eq!(
            compile_preview_css(&settings),
            compile_preview_css(&settings)
        );
    }

    #[test]
    fn test_gradient_cannot_break_out() {
        let settings = PageSettings {
            bg_gradient: "red} body{display:none".to_string(),
            ..Default::default()
        };
        let css = compile_to_css(&settings);

        assert!(css.contains("background: red body display:none;"));
        assert!(!css.contains("body{display:none"));
    }

    #[test]
    fn test_preview_theme() {
        let settings = PageSettings {
            primary_color: "#123456".to_string(),
            secondary_color: "#abcdef".to_string(),
            ..Default::default()
        };
        let css = compile_preview_css(&settings);

        println!("Generated CSS:\n{}", css);

        assert!(css.contains("--primary-color: #123456;"));
        assert!(css.contains(".cta-block {\n    background: #123456;"));
        assert!(css.contains(".pricing-plan.featured {\n    border-color: #123456;"));
        // adjust_color(#123456, -20) and adjust_color(#abcdef, -20)
        assert!(css.contains("background: #002042;"));
        assert!(css.contains(".save-btn {\n    background: #abcdef;"));
        assert!(css.contains(".save-btn:hover {\n    background: #97b9db;"));
    }
}
