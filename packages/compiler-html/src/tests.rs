use super::*;
use pagex_model::{Block, BlockId, BlockType, Page, PageSettings};

fn ctx() -> RenderContext {
    RenderContext::new(2024)
}

fn page_of(types: &[BlockType]) -> Page {
    let blocks = types
        .iter()
        .enumerate()
        .map(|(i, t)| Block::new(BlockId(i as u64 + 1), *t))
        .collect();
    Page::new(blocks, PageSettings::default())
}

#[test]
fn test_simple_document() {
    let page = Page::default();
    let html = compile_to_html(&page, &ctx(), &CompileOptions::default());

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"pt-BR\">"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("<title>Minha Landing Page</title>"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
    assert!(html.contains(FONT_AWESOME_URL));
    assert!(html.contains("<div class=\"page-content\">"));
    assert!(html.contains("DOMContentLoaded"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_hero_text_is_escaped() {
    let mut page = page_of(&[BlockType::Hero, BlockType::Footer]);
    page.settings.title = "<script>alert(1)</script>".to_string();
    page.settings.headline = "Tom & \"Jerry\"".to_string();

    let html = compile_to_html(&page, &ctx(), &CompileOptions::default());

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains(
        "<h1 class=\"hero-title\">&lt;script&gt;alert(1)&lt;/script&gt;</h1>"
    ));
    assert!(html.contains("<title>&lt;script&gt;alert(1)&lt;/script&gt;</title>"));
    assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
    // Footer logo and copyright line repeat the title, escaped as well
    assert!(html.contains(
        "<div class=\"footer-logo\">&lt;script&gt;alert(1)&lt;/script&gt;</div>"
    ));
}

#[test]
fn test_blocks_render_in_page_order() {
    let page = page_of(&[BlockType::Footer, BlockType::Pricing, BlockType::Hero]);
    let html = compile_to_html(&page, &ctx(), &CompileOptions::default());

    let footer = html.find("class=\"footer-block\"").unwrap();
    let pricing = html.find("class=\"pricing-block\"").unwrap();
    let hero = html.find("class=\"hero-block\"").unwrap();

    assert!(footer < pricing);
    assert!(pricing < hero);
}

#[test]
fn test_rendering_is_deterministic() {
    let page = Page::default();
    let first = compile_to_html(&page, &ctx(), &CompileOptions::default());
    let second = compile_to_html(&page, &ctx(), &CompileOptions::default());
    assert_eq!(first, second);
}

#[test]
fn test_footer_uses_context_year() {
    let page = page_of(&[BlockType::Footer]);

    let html = compile_to_html(&page, &RenderContext::new(1999), &CompileOptions::default());

    assert!(html.contains("&copy; 1999 Minha Landing Page. Todos os direitos reservados."));
    assert!(!html.contains("2024"));
}

#[test]
fn test_every_block_type_renders() {
    let expected = [
        (BlockType::Hero, "hero-block"),
        (BlockType::Features, "features-block"),
        (BlockType::Testimonials, "testimonials-block"),
        (BlockType::Pricing, "pricing-block"),
        (BlockType::Portfolio, "portfolio-block"),
        (BlockType::Contact, "contact-block"),
        (BlockType::Cta, "cta-block"),
        (BlockType::Footer, "footer-block"),
    ];

    for (block_type, class) in expected {
        let block = Block::new(BlockId(1), block_type);
        let html = compile_block(&block, &PageSettings::default(), &ctx(), &CompileOptions::default());
        assert!(
            html.contains(&format!("class=\"{}\"", class)),
            "{} should render a .{}",
            block_type.as_str(),
            class
        );
    }
}

#[test]
fn test_fixed_block_content() {
    let page = page_of(&[
        BlockType::Features,
        BlockType::Testimonials,
        BlockType::Pricing,
        BlockType::Contact,
    ]);
    let html = compile_to_html(&page, &ctx(), &CompileOptions::default());

    assert_eq!(html.matches("class=\"feature-item\"").count(), 3);
    assert_eq!(html.matches("class=\"testimonial-item\"").count(), 3);
    assert!(html.contains("carousel-prev"));
    assert!(html.contains("carousel-next"));
    assert_eq!(html.matches("class=\"pricing-plan").count(), 3);
    assert_eq!(html.matches("class=\"pricing-plan featured\"").count(), 1);
    assert!(html.contains("R$ 99<span>/mês</span>"));
    assert!(html.contains("<input type=\"email\" id=\"contact-email\" required>"));
    assert!(html.contains("<textarea id=\"contact-message\" required></textarea>"));
    assert!(html.contains("id=\"error-contact-name\""));
    assert!(html.contains("class=\"form-success\""));
}

#[test]
fn test_hero_cta_uses_settings() {
    let mut page = page_of(&[BlockType::Hero]);
    page.settings.cta_text = "Compre Já".to_string();

    let html = compile_to_html(&page, &ctx(), &CompileOptions::default());

    assert!(html.contains("<a href=\"#\" class=\"cta-button\">Compre Já</a>"));
}

#[test]
fn test_preview_wraps_blocks() {
    let page = page_of(&[BlockType::Hero, BlockType::Cta]);
    let html = compile_preview(&page, &ctx(), &CompileOptions::default());

    println!("Generated preview:\n{}", html);

    assert!(html.contains(
        "<div class=\"block-container\" data-block-id=\"1\" data-block-type=\"hero\">"
    ));
    assert!(html.contains(
        "<div class=\"block-container\" data-block-id=\"2\" data-block-type=\"cta\">"
    ));
    assert!(html.contains("data-action=\"move-up\" data-block-id=\"2\""));
    assert!(html.contains("data-action=\"move-down\" data-block-id=\"1\""));
    assert_eq!(html.matches("data-action=\"remove\"").count(), 2);
    // Fragment only, no document shell
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_empty_page() {
    let page = page_of(&[]);

    let html = compile_to_html(&page, &ctx(), &CompileOptions::default());
    assert!(html.contains("<div class=\"page-content\">"));
    assert!(!html.contains("-block"));

    let preview = compile_preview(&page, &ctx(), &CompileOptions::default());
    assert!(preview.is_empty());
}

#[test]
fn test_compact_output() {
    let page = page_of(&[BlockType::Hero, BlockType::Testimonials]);
    let options = CompileOptions {
        pretty: false,
        indent: String::new(),
    };

    let html = compile_to_html(&page, &ctx(), &options);

    assert!(html.starts_with("<!DOCTYPE html><html lang=\"pt-BR\"><head>"));
    assert!(html.contains("<section class=\"hero-block\"><h1 class=\"hero-title\">"));
    // The script keeps its own line breaks
    assert!(html.contains(EXPORT_SCRIPT));
    assert!(html.ends_with("</script></body></html>"));
}
