use crate::color::adjust_color;
use crate::stylesheet::{rule, Stylesheet};
use pagex_model::PageSettings;

const TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";
const CARD_SHADOW: &str = "0 5px 15px rgba(0, 0, 0, 0.05)";

/// Compile the export stylesheet (`style.css`) for the given settings.
///
/// Colors and the hero gradient are baked in as literal values; the rest
/// of the sheet is fixed.
pub fn compile_to_css(settings: &PageSettings) -> String {
    let mut sheet = Stylesheet::new();

    base_rules(&mut sheet, settings);
    hero_rules(&mut sheet, settings);
    feature_rules(&mut sheet);
    testimonial_rules(&mut sheet, settings);
    pricing_rules(&mut sheet);
    portfolio_rules(&mut sheet);
    contact_rules(&mut sheet);
    cta_rules(&mut sheet);
    footer_rules(&mut sheet);
    responsive_rules(&mut sheet);

    tracing::debug!(items = sheet.items.len(), "compiled export stylesheet");
    sheet.to_css()
}

fn section_title(sheet: &mut Stylesheet, selector: &str) {
    sheet.rule(
        &[selector],
        &[
            ("text-align", "center"),
            ("font-size", "2.8rem"),
            ("margin-bottom", "60px"),
            ("color", "var(--primary-color)"),
            ("font-weight", "700"),
        ],
    );
}

fn three_column_grid(sheet: &mut Stylesheet, selector: &str) {
    sheet.rule(
        &[selector],
        &[
            ("display", "grid"),
            ("grid-template-columns", "repeat(3, 1fr)"),
            ("gap", "30px"),
        ],
    );
}

fn base_rules(sheet: &mut Stylesheet, settings: &PageSettings) {
    sheet.comment("Base");
    sheet.rule(
        &["*"],
        &[
            ("margin", "0"),
            ("padding", "0"),
            ("box-sizing", "border-box"),
            ("font-family", "'Poppins', sans-serif"),
        ],
    );
    sheet.rule(
        &[":root"],
        &[
            ("--primary-color", settings.primary_color.as_str()),
            ("--secondary-color", settings.secondary_color.as_str()),
            ("--text-color", "#2d3748"),
            ("--text-light", "#718096"),
            ("--bg-color", "#f9fafb"),
            ("--radius", "16px"),
            ("--radius-sm", "10px"),
        ],
    );
    sheet.rule(
        &["body"],
        &[
            ("background-color", "var(--bg-color)"),
            ("color", "var(--text-color)"),
            ("overflow-x", "hidden"),
        ],
    );
    sheet.rule(
        &[".page-content"],
        &[
            ("width", "100%"),
            ("max-width", "1200px"),
            ("margin", "0 auto"),
            ("min-height", "100vh"),
            ("background", "white"),
            ("box-shadow", "0 10px 25px rgba(0, 0, 0, 0.1)"),
            ("border-radius", "var(--radius)"),
            ("overflow", "hidden"),
        ],
    );
}

fn hero_rules(sheet: &mut Stylesheet, settings: &PageSettings) {
    let hover = adjust_color(&settings.primary_color, -20);

    sheet.comment("Hero");
    sheet.rule(
        &[".hero-block"],
        &[
            ("padding", "120px 20px"),
            ("text-align", "center"),
            ("background", settings.bg_gradient.as_str()),
            ("color", "white"),
            ("position", "relative"),
            ("overflow", "hidden"),
        ],
    );
    sheet.rule(
        &[".hero-block::before"],
        &[
            ("content", "''"),
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("background", "rgba(0, 0, 0, 0.3)"),
            ("z-index", "1"),
        ],
    );
    sheet.rule(&[".hero-block > *"], &[("position", "relative"), ("z-index", "2")]);
    sheet.rule(
        &[".hero-title"],
        &[
            ("font-size", "3.5rem"),
            ("margin-bottom", "20px"),
            ("font-weight", "800"),
            ("text-shadow", "0 2px 4px rgba(0, 0, 0, 0.3)"),
        ],
    );
    sheet.rule(
        &[".hero-headline"],
        &[
            ("font-size", "1.5rem"),
            ("margin-bottom", "40px"),
            ("font-weight", "300"),
            ("max-width", "700px"),
            ("margin-left", "auto"),
            ("margin-right", "auto"),
        ],
    );
    sheet.rule(
        &[".cta-button"],
        &[
            ("display", "inline-block"),
            ("padding", "16px 35px"),
            ("background", "var(--primary-color)"),
            ("color", "white"),
            ("text-decoration", "none"),
            ("border-radius", "50px"),
            ("font-weight", "600"),
            ("transition", TRANSITION),
            ("box-shadow", "0 4px 14px rgba(79, 70, 229, 0.4)"),
            ("border", "none"),
            ("cursor", "pointer"),
        ],
    );
    sheet.rule(
        &[".cta-button:hover"],
        &[
            ("background", hover.as_str()),
            ("transform", "translateY(-3px)"),
            ("box-shadow", "0 8px 20px rgba(67, 56, 202, 0.5)"),
        ],
    );
}

fn feature_rules(sheet: &mut Stylesheet) {
    sheet.comment("Features");
    sheet.rule(&[".features-block"], &[("padding", "100px 20px"), ("background", "#f9fafb")]);
    section_title(sheet, ".features-title");
    three_column_grid(sheet, ".features-grid");
    sheet.rule(
        &[".feature-item"],
        &[
            ("text-align", "center"),
            ("padding", "40px 30px"),
            ("border-radius", "var(--radius)"),
            ("background", "white"),
            ("transition", TRANSITION),
            ("box-shadow", CARD_SHADOW),
        ],
    );
    sheet.rule(
        &[".feature-item:hover"],
        &[
            ("transform", "translateY(-10px)"),
            ("box-shadow", "0 15px 35px rgba(0, 0, 0, 0.1)"),
        ],
    );
    sheet.rule(
        &[".feature-icon"],
        &[
            ("font-size", "3rem"),
            ("margin-bottom", "25px"),
            ("color", "var(--primary-color)"),
        ],
    );
    sheet.rule(
        &[".feature-title"],
        &[
            ("font-size", "1.5rem"),
            ("margin-bottom", "15px"),
            ("color", "var(--primary-color)"),
            ("font-weight", "600"),
        ],
    );
    sheet.rule(
        &[".feature-description"],
        &[("color", "var(--text-light)"), ("line-height", "1.6")],
    );
}

fn testimonial_rules(sheet: &mut Stylesheet, settings: &PageSettings) {
    let hover = adjust_color(&settings.primary_color, -20);

    sheet.comment("Testimonials");
    sheet.rule(&[".testimonials-block"], &[("padding", "100px 20px"), ("background", "#f3f4f6")]);
    section_title(sheet, ".testimonials-title");
    sheet.rule(&[".testimonials-carousel"], &[("position", "relative"), ("overflow", "hidden")]);
    sheet.rule(
        &[".testimonials-track"],
        &[("display", "flex"), ("transition", "transform 0.5s ease")],
    );
    sheet.rule(
        &[".testimonial-item"],
        &[
            ("flex", "0 0 100%"),
            ("background", "white"),
            ("padding", "40px 30px"),
            ("border-radius", "var(--radius)"),
            ("box-shadow", CARD_SHADOW),
            ("transition", TRANSITION),
            ("margin", "0 15px"),
        ],
    );
    sheet.rule(
        &[".testimonial-item:hover"],
        &[
            ("transform", "translateY(-5px)"),
            ("box-shadow", "0 15px 30px rgba(0, 0, 0, 0.1)"),
        ],
    );
    sheet.rule(
        &[".testimonial-text"],
        &[
            ("font-style", "italic"),
            ("margin-bottom", "25px"),
            ("color", "var(--text-color)"),
            ("line-height", "1.6"),
            ("font-size", "1.1rem"),
        ],
    );
    sheet.rule(
        &[".testimonial-author"],
        &[("font-weight", "600"), ("color", "var(--primary-color)")],
    );
    sheet.rule(
        &[".carousel-controls"],
        &[
            ("display", "flex"),
            ("justify-content", "center"),
            ("gap", "15px"),
            ("margin-top", "30px"),
        ],
    );
    sheet.rule(
        &[".carousel-control"],
        &[
            ("background", "var(--primary-color)"),
            ("color", "white"),
            ("border", "none"),
            ("border-radius", "50%"),
            ("width", "40px"),
            ("height", "40px"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
            ("cursor", "pointer"),
            ("transition", TRANSITION),
        ],
    );
    sheet.rule(
        &[".carousel-control:hover"],
        &[("background", hover.as_str()), ("transform", "scale(1.1)")],
    );
}

fn pricing_rules(sheet: &mut Stylesheet) {
    sheet.comment("Pricing");
    sheet.rule(&[".pricing-block"], &[("padding", "100px 20px"), ("background", "#f9fafb")]);
    section_title(sheet, ".pricing-title");
    three_column_grid(sheet, ".pricing-grid");
    sheet.rule(
        &[".pricing-plan"],
        &[
            ("background", "white"),
            ("border-radius", "var(--radius)"),
            ("padding", "40px 30px"),
            ("text-align", "center"),
            ("transition", TRANSITION),
            ("box-shadow", CARD_SHADOW),
        ],
    );
    sheet.rule(
        &[".pricing-plan.featured"],
        &[
            ("transform", "scale(1.05)"),
            ("border", "2px solid var(--primary-color)"),
            ("box-shadow", "0 10px 25px rgba(79, 70, 229, 0.2)"),
        ],
    );
    sheet.rule(
        &[".pricing-plan:hover"],
        &[
            ("transform", "translateY(-10px)"),
            ("box-shadow", "0 15px 35px rgba(0, 0, 0, 0.1)"),
        ],
    );
    sheet.rule(
        &[".pricing-plan.featured:hover"],
        &[("transform", "scale(1.05) translateY(-10px)")],
    );
    sheet.rule(
        &[".plan-name"],
        &[
            ("font-size", "1.5rem"),
            ("color", "var(--primary-color)"),
            ("margin-bottom", "15px"),
            ("font-weight", "600"),
        ],
    );
    sheet.rule(
        &[".plan-price"],
        &[
            ("font-size", "2.5rem"),
            ("font-weight", "700"),
            ("color", "var(--text-color)"),
            ("margin-bottom", "20px"),
        ],
    );
    sheet.rule(
        &[".plan-price span"],
        &[("font-size", "1rem"), ("color", "var(--text-light)")],
    );
    sheet.rule(&[".plan-features"], &[("list-style", "none"), ("margin-bottom", "30px")]);
    sheet.rule(
        &[".plan-features li"],
        &[
            ("padding", "8px 0"),
            ("color", "var(--text-color)"),
            ("border-bottom", "1px solid #e2e8f0"),
        ],
    );
    sheet.rule(&[".plan-features li:last-child"], &[("border-bottom", "none")]);
}

fn portfolio_rules(sheet: &mut Stylesheet) {
    sheet.comment("Portfolio");
    sheet.rule(&[".portfolio-block"], &[("padding", "100px 20px"), ("background", "#f3f4f6")]);
    section_title(sheet, ".portfolio-title");
    three_column_grid(sheet, ".portfolio-grid");
    sheet.rule(
        &[".portfolio-item"],
        &[
            ("position", "relative"),
            ("border-radius", "var(--radius)"),
            ("overflow", "hidden"),
            ("transition", TRANSITION),
            ("height", "300px"),
            ("box-shadow", "0 5px 15px rgba(0, 0, 0, 0.1)"),
        ],
    );
    sheet.rule(
        &[".portfolio-item:hover"],
        &[
            ("transform", "translateY(-5px)"),
            ("box-shadow", "0 15px 30px rgba(0, 0, 0, 0.2)"),
        ],
    );
    sheet.rule(
        &[".portfolio-image"],
        &[
            ("width", "100%"),
            ("height", "100%"),
            ("object-fit", "cover"),
            ("transition", TRANSITION),
        ],
    );
    sheet.rule(
        &[".portfolio-overlay"],
        &[
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("background", "rgba(0, 0, 0, 0.7)"),
            ("display", "flex"),
            ("flex-direction", "column"),
            ("justify-content", "center"),
            ("align-items", "center"),
            ("opacity", "0"),
            ("transition", TRANSITION),
            ("padding", "20px"),
        ],
    );
    sheet.rule(&[".portfolio-item:hover .portfolio-overlay"], &[("opacity", "1")]);
    sheet.rule(&[".portfolio-item:hover .portfolio-image"], &[("transform", "scale(1.1)")]);
    sheet.rule(
        &[".portfolio-item-title"],
        &[
            ("color", "white"),
            ("font-size", "1.5rem"),
            ("margin-bottom", "10px"),
            ("font-weight", "600"),
            ("transform", "translateY(20px)"),
            ("transition", TRANSITION),
            ("transition-delay", "0.1s"),
        ],
    );
    sheet.rule(
        &[".portfolio-item-desc"],
        &[
            ("color", "#e2e8f0"),
            ("text-align", "center"),
            ("transform", "translateY(20px)"),
            ("transition", TRANSITION),
            ("transition-delay", "0.2s"),
        ],
    );
    sheet.rule(
        &[
            ".portfolio-item:hover .portfolio-item-title",
            ".portfolio-item:hover .portfolio-item-desc",
        ],
        &[("transform", "translateY(0)")],
    );
}

fn contact_rules(sheet: &mut Stylesheet) {
    sheet.comment("Contact");
    sheet.rule(&[".contact-block"], &[("padding", "100px 20px"), ("background", "#f9fafb")]);
    section_title(sheet, ".contact-title");
    sheet.rule(
        &[".contact-container"],
        &[
            ("display", "grid"),
            ("grid-template-columns", "1fr 1fr"),
            ("gap", "50px"),
        ],
    );
    sheet.rule(
        &[".contact-info"],
        &[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "25px"),
        ],
    );
    sheet.rule(
        &[".contact-info-item"],
        &[("display", "flex"), ("align-items", "center"), ("gap", "15px")],
    );
    sheet.rule(
        &[".contact-icon"],
        &[
            ("width", "50px"),
            ("height", "50px"),
            ("background", "var(--primary-color)"),
            ("border-radius", "50%"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
            ("color", "white"),
            ("font-size", "1.2rem"),
        ],
    );
    sheet.rule(
        &[".contact-text h4"],
        &[("color", "var(--primary-color)"), ("margin-bottom", "5px")],
    );
    sheet.rule(
        &[".contact-form"],
        &[
            ("background", "white"),
            ("padding", "30px"),
            ("border-radius", "var(--radius)"),
            ("box-shadow", CARD_SHADOW),
        ],
    );
    sheet.rule(&[".form-group"], &[("margin-bottom", "20px")]);
    sheet.rule(
        &[".form-group label"],
        &[
            ("display", "block"),
            ("margin-bottom", "8px"),
            ("color", "var(--text-color)"),
            ("font-weight", "500"),
        ],
    );
    sheet.rule(
        &[".form-group input", ".form-group textarea"],
        &[
            ("width", "100%"),
            ("padding", "12px 15px"),
            ("border", "1px solid #e2e8f0"),
            ("border-radius", "var(--radius-sm)"),
            ("background", "white"),
            ("color", "var(--text-color)"),
            ("transition", TRANSITION),
        ],
    );
    sheet.rule(
        &[".form-group input:focus", ".form-group textarea:focus"],
        &[
            ("outline", "none"),
            ("border-color", "var(--primary-color)"),
            ("box-shadow", "0 0 0 3px rgba(79, 70, 229, 0.2)"),
        ],
    );
    sheet.rule(
        &[".form-group textarea"],
        &[("min-height", "120px"), ("resize", "vertical")],
    );
    sheet.rule(
        &[".form-error"],
        &[
            ("color", "#e53e3e"),
            ("font-size", "0.85rem"),
            ("margin-top", "5px"),
            ("display", "none"),
        ],
    );
    sheet.rule(
        &[".form-success"],
        &[
            ("background", "#38a169"),
            ("color", "white"),
            ("padding", "15px"),
            ("border-radius", "var(--radius-sm)"),
            ("margin-top", "20px"),
            ("display", "none"),
            ("text-align", "center"),
        ],
    );
}

fn cta_rules(sheet: &mut Stylesheet) {
    sheet.comment("Call to action");
    sheet.rule(
        &[".cta-block"],
        &[
            ("padding", "80px 20px"),
            ("text-align", "center"),
            ("background", "var(--primary-color)"),
            ("color", "white"),
        ],
    );
    sheet.rule(
        &[".cta-block-title"],
        &[
            ("font-size", "2.8rem"),
            ("margin-bottom", "20px"),
            ("font-weight", "700"),
        ],
    );
    sheet.rule(
        &[".cta-block-text"],
        &[
            ("font-size", "1.2rem"),
            ("margin-bottom", "35px"),
            ("max-width", "700px"),
            ("margin-left", "auto"),
            ("margin-right", "auto"),
            ("opacity", "0.9"),
        ],
    );
    sheet.rule(
        &[".cta-block-button"],
        &[
            ("display", "inline-block"),
            ("padding", "16px 35px"),
            ("background", "white"),
            ("color", "var(--primary-color)"),
            ("text-decoration", "none"),
            ("border-radius", "50px"),
            ("font-weight", "600"),
            ("transition", TRANSITION),
        ],
    );
    sheet.rule(
        &[".cta-block-button:hover"],
        &[
            ("background", "var(--secondary-color)"),
            ("color", "white"),
            ("transform", "translateY(-3px)"),
        ],
    );
}

fn footer_rules(sheet: &mut Stylesheet) {
    sheet.comment("Footer");
    sheet.rule(
        &[".footer-block"],
        &[
            ("padding", "60px 20px 30px"),
            ("background", "#1f2937"),
            ("color", "white"),
        ],
    );
    sheet.rule(
        &[".footer-content"],
        &[
            ("display", "grid"),
            ("grid-template-columns", "repeat(4, 1fr)"),
            ("gap", "40px"),
            ("margin-bottom", "40px"),
        ],
    );
    sheet.rule(
        &[".footer-logo"],
        &[
            ("font-size", "1.8rem"),
            ("font-weight", "700"),
            ("margin-bottom", "15px"),
            ("color", "white"),
        ],
    );
    sheet.rule(
        &[".footer-desc"],
        &[
            ("color", "#a0aec0"),
            ("line-height", "1.6"),
            ("margin-bottom", "20px"),
        ],
    );
    sheet.rule(
        &[".footer-heading"],
        &[
            ("font-size", "1.2rem"),
            ("font-weight", "600"),
            ("margin-bottom", "20px"),
            ("color", "white"),
        ],
    );
    sheet.rule(&[".footer-links"], &[("list-style", "none")]);
    sheet.rule(&[".footer-links li"], &[("margin-bottom", "10px")]);
    sheet.rule(
        &[".footer-links a"],
        &[
            ("color", "#a0aec0"),
            ("text-decoration", "none"),
            ("transition", TRANSITION),
        ],
    );
    sheet.rule(&[".footer-links a:hover"], &[("color", "white")]);
    sheet.rule(&[".social-links"], &[("display", "flex"), ("gap", "15px")]);
    sheet.rule(
        &[".social-link"],
        &[
            ("width", "40px"),
            ("height", "40px"),
            ("background", "rgba(255, 255, 255, 0.1)"),
            ("border-radius", "50%"),
            ("display", "flex"),
            ("align-items", "center"),
            ("justify-content", "center"),
            ("color", "white"),
            ("transition", TRANSITION),
        ],
    );
    sheet.rule(
        &[".social-link:hover"],
        &[
            ("background", "var(--primary-color)"),
            ("transform", "translateY(-3px)"),
        ],
    );
    sheet.rule(
        &[".footer-bottom"],
        &[
            ("text-align", "center"),
            ("padding-top", "30px"),
            ("border-top", "1px solid #2d3748"),
            ("color", "#a0aec0"),
        ],
    );
}

const GRIDS: [&str; 4] = [
    ".features-grid",
    ".pricing-grid",
    ".portfolio-grid",
    ".footer-content",
];

fn responsive_rules(sheet: &mut Stylesheet) {
    sheet.comment("Responsive");
    sheet.media(
        "(max-width: 1200px)",
        vec![
            rule(&GRIDS, &[("grid-template-columns", "repeat(2, 1fr)")]),
            rule(
                &[".contact-container"],
                &[("grid-template-columns", "1fr"), ("gap", "30px")],
            ),
        ],
    );
    sheet.media(
        "(max-width: 768px)",
        vec![
            rule(&GRIDS, &[("grid-template-columns", "1fr")]),
            rule(&[".hero-title"], &[("font-size", "2.5rem")]),
            rule(
                &[
                    ".features-title",
                    ".testimonials-title",
                    ".pricing-title",
                    ".portfolio-title",
                    ".contact-title",
                    ".cta-block-title",
                ],
                &[("font-size", "2.2rem")],
            ),
            rule(
                &[".page-content"],
                &[("box-shadow", "none"), ("border-radius", "0")],
            ),
        ],
    );
}
