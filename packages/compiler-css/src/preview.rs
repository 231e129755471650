use crate::color::adjust_color;
use crate::stylesheet::Stylesheet;
use pagex_model::PageSettings;

/// Theme overrides applied to the live editing surface.
///
/// Covers both the preview blocks and the editor's own chrome (template,
/// export and save buttons, panel toggles). Regenerated on every change.
pub fn compile_preview_css(settings: &PageSettings) -> String {
    let primary = settings.primary_color.as_str();
    let secondary = settings.secondary_color.as_str();
    let primary_hover = adjust_color(primary, -20);
    let secondary_hover = adjust_color(secondary, -20);

    let mut sheet = Stylesheet::new();

    sheet.rule(
        &[":root"],
        &[("--primary-color", primary), ("--secondary-color", secondary)],
    );
    sheet.rule(&[".hero-block"], &[("background", settings.bg_gradient.as_str())]);
    sheet.rule(
        &[
            ".cta-button",
            ".template-btn",
            ".export-btn",
            ".menu-toggle",
            ".carousel-control",
            ".save-btn",
        ],
        &[("background", primary)],
    );
    sheet.rule(
        &[
            ".cta-button:hover",
            ".template-btn:hover",
            ".export-btn:hover",
            ".menu-toggle:hover",
            ".carousel-control:hover",
            ".save-btn:hover",
        ],
        &[("background", primary_hover.as_str())],
    );
    sheet.rule(&[".cta-block"], &[("background", primary)]);
    sheet.rule(
        &[".feature-icon", ".contact-icon", ".social-link:hover"],
        &[("color", primary)],
    );
    sheet.rule(&[".device-btn.active"], &[("color", primary)]);
    sheet.rule(&[".control-group h3"], &[("color", primary)]);
    sheet.rule(
        &[".logo", ".theme-toggle", ".toggle-panel"],
        &[("color", primary)],
    );
    sheet.rule(&[".pricing-plan.featured"], &[("border-color", primary)]);
    // Save button takes the secondary color, overriding the group above
    sheet.rule(&[".save-btn"], &[("background", secondary)]);
    sheet.rule(&[".save-btn:hover"], &[("background", secondary_hover.as_str())]);

    sheet.to_css()
}
