use pagex_model::is_hex_color;
use pagex_model::settings::DEFAULT_PRIMARY_COLOR;

/// Lighten (positive `amount`) or darken (negative) a hex color.
///
/// Each channel is shifted by `amount` and clamped to `0..=255`. Input that
/// is not `#RGB`/`#RRGGBB` yields the default primary color. Output is
/// always lowercase `#rrggbb`.
pub fn adjust_color(hex: &str, amount: i32) -> String {
    let Some([r, g, b]) = parse_hex(hex) else {
        tracing::warn!(color = hex, "invalid hex color, using fallback");
        return DEFAULT_PRIMARY_COLOR.to_string();
    };

    let shift = |channel: u8| (i32::from(channel) + amount).clamp(0, 255);
    format!("#{:02x}{:02x}{:02x}", shift(r), shift(g), shift(b))
}

/// Channels of a `#RGB` or `#RRGGBB` color
fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !is_hex_color(hex) {
        return None;
    }

    let digits = &hex[1..];
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
