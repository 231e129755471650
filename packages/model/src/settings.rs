use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;
use tracing::warn;

pub const DEFAULT_PRIMARY_COLOR: &str = "#4f46e5";
pub const DEFAULT_SECONDARY_COLOR: &str = "#10b981";
pub const DEFAULT_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

/// Global style/content configuration shared by every block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSettings {
    pub title: String,
    pub headline: String,
    pub cta_text: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub bg_gradient: String,
    pub animate_background: bool,
    pub dark_mode: bool,

    /// Keys found in persisted state that this version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Minha Landing Page".to_string(),
            headline: "Uma headline impactante aqui".to_string(),
            cta_text: "Saiba Mais".to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            bg_gradient: DEFAULT_GRADIENT.to_string(),
            animate_background: false,
            dark_mode: false,
            extra: Map::new(),
        }
    }
}

impl PageSettings {
    /// Shallow-merge a persisted object over the defaults.
    ///
    /// Missing keys keep their default, unknown keys are retained in
    /// `extra`. A known key holding a value of the wrong type, or a color
    /// that is not `#RGB`/`#RRGGBB`, keeps its default and is logged; the
    /// other keys are still applied.
    pub fn merged_over_defaults(overrides: Map<String, Value>) -> Self {
        let mut settings = Self::default();
        for (key, value) in overrides {
            if !settings.merge_field(&key, value) {
                warn!(%key, "ignoring stored setting of the wrong shape");
            }
        }
        settings
    }

    /// Returns false when a known key rejects the value
    fn merge_field(&mut self, key: &str, value: Value) -> bool {
        match key {
            "title" => assign(&mut self.title, as_string(&value)),
            "headline" => assign(&mut self.headline, as_string(&value)),
            "ctaText" => assign(&mut self.cta_text, as_string(&value)),
            "primaryColor" => assign(&mut self.primary_color, as_color(&value)),
            "secondaryColor" => assign(&mut self.secondary_color, as_color(&value)),
            "bgGradient" => assign(&mut self.bg_gradient, as_string(&value)),
            "animateBackground" => assign(&mut self.animate_background, value.as_bool()),
            "darkMode" => assign(&mut self.dark_mode, value.as_bool()),
            _ => {
                self.extra.insert(key.to_string(), value);
                true
            }
        }
    }
}

fn assign<T>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn as_color(value: &Value) -> Option<String> {
    value.as_str().filter(|c| is_hex_color(c)).map(str::to_string)
}

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("hex color pattern is valid")
    })
}

/// `#RGB` or `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    hex_color_pattern().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(PageSettings::default()).unwrap();
        assert_eq!(value["ctaText"], "Saiba Mais");
        assert_eq!(value["primaryColor"], "#4f46e5");
        assert_eq!(value["bgGradient"], DEFAULT_GRADIENT);
        assert_eq!(value["animateBackground"], false);
        assert_eq!(value["darkMode"], false);
    }

    #[test]
    fn test_merge_keeps_defaults_and_unknown_keys() {
        let overrides = json!({ "title": "Loja", "fontScale": 1.2 });
        let Value::Object(overrides) = overrides else { unreachable!() };

        let settings = PageSettings::merged_over_defaults(overrides);
        assert_eq!(settings.title, "Loja");
        assert_eq!(settings.headline, "Uma headline impactante aqui");
        assert_eq!(settings.extra.get("fontScale"), Some(&json!(1.2)));

        // Unknown keys survive a serialization round trip
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["fontScale"], json!(1.2));
    }

    #[test]
    fn test_merge_skips_only_mistyped_keys() {
        let Value::Object(overrides) = json!({
            "title": "Minha Loja",
            "headline": "Boa",
            "darkMode": null,
            "ctaText": 5,
            "animateBackground": true
        }) else {
            unreachable!()
        };

        let settings = PageSettings::merged_over_defaults(overrides);
        assert_eq!(settings.title, "Minha Loja");
        assert_eq!(settings.headline, "Boa");
        assert!(!settings.dark_mode);
        assert_eq!(settings.cta_text, "Saiba Mais");
        assert!(settings.animate_background);
        // Rejected known keys are not carried as unknown ones
        assert!(settings.extra.is_empty());
    }

    #[test]
    fn test_merge_resets_malformed_colors() {
        let Value::Object(overrides) = json!({
            "primaryColor": "red;}",
            "secondaryColor": "#ABC"
        }) else {
            unreachable!()
        };

        let settings = PageSettings::merged_over_defaults(overrides);
        assert_eq!(settings.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(settings.secondary_color, "#ABC");
    }

    #[test]
    fn test_hex_color_validation() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#4F46E5"));
        assert!(!is_hex_color("4f46e5"));
        assert!(!is_hex_color("#4f46e"));
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color("red"));
    }
}
