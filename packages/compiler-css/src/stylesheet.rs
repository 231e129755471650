/// A style rule: one or more selectors sharing a declaration block
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selectors: Vec<String>,
    /// Declarations in source order
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selectors: &[&str]) -> Self {
        Self {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration. Characters that would end the declaration or
    /// the enclosing block are dropped from the value.
    pub fn declare(mut self, property: &str, value: &str) -> Self {
        self.declarations
            .push((property.to_string(), declaration_value(value)));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    fn write(&self, css: &mut String, indent: &str) {
        for (i, selector) in self.selectors.iter().enumerate() {
            css.push_str(indent);
            css.push_str(selector);
            if i + 1 < self.selectors.len() {
                css.push_str(",\n");
            }
        }
        css.push_str(" {\n");

        for (property, value) in &self.declarations {
            css.push_str(indent);
            css.push_str("    ");
            css.push_str(property);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }

        css.push_str(indent);
        css.push_str("}\n");
    }
}

/// Build a rule from a declaration table
pub fn rule(selectors: &[&str], declarations: &[(&str, &str)]) -> CssRule {
    declarations
        .iter()
        .fold(CssRule::new(selectors), |rule, (p, v)| rule.declare(p, v))
}

#[derive(Debug, Clone, PartialEq)]
pub enum CssItem {
    Comment(String),
    Rule(CssRule),
    Media { query: String, rules: Vec<CssRule> },
}

/// Ordered stylesheet; serializes in insertion order
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    pub items: Vec<CssItem>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn comment(&mut self, text: &str) {
        self.items.push(CssItem::Comment(text.to_string()));
    }

    pub fn add_rule(&mut self, rule: CssRule) {
        self.items.push(CssItem::Rule(rule));
    }

    pub fn rule(&mut self, selectors: &[&str], declarations: &[(&str, &str)]) {
        self.add_rule(rule(selectors, declarations));
    }

    /// `@media (query) { rules }`
    pub fn media(&mut self, query: &str, rules: Vec<CssRule>) {
        self.items.push(CssItem::Media {
            query: query.to_string(),
            rules,
        });
    }

    /// First top-level rule whose selector list contains `selector`
    pub fn find(&self, selector: &str) -> Option<&CssRule> {
        self.items.iter().find_map(|item| match item {
            CssItem::Rule(rule) if rule.selectors.iter().any(|s| s == selector) => Some(rule),
            _ => None,
        })
    }

    /// Convert to CSS text
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                css.push('\n');
            }
            match item {
                CssItem::Comment(text) => {
                    css.push_str("/* ");
                    css.push_str(&text.replace("*/", ""));
                    css.push_str(" */\n");
                }
                CssItem::Rule(rule) => rule.write(&mut css, ""),
                CssItem::Media { query, rules } => {
                    css.push_str("@media ");
                    css.push_str(query);
                    css.push_str(" {\n");
                    for (j, rule) in rules.iter().enumerate() {
                        if j > 0 {
                            css.push('\n');
                        }
                        rule.write(&mut css, "    ");
                    }
                    css.push_str("}\n");
                }
            }
        }

        css
    }
}

fn declaration_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | ';' | '<'))
        .collect()
}
