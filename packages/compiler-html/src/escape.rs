use std::borrow::Cow;
use std::fmt;
use std::ops::Add;

/// Markup that is safe to concatenate into a document.
///
/// There is no way to build an `Html` from a runtime string without
/// escaping it: [`Html::escape`] converts text, [`Html::trusted`] only
/// accepts string literals, and [`Html::tag`] escapes attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Html(Cow<'static, str>);

impl Html {
    /// Escape untrusted text
    pub fn escape(text: &str) -> Self {
        Html(Cow::Owned(escape_html(text)))
    }

    /// Literal markup written in source code
    pub const fn trusted(markup: &'static str) -> Self {
        Html(Cow::Borrowed(markup))
    }

    pub const fn empty() -> Self {
        Html(Cow::Borrowed(""))
    }

    /// Inline element `<name attrs>inner</name>`
    ///
    /// An attribute with an empty value is written as a bare name
    /// (`required`).
    pub fn tag(name: &'static str, attributes: &[(&str, &str)], inner: &Html) -> Self {
        let mut out = open_tag(name, attributes);
        out.push_str(inner.as_str());
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        Html(Cow::Owned(out))
    }

    /// Font Awesome icon `<i class="..."></i>`
    pub fn icon(classes: &str) -> Self {
        Html::tag("i", &[("class", classes)], &Html::empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Add for Html {
    type Output = Html;

    fn add(self, rhs: Html) -> Html {
        let mut out = self.0.into_owned();
        out.push_str(rhs.as_str());
        Html(Cow::Owned(out))
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<name attrs>` with escaped attribute values
pub(crate) fn open_tag(name: &str, attributes: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('<');
    out.push_str(name);
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
    }
    out.push('>');
    out
}

/// Entity-encode `&`, `<`, `>`, `"` and `'`
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
