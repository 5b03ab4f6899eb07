//! Pre-escaped markup for template layers.

use std::fmt;

use serde::Serialize;

/// Markup that is already escaped and must be rendered verbatim.
///
/// A `SafeString` can only be built by escaping text or by wrapping escaped
/// text in a tag, so a value of this type never carries raw user input.
/// Template layers should emit it without a second escaping pass.
///
/// # Examples
///
/// ```rust
/// use profilefmt_core::display::SafeString;
///
/// let markup = SafeString::wrap("span", "Fish & chips");
/// assert_eq!(markup.as_str(), "<span>Fish &amp; chips</span>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SafeString(String);

impl SafeString {
    /// Escape `text` for use as HTML element content or attribute value.
    pub fn escape(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Escape `text` and enclose it in `<tag>…</tag>`.
    pub fn wrap(tag: &'static str, text: &str) -> Self {
        Self(format!("<{tag}>{}</{tag}>", escape_html(text)))
    }

    /// Borrow the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the markup out of the wrapper.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the markup is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SafeString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SafeString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
