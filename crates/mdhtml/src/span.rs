//! Inline text spans
//!
//! A [`TextSpan`] is a run of inline Markdown text with a single style. The
//! tokenizer replaces spans with re-tagged copies; spans are never mutated.

use std::fmt;
use std::str::FromStr;

use crate::MarkdownError;

/// Inline formatting style of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextStyle {
    pub const ALL: [TextStyle; 6] = [
        TextStyle::Plain,
        TextStyle::Bold,
        TextStyle::Italic,
        TextStyle::Code,
        TextStyle::Link,
        TextStyle::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextStyle::Plain => "text",
            TextStyle::Bold => "bold",
            TextStyle::Italic => "italic",
            TextStyle::Code => "code",
            TextStyle::Link => "link",
            TextStyle::Image => "image",
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextStyle {
    type Err = MarkdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| MarkdownError::InvalidStyle(s.to_string()))
    }
}

/// A run of inline text with one style.
///
/// Only links and images carry a url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),

    /// Link text and target
    Link { text: String, url: String },

    /// Image alt text and source
    Image { alt: String, url: String },
}

impl TextSpan {
    /// Create a span of `style`.
    ///
    /// Links and images created this way have an empty url.
    pub fn new(text: &str, style: TextStyle) -> Self {
        let text = text.to_string();
        match style {
            TextStyle::Plain => TextSpan::Plain(text),
            TextStyle::Bold => TextSpan::Bold(text),
            TextStyle::Italic => TextSpan::Italic(text),
            TextStyle::Code => TextSpan::Code(text),
            TextStyle::Link => TextSpan::Link {
                text,
                url: String::new(),
            },
            TextStyle::Image => TextSpan::Image {
                alt: text,
                url: String::new(),
            },
        }
    }

    pub fn plain(text: &str) -> Self {
        TextSpan::Plain(text.to_string())
    }

    pub fn link(text: &str, url: &str) -> Self {
        TextSpan::Link {
            text: text.to_string(),
            url: url.to_string(),
        }
    }

    pub fn image(alt: &str, url: &str) -> Self {
        TextSpan::Image {
            alt: alt.to_string(),
            url: url.to_string(),
        }
    }

    /// The span text; alt text for images
    pub fn text(&self) -> &str {
        match self {
            TextSpan::Plain(text)
            | TextSpan::Bold(text)
            | TextSpan::Italic(text)
            | TextSpan::Code(text)
            | TextSpan::Link { text, .. }
            | TextSpan::Image { alt: text, .. } => text.as_str(),
        }
    }

    pub fn style(&self) -> TextStyle {
        match self {
            TextSpan::Plain(_) => TextStyle::Plain,
            TextSpan::Bold(_) => TextStyle::Bold,
            TextSpan::Italic(_) => TextStyle::Italic,
            TextSpan::Code(_) => TextStyle::Code,
            TextSpan::Link { .. } => TextStyle::Link,
            TextSpan::Image { .. } => TextStyle::Image,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => {
                Some(url.as_str())
            }
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, TextSpan::Plain(_))
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextSpan({}, {}, {})",
            self.text(),
            self.style(),
            self.url().unwrap_or("None")
        )
    }
}
