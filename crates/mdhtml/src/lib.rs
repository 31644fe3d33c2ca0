//! # mdhtml
//!
//! Convert inline Markdown to HTML.
//!
//! Raw text is split into typed [`TextSpan`]s (plain, bold, italic, code, link,
//! image), each span becomes a [`LeafNode`], and the resulting nodes are
//! rendered with [`mdhtml_core::render`] or assembled into larger trees by
//! block-level code.
//!
//! ## Pipeline
//!
//! ```text
//! raw text ─▶ plain span ─▶ bold ─▶ italic ─▶ code ─▶ images ─▶ links ─▶ spans ─▶ leaf nodes
//! ```
//!
//! Delimiters are split one level deep; nested emphasis is not recognised.
//!
//! ## Example
//!
//! ```rust
//! use mdhtml::{inline_to_html, InlineOptions};
//!
//! let html = inline_to_html(
//!     "This is **bold** with a [link](https://example.com)",
//!     &InlineOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     html,
//!     "This is <b>bold</b> with a <a href=\"https://example.com\">link</a>"
//! );
//! ```

mod convert;
pub mod inline;
mod options;
mod span;

pub use convert::{inline_to_html, span_to_html_node, text_to_html_nodes};
pub use inline::{
    extract_images, extract_links, split_by_delimiter, split_images, split_links, text_to_spans,
    text_to_spans_default,
};
pub use mdhtml_core::{render, Attributes, HtmlError, HtmlNode, LeafNode, ParentNode};
pub use options::InlineOptions;
pub use span::{TextSpan, TextStyle};

/// Error type for Markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("malformed markdown: unclosed delimiter '{delimiter}'")]
    UnclosedDelimiter { delimiter: String },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,

    #[error("'{0}' is not a valid text style")]
    InvalidStyle(String),

    #[error(transparent)]
    Html(#[from] HtmlError),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
