//! Span to HTML node conversion

use indexmap::indexmap;
use mdhtml_core::{render, HtmlNode, LeafNode};

use crate::inline::text_to_spans;
use crate::options::InlineOptions;
use crate::span::TextSpan;
use crate::Result;

/// Convert a span to the leaf node that renders it
pub fn span_to_html_node(span: &TextSpan) -> LeafNode {
    match span {
        TextSpan::Plain(text) => LeafNode::text(text),
        TextSpan::Bold(text) => LeafNode::new("b", text),
        TextSpan::Italic(text) => LeafNode::new("i", text),
        TextSpan::Code(text) => LeafNode::new("code", text),
        TextSpan::Link { text, url } => LeafNode::new("a", text).with_props(indexmap! {
            "href".to_string() => url.clone(),
        }),
        TextSpan::Image { alt, url } => LeafNode::new("img", "").with_props(indexmap! {
            "src".to_string() => url.clone(),
            "alt".to_string() => alt.clone(),
        }),
    }
}

/// Tokenize inline Markdown and convert every span to a leaf node
pub fn text_to_html_nodes(text: &str, options: &InlineOptions) -> Result<Vec<HtmlNode>> {
    let spans = text_to_spans(text, options)?;
    Ok(spans
        .iter()
        .map(|span| HtmlNode::Leaf(span_to_html_node(span)))
        .collect())
}

/// Convert inline Markdown straight to an HTML string
pub fn inline_to_html(text: &str, options: &InlineOptions) -> Result<String> {
    let mut html = String::with_capacity(text.len() * 2);
    for node in text_to_html_nodes(text, options)? {
        html.push_str(&render(&node)?);
    }
    Ok(html)
}
