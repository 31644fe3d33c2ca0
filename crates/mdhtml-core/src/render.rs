//! HTML rendering
//!
//! Converts an HTML node tree into a single-line HTML string. No escaping is
//! applied and no whitespace is inserted between elements.

use crate::node::{Attributes, HtmlNode, LeafNode, ParentNode};
use crate::{HtmlError, Result};

/// Render a node (and all of its descendants) to an HTML string
pub fn render(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(256);
    render_node(node, &mut output)?;
    Ok(output)
}

/// Render attributes as space-separated `key="value"` pairs.
///
/// Both an absent and an empty map render as the empty string.
pub fn render_attributes(props: Option<&Attributes>) -> String {
    let mut out = String::new();
    if let Some(props) = props {
        write_attributes(props, &mut out);
    }
    out
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf(leaf) => render_leaf(leaf, out),
        HtmlNode::Parent(parent) => render_parent(parent, out),
    }
}

fn render_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    let value = leaf.value.as_deref().ok_or(HtmlError::MissingValue)?;

    let Some(tag) = leaf.tag.as_deref() else {
        out.push_str(value);
        return Ok(());
    };

    open_tag(tag, leaf.props.as_ref(), out);
    out.push_str(value);
    close_tag(tag, out);
    Ok(())
}

fn render_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    let tag = parent.tag.as_deref().ok_or(HtmlError::MissingTag)?;
    let children = match parent.children.as_deref() {
        Some(children) if !children.is_empty() => children,
        _ => return Err(HtmlError::MissingChildren),
    };

    open_tag(tag, parent.props.as_ref(), out);
    for child in children {
        render_node(child, out)?;
    }
    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, props: Option<&Attributes>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if let Some(props) = props.filter(|p| !p.is_empty()) {
        out.push(' ');
        write_attributes(props, out);
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attributes(props: &Attributes, out: &mut String) {
    for (i, (name, value)) in props.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

impl LeafNode {
    /// Render this leaf to HTML
    pub fn to_html(&self) -> Result<String> {
        let mut output = String::new();
        render_leaf(self, &mut output)?;
        Ok(output)
    }
}

impl ParentNode {
    /// Render this element and its children to HTML
    pub fn to_html(&self) -> Result<String> {
        let mut output = String::with_capacity(256);
        render_parent(self, &mut output)?;
        Ok(output)
    }
}

impl HtmlNode {
    pub fn to_html(&self) -> Result<String> {
        render(self)
    }
}
