//! HTML document tree
//!
//! This module defines the nodes Markdown is converted into. A node is either a
//! leaf (text content, no nested elements) or a parent (nested elements, no
//! text content of its own).

use std::fmt;

use indexmap::IndexMap;

/// Tag attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// An element without nested elements.
///
/// A leaf without a tag is raw text and renders as its value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub props: Option<Attributes>,
}

/// An element containing nested elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub props: Option<Attributes>,
}

/// A node in the HTML document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl LeafNode {
    /// Create a tagged leaf
    pub fn new(tag: &str, value: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            props: None,
        }
    }

    /// Create an untagged leaf holding raw text
    pub fn text(value: &str) -> Self {
        Self {
            tag: None,
            value: Some(value.to_string()),
            props: None,
        }
    }

    /// Replace the attribute map
    pub fn with_props(mut self, props: Attributes) -> Self {
        self.props = Some(props);
        self
    }

    /// Append one attribute, creating the map if needed
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.props
            .get_or_insert_with(Attributes::new)
            .insert(name.to_string(), value.to_string());
        self
    }
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            props: None,
        }
    }

    /// Append one attribute, creating the map if needed
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.props
            .get_or_insert_with(Attributes::new)
            .insert(name.to_string(), value.to_string());
        self
    }
}

impl HtmlNode {
    /// Shortcut for a tagged [`LeafNode`]
    pub fn leaf(tag: &str, value: &str) -> Self {
        HtmlNode::Leaf(LeafNode::new(tag, value))
    }

    /// Shortcut for an untagged [`LeafNode`]
    pub fn text(value: &str) -> Self {
        HtmlNode::Leaf(LeafNode::text(value))
    }

    /// Shortcut for a [`ParentNode`]
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode::new(tag, children))
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Write an optional field, using `None` for absent values
fn write_opt(f: &mut fmt::Formatter<'_>, value: Option<&str>) -> fmt::Result {
    match value {
        Some(value) => f.write_str(value),
        None => f.write_str("None"),
    }
}

fn write_props(f: &mut fmt::Formatter<'_>, props: Option<&Attributes>) -> fmt::Result {
    match props {
        Some(props) => write!(f, "{:?}", props),
        None => f.write_str("None"),
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LeafNode(")?;
        write_opt(f, self.tag.as_deref())?;
        f.write_str(", ")?;
        write_opt(f, self.value.as_deref())?;
        f.write_str(", ")?;
        write_props(f, self.props.as_ref())?;
        f.write_str(")")
    }
}

impl fmt::Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ParentNode(")?;
        write_opt(f, self.tag.as_deref())?;
        f.write_str(", ")?;
        match &self.children {
            Some(children) => {
                f.write_str("[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str("]")?;
            }
            None => f.write_str("None")?,
        }
        f.write_str(", ")?;
        write_props(f, self.props.as_ref())?;
        f.write_str(")")
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            HtmlNode::Parent(parent) => fmt::Display::fmt(parent, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_constructors() {
        let leaf = LeafNode::new("b", "bold");
        assert_eq!(leaf.tag.as_deref(), Some("b"));
        assert_eq!(leaf.value.as_deref(), Some("bold"));
        assert!(leaf.props.is_none());

        let text = LeafNode::text("plain");
        assert!(text.tag.is_none());
        assert_eq!(text.value.as_deref(), Some("plain"));
    }

    #[test]
    fn test_with_attr_preserves_order() {
        let leaf = LeafNode::new("a", "link")
            .with_attr("href", "https://example.com")
            .with_attr("target", "_blank");
        let keys: Vec<&str> = leaf
            .props
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["href", "target"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            LeafNode::text("test").to_string(),
            "LeafNode(None, test, None)"
        );
        assert_eq!(
            LeafNode::new("a", "this is a link")
                .with_attr("href", "www.google.com")
                .to_string(),
            "LeafNode(a, this is a link, {\"href\": \"www.google.com\"})"
        );
        assert_eq!(
            HtmlNode::parent("p", vec![HtmlNode::leaf("b", "x")]).to_string(),
            "ParentNode(p, [LeafNode(b, x, None)], None)"
        );
        assert_eq!(
            ParentNode::default().to_string(),
            "ParentNode(None, None, None)"
        );
    }
}
