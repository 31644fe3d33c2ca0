//! mdhtml-core - HTML node tree and rendering
//!
//! This crate provides the HTML document tree that Markdown is converted into,
//! and renders that tree to a single-line HTML string. It is used by `mdhtml`
//! (inline Markdown conversion) and by any block-level assembly built on top.
//!
//! # Architecture
//!
//! ```text
//!                     ┌───────────┐
//! LeafNode ─────────▶ │           │
//!                     │ HtmlNode  │ ──render──▶ HTML String
//! ParentNode ───────▶ │           │
//!                     └───────────┘
//! ```
//!
//! Nodes may be built incomplete; the required fields of each variant are
//! validated when the node is rendered.
//!
//! # Example
//!
//! ```rust
//! use mdhtml_core::{render, HtmlNode};
//!
//! let tree = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::leaf("b", "Bold text"),
//!         HtmlNode::text("Normal text"),
//!     ],
//! );
//!
//! assert_eq!(render(&tree).unwrap(), "<p><b>Bold text</b>Normal text</p>");
//! ```

mod node;
mod render;

pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use render::{render, render_attributes};

/// Structural validation errors raised when a node is rendered
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("elements without children must have a value")]
    MissingValue,

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node must have children")]
    MissingChildren,
}

pub type Result<T> = std::result::Result<T, HtmlError>;
