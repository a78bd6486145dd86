//! inline-html-core - HTML node tree and rendering
//!
//! This crate provides the node tree and the HTML serializer used by
//! `inline-html`. Trees are built bottom-up from leaves (text, optionally
//! wrapped in a single element) and parents (an element around an ordered,
//! non-empty list of children).
//!
//! # Architecture
//!
//! ```text
//! LeafNode ─┐
//!           ├──▶ ┌───────────┐
//! LeafNode ─┤    │ Node tree │ ──render──▶ HTML String
//!           │    └───────────┘
//! ParentNode┘
//! ```
//!
//! Nothing is escaped: text and attribute values are emitted verbatim.
//!
//! # Example
//!
//! ```rust
//! use inline_html_core::{LeafNode, Node, ParentNode};
//!
//! let tree = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::with_tag("b", "Bold").into(),
//!         LeafNode::new("Normal").into(),
//!         LeafNode::with_tag("i", "Italic").into(),
//!     ],
//! )?;
//!
//! assert_eq!(
//!     Node::from(tree).to_html()?,
//!     "<p><b>Bold</b>Normal<i>Italic</i></p>"
//! );
//! # Ok::<(), inline_html_core::NodeError>(())
//! ```

mod node;
mod render;

pub use node::{attributes, Attributes, LeafNode, Node, ParentNode};
pub use render::{attributes_to_html, render};

/// Error type for node construction and rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Leaf node requires a value")]
    MissingValue,

    #[error("Parent node requires a tag")]
    MissingTag,

    #[error("Parent node requires at least one child")]
    EmptyChildren,
}

pub type Result<T> = std::result::Result<T, NodeError>;
