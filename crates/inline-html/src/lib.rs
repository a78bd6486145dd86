//! # inline-html
//!
//! Convert styled text spans to HTML.
//!
//! ## Design
//!
//! Spans (plain, bold, italic, code, link, image) are mapped one to one onto
//! leaf nodes of an HTML tree from `inline-html-core`. Callers compose those
//! leaves with parent elements and render the result:
//!
//! ```text
//! TextSpan ──span_to_node──▶ LeafNode ──ParentNode──▶ Node ──to_html──▶ String
//! ```
//!
//! Parsing markup into spans is left to the caller, and no escaping is
//! performed: content and URLs are emitted exactly as given.
//!
//! ## Example
//!
//! ```rust
//! use inline_html::{span_to_node, Node, ParentNode, TextSpan};
//!
//! let link = span_to_node(&TextSpan::link("Click here", "https://example.com"));
//! assert_eq!(link.to_html(), r#"<a href="https://example.com">Click here</a>"#);
//!
//! let paragraph = ParentNode::new(
//!     "p",
//!     vec![
//!         span_to_node(&TextSpan::plain("Read the ")).into(),
//!         Node::from(link),
//!     ],
//! )?;
//! assert_eq!(
//!     paragraph.to_html()?,
//!     r#"<p>Read the <a href="https://example.com">Click here</a></p>"#
//! );
//! # Ok::<(), inline_html::Error>(())
//! ```

mod convert;
pub mod span;

pub use convert::{render_spans, span_to_node, spans_to_nodes};
pub use inline_html_core::{
    attributes, attributes_to_html, render, Attributes, LeafNode, Node, NodeError, ParentNode,
};
pub use span::{SpanKind, TextSpan};

/// Error type for inline-html operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Node(#[from] NodeError),

    #[error("Unknown style kind: {0}")]
    UnknownStyleKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
