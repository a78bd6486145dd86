//! Span to node conversion.
//!
//! Maps each [`SpanKind`] to a fixed leaf element:
//!
//! | kind   | tag    | value   | attributes             |
//! |--------|--------|---------|------------------------|
//! | Plain  | -      | content | -                      |
//! | Bold   | `b`    | content | -                      |
//! | Italic | `i`    | content | -                      |
//! | Code   | `code` | content | -                      |
//! | Link   | `a`    | content | `href`                 |
//! | Image  | `img`  | `""`    | `src`, `alt` (content) |
//!
//! Images are rendered as a paired `<img></img>` element like every other
//! tagged leaf.

use inline_html_core::{attributes, LeafNode, Node, ParentNode};

use crate::span::{SpanKind, TextSpan};
use crate::Result;

/// Convert a span to the leaf node that renders it.
///
/// Link and image spans without a URL get an empty `href`/`src`; this is
/// logged at `debug` level.
pub fn span_to_node(span: &TextSpan) -> LeafNode {
    match span.kind() {
        SpanKind::Plain => LeafNode::new(span.content()),
        SpanKind::Bold => LeafNode::with_tag("b", span.content()),
        SpanKind::Italic => LeafNode::with_tag("i", span.content()),
        SpanKind::Code => LeafNode::with_tag("code", span.content()),
        SpanKind::Link => LeafNode::with_tag("a", span.content())
            .with_attributes(attributes([("href", span_url(span))])),
        SpanKind::Image => LeafNode::with_tag("img", "")
            .with_attributes(attributes([("src", span_url(span)), ("alt", span.content())])),
    }
}

/// Convert spans to nodes, preserving order
pub fn spans_to_nodes(spans: &[TextSpan]) -> Vec<Node> {
    spans.iter().map(|span| span_to_node(span).into()).collect()
}

/// Wrap the converted spans in a `tag` element and render it.
///
/// Fails with [`NodeError::EmptyChildren`](inline_html_core::NodeError) when
/// `spans` is empty.
pub fn render_spans(tag: &str, spans: &[TextSpan]) -> Result<String> {
    let parent = ParentNode::new(tag, spans_to_nodes(spans))?;
    Ok(parent.to_html()?)
}

/// URL of a link or image span; missing URLs render as an empty attribute
fn span_url(span: &TextSpan) -> &str {
    match span.url() {
        Some(url) => url,
        None => {
            log::debug!(
                "{} span {:?} has no url, rendering an empty attribute",
                span.kind(),
                span.content()
            );
            ""
        }
    }
}

impl From<&TextSpan> for LeafNode {
    fn from(span: &TextSpan) -> Self {
        span_to_node(span)
    }
}

impl From<TextSpan> for LeafNode {
    fn from(span: TextSpan) -> Self {
        span_to_node(&span)
    }
}
