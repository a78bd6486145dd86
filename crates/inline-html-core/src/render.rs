//! HTML rendering
//!
//! Serializes a node tree to an HTML string. Rendering is a pure function of
//! the tree: children are emitted in stored order with no separators and
//! nothing is escaped.

use crate::node::{Attributes, LeafNode, Node, ParentNode};
use crate::{NodeError, Result};

/// Render a node and its descendants to HTML
pub fn render(node: &Node) -> Result<String> {
    let mut output = String::with_capacity(256);
    render_node(node, &mut output)?;
    Ok(output)
}

/// Serialize attributes as they appear inside an opening tag.
///
/// Each entry becomes ` name="value"`, in insertion order. Absent or empty
/// attributes produce an empty string.
pub fn attributes_to_html(attributes: Option<&Attributes>) -> String {
    let mut out = String::new();
    if let Some(attributes) = attributes {
        push_attributes(attributes, &mut out);
    }
    out
}

fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn render_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Leaf(leaf) => {
            render_leaf(leaf, out);
            Ok(())
        }
        Node::Parent(parent) => render_parent(parent, out),
    }
}

pub(crate) fn render_leaf(leaf: &LeafNode, out: &mut String) {
    match leaf.tag() {
        None => out.push_str(leaf.value()),
        Some(tag) => {
            open_tag(tag, leaf.attributes(), out);
            out.push_str(leaf.value());
            close_tag(tag, out);
        }
    }
}

pub(crate) fn render_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    // Already enforced by construction; the tag is never absent once built.
    if parent.children().is_empty() {
        return Err(NodeError::EmptyChildren);
    }

    open_tag(parent.tag(), parent.attributes(), out);
    for child in parent.children() {
        render_node(child, out)?;
    }
    close_tag(parent.tag(), out);
    Ok(())
}

fn open_tag(tag: &str, attributes: Option<&Attributes>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if let Some(attributes) = attributes {
        push_attributes(attributes, out);
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::attributes;

    fn leaf(tag: &str, value: &str) -> Node {
        LeafNode::with_tag(tag, value).into()
    }

    #[test]
    fn test_attributes_none() {
        assert_eq!(attributes_to_html(None), "");
    }

    #[test]
    fn test_attributes_empty() {
        assert_eq!(attributes_to_html(Some(&Attributes::new())), "");
    }

    #[test]
    fn test_attributes_single() {
        let attrs = attributes([("href", "https://www.example.com")]);
        assert_eq!(
            attributes_to_html(Some(&attrs)),
            " href=\"https://www.example.com\""
        );
    }

    #[test]
    fn test_attributes_multiple_in_order() {
        let attrs = attributes([
            ("href", "https://www.example.com"),
            ("target", "_blank"),
            ("class", "link"),
        ]);
        assert_eq!(
            attributes_to_html(Some(&attrs)),
            " href=\"https://www.example.com\" target=\"_blank\" class=\"link\""
        );
    }

    #[test]
    fn test_raw_text_leaf() {
        assert_eq!(LeafNode::new("Just text").to_html(), "Just text");
    }

    #[test]
    fn test_raw_text_leaf_ignores_attributes() {
        let node = LeafNode::new("Just text").with_attributes(attributes([("class", "x")]));
        assert_eq!(node.to_html(), "Just text");
    }

    #[test]
    fn test_tagged_leaf() {
        assert_eq!(LeafNode::with_tag("p", "Hello").to_html(), "<p>Hello</p>");
    }

    #[test]
    fn test_tagged_leaf_with_attributes() {
        let node = LeafNode::with_tag("a", "Click me!")
            .with_attributes(attributes([("href", "https://www.google.com")]));
        assert_eq!(
            node.to_html(),
            "<a href=\"https://www.google.com\">Click me!</a>"
        );
    }

    #[test]
    fn test_tagged_leaf_with_empty_attributes() {
        let node = LeafNode::with_tag("p", "Hello").with_attributes(Attributes::new());
        assert_eq!(node.to_html(), "<p>Hello</p>");
    }

    #[test]
    fn test_content_is_not_escaped() {
        let node = LeafNode::with_tag("p", "a < b & \"c\"")
            .with_attributes(attributes([("title", "<x>")]));
        assert_eq!(node.to_html(), "<p title=\"<x>\">a < b & \"c\"</p>");
    }

    #[test]
    fn test_parent_with_child() {
        let parent = ParentNode::new("div", vec![leaf("span", "hello")]).unwrap();
        assert_eq!(parent.to_html().unwrap(), "<div><span>hello</span></div>");
    }

    #[test]
    fn test_parent_mixed_children() {
        let parent = ParentNode::new(
            "p",
            vec![
                leaf("b", "Bold"),
                LeafNode::new("Normal").into(),
                leaf("i", "Italic"),
            ],
        )
        .unwrap();
        assert_eq!(
            parent.to_html().unwrap(),
            "<p><b>Bold</b>Normal<i>Italic</i></p>"
        );
    }

    #[test]
    fn test_nested_parents() {
        let inner = ParentNode::new("span", vec![leaf("b", "grandchild")]).unwrap();
        let outer = ParentNode::new("div", vec![inner.into()]).unwrap();
        assert_eq!(
            Node::from(outer).to_html().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_parent_with_attributes() {
        let parent = ParentNode::new("ul", vec![leaf("li", "one"), leaf("li", "two")])
            .unwrap()
            .with_attributes(attributes([("class", "list"), ("id", "main")]));
        assert_eq!(
            render(&Node::from(parent)).unwrap(),
            "<ul class=\"list\" id=\"main\"><li>one</li><li>two</li></ul>"
        );
    }
}
