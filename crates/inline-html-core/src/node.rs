//! HTML node tree
//!
//! This module defines the two node kinds a tree is made of. Leaves hold a
//! value and no children; parents hold children and no value. Both validate
//! their invariants on construction.

use indexmap::IndexMap;

use crate::render::{attributes_to_html, render, render_leaf, render_parent};
use crate::{NodeError, Result};

/// Attribute names mapped to values, serialized in insertion order
pub type Attributes = IndexMap<String, String>;

/// Build [`Attributes`] from name/value pairs, keeping their order
pub fn attributes<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// A node in an HTML tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Text, optionally wrapped in a single element
    Leaf(LeafNode),

    /// Element wrapping one or more child nodes
    Parent(ParentNode),
}

/// A node with a value and no children.
///
/// Without a tag the value is rendered as raw text and any attributes are
/// dropped, since there is no element to carry them.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attributes: Option<Attributes>,
}

/// A node with a tag and at least one child
#[derive(Debug, Clone, PartialEq)]
pub struct ParentNode {
    tag: String,
    children: Vec<Node>,
    attributes: Option<Attributes>,
}

impl LeafNode {
    /// Create a raw text leaf
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: None,
        }
    }

    /// Create a leaf whose value is wrapped in `tag`
    pub fn with_tag(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: None,
        }
    }

    /// Create a leaf from optional parts, failing if the value is missing
    pub fn from_parts(
        value: Option<String>,
        tag: Option<String>,
        attributes: Option<Attributes>,
    ) -> Result<Self> {
        let Some(value) = value else {
            log::debug!("rejecting leaf node without a value (tag: {:?})", tag);
            return Err(NodeError::MissingValue);
        };

        Ok(Self {
            tag,
            value,
            attributes,
        })
    }

    /// Set the attributes of this leaf
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    /// Serialize this leaf's attributes (see [`attributes_to_html`])
    pub fn props_to_html(&self) -> String {
        attributes_to_html(self.attributes.as_ref())
    }

    /// Render this leaf to HTML. Leaves always render.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.value.len() + 16);
        render_leaf(self, &mut out);
        out
    }
}

impl ParentNode {
    /// Create a parent element, failing if there are no children
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Result<Self> {
        Self::from_parts(Some(tag.into()), Some(children), None)
    }

    /// Create a parent from optional parts.
    ///
    /// The tag is checked before the children, so a call missing both fails
    /// with [`NodeError::MissingTag`].
    pub fn from_parts(
        tag: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Result<Self> {
        let Some(tag) = tag else {
            log::debug!("rejecting parent node without a tag");
            return Err(NodeError::MissingTag);
        };

        let children = match children {
            Some(children) if !children.is_empty() => children,
            _ => {
                log::debug!("rejecting <{}> parent node without children", tag);
                return Err(NodeError::EmptyChildren);
            }
        };

        Ok(Self {
            tag,
            children,
            attributes,
        })
    }

    /// Set the attributes of this element
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    /// Serialize this element's attributes (see [`attributes_to_html`])
    pub fn props_to_html(&self) -> String {
        attributes_to_html(self.attributes.as_ref())
    }

    /// Render this element and its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::with_capacity(256);
        render_parent(self, &mut out)?;
        Ok(out)
    }
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, Node::Parent(_))
    }

    /// The wrapping tag, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Parent(parent) => Some(parent.tag()),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Leaf(leaf) => leaf.attributes(),
            Node::Parent(parent) => parent.attributes(),
        }
    }

    /// Serialize this node's attributes (see [`attributes_to_html`])
    pub fn props_to_html(&self) -> String {
        attributes_to_html(self.attributes())
    }

    /// Render this node and its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        render(self)
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}
