//! Styled text spans.
//!
//! A span is one inline run of text with a single style. Spans are produced
//! by whatever parses the source markup and consumed by the converter.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Inline style of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Unstyled text
    Plain,
    /// Bold text
    Bold,
    /// Italic text
    Italic,
    /// Inline code
    Code,
    /// Hyperlink, uses the span's URL as target
    Link,
    /// Image, uses the span's content as alt text
    Image,
}

impl SpanKind {
    /// Every kind, in declaration order
    pub const ALL: [SpanKind; 6] = [
        SpanKind::Plain,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Link,
        SpanKind::Image,
    ];

    /// Stable lowercase name of this kind
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }

    /// Whether spans of this kind are expected to carry a URL
    pub fn takes_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(SpanKind::Plain),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            _ => {
                log::debug!("unknown span kind {:?}", s);
                Err(Error::UnknownStyleKind(s.to_string()))
            }
        }
    }
}

/// A run of inline text with one style.
///
/// `url` should be set for [`SpanKind::Link`] and [`SpanKind::Image`] and left
/// empty otherwise; this is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSpan {
    content: String,
    kind: SpanKind,
    url: Option<String>,
}

impl TextSpan {
    /// Create a span without a URL
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            url: None,
        }
    }

    /// Create a span with a URL
    pub fn with_url(content: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Code)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(content, SpanKind::Link, url)
    }

    /// Create an image span; `alt` becomes the image's alt text
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(alt, SpanKind::Image, url)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextSpan({}, {}, {})",
            self.content,
            self.kind,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
