//! Scanned markup nodes.
//!
//! Nodes are produced fresh by every scan and never mutated afterwards.
//! All offsets are byte offsets into the scanned text; `end` is exclusive.

use serde::Serialize;

/// Half-open byte range into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice `text` with this span.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// An `<svg>…</svg>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgNode {
    pub start: usize,
    pub end: usize,
    pub raw_markup: String,
    pub open_tag_span: Span,
    pub has_title: bool,
    pub has_desc: bool,
    pub has_aria_hidden: bool,
}

/// A self-contained `<img …>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImgNode {
    pub start: usize,
    pub end: usize,
    pub raw_markup: String,
    pub open_tag_span: Span,
    pub src: Option<String>,
    /// `None` when the attribute is absent, `Some("")` for `alt=""`.
    pub alt: Option<String>,
    pub has_alt: bool,
    pub has_aria_hidden: bool,
    /// `role="presentation"` or `role="none"`.
    pub has_role: bool,
}

/// Either kind of scanned node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScannedNode {
    Svg(SvgNode),
    Img(ImgNode),
}

impl ScannedNode {
    pub fn start(&self) -> usize {
        match self {
            ScannedNode::Svg(n) => n.start,
            ScannedNode::Img(n) => n.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            ScannedNode::Svg(n) => n.end,
            ScannedNode::Img(n) => n.end,
        }
    }

    pub fn raw_markup(&self) -> &str {
        match self {
            ScannedNode::Svg(n) => &n.raw_markup,
            ScannedNode::Img(n) => &n.raw_markup,
        }
    }

    pub fn open_tag_span(&self) -> Span {
        match self {
            ScannedNode::Svg(n) => n.open_tag_span,
            ScannedNode::Img(n) => n.open_tag_span,
        }
    }

    /// Short element name: `"svg"` or `"img"`.
    pub fn kind(&self) -> &'static str {
        match self {
            ScannedNode::Svg(_) => "svg",
            ScannedNode::Img(_) => "img",
        }
    }
}

impl From<SvgNode> for ScannedNode {
    fn from(node: SvgNode) -> Self {
        ScannedNode::Svg(node)
    }
}

impl From<ImgNode> for ScannedNode {
    fn from(node: ImgNode) -> Self {
        ScannedNode::Img(node)
    }
}
