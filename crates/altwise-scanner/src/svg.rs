//! `<svg>` element scanning.

use altwise_protocols::{Span, SvgNode};
use tracing::debug;

use crate::tokenizer::{Tag, TagKind, tags};

/// Scan `text` for `<svg>…</svg>` elements.
///
/// Open and close tags are paired with a stack, so a nested `<svg>` does not
/// steal its parent's closing tag; each nested element is reported as a node
/// of its own. Open tags that are never closed, self-closing `<svg/>` tags
/// and stray closing tags are dropped silently. Nodes come back in document
/// order.
pub fn scan_svg_nodes(text: &str) -> Vec<SvgNode> {
    let all: Vec<Tag<'_>> = tags(text).collect();
    let mut open: Vec<usize> = Vec::new();
    let mut nodes = Vec::new();

    for (idx, tag) in all.iter().enumerate() {
        if !tag.is("svg") {
            continue;
        }
        match tag.kind {
            TagKind::Open => open.push(idx),
            TagKind::Close => {
                if let Some(open_idx) = open.pop() {
                    nodes.push(build_node(text, &all, open_idx, idx));
                }
            }
            TagKind::SelfClosing => {}
        }
    }

    if !open.is_empty() {
        debug!(count = open.len(), "skipping unterminated <svg> elements");
    }

    nodes.sort_by_key(|n| n.start);
    nodes
}

fn build_node(text: &str, all: &[Tag<'_>], open_idx: usize, close_idx: usize) -> SvgNode {
    let open = &all[open_idx];
    let close = &all[close_idx];
    let inner = &all[open_idx + 1..close_idx];
    let start = open.span.start;
    let end = close.span.end;

    SvgNode {
        start,
        end,
        raw_markup: text[start..end].to_string(),
        open_tag_span: Span::new(open.span.start, open.span.end),
        has_title: inner.iter().any(|t| t.is_start() && t.is("title")),
        has_desc: inner.iter().any(|t| t.is_start() && t.is("desc")),
        has_aria_hidden: is_aria_hidden(open),
    }
}

/// `aria-hidden="true"` on `tag`.
pub(crate) fn is_aria_hidden(tag: &Tag<'_>) -> bool {
    tag.attr("aria-hidden")
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}
