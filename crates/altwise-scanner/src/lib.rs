//! # altwise Scanner
//!
//! Finds `<svg>…</svg>` and `<img …>` spans in raw document text and decides
//! which of them lack an accessible name.
//!
//! Scanning runs on a small purpose-built tokenizer rather than a DOM
//! parser: tags, quoted attribute values and comments are recognised, but
//! no tree is built and malformed markup is skipped instead of reported.

mod img;
mod position;
mod predicate;
mod svg;
pub mod tokenizer;

pub use img::scan_img_nodes;
pub use position::line_col;
pub use predicate::{img_needs_fix, needs_fix, svg_needs_fix};
pub use svg::scan_svg_nodes;
pub use tokenizer::{Attribute, Tag, TagKind, Token, Tokenizer, tags, tokenize};

use altwise_protocols::ScannedNode;

/// All SVG and IMG nodes in `text`, in document order.
pub fn scan_document(text: &str) -> Vec<ScannedNode> {
    let mut nodes: Vec<ScannedNode> = scan_svg_nodes(text)
        .into_iter()
        .map(ScannedNode::from)
        .chain(scan_img_nodes(text).into_iter().map(ScannedNode::from))
        .collect();
    nodes.sort_by_key(ScannedNode::start);
    nodes
}

/// Nodes in `text` that need an accessibility fix, in document order.
pub fn flagged_nodes(text: &str) -> Vec<ScannedNode> {
    scan_document(text).into_iter().filter(needs_fix).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_document_orders_mixed_nodes() {
        let html = r#"<img src="a.png"><svg><path d="M0 0"/></svg><img src="b.png" alt="">"#;
        let nodes = scan_document(html);
        let kinds: Vec<&str> = nodes.iter().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec!["img", "svg", "img"]);
    }

    #[test]
    fn test_flagged_nodes_filters_compliant() {
        let html = r#"
            <img src="a.png">
            <img src="b.png" alt="">
            <svg><title>Ok</title></svg>
            <svg viewBox="0 0 24 24"><path d="M1 1"/></svg>
        "#;
        let flagged = flagged_nodes(html);
        assert_eq!(flagged.len(), 2);
        assert_eq!(flagged[0].kind(), "img");
        assert_eq!(flagged[1].kind(), "svg");
    }

    #[test]
    fn test_scan_document_empty_text() {
        assert!(scan_document("").is_empty());
    }
}
