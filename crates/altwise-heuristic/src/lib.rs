//! # altwise Heuristic
//!
//! Network-free classifier used when no provider is configured and as the
//! last fallback of the suggestion pipeline. Every function here is pure:
//! the same input always yields the same [`Suggestion`].
//!
//! - [`classify_svg`] runs an ordered cascade over SVG markup (chart
//!   structure, icon structure, path and fill signatures, keyword table,
//!   decorative and generic fallbacks).
//! - [`classify_img`] works from an image's file name or URL path only.

mod img;
mod keywords;
pub mod labels;
mod svg;
mod text;

pub use img::classify_img;
pub use svg::classify_svg;

use altwise_protocols::{ScannedNode, Suggestion};

/// Classify any scanned node.
pub fn classify_node(node: &ScannedNode) -> Suggestion {
    match node {
        ScannedNode::Svg(n) => classify_svg(&n.raw_markup),
        ScannedNode::Img(n) => classify_img(n.src.as_deref().unwrap_or("")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use altwise_scanner::scan_document;

    #[test]
    fn test_classify_node_dispatch() {
        let nodes = scan_document(
            r#"<img src="spacer.gif"><svg viewBox="0 0 24 24"><circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/></svg>"#,
        );
        assert!(classify_node(&nodes[0]).is_decorative);
        assert_eq!(classify_node(&nodes[1]).title_text, labels::SEARCH);
    }
}
