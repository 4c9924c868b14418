//! Accessibility-need predicates.

use altwise_protocols::{ImgNode, ScannedNode, SvgNode};

/// An SVG needs a fix unless it is hidden from assistive technology or
/// already carries a `<title>` or `<desc>`.
pub fn svg_needs_fix(node: &SvgNode) -> bool {
    !node.has_aria_hidden && !(node.has_title || node.has_desc)
}

/// An image needs a fix only when it has no `alt` attribute at all and is
/// neither hidden nor marked presentational. `alt=""` is a valid
/// decorative marker.
pub fn img_needs_fix(node: &ImgNode) -> bool {
    !(node.has_aria_hidden || node.has_role || node.has_alt)
}

pub fn needs_fix(node: &ScannedNode) -> bool {
    match node {
        ScannedNode::Svg(n) => svg_needs_fix(n),
        ScannedNode::Img(n) => img_needs_fix(n),
    }
}
