//! `<img>` element scanning.

use altwise_protocols::{ImgNode, Span};

use crate::svg::is_aria_hidden;
use crate::tokenizer::{Tag, tags};

/// Scan `text` for `<img …>` / `<img …/>` tags, in document order.
pub fn scan_img_nodes(text: &str) -> Vec<ImgNode> {
    tags(text)
        .filter(|t| t.is_start() && t.is("img"))
        .map(|tag| build_node(text, &tag))
        .collect()
}

fn build_node(text: &str, tag: &Tag<'_>) -> ImgNode {
    let alt = tag.attr("alt").map(str::to_string);
    ImgNode {
        start: tag.span.start,
        end: tag.span.end,
        raw_markup: tag.span.slice(text).to_string(),
        open_tag_span: Span::new(tag.span.start, tag.span.end),
        src: tag.attr("src").map(str::to_string),
        has_alt: alt.is_some(),
        alt,
        has_aria_hidden: is_aria_hidden(tag),
        has_role: tag.attr("role").is_some_and(|role| {
            let role = role.trim();
            role.eq_ignore_ascii_case("presentation") || role.eq_ignore_ascii_case("none")
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_img_facts() {
        let text = r#"<div><img src="/img/logo.png" class="x"></div>"#;
        let nodes = scan_img_nodes(text);
        assert_eq!(nodes.len(), 1);
        let node = &nodes[0];
        assert_eq!(node.src.as_deref(), Some("/img/logo.png"));
        assert_eq!(node.alt, None);
        assert!(!node.has_alt);
        assert!(!node.has_aria_hidden);
        assert!(!node.has_role);
        assert_eq!(&text[node.start..node.end], node.raw_markup);
    }

    #[test]
    fn test_empty_alt_is_distinguished_from_missing() {
        let nodes = scan_img_nodes(r#"<img src="a.png" alt=""><img src="b.png">"#);
        assert_eq!(nodes[0].alt.as_deref(), Some(""));
        assert!(nodes[0].has_alt);
        assert_eq!(nodes[1].alt, None);
        assert!(!nodes[1].has_alt);
    }

    #[test]
    fn test_self_closing_and_single_quotes() {
        let nodes = scan_img_nodes("<img src='x.jpg' alt='A cat' />");
        assert_eq!(nodes[0].src.as_deref(), Some("x.jpg"));
        assert_eq!(nodes[0].alt.as_deref(), Some("A cat"));
    }

    #[test]
    fn test_role_presentation_and_none() {
        let nodes = scan_img_nodes(
            r#"<img role="presentation"><img role="None"><img role="img">"#,
        );
        assert!(nodes[0].has_role);
        assert!(nodes[1].has_role);
        assert!(!nodes[2].has_role);
    }

    #[test]
    fn test_aria_hidden() {
        let nodes = scan_img_nodes(r#"<img aria-hidden="true" src="a"><img aria-hidden="yes">"#);
        assert!(nodes[0].has_aria_hidden);
        assert!(!nodes[1].has_aria_hidden);
    }

    #[test]
    fn test_missing_src() {
        let nodes = scan_img_nodes("<img alt=\"\">");
        assert_eq!(nodes[0].src, None);
    }

    #[test]
    fn test_closing_img_tag_ignored() {
        let nodes = scan_img_nodes("<img src=\"a\"></img>");
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_image_in_svg_is_not_img() {
        let nodes = scan_img_nodes("<svg><image href=\"a.png\"/></svg>");
        assert!(nodes.is_empty());
    }
}
