//! Structural facts gathered from SVG markup in a single tokenizer pass.

use altwise_scanner::{Tag, TagKind, Token, tokenize};

use crate::text::{collapse_whitespace, normalize_signal};

/// Attributes whose values are geometry or presentation noise and never
/// carry naming hints.
const NON_SIGNAL_ATTRIBUTES: &[&str] = &[
    "d",
    "points",
    "viewbox",
    "x",
    "y",
    "cx",
    "cy",
    "r",
    "rx",
    "ry",
    "x1",
    "y1",
    "x2",
    "y2",
    "dx",
    "dy",
    "width",
    "height",
    "transform",
    "stroke-width",
    "offset",
    "opacity",
    "fill-opacity",
    "stroke-opacity",
    "stop-color",
    "xmlns",
    "xmlns:xlink",
    "version",
    "fill-rule",
    "clip-rule",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-dasharray",
    "preserveaspectratio",
    "focusable",
    "role",
    "aria-hidden",
    "style",
    "font-size",
    "font-family",
    "text-anchor",
];

/// Endpoints of one `<line>`; missing coordinates read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct LineGeometry {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineGeometry {
    pub fn is_horizontal(&self) -> bool {
        (self.y1 - self.y2).abs() < f64::EPSILON
    }
}

#[derive(Debug, Default)]
pub(crate) struct SvgFeatures {
    pub rects: usize,
    pub circles: usize,
    pub ellipses: usize,
    pub lines: usize,
    pub paths: usize,
    pub texts: usize,
    pub polygons: usize,
    pub polylines: usize,

    pub line_geometry: Vec<LineGeometry>,
    pub circle_radii: Vec<f64>,
    pub path_data: Vec<String>,
    /// Whitespace-collapsed contents of each non-empty `<text>` element.
    pub text_contents: Vec<String>,
    pub fills: Vec<String>,

    /// viewBox of the outermost `<svg>` as `[min-x, min-y, width, height]`.
    pub view_box: Option<[f64; 4]>,
    pub width: Option<f64>,
    pub height: Option<f64>,

    /// Normalized naming hints: ids, classes, hrefs, labels and comments.
    pub signals: String,
}

impl SvgFeatures {
    pub fn collect(markup: &str) -> Self {
        let mut features = Self::default();
        let mut raw_signals: Vec<&str> = Vec::new();
        let mut seen_root = false;
        let mut text_depth = 0usize;
        let mut text_buffer = String::new();

        for token in tokenize(markup) {
            match token {
                Token::Tag(tag) if tag.is_start() => {
                    if !seen_root && tag.is("svg") {
                        seen_root = true;
                        features.read_root(&tag);
                    }
                    features.count_element(&tag);
                    features.read_fill(&tag);
                    collect_signals(&tag, &mut raw_signals);

                    if tag.is("text") && tag.kind == TagKind::Open {
                        text_depth += 1;
                    }
                }
                Token::Tag(tag) => {
                    if tag.is("text") && text_depth > 0 {
                        text_depth -= 1;
                        if text_depth == 0 {
                            let content = collapse_whitespace(&text_buffer);
                            if !content.is_empty() {
                                features.text_contents.push(content);
                            }
                            text_buffer.clear();
                        }
                    }
                }
                Token::Text { body, .. } if text_depth > 0 => {
                    text_buffer.push_str(body);
                    text_buffer.push(' ');
                }
                Token::Comment { body, .. } => raw_signals.push(body),
                Token::Text { .. } => {}
            }
        }

        features.signals = normalize_signal(&raw_signals.join(" "));
        features
    }

    fn read_root(&mut self, tag: &Tag<'_>) {
        self.view_box = tag.attr("viewBox").and_then(parse_view_box);
        self.width = tag.attr("width").and_then(parse_length);
        self.height = tag.attr("height").and_then(parse_length);
    }

    fn count_element(&mut self, tag: &Tag<'_>) {
        let name = tag.name.to_ascii_lowercase();
        match name.as_str() {
            "rect" => self.rects += 1,
            "circle" => {
                self.circles += 1;
                // Percent or missing radii have no absolute size to compare.
                if let Some(r) = tag.attr("r").and_then(parse_length) {
                    self.circle_radii.push(r);
                }
            }
            "ellipse" => self.ellipses += 1,
            "line" => {
                self.lines += 1;
                let coord = |n: &str| tag.attr(n).and_then(parse_length).unwrap_or(0.0);
                self.line_geometry.push(LineGeometry {
                    x1: coord("x1"),
                    y1: coord("y1"),
                    x2: coord("x2"),
                    y2: coord("y2"),
                });
            }
            "path" => {
                self.paths += 1;
                if let Some(d) = tag.attr("d") {
                    self.path_data.push(d.trim().to_string());
                }
            }
            "text" => self.texts += 1,
            "polygon" => self.polygons += 1,
            "polyline" => self.polylines += 1,
            _ => {}
        }
    }

    fn read_fill(&mut self, tag: &Tag<'_>) {
        if let Some(fill) = tag.attr("fill") {
            self.fills.push(fill.trim().to_ascii_lowercase());
        }
        if let Some(style) = tag.attr("style") {
            for declaration in style.split(';') {
                if let Some((prop, value)) = declaration.split_once(':') {
                    if prop.trim().eq_ignore_ascii_case("fill") {
                        self.fills.push(value.trim().to_ascii_lowercase());
                    }
                }
            }
        }
    }

    pub fn shape_count(&self) -> usize {
        self.rects + self.circles + self.ellipses + self.lines + self.paths + self.polygons + self.polylines
    }

    pub fn simple_shape_count(&self) -> usize {
        self.rects + self.circles + self.ellipses
    }

    /// Arc commands (`A`/`a`) across all path data.
    pub fn arc_count(&self) -> usize {
        self.path_data
            .iter()
            .map(|d| d.chars().filter(|c| matches!(c, 'A' | 'a')).count())
            .sum()
    }

    /// Characters of path data across all paths.
    pub fn total_path_length(&self) -> usize {
        self.path_data.iter().map(|d| d.chars().count()).sum()
    }

    pub fn is_chart_like(&self) -> bool {
        self.shape_count() >= 5
    }

    /// Drawn at icon size: a viewBox or explicit size no larger than 48 units.
    pub fn is_small_icon(&self) -> bool {
        const ICON_MAX: f64 = 48.0;
        if let Some([_, _, w, h]) = self.view_box {
            if w > 0.0 && h > 0.0 && w <= ICON_MAX && h <= ICON_MAX {
                return true;
            }
        }
        matches!((self.width, self.height), (Some(w), Some(h)) if w <= ICON_MAX && h <= ICON_MAX)
    }

    pub fn has_view_box(&self, expected: [f64; 4]) -> bool {
        self.view_box.is_some_and(|vb| {
            vb.iter()
                .zip(expected.iter())
                .all(|(a, b)| (a - b).abs() < f64::EPSILON)
        })
    }
}

fn collect_signals<'a>(tag: &Tag<'a>, out: &mut Vec<&'a str>) {
    for attr in &tag.attributes {
        let Some(value) = attr.value else { continue };
        let name = attr.name.to_ascii_lowercase();
        if NON_SIGNAL_ATTRIBUTES.contains(&name.as_str()) {
            continue;
        }
        // Colors are noise, but `url(#heartGradient)` names a definition.
        if matches!(name.as_str(), "fill" | "stroke") && !value.trim_start().starts_with("url(") {
            continue;
        }
        out.push(value);
    }
}

fn parse_length(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let raw = raw.strip_suffix("px").unwrap_or(raw);
    raw.trim().parse().ok().filter(|v: &f64| v.is_finite())
}

fn parse_view_box(raw: &str) -> Option<[f64; 4]> {
    let values: Vec<f64> = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    <[f64; 4]>::try_from(values).ok()
}
