//! The ordered SVG rule phases.

use std::sync::LazyLock;

use altwise_protocols::Suggestion;
use regex::Regex;

use super::features::SvgFeatures;
use crate::keywords::match_action;
use crate::labels;
use crate::text::truncate_chars;

pub(super) type Rule = fn(&SvgFeatures) -> Option<Suggestion>;

/// Phases in evaluation order. Chart structure runs before icon structure so
/// that multi-shape compositions are never mistaken for glyphs.
pub(super) const PHASES: &[(&str, Rule)] = &[
    ("chart_structure", chart_structure),
    ("icon_structure", icon_structure),
    ("heart_path", heart_path),
    ("fill_signature", fill_signature),
    ("keyword", keyword),
    ("decorative", decorative),
];

const BADGE_MAX_RADIUS: f64 = 5.0;
const HEART_FILL_MIN_PATH_LENGTH: usize = 40;
const DECORATIVE_MAX_PATH_LENGTH: usize = 100;
const LOGO_TEXT_MAX_CHARS: usize = 60;

static HEART_FILL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#(?:e[0-9a-f]|f0)[0-9a-f]{2}[0-5][0-9a-f]$").expect("valid regex")
});

fn label(title: &str) -> Suggestion {
    Suggestion::informative(title, "")
}

fn labels_suffix(features: &SvgFeatures) -> String {
    if features.text_contents.is_empty() {
        String::new()
    } else {
        format!(" Rótulos: {}.", features.text_contents.join(", "))
    }
}

fn chart_structure(f: &SvgFeatures) -> Option<Suggestion> {
    if (f.rects >= 3 && f.lines >= 1) || f.rects >= 4 {
        let desc = format!("Gráfico de barras com {} barras.{}", f.rects, labels_suffix(f));
        return Some(Suggestion::informative(labels::BAR_CHART, desc));
    }
    if f.paths >= 3 && f.arc_count() >= 2 {
        let desc = format!("Gráfico de pizza com {} fatias.{}", f.paths, labels_suffix(f));
        return Some(Suggestion::informative(labels::PIE_CHART, desc));
    }
    if f.rects >= 2 && f.lines >= 1 && f.texts >= 1 {
        let desc = format!("Diagrama de fluxo com {} etapas.{}", f.rects, labels_suffix(f));
        return Some(Suggestion::informative(labels::FLOW_DIAGRAM, desc));
    }
    None
}

fn icon_structure(f: &SvgFeatures) -> Option<Suggestion> {
    if f.rects != 0 {
        return None;
    }
    if f.circles == 1 && f.lines == 1 && f.paths == 0 {
        return Some(label(labels::SEARCH));
    }
    if f.lines == 3
        && f.circles == 0
        && f.paths == 0
        && f.line_geometry.iter().all(|l| l.is_horizontal())
    {
        return Some(label(labels::OPEN_MENU));
    }
    if f.lines == 2 && f.circles == 0 && f.paths == 0 {
        return Some(label(labels::CLOSE));
    }
    if f.paths >= 1 && f.circle_radii.iter().any(|r| *r <= BADGE_MAX_RADIUS) {
        return Some(label(labels::NOTIFICATIONS));
    }
    None
}

fn is_heart_path(d: &str) -> bool {
    let curves = d.chars().filter(|c| matches!(c, 'C' | 'c')).count();
    let classic = (d.starts_with("M12") || d.starts_with("m12")) && d.contains("21.35") && curves >= 2;
    classic || d.contains("20.84 4.61")
}

fn heart_path(f: &SvgFeatures) -> Option<Suggestion> {
    f.path_data
        .iter()
        .any(|d| is_heart_path(d))
        .then(|| label(labels::FAVORITE))
}

fn fill_signature(f: &SvgFeatures) -> Option<Suggestion> {
    let reddish = f.fills.iter().any(|fill| HEART_FILL.is_match(fill));
    (reddish
        && f.has_view_box([0.0, 0.0, 24.0, 24.0])
        && f.total_path_length() >= HEART_FILL_MIN_PATH_LENGTH)
        .then(|| label(labels::FAVORITE))
}

fn keyword(f: &SvgFeatures) -> Option<Suggestion> {
    match_action(&f.signals).map(label)
}

fn decorative(f: &SvgFeatures) -> Option<Suggestion> {
    let plain = f.texts == 0
        && !f.is_chart_like()
        && !f.is_small_icon()
        && f.simple_shape_count() <= 1
        && f.total_path_length() < DECORATIVE_MAX_PATH_LENGTH;
    plain.then(Suggestion::decorative)
}

/// Last phase; always produces a label.
pub(super) fn generic_fallback(f: &SvgFeatures) -> Suggestion {
    if f.texts > 0 {
        return match f.text_contents.first() {
            Some(text) => label(&format!(
                "{} {}",
                labels::LOGO,
                truncate_chars(text, LOGO_TEXT_MAX_CHARS)
            )),
            None => label(labels::LOGOTYPE),
        };
    }
    if f.is_chart_like() {
        let desc = format!("Gráfico com {} elementos visuais.", f.shape_count());
        return Suggestion::informative(labels::CHART, desc);
    }
    if f.is_small_icon() {
        return label(labels::ICON);
    }
    label(labels::ILLUSTRATION)
}
