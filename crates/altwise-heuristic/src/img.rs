//! `<img>` classification from the image's source path.
//!
//! Without pixels the file name is the only signal. Rules run in a fixed
//! order: decorative markers, icon markers, logo markers, content
//! categories, then a cleaned-up file name.

use std::sync::LazyLock;

use altwise_protocols::Suggestion;
use regex::Regex;
use tracing::trace;

use crate::keywords::match_action;
use crate::labels;
use crate::text::{capitalize_first, normalize_signal, title_case};

static DECORATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:spacer|backgrounds?|bg|divider|separator|1x1|pixel|placeholder|blank|transparent|decor\w*|ornaments?|border|shadow|gradient|texture|pattern|filler)\b",
    )
    .expect("valid regex")
});

const ICON_MARKERS: &[&str] = &["icon", "icons", "ico", "glyph", "glyphs", "sprite", "ic"];
const LOGO_MARKERS: &[&str] = &["logo", "logos", "logotipo", "brand", "branding"];

/// Tokens that say nothing about what an image shows.
const NOISE: &[&str] = &[
    "img", "image", "images", "imagem", "imagens", "pic", "picture", "assets", "static", "media",
    "uploads", "files", "file", "final", "copy", "min", "large", "small", "medium", "hd", "retina",
    "web", "www", "untitled", "dsc", "dcim", "scaled", "edited", "new", "old", "ver", "px", "dp",
];

struct Category {
    pattern: &'static str,
    prefix: &'static str,
    complex: bool,
}

const CATEGORIES: &[Category] = &[
    Category { pattern: r"\bbanners?\b", prefix: "Banner", complex: false },
    Category { pattern: r"\bhero\b|\bdestaque\b", prefix: "Imagem de destaque", complex: false },
    Category { pattern: r"\bproducts?\b|\bprodutos?\b", prefix: "Foto do produto", complex: false },
    Category { pattern: r"\bavatars?\b|\bprofile\b|\bperfil\b|\bheadshot\b", prefix: "Foto de perfil", complex: false },
    Category { pattern: r"\bteam\b|\bequipe\b|\bstaff\b", prefix: "Foto da equipe", complex: false },
    Category { pattern: r"\bscreenshots?\b|\bscreen\b|\bcaptura\b", prefix: "Captura de tela", complex: false },
    Category { pattern: r"\bcharts?\b|\bgraphs?\b|\bgr[aá]ficos?\b|\bplot\b", prefix: "Gráfico", complex: true },
    Category { pattern: r"\bdiagrams?\b|\bdiagramas?\b|\bflowchart\b|\bfluxograma\b", prefix: "Diagrama", complex: true },
    Category { pattern: r"\binfographics?\b|\binfogr[aá]ficos?\b", prefix: "Infográfico", complex: true },
    Category { pattern: r"\bmaps?\b|\bmapas?\b", prefix: "Mapa", complex: false },
    Category { pattern: r"\bqr\b|\bqrcode\b", prefix: "Código QR", complex: false },
    Category { pattern: r"\bthumbs?\b|\bthumbnails?\b|\bminiatura\b", prefix: "Miniatura", complex: false },
];

static CATEGORY_TABLE: LazyLock<Vec<(Regex, &'static Category)>> = LazyLock::new(|| {
    CATEGORIES
        .iter()
        .map(|c| (Regex::new(c.pattern).expect("valid regex"), c))
        .collect()
});

/// Path of `src` without scheme, host, query or fragment.
fn url_path(src: &str) -> &str {
    let without_scheme = match src.find("://") {
        Some(i) => &src[i + 3..],
        None => src.strip_prefix("//").unwrap_or(src),
    };
    let has_host = without_scheme.len() != src.len();
    let path = if has_host {
        without_scheme
            .find('/')
            .map_or("", |i| &without_scheme[i..])
    } else {
        without_scheme
    };
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn file_stem(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

fn words(signal: &str) -> Vec<&str> {
    signal.split(' ').filter(|w| !w.is_empty()).collect()
}

/// Words left once digits, one-letter fragments, noise and `drop` are removed.
fn meaningful_words(words: &[&str], drop: &[&str]) -> Vec<String> {
    words
        .iter()
        .filter(|w| !NOISE.contains(*w) && !drop.contains(*w))
        .map(|w| w.chars().filter(|c| !c.is_ascii_digit()).collect::<String>())
        .filter(|w| w.chars().count() >= 2 && !NOISE.contains(&w.as_str()) && !drop.contains(&w.as_str()))
        .collect()
}

fn needs_review() -> Suggestion {
    Suggestion::informative(labels::NEEDS_REVIEW, "")
}

/// Classify an `<img>` from its `src` value.
pub fn classify_img(src: &str) -> Suggestion {
    let src = src.trim();
    if src.is_empty() || src.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("data:")) {
        return needs_review();
    }

    let path = url_path(src);
    let path_signal = normalize_signal(path);
    let path_words = words(&path_signal);
    let stem_signal = normalize_signal(file_stem(path));
    let stem_words = words(&stem_signal);

    if DECORATIVE.is_match(&path_signal) {
        trace!(src, "img decorative marker");
        return Suggestion::decorative();
    }

    if path_words.iter().any(|w| ICON_MARKERS.contains(w)) {
        if let Some(action) = match_action(&stem_signal) {
            return Suggestion::informative(action, "");
        }
        let residual = meaningful_words(&stem_words, ICON_MARKERS);
        let title = if residual.is_empty() {
            labels::ICON.to_string()
        } else {
            format!("{} {}", labels::ICON, residual.join(" "))
        };
        return Suggestion::informative(title, "");
    }

    if stem_words.iter().any(|w| LOGO_MARKERS.contains(w)) {
        let name = meaningful_words(&stem_words, LOGO_MARKERS);
        let title = if name.is_empty() {
            labels::LOGOTYPE.to_string()
        } else {
            format!("{} {}", labels::LOGO, title_case(&name))
        };
        return Suggestion::informative(title, "");
    }

    if let Some((regex, category)) = CATEGORY_TABLE.iter().find(|(re, _)| re.is_match(&path_signal)) {
        let residual: Vec<String> = meaningful_words(&stem_words, &[])
            .into_iter()
            .filter(|w| !regex.is_match(w))
            .collect();
        let title = if residual.is_empty() {
            category.prefix.to_string()
        } else {
            format!("{}: {}", category.prefix, capitalize_first(&residual.join(" ")))
        };
        let desc = if category.complex {
            format!(
                "{}: descreva os dados e as tendências apresentados na imagem.",
                category.prefix
            )
        } else {
            String::new()
        };
        return Suggestion::informative(title, desc);
    }

    let cleaned = meaningful_words(&stem_words, &[]);
    if cleaned.is_empty() {
        return needs_review();
    }
    Suggestion::informative(capitalize_first(&cleaned.join(" ")), "")
}
