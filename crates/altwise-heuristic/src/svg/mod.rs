//! SVG classification cascade.

mod features;
mod rules;

use altwise_protocols::Suggestion;
use tracing::trace;

use features::SvgFeatures;

/// Classify raw `<svg>…</svg>` markup.
///
/// Phases run in a fixed order and the first one that matches decides the
/// result: chart structure, icon structure, heart path, heart fill colour,
/// keyword table, decorative check, generic fallback.
pub fn classify_svg(markup: &str) -> Suggestion {
    let features = SvgFeatures::collect(markup);

    for (phase, rule) in rules::PHASES {
        if let Some(suggestion) = rule(&features) {
            trace!(phase, title = %suggestion.title_text, "svg heuristic matched");
            return suggestion;
        }
    }

    trace!(phase = "generic", "svg heuristic fell through");
    rules::generic_fallback(&features)
}

#[cfg(test)]
#[path = "svg_tests.rs"]
mod tests;
