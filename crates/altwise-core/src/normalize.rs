//! Reading a suggestion out of free model text.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use altwise_protocols::{ImageClassification, NormalizeError, Suggestion, WcagAnalysis};

/// Keys that mark the structured WCAG schema.
const STRUCTURED_KEYS: &[&str] = &["conformidade", "tipoImagem", "recomendacao"];

/// End of the balanced `{…}` starting at `start`, honouring JSON strings.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// The first balanced `{…}` substring of `text`, ignoring braces inside
/// JSON strings. Surrounding prose and code fences are skipped.
pub fn extract_json_object(text: &str) -> Option<&str> {
    text.match_indices('{')
        .find_map(|(start, _)| balanced_end(text, start).map(|end| &text[start..end]))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LegacyResponse {
    is_decorative: bool,
    #[serde(alias = "title")]
    title_text: Option<String>,
    #[serde(alias = "desc", alias = "description")]
    desc_text: Option<String>,
}

/// Parse the model's answer into a [`Suggestion`].
///
/// Objects carrying the structured WCAG keys keep the whole analysis;
/// anything else is read as the flat `isDecorative`/`titleText`/`descText`
/// shape. Decorative results always come back with empty texts.
pub fn normalize_suggestion(text: &str) -> Result<Suggestion, NormalizeError> {
    let json = extract_json_object(text).ok_or(NormalizeError::NoJsonObject)?;
    let object: Map<String, Value> = serde_json::from_str(json)?;

    let suggestion = if STRUCTURED_KEYS.iter().any(|key| object.contains_key(*key)) {
        let analysis = WcagAnalysis::from_payload(Value::Object(object))?;
        debug!(classification = ?analysis.image_type.classification, "structured response");
        Suggestion {
            is_decorative: analysis.image_type.classification == ImageClassification::Decorative,
            title_text: analysis.recommendation.alt_text.trim().to_string(),
            desc_text: analysis.recommendation.long_description.trim().to_string(),
            wcag_analysis: Some(analysis),
        }
    } else {
        let legacy = LegacyResponse::deserialize(Value::Object(object))?;
        Suggestion {
            is_decorative: legacy.is_decorative,
            title_text: legacy.title_text.unwrap_or_default().trim().to_string(),
            desc_text: legacy.desc_text.unwrap_or_default().trim().to_string(),
            wcag_analysis: None,
        }
    };

    Ok(suggestion.enforce_decorative_invariant())
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
