//! Accessibility suggestion types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decorative vs. informative verdict plus generated text.
///
/// When `is_decorative` is true both texts are empty; use
/// [`Suggestion::decorative`] or [`Suggestion::enforce_decorative_invariant`]
/// to keep it that way. Texts are plain, unescaped strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub is_decorative: bool,
    #[serde(default)]
    pub title_text: String,
    #[serde(default)]
    pub desc_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wcag_analysis: Option<WcagAnalysis>,
}

impl Suggestion {
    pub fn decorative() -> Self {
        Self {
            is_decorative: true,
            ..Default::default()
        }
    }

    pub fn informative(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            is_decorative: false,
            title_text: title.into(),
            desc_text: desc.into(),
            wcag_analysis: None,
        }
    }

    pub fn with_wcag_analysis(mut self, analysis: WcagAnalysis) -> Self {
        self.wcag_analysis = Some(analysis);
        self
    }

    /// Clear both texts when the suggestion is decorative.
    pub fn enforce_decorative_invariant(mut self) -> Self {
        if self.is_decorative {
            self.title_text.clear();
            self.desc_text.clear();
        }
        self
    }
}

/// Structured WCAG 1.1.1 analysis returned by providers that follow the
/// conformance schema. Field names on the wire are Portuguese.
///
/// Models often answer `null` for fields that do not apply; those read as
/// empty. The reply object is kept verbatim in `payload`, so keys and
/// category names the typed view does not know survive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WcagAnalysis {
    #[serde(rename = "conformidade", default, deserialize_with = "null_as_default")]
    pub conformance: Conformance,
    #[serde(rename = "tipoImagem", default, deserialize_with = "null_as_default")]
    pub image_type: ImageType,
    #[serde(rename = "recomendacao", default, deserialize_with = "null_as_default")]
    pub recommendation: Recommendation,
    #[serde(rename = "codigoSugerido", default, deserialize_with = "null_as_default")]
    pub suggested_snippet: String,
    #[serde(skip_deserializing, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl WcagAnalysis {
    /// Typed view of `payload`, which is kept alongside it.
    pub fn from_payload(payload: Value) -> Result<Self, serde_json::Error> {
        let mut analysis = Self::deserialize(&payload)?;
        analysis.payload = payload;
        Ok(analysis)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conformance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(
        rename = "altObrigatorio",
        alias = "altRequired",
        default,
        deserialize_with = "lenient_bool"
    )]
    pub alt_required: bool,
    #[serde(
        rename = "justificativa",
        alias = "justification",
        default,
        deserialize_with = "null_as_default"
    )]
    pub justification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageType {
    #[serde(rename = "classificacao", alias = "classification", default)]
    pub classification: ImageClassification,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "altText", default, deserialize_with = "null_as_default")]
    pub alt_text: String,
    #[serde(rename = "descricaoLonga", default, deserialize_with = "null_as_default")]
    pub long_description: String,
}

/// WCAG image category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ImageClassification {
    #[serde(rename = "Decorativa")]
    Decorative,
    #[serde(rename = "Funcional")]
    Functional,
    #[default]
    #[serde(rename = "Informativa")]
    Informative,
    #[serde(rename = "Complexa")]
    Complex,
    #[serde(rename = "Captcha")]
    Captcha,
    #[serde(rename = "TextoEmImagem")]
    TextInImage,
}

impl ImageClassification {
    /// Parse Portuguese or English category names, ignoring case, spaces
    /// and Portuguese accents.
    pub fn parse(value: &str) -> Option<Self> {
        let key: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .map(fold_accent)
            .collect();
        let class = match key.as_str() {
            "decorativa" | "decorativo" | "decorative" => Self::Decorative,
            "funcional" | "functional" => Self::Functional,
            "informativa" | "informativo" | "informative" => Self::Informative,
            "complexa" | "complexo" | "complex" => Self::Complex,
            "captcha" => Self::Captcha,
            "textoemimagem" | "textinimage" | "imagemdetexto" | "imageoftext" => {
                Self::TextInImage
            }
            _ => return None,
        };
        Some(class)
    }
}

impl From<String> for ImageClassification {
    /// Unknown categories fall back to `Informative`, which keeps the
    /// element flagged as needing a text alternative.
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for ImageClassification {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(Self::from).unwrap_or_default())
    }
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' => 'a',
        'é' | 'ê' => 'e',
        'í' => 'i',
        'ó' | 'ô' | 'õ' => 'o',
        'ú' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "sim" | "yes" | "s" | "y"
        ),
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod tests;
