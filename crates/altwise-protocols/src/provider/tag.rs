//! Vendor detection from an endpoint string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of supported vendor wire formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderTag {
    OpenaiLike,
    AnthropicLike,
    GoogleLike,
    Unknown,
}

impl ProviderTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderTag::OpenaiLike => "openai",
            ProviderTag::AnthropicLike => "anthropic",
            ProviderTag::GoogleLike => "google",
            ProviderTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the vendor from an endpoint by case-insensitive substring match.
///
/// Unmatched endpoints map to [`ProviderTag::Unknown`], which is served
/// with the OpenAI-like request shape.
pub fn detect_provider(endpoint: &str) -> ProviderTag {
    let endpoint = endpoint.to_lowercase();
    if endpoint.contains("openai") {
        ProviderTag::OpenaiLike
    } else if endpoint.contains("anthropic") || endpoint.contains("claude") {
        ProviderTag::AnthropicLike
    } else if endpoint.contains("google")
        || endpoint.contains("gemini")
        || endpoint.contains("generativelanguage")
    {
        ProviderTag::GoogleLike
    } else {
        ProviderTag::Unknown
    }
}
