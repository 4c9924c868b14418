//! Gemini adapter implementation.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use altwise_protocols::provider::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, ProviderAdapter, ProviderRequest, ProviderTag,
    SYSTEM_INSTRUCTION,
};
use altwise_protocols::{ImageSource, ProviderError, mime_for_path};

use crate::types::{
    Content, FileData, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part,
};

pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini `generateContent` adapter.
#[derive(Clone)]
pub struct GeminiAdapter {
    api_key: String,
    endpoint: String,
    max_tokens: u32,
}

impl GeminiAdapter {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Endpoint with `{model}` filled in and the key appended as a query
    /// parameter.
    fn url_for(&self, model: &str) -> String {
        let base = self.endpoint.replace("{model}", model);
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{}{}key={}", base, separator, self.api_key)
    }

    fn image_part(image: &ImageSource) -> Part {
        match image {
            ImageSource::Base64 { media_type, data } => Part::InlineData {
                inline_data: InlineData {
                    mime_type: media_type.clone(),
                    data: data.clone(),
                },
            },
            ImageSource::Url { url } => Part::FileData {
                file_data: FileData {
                    mime_type: mime_for_path(url).to_string(),
                    file_uri: url.clone(),
                },
            },
        }
    }

    fn build(&self, parts: Vec<Part>, model: Option<&str>) -> ProviderRequest {
        let model = model.unwrap_or(DEFAULT_MODEL);
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part::Text {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: DEFAULT_TEMPERATURE,
                max_output_tokens: self.max_tokens,
            },
        };
        trace!(model, max_tokens = self.max_tokens, "shaped Gemini request");
        ProviderRequest::new(self.url_for(model), serde_json::json!(request))
    }
}

impl ProviderAdapter for GeminiAdapter {
    fn tag(&self) -> ProviderTag {
        ProviderTag::GoogleLike
    }

    fn default_model(&self) -> &str {
        DEFAULT_MODEL
    }

    fn build_text_request(&self, prompt: &str, model: Option<&str>) -> ProviderRequest {
        let parts = vec![Part::Text {
            text: prompt.to_string(),
        }];
        self.build(parts, model)
    }

    fn build_vision_request(
        &self,
        image: &ImageSource,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<ProviderRequest, ProviderError> {
        let parts = vec![
            Part::Text {
                text: prompt.to_string(),
            },
            Self::image_part(image),
        ];
        Ok(self.build(parts, model))
    }

    fn build_image_payload(&self, image: &ImageSource) -> Result<Value, ProviderError> {
        serde_json::to_value(Self::image_part(image))
            .map_err(|e| ProviderError::UnsupportedImage(e.to_string()))
    }

    fn extract_response_text(&self, response: &Value) -> Result<String, ProviderError> {
        let response = GenerateContentResponse::deserialize(response)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        let first_part = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next());
        match first_part {
            Some(Part::Text { text }) => Ok(text),
            _ => Err(ProviderError::missing_field(
                "candidates[0].content.parts[0].text",
            )),
        }
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
