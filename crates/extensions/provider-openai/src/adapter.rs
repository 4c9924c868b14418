//! OpenAI adapter implementation.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use altwise_protocols::provider::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, ProviderAdapter, ProviderRequest, ProviderTag,
    SYSTEM_INSTRUCTION,
};
use altwise_protocols::{ImageSource, ProviderError};

use crate::api::{ApiMessage, ApiRequest, ApiResponse, ContentPart, ImageUrl, MessageContent};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI chat-completions adapter.
#[derive(Clone)]
pub struct OpenAIAdapter {
    api_key: String,
    endpoint: String,
    max_tokens: u32,
}

impl OpenAIAdapter {
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

    fn image_part(image: &ImageSource) -> ContentPart {
        ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: image.to_uri(),
                detail: "high",
            },
        }
    }

    fn build(&self, user: MessageContent, model: Option<&str>) -> ProviderRequest {
        let request = ApiRequest {
            model: model.unwrap_or(DEFAULT_MODEL).to_string(),
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: MessageContent::Text(SYSTEM_INSTRUCTION.to_string()),
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: DEFAULT_TEMPERATURE,
        };

        trace!(model = %request.model, max_tokens = self.max_tokens, "shaped OpenAI request");
        ProviderRequest::new(&self.endpoint, serde_json::json!(request))
            .with_header("Authorization", format!("Bearer {}", self.api_key))
    }
}

impl ProviderAdapter for OpenAIAdapter {
    fn tag(&self) -> ProviderTag {
        ProviderTag::OpenaiLike
    }

    fn default_model(&self) -> &str {
        DEFAULT_MODEL
    }

    fn build_text_request(&self, prompt: &str, model: Option<&str>) -> ProviderRequest {
        self.build(MessageContent::Text(prompt.to_string()), model)
    }

    fn build_vision_request(
        &self,
        image: &ImageSource,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<ProviderRequest, ProviderError> {
        let parts = vec![
            ContentPart::Text {
                text: prompt.to_string(),
            },
            Self::image_part(image),
        ];
        Ok(self.build(MessageContent::Parts(parts), model))
    }

    fn build_image_payload(&self, image: &ImageSource) -> Result<Value, ProviderError> {
        serde_json::to_value(Self::image_part(image))
            .map_err(|e| ProviderError::UnsupportedImage(e.to_string()))
    }

    fn extract_response_text(&self, response: &Value) -> Result<String, ProviderError> {
        let response = ApiResponse::deserialize(response)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::missing_field("choices[0].message.content"))
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
