//! Anthropic adapter implementation.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use altwise_protocols::provider::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, ProviderAdapter, ProviderRequest, ProviderTag,
    SYSTEM_INSTRUCTION,
};
use altwise_protocols::{ImageSource, ProviderError};

use crate::api::{ApiContent, ApiMessage, ApiRequest, ApiResponse, ContentBlock, ImageBlockSource};

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic messages adapter.
///
/// Authenticates with `x-api-key`; requests never carry `Authorization`.
#[derive(Clone)]
pub struct AnthropicAdapter {
    api_key: String,
    endpoint: String,
    max_tokens: u32,
}

impl AnthropicAdapter {
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

    fn image_block(image: &ImageSource) -> ContentBlock {
        let source = match image {
            ImageSource::Base64 { media_type, data } => ImageBlockSource::Base64 {
                media_type: media_type.clone(),
                data: data.clone(),
            },
            ImageSource::Url { url } => ImageBlockSource::Url { url: url.clone() },
        };
        ContentBlock::Image { source }
    }

    fn build(&self, content: ApiContent, model: Option<&str>) -> ProviderRequest {
        let request = ApiRequest {
            model: model.unwrap_or(DEFAULT_MODEL).to_string(),
            max_tokens: self.max_tokens,
            temperature: DEFAULT_TEMPERATURE,
            system: SYSTEM_INSTRUCTION.to_string(),
            messages: vec![ApiMessage {
                role: "user",
                content,
            }],
        };

        trace!(model = %request.model, max_tokens = self.max_tokens, "shaped Anthropic request");
        ProviderRequest::new(&self.endpoint, serde_json::json!(request))
            .with_header("x-api-key", &self.api_key)
            .with_header("anthropic-version", ANTHROPIC_VERSION)
    }
}

impl ProviderAdapter for AnthropicAdapter {
    fn tag(&self) -> ProviderTag {
        ProviderTag::AnthropicLike
    }

    fn default_model(&self) -> &str {
        DEFAULT_MODEL
    }

    fn build_text_request(&self, prompt: &str, model: Option<&str>) -> ProviderRequest {
        self.build(ApiContent::Text(prompt.to_string()), model)
    }

    /// Image block first, then the prompt, as the messages API recommends.
    fn build_vision_request(
        &self,
        image: &ImageSource,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<ProviderRequest, ProviderError> {
        let blocks = vec![
            Self::image_block(image),
            ContentBlock::Text {
                text: prompt.to_string(),
            },
        ];
        Ok(self.build(ApiContent::Blocks(blocks), model))
    }

    fn build_image_payload(&self, image: &ImageSource) -> Result<Value, ProviderError> {
        serde_json::to_value(Self::image_block(image))
            .map_err(|e| ProviderError::UnsupportedImage(e.to_string()))
    }

    fn extract_response_text(&self, response: &Value) -> Result<String, ProviderError> {
        let response = ApiResponse::deserialize(response)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or_else(|| ProviderError::missing_field("content[0].text"))
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
