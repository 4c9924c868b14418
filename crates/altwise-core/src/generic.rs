//! Adapter for endpoints no vendor rule recognises.

use serde_json::Value;

use altwise_protocols::provider::{ProviderAdapter, ProviderRequest, ProviderTag};
use altwise_protocols::{ImageSource, ProviderError};
use altwise_provider_openai::OpenAIAdapter;

/// Vendor content paths tried in order when reading an unknown response.
const KNOWN_TEXT_PATHS: &[&str] = &[
    "/choices/0/message/content",
    "/content/0/text",
    "/candidates/0/content/parts/0/text",
    "/response",
];

/// Sends the OpenAI request shape and reads any known response shape.
///
/// Reading never fails: when no known path holds text, the whole body is
/// returned as a string so normalization can still look for a JSON object.
#[derive(Clone)]
pub struct GenericAdapter {
    inner: OpenAIAdapter,
}

impl GenericAdapter {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            inner: OpenAIAdapter::new(api_key, endpoint),
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.inner = self.inner.with_max_tokens(max_tokens);
        self
    }
}

impl ProviderAdapter for GenericAdapter {
    fn tag(&self) -> ProviderTag {
        ProviderTag::Unknown
    }

    fn default_model(&self) -> &str {
        self.inner.default_model()
    }

    fn build_text_request(&self, prompt: &str, model: Option<&str>) -> ProviderRequest {
        self.inner.build_text_request(prompt, model)
    }

    fn build_vision_request(
        &self,
        image: &ImageSource,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<ProviderRequest, ProviderError> {
        self.inner.build_vision_request(image, prompt, model)
    }

    fn build_image_payload(&self, image: &ImageSource) -> Result<Value, ProviderError> {
        self.inner.build_image_payload(image)
    }

    fn extract_response_text(&self, response: &Value) -> Result<String, ProviderError> {
        let text = KNOWN_TEXT_PATHS
            .iter()
            .find_map(|path| response.pointer(path).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| response.to_string());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn adapter() -> GenericAdapter {
        GenericAdapter::new("key", "http://localhost:8080/v1/chat")
    }

    #[test]
    fn test_request_uses_openai_shape() {
        let request = adapter().build_text_request("p", None);
        assert_eq!(request.header("Authorization"), Some("Bearer key"));
        assert_eq!(request.body["model"], "gpt-4o-mini");
        assert_eq!(request.body["messages"][1]["content"], "p");
        assert_eq!(adapter().tag(), ProviderTag::Unknown);
    }

    #[test]
    fn test_extract_tries_each_known_path() {
        let a = adapter();
        let openai = json!({"choices": [{"message": {"content": "o"}}]});
        let anthropic = json!({"content": [{"type": "text", "text": "a"}]});
        let gemini = json!({"candidates": [{"content": {"parts": [{"text": "g"}]}}]});
        let ollama = json!({"model": "llama3", "response": "r", "done": true});

        assert_eq!(a.extract_response_text(&openai).unwrap(), "o");
        assert_eq!(a.extract_response_text(&anthropic).unwrap(), "a");
        assert_eq!(a.extract_response_text(&gemini).unwrap(), "g");
        assert_eq!(a.extract_response_text(&ollama).unwrap(), "r");
    }

    #[test]
    fn test_extract_falls_back_to_whole_body() {
        let body = json!({"isDecorative": true});
        let text = adapter().extract_response_text(&body).unwrap();
        assert_eq!(text, r#"{"isDecorative":true}"#);
    }
}
