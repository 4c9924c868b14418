//! Adapter selection.

use std::sync::Arc;

use altwise_protocols::provider::{ProviderAdapter, ProviderTag, detect_provider};
use altwise_provider_anthropic::AnthropicAdapter;
use altwise_provider_gemini::GeminiAdapter;
use altwise_provider_openai::OpenAIAdapter;
use tracing::debug;

use crate::generic::GenericAdapter;

/// The adapter for `endpoint`, detected once from the endpoint string.
pub fn adapter_for(endpoint: &str, api_key: &str, max_tokens: u32) -> Arc<dyn ProviderAdapter> {
    let tag = detect_provider(endpoint);
    debug!(provider = %tag, "selected provider adapter");

    match tag {
        ProviderTag::OpenaiLike => {
            Arc::new(OpenAIAdapter::new(api_key, endpoint).with_max_tokens(max_tokens))
        }
        ProviderTag::AnthropicLike => {
            Arc::new(AnthropicAdapter::new(api_key, endpoint).with_max_tokens(max_tokens))
        }
        ProviderTag::GoogleLike => {
            Arc::new(GeminiAdapter::new(api_key, endpoint).with_max_tokens(max_tokens))
        }
        ProviderTag::Unknown => {
            Arc::new(GenericAdapter::new(api_key, endpoint).with_max_tokens(max_tokens))
        }
    }
}
