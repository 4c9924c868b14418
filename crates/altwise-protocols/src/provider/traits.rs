//! Provider adapter trait definition.

use serde_json::Value;

use super::{ProviderRequest, ProviderTag};
use crate::error::ProviderError;
use crate::types::ImageSource;

/// Translation between the pipeline and one vendor wire format.
///
/// Adapters only shape and read JSON; sending the request is the
/// transport's job.
pub trait ProviderAdapter: Send + Sync {
    /// Wire format implemented by this adapter.
    fn tag(&self) -> ProviderTag;

    /// Model used when the configuration names none.
    fn default_model(&self) -> &str;

    /// Shape a text-only chat request.
    fn build_text_request(&self, prompt: &str, model: Option<&str>) -> ProviderRequest;

    /// Shape a request carrying one image plus a text prompt.
    fn build_vision_request(
        &self,
        image: &ImageSource,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<ProviderRequest, ProviderError>;

    /// The vendor's image content block for `image`.
    fn build_image_payload(&self, image: &ImageSource) -> Result<Value, ProviderError>;

    /// Pull the model's free text out of a raw response body.
    fn extract_response_text(&self, response: &Value) -> Result<String, ProviderError>;
}
