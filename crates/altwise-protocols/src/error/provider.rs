//! Provider errors.

use thiserror::Error;

/// Longest response body kept in an [`ProviderError::ApiError`] message.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    #[error("Render failed: {0}")]
    RenderFailed(String),
}

impl ProviderError {
    /// Build an API error from a non-2xx status, keeping at most
    /// [`MAX_ERROR_BODY_CHARS`] characters of the body.
    pub fn from_api_response(status: u16, body: impl AsRef<str>) -> Self {
        let body = body.as_ref();
        let message = match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
            Some((cut, _)) => body[..cut].to_string(),
            None => body.to_string(),
        };
        ProviderError::ApiError { status, message }
    }

    /// Missing vendor field path in an otherwise valid JSON response.
    pub fn missing_field(path: &str) -> Self {
        ProviderError::InvalidResponse(format!("missing field `{}`", path))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
