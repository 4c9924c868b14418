//! Image payload sources for vision requests.

use serde::{Deserialize, Serialize};

/// Media types every supported vision endpoint accepts.
pub const VISION_MEDIA_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif", "image/webp"];

/// Image source for multimodal content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageSource {
    Base64 { media_type: String, data: String },
    Url { url: String },
}

impl ImageSource {
    pub fn base64(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        ImageSource::Base64 {
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url { url: url.into() }
    }

    /// Declared type for base64 sources, guessed from the extension for URLs.
    pub fn media_type(&self) -> &str {
        match self {
            ImageSource::Base64 { media_type, .. } => media_type,
            ImageSource::Url { url } => mime_for_path(url),
        }
    }

    /// Whether vision endpoints accept this payload. SVG and other
    /// non-raster formats are rejected by all of them.
    pub fn is_vision_ready(&self) -> bool {
        VISION_MEDIA_TYPES.contains(&self.media_type())
    }

    /// `data:` URI for base64 sources, the URL itself otherwise.
    pub fn to_uri(&self) -> String {
        match self {
            ImageSource::Base64 { media_type, data } => {
                format!("data:{};base64,{}", media_type, data)
            }
            ImageSource::Url { url } => url.clone(),
        }
    }
}

/// MIME type for an image path or URL, by extension.
///
/// Query strings and fragments are ignored. Unknown extensions default to
/// `image/jpeg`.
pub fn mime_for_path(path: &str) -> &'static str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let ext = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        _ => "image/jpeg",
    }
}
