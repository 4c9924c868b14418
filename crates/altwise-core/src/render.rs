//! SVG to image conversion for vision requests.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use altwise_protocols::{ImageSource, ProviderError};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Produces an image payload from SVG markup.
pub trait SvgRenderer: Send + Sync {
    fn render(&self, markup: &str) -> Result<ImageSource, ProviderError>;
}

/// Wraps the markup itself as an `image/svg+xml` payload.
///
/// Vision endpoints take raster images only, so the pipeline turns this
/// payload down before sending it and SVG goes to the text prompt. Swap in
/// a rasterising renderer to use vision for SVG.
///
/// Standalone SVG needs the namespace declaration, which inline HTML SVG
/// often leaves out; it is added when missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupSvgRenderer;

impl SvgRenderer for MarkupSvgRenderer {
    fn render(&self, markup: &str) -> Result<ImageSource, ProviderError> {
        let markup = markup.trim();
        if markup.is_empty() {
            return Err(ProviderError::RenderFailed("empty SVG markup".to_string()));
        }
        if !markup.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("<svg")) {
            return Err(ProviderError::RenderFailed("markup is not an <svg> element".to_string()));
        }

        let document = if markup.contains("xmlns=") {
            markup.to_string()
        } else {
            format!("<svg xmlns=\"{}\"{}", SVG_NS, &markup[4..])
        };
        Ok(ImageSource::base64("image/svg+xml", STANDARD.encode(document)))
    }
}
