//! The suggestion pipeline.
//!
//! Each request walks an ordered strategy list built once from the
//! [`ClientConfig`]:
//!
//! ```text
//! no credentials          -> [heuristic]
//! credentials             -> [text, heuristic]
//! credentials + vision    -> [vision, text, heuristic]
//! ```
//!
//! A failed stage is recorded as a warning and the next stage runs; no stage
//! is retried. Vision only runs on raster payloads, so SVG degrades to text
//! without a round-trip unless a rasterising [`SvgRenderer`] is installed.
//! The heuristic never fails, so every request that is not cancelled
//! produces a [`Suggestion`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use altwise_heuristic::{classify_img, classify_svg};
use altwise_protocols::provider::{DEFAULT_MAX_TOKENS, ProviderAdapter, ProviderRequest};
use altwise_protocols::{
    ClientConfig, ImageSource, ImageSourceError, ImgNode, NormalizeError, PipelineError,
    ProviderError, ScannedNode, Suggestion,
};

use crate::dispatch::adapter_for;
use crate::image_source::{FsImageReader, ImageReader, resolve_img_source};
use crate::normalize::normalize_suggestion;
use crate::prompt;
use crate::render::{MarkupSvgRenderer, SvgRenderer};
use crate::transport::{HttpTransport, Transport};

/// Default whole-request timeout for provider calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// How a suggestion was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Vision,
    Text,
    Heuristic,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Vision => "vision",
            Strategy::Text => "text",
            Strategy::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggestion plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionOutcome {
    pub suggestion: Suggestion,
    pub strategy: Strategy,
    /// One entry per degraded stage, in order.
    pub warnings: Vec<String>,
}

#[derive(Debug, Error)]
enum StageError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("unusable response: {0}")]
    Normalize(#[from] NormalizeError),
    #[error("image source: {0}")]
    Image(#[from] ImageSourceError),
}

/// Builder for [`SuggestionPipeline`].
pub struct PipelineBuilder {
    config: ClientConfig,
    timeout: Duration,
    max_tokens: u32,
    transport: Option<Arc<dyn Transport>>,
    reader: Arc<dyn ImageReader>,
    renderer: Arc<dyn SvgRenderer>,
    base_dir: Option<PathBuf>,
}

impl PipelineBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Use `transport` instead of an HTTP client built from the timeout.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn reader(mut self, reader: Arc<dyn ImageReader>) -> Self {
        self.reader = reader;
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn SvgRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Directory relative `<img src>` paths are resolved against.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Result<SuggestionPipeline, ProviderError> {
        let adapter = self
            .config
            .credentials()
            .map(|(endpoint, api_key)| adapter_for(endpoint, api_key, self.max_tokens));

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.timeout)?),
        };

        Ok(SuggestionPipeline {
            config: self.config,
            adapter,
            transport,
            reader: self.reader,
            renderer: self.renderer,
            base_dir: self.base_dir,
        })
    }
}

/// Produces accessibility suggestions for scanned nodes.
pub struct SuggestionPipeline {
    config: ClientConfig,
    /// `None` when the config has no usable endpoint and key.
    adapter: Option<Arc<dyn ProviderAdapter>>,
    transport: Arc<dyn Transport>,
    reader: Arc<dyn ImageReader>,
    renderer: Arc<dyn SvgRenderer>,
    base_dir: Option<PathBuf>,
}

impl SuggestionPipeline {
    pub fn builder(config: ClientConfig) -> PipelineBuilder {
        PipelineBuilder {
            config,
            timeout: DEFAULT_TIMEOUT,
            max_tokens: DEFAULT_MAX_TOKENS,
            transport: None,
            reader: Arc::new(FsImageReader),
            renderer: Arc::new(MarkupSvgRenderer),
            base_dir: None,
        }
    }

    pub fn new(config: ClientConfig) -> Result<Self, ProviderError> {
        Self::builder(config).build()
    }

    /// Ordered strategies tried for every request.
    pub fn strategies(&self) -> Vec<Strategy> {
        match (&self.adapter, self.config.use_vision) {
            (None, _) => vec![Strategy::Heuristic],
            (Some(_), true) => vec![Strategy::Vision, Strategy::Text, Strategy::Heuristic],
            (Some(_), false) => vec![Strategy::Text, Strategy::Heuristic],
        }
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Suggest an accessible name for any scanned node.
    pub async fn suggest(
        &self,
        node: &ScannedNode,
        cancel: &CancellationToken,
    ) -> Result<SuggestionOutcome, PipelineError> {
        match node {
            ScannedNode::Svg(n) => self.suggest_svg(&n.raw_markup, cancel).await,
            ScannedNode::Img(n) => self.suggest_img(n, cancel).await,
        }
    }

    /// Suggest a `<title>`/`<desc>` for SVG markup.
    pub async fn suggest_svg(
        &self,
        markup: &str,
        cancel: &CancellationToken,
    ) -> Result<SuggestionOutcome, PipelineError> {
        let mut warnings = Vec::new();

        if let Some(adapter) = &self.adapter {
            for strategy in self.strategies() {
                check_cancelled(cancel)?;
                let attempt = match strategy {
                    Strategy::Vision => self.svg_vision(adapter.as_ref(), markup).await,
                    Strategy::Text => {
                        let text = prompt::svg_text_prompt(markup);
                        self.complete(adapter.as_ref(), self.text_request(adapter.as_ref(), &text))
                            .await
                    }
                    Strategy::Heuristic => break,
                };
                match attempt {
                    Ok(suggestion) => return Ok(finish(suggestion, strategy, warnings)),
                    Err(e) => degrade(strategy, e, &mut warnings),
                }
            }
        } else {
            debug!("no provider credentials, using heuristic");
        }

        check_cancelled(cancel)?;
        Ok(finish(classify_svg(markup), Strategy::Heuristic, warnings))
    }

    /// Suggest an `alt` text for an `<img>`.
    ///
    /// In vision mode an image source that cannot be resolved or read skips
    /// every network stage.
    pub async fn suggest_img(
        &self,
        node: &ImgNode,
        cancel: &CancellationToken,
    ) -> Result<SuggestionOutcome, PipelineError> {
        let src = node.src.as_deref().unwrap_or("");
        let mut warnings = Vec::new();

        if let Some(adapter) = &self.adapter {
            for strategy in self.strategies() {
                check_cancelled(cancel)?;
                let attempt = match strategy {
                    Strategy::Vision => self.img_vision(adapter.as_ref(), src).await,
                    Strategy::Text => {
                        let text = prompt::img_text_prompt(src, &node.raw_markup);
                        self.complete(adapter.as_ref(), self.text_request(adapter.as_ref(), &text))
                            .await
                    }
                    Strategy::Heuristic => break,
                };
                match attempt {
                    Ok(suggestion) => return Ok(finish(suggestion, strategy, warnings)),
                    Err(e @ StageError::Image(_)) => {
                        degrade_to(strategy, Strategy::Heuristic, &e, &mut warnings);
                        break;
                    }
                    Err(e) => degrade(strategy, e, &mut warnings),
                }
            }
        } else {
            debug!("no provider credentials, using heuristic");
        }

        check_cancelled(cancel)?;
        Ok(finish(classify_img(src), Strategy::Heuristic, warnings))
    }

    fn text_request(&self, adapter: &dyn ProviderAdapter, prompt: &str) -> ProviderRequest {
        adapter.build_text_request(prompt, self.config.model())
    }

    async fn svg_vision(
        &self,
        adapter: &dyn ProviderAdapter,
        markup: &str,
    ) -> Result<Suggestion, StageError> {
        let image = self.renderer.render(markup)?;
        let request = self.vision_request(adapter, &image)?;
        self.complete(adapter, request).await
    }

    async fn img_vision(
        &self,
        adapter: &dyn ProviderAdapter,
        src: &str,
    ) -> Result<Suggestion, StageError> {
        let image = resolve_img_source(src, self.base_dir(), self.reader.as_ref()).await?;
        let request = self.vision_request(adapter, &image)?;
        self.complete(adapter, request).await
    }

    /// Vendors only take raster images; anything else fails here, before
    /// a request is sent.
    fn vision_request(
        &self,
        adapter: &dyn ProviderAdapter,
        image: &ImageSource,
    ) -> Result<ProviderRequest, ProviderError> {
        if !image.is_vision_ready() {
            return Err(ProviderError::UnsupportedImage(image.media_type().to_string()));
        }
        adapter.build_vision_request(image, &prompt::vision_prompt(), self.config.model())
    }

    /// One round-trip: send, extract the model text, normalize it.
    async fn complete(
        &self,
        adapter: &dyn ProviderAdapter,
        request: ProviderRequest,
    ) -> Result<Suggestion, StageError> {
        let body = self.transport.post_json(&request).await?;
        let text = adapter.extract_response_text(&body)?;
        Ok(normalize_suggestion(&text)?)
    }
}

fn check_cancelled(cancel: &CancellationToken) -> Result<(), PipelineError> {
    if cancel.is_cancelled() {
        debug!("suggestion request cancelled");
        return Err(PipelineError::Cancelled);
    }
    Ok(())
}

fn next_strategy(strategy: Strategy) -> Strategy {
    match strategy {
        Strategy::Vision => Strategy::Text,
        Strategy::Text | Strategy::Heuristic => Strategy::Heuristic,
    }
}

fn degrade(strategy: Strategy, error: StageError, warnings: &mut Vec<String>) {
    degrade_to(strategy, next_strategy(strategy), &error, warnings);
}

fn degrade_to(from: Strategy, to: Strategy, error: &StageError, warnings: &mut Vec<String>) {
    warn!(from = %from, to = %to, error = %error, "suggestion stage failed");
    warnings.push(format!("{} suggestion failed ({}), falling back to {}", from, error, to));
}

fn finish(suggestion: Suggestion, strategy: Strategy, warnings: Vec<String>) -> SuggestionOutcome {
    info!(strategy = %strategy, decorative = suggestion.is_decorative, "suggestion ready");
    SuggestionOutcome {
        suggestion: suggestion.enforce_decorative_invariant(),
        strategy,
        warnings,
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
