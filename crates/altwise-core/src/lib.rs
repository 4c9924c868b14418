//! # altwise Core
//!
//! Turns a flagged node into a [`Suggestion`](altwise_protocols::Suggestion).
//!
//! ## Components
//!
//! - [`adapter_for`] - Picks the vendor adapter for an endpoint, once
//! - [`normalize_suggestion`] - Reads a suggestion out of free model text
//! - [`Transport`] - Sends a shaped request; [`HttpTransport`] uses reqwest
//! - [`ImageReader`] / [`resolve_img_source`] - Local and remote `<img>` sources
//! - [`SvgRenderer`] - Turns SVG markup into an image payload for vision mode
//! - [`SuggestionPipeline`] - Vision, text and heuristic strategies in order

mod dispatch;
mod generic;
pub mod image_source;
mod normalize;
pub mod pipeline;
mod prompt;
pub mod render;
pub mod transport;

pub use dispatch::adapter_for;
pub use generic::GenericAdapter;
pub use image_source::{FsImageReader, ImageReader, parse_data_uri, resolve_img_source};
pub use normalize::{extract_json_object, normalize_suggestion};
pub use pipeline::{PipelineBuilder, Strategy, SuggestionOutcome, SuggestionPipeline};
pub use render::{MarkupSvgRenderer, SvgRenderer};
pub use transport::{HttpTransport, Transport};
