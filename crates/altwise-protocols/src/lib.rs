//! # altwise Protocols
//!
//! Shared data model for the altwise accessibility pipeline.
//! Contains only types and interface definitions - no network or file I/O.
//!
//! ## Core Items
//!
//! - [`ScannedNode`] - An `<svg>` or `<img>` span found in a document
//! - [`Suggestion`] - Decorative/informative verdict plus generated text
//! - [`ProviderTag`] - Vendor wire format derived from an endpoint
//! - [`ProviderAdapter`] - Trait implemented once per vendor wire format
//! - [`ClientConfig`] - Resolved credentials handed to the pipeline

pub mod error;
pub mod provider;
pub mod types;

pub use error::{ImageSourceError, NormalizeError, PipelineError, ProviderError};
pub use provider::{ProviderAdapter, ProviderRequest, ProviderTag, detect_provider};
pub use types::*;
