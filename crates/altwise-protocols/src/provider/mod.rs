//! Provider protocol definitions.
//!
//! Each vendor wire format (OpenAI-like, Anthropic-like, Google-like and a
//! generic fallback) implements [`ProviderAdapter`]. The adapter is chosen
//! once from the configured endpoint via [`detect_provider`].

mod request;
mod tag;
mod traits;

pub use request::*;
pub use tag::*;
pub use traits::*;
