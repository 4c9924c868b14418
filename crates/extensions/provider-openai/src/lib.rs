//! OpenAI chat-completions wire format for altwise.
//!
//! Also serves endpoints that cannot be identified, since most
//! self-hosted gateways speak the same request shape.

mod adapter;
mod api;

pub use adapter::{DEFAULT_API_URL, DEFAULT_MODEL, OpenAIAdapter};
