//! Anthropic messages wire format for altwise.

mod adapter;
mod api;

pub use adapter::{ANTHROPIC_VERSION, AnthropicAdapter, DEFAULT_API_URL, DEFAULT_MODEL};
