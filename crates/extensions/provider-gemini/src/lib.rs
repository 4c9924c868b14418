//! Google Gemini `generateContent` wire format for altwise.
//!
//! The API key travels as a `key` query parameter, and the endpoint may
//! carry a `{model}` placeholder that is filled per request.

mod adapter;
mod types;

pub use adapter::{DEFAULT_API_URL, DEFAULT_MODEL, GeminiAdapter};
