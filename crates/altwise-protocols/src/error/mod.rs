//! Error types for the altwise protocol layer.

mod image;
mod normalize;
mod pipeline;
mod provider;

pub use image::*;
pub use normalize::*;
pub use pipeline::*;
pub use provider::*;
