//! Common types used across the pipeline.

mod config;
mod image;
mod node;
mod suggestion;

pub use config::*;
pub use image::*;
pub use node::*;
pub use suggestion::*;
