//! Image source resolution errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageSourceError {
    #[error("Image file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unresolvable image source: {0}")]
    Unresolvable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
