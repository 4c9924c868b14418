//! Response normalization errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("No JSON object found in response text")]
    NoJsonObject,

    #[error("Invalid JSON object: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
