//! Pipeline errors.

use thiserror::Error;

/// The only failure a suggestion request reports to its caller.
///
/// Transport and parse failures never surface here; they degrade to the
/// next strategy and end up as warnings on the outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Suggestion request was cancelled")]
    Cancelled,
}
