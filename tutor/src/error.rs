//! Tutor Error Types
//!
//! This module defines the [`TutorError`] enum for failures in the grading
//! pipeline. Incomplete or ambiguous graph state is deliberately not an
//! error: the interpreter reports it as an indeterminate answer and the
//! feedback layer turns that into an actionable hint. The variants here
//! cover the cases where no graded outcome is meaningful at all.

use thiserror::Error;

/// Errors surfaced by the tutoring pipeline.
#[derive(Debug, Error)]
pub enum TutorError {
    /// The displayed inequality text matched neither supported form.
    /// Prompts are always generator-produced, so this is an internal
    /// invariant violation rather than a learner-facing failure.
    #[error("unparseable inequality text: {0:?}")]
    MalformedPrompt(String),

    /// The widget handed over snapshot JSON that does not deserialize.
    #[error("invalid graph snapshot JSON: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}
