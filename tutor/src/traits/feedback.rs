//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait, used to implement pluggable
//! feedback strategies for the tutor system. Each strategy turns a graded
//! submission into an ordered list of hint lines for sequential display;
//! ordering itself conveys escalation, so there is no severity field.
//!

use crate::types::{ExpectedSolution, GradeResult};

/// A trait for pluggable feedback strategies.
///
/// Implement this trait to define how a hint script is composed from a
/// graded submission.
///
/// # Arguments
/// - `prompt`: The inequality display text the learner was asked to graph.
/// - `expected`: The canonical solution for the prompt.
/// - `grade`: The field-level grade, or `None` when the graph state could
///   not be interpreted; a strategy must still produce an actionable script
///   in that case.
///
/// # Returns
/// An ordered list of hint lines. The strategy is total: every input yields
/// a script, never an error.
pub trait Feedback: Send + Sync {
    fn assemble_feedback(
        &self,
        prompt: &str,
        expected: &ExpectedSolution,
        grade: Option<&GradeResult>,
    ) -> Vec<String>;
}
