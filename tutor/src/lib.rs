//! # Tutor Library
//!
//! This module provides the core logic for judging number-line graphs of
//! linear inequalities and composing Socratic feedback. It supports parsing
//! a displayed inequality back into its canonical solution, interpreting a
//! graph-widget snapshot into a structured answer, comparing the two field
//! by field, and selecting a hint script from a fixed decision tree.
//!
//! ## Key Concepts
//! - **SubmissionJob**: The main struct representing one submit-evaluate
//!   cycle for the current question.
//! - **Graders**: Pluggable strategies for comparing the student's reading
//!   against the expected solution.
//! - **Feedback**: Pluggable hint-script composition; the default is the
//!   Socratic decision tree.
//! - **Reports**: Structured output wrapping the verdict and hint script
//!   for the view layer.

pub mod error;
pub mod feedback;
pub mod graders;
pub mod interpreter;
pub mod parsers;
pub mod report;
pub mod session;
pub mod traits;
pub mod types;

use crate::error::TutorError;
use crate::feedback::socratic::SocraticFeedback;
use crate::graders::structural_grader::StructuralGrader;
use crate::interpreter::GraphStateInterpreter;
use crate::parsers::solution_parser::SolutionParser;
use crate::report::SubmissionReport;
use crate::traits::feedback::Feedback;
use crate::traits::grader::AnswerGrader;
use crate::types::GraphSnapshot;

use chrono::Utc;
use util::session_config::GraphOptions;

/// Represents one submit-evaluate cycle for a single question.
///
/// The job owns an immutable copy of the widget state taken at submit time;
/// the live drawing stays with the widget. Grader and feedback strategies
/// default to [`StructuralGrader`] and [`SocraticFeedback`] and can be
/// swapped with the builder methods.
pub struct SubmissionJob<'a> {
    prompt: String,
    snapshot: Option<GraphSnapshot>,
    grader: Box<dyn AnswerGrader + 'a>,
    feedback: Box<dyn Feedback + 'a>,
    config: GraphOptions,
}

impl<'a> SubmissionJob<'a> {
    /// Create a new submission job.
    ///
    /// # Arguments
    /// * `prompt` - The inequality display text the learner was shown.
    /// * `snapshot` - The widget snapshot captured at submit time, if any.
    /// * `config` - Graph interpretation options.
    pub fn new(
        prompt: impl Into<String>,
        snapshot: Option<GraphSnapshot>,
        config: GraphOptions,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            snapshot,
            grader: Box::new(StructuralGrader),
            feedback: Box::new(SocraticFeedback),
            config,
        }
    }

    /// Set a custom grading strategy for this job.
    pub fn with_grader<G: AnswerGrader + 'a>(mut self, grader: G) -> Self {
        self.grader = Box::new(grader);
        self
    }

    /// Set a custom feedback strategy for this job.
    pub fn with_feedback<F: Feedback + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Run the evaluation pipeline and produce a report.
    ///
    /// # Steps
    /// 1. Re-derives the canonical solution from the prompt text.
    /// 2. Interprets the snapshot into a student answer, or decides it is
    ///    unreadable.
    /// 3. Grades the answer field by field when one was readable.
    /// 4. Composes the hint script and wraps everything in a report.
    ///
    /// # Errors
    /// Returns [`TutorError::MalformedPrompt`] if the prompt text matches
    /// neither inequality form; every readable-or-not snapshot still yields
    /// an `Ok` report.
    pub fn evaluate(self) -> Result<SubmissionReport, TutorError> {
        let expected = SolutionParser.parse(&self.prompt)?;
        let student = GraphStateInterpreter.interpret(self.snapshot.as_ref(), &self.config);
        let grade = student
            .as_ref()
            .map(|answer| self.grader.grade(answer, &expected));
        let correct = grade.as_ref().is_some_and(|grade| grade.is_correct());
        let feedback = self
            .feedback
            .assemble_feedback(&self.prompt, &expected, grade.as_ref());

        Ok(SubmissionReport {
            prompt: self.prompt,
            correct,
            feedback,
            grade,
            created_at: Utc::now().to_rfc3339(),
        })
    }
}
