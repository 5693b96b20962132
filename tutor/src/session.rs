//! # Session Module
//!
//! This module drives the question cycle for one learner: generate a
//! question, evaluate submits against it until one is correct, then replace
//! it wholesale with the next one. The session is the only holder of the
//! current [`InequalityFact`]; everything downstream works from the display
//! text.

use crate::SubmissionJob;
use crate::error::TutorError;
use crate::report::SubmissionReport;
use crate::types::GraphSnapshot;
use question::formatter::display_text;
use question::generator;
use question::types::InequalityFact;
use rand::Rng;
use util::session_config::SessionConfig;

/// Owns the current question and its display text.
pub struct TutorSession<R: Rng> {
    rng: R,
    config: SessionConfig,
    fact: InequalityFact,
    prompt: String,
}

impl<R: Rng> TutorSession<R> {
    /// Create a session and generate its first question.
    pub fn new(mut rng: R, config: SessionConfig) -> Self {
        let fact = generator::generate(&mut rng, &config.question);
        let prompt = display_text(&fact);
        Self {
            rng,
            config,
            fact,
            prompt,
        }
    }

    /// The display text of the current question.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The fact behind the current question.
    pub fn fact(&self) -> &InequalityFact {
        &self.fact
    }

    /// Evaluate a submit against the current question.
    pub fn submit(&self, snapshot: Option<GraphSnapshot>) -> Result<SubmissionReport, TutorError> {
        SubmissionJob::new(self.prompt.clone(), snapshot, self.config.graph.clone()).evaluate()
    }

    /// Replace the current question with a freshly generated one and return
    /// its display text.
    pub fn next_question(&mut self) -> &str {
        self.fact = generator::generate(&mut self.rng, &self.config.question);
        self.prompt = display_text(&self.fact);
        &self.prompt
    }
}
