//!
//! Solution Parser Module
//!
//! This module re-derives the canonical solution from displayed inequality
//! text. The text is normalized (Unicode `\u{2265}`/`\u{2264}` to ASCII
//! `>=`/`<=`) and then matched against the compound pattern before the
//! single pattern: compound text ends in `x {op} {int}`, which a naive
//! single match would also accept.
//!
//! # Error Handling
//!
//! Returns [`TutorError::MalformedPrompt`] when the text matches neither
//! form. The parser only ever receives generator-produced prompts, so a
//! no-match is an internal invariant violation, not a learner-facing error.

use crate::error::TutorError;
use crate::types::{CircleType, ExpectedSolution, ShadingDirection};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::error;

static COMPOUND_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(-?\d+)\s*(<=|<)\s*x\s*(<=|<)\s*(-?\d+)").unwrap());

static SINGLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"x\s*(>=|<=|>|<)\s*(-?\d+)").unwrap());

/// Parses displayed inequality text into an [`ExpectedSolution`].
pub struct SolutionParser;

impl SolutionParser {
    /// Parse one prompt.
    ///
    /// Boundary circles are open for strict operators and closed for
    /// inclusive ones; single-boundary shading points right for `>`/`>=`
    /// and left for `<`/`<=`.
    pub fn parse(&self, text: &str) -> Result<ExpectedSolution, TutorError> {
        let normalized = text.replace('\u{2265}', ">=").replace('\u{2264}', "<=");

        // Compound first; see module docs.
        if let Some(caps) = COMPOUND_PATTERN.captures(&normalized) {
            return Ok(ExpectedSolution::Compound {
                left: parse_boundary(&caps[1], text)?,
                right: parse_boundary(&caps[4], text)?,
                left_circle: circle_type(&caps[2]),
                right_circle: circle_type(&caps[3]),
            });
        }

        if let Some(caps) = SINGLE_PATTERN.captures(&normalized) {
            let op = &caps[1];
            return Ok(ExpectedSolution::Single {
                boundary: parse_boundary(&caps[2], text)?,
                circle: circle_type(op),
                shading: if op.starts_with('>') {
                    ShadingDirection::Right
                } else {
                    ShadingDirection::Left
                },
            });
        }

        error!("inequality text matched neither supported form: {text:?}");
        Err(TutorError::MalformedPrompt(text.to_string()))
    }
}

fn circle_type(op: &str) -> CircleType {
    match op {
        "<" | ">" => CircleType::Open,
        _ => CircleType::Closed,
    }
}

fn parse_boundary(digits: &str, prompt: &str) -> Result<i32, TutorError> {
    digits
        .parse()
        .map_err(|_| TutorError::MalformedPrompt(prompt.to_string()))
}
