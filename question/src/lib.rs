//! # Question Library
//!
//! This module provides the question side of the inequality tutor: the fact
//! model for linear inequalities over a small integer range, random question
//! generation, and rendering of a fact to its canonical display text.
//!
//! ## Key Concepts
//! - **InequalityFact**: A generated question, either a one-boundary or a
//!   two-boundary (compound) inequality.
//! - **Generator**: Draws the next fact from an injected random source, so
//!   tests can seed the sequence deterministically.
//! - **Formatter**: Renders a fact to the exact text shown to the learner,
//!   which downstream grading re-parses.

pub mod formatter;
pub mod generator;
pub mod types;
