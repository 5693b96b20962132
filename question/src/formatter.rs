//! # Formatter Module
//!
//! Renders an [`InequalityFact`] to the canonical display text shown to the
//! learner. The grading side re-parses this exact text, so the format is a
//! contract: tokens separated by single spaces, integers in plain decimal,
//! and the Unicode comparison glyphs for inclusive operators.

use crate::types::InequalityFact;

/// Render a fact to its display text.
///
/// Single facts render as `x {op} {boundary}`; compound facts as
/// `{lower} {op} x {op} {upper}`.
pub fn display_text(fact: &InequalityFact) -> String {
    match fact {
        InequalityFact::Single { boundary, op } => {
            format!("x {} {}", op.glyph(), boundary)
        }
        InequalityFact::Compound {
            lower,
            upper,
            lower_op,
            upper_op,
        } => {
            format!(
                "{} {} x {} {}",
                lower,
                lower_op.glyph(),
                upper_op.glyph(),
                upper
            )
        }
    }
}
