//! # Types Module
//!
//! This module defines the fact model for inequality questions. A fact is
//! immutable once generated and is replaced wholesale when the session moves
//! on to the next question.

use serde::{Deserialize, Serialize};

/// Comparison operator of a one-boundary inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareOp {
    Greater,
    Less,
    GreaterEq,
    LessEq,
}

impl CompareOp {
    /// All four operators, in a fixed order for uniform selection.
    pub const ALL: [CompareOp; 4] = [
        CompareOp::Greater,
        CompareOp::Less,
        CompareOp::GreaterEq,
        CompareOp::LessEq,
    ];

    /// The exact glyph used in displayed inequality text. `GreaterEq` and
    /// `LessEq` render as the Unicode comparison characters, never ASCII
    /// `>=`/`<=`.
    pub fn glyph(&self) -> &'static str {
        match self {
            CompareOp::Greater => ">",
            CompareOp::Less => "<",
            CompareOp::GreaterEq => "\u{2265}",
            CompareOp::LessEq => "\u{2264}",
        }
    }

    /// True for `<` and `>`, where the boundary value itself is excluded
    /// from the solution set.
    pub fn is_strict(&self) -> bool {
        matches!(self, CompareOp::Greater | CompareOp::Less)
    }
}

/// Operator on either side of a compound inequality. Compound questions are
/// always of the form `a OP x OP b`, so only `<` and `\u{2264}` occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BetweenOp {
    Less,
    LessEq,
}

impl BetweenOp {
    pub const ALL: [BetweenOp; 2] = [BetweenOp::Less, BetweenOp::LessEq];

    pub fn glyph(&self) -> &'static str {
        match self {
            BetweenOp::Less => "<",
            BetweenOp::LessEq => "\u{2264}",
        }
    }

    /// True for `<`, where the boundary value itself is excluded.
    pub fn is_strict(&self) -> bool {
        matches!(self, BetweenOp::Less)
    }
}

/// A generated inequality question.
///
/// - `Single`: one boundary compared to `x` with any of the four operators.
/// - `Compound`: `x` between two boundaries, `lower` strictly less than
///   `upper`, each side restricted to `<` or `\u{2264}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum InequalityFact {
    Single {
        boundary: i32,
        op: CompareOp,
    },
    Compound {
        lower: i32,
        upper: i32,
        lower_op: BetweenOp,
        upper_op: BetweenOp,
    },
}
