//! # Types Module
//!
//! This module defines the core data structures used throughout the tutor
//! system: the snapshot handed over by the graph widget, the canonical
//! expected solution, the interpreted student answer, and the field-level
//! grade produced by comparing the two.

use crate::error::TutorError;
use serde::{Deserialize, Serialize};

/// Whether a boundary circle includes its tick value. An open circle
/// excludes the boundary (strict inequality); a closed (filled) circle
/// includes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleType {
    Open,
    Closed,
}

/// The side of a single boundary that represents the solution region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingDirection {
    Left,
    Right,
}

/// Structural category of an inequality answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    Single,
    Compound,
}

/// The canonical solution derived from the displayed inequality text,
/// normalized to circle/shading vocabulary.
///
/// Invariants: the circle is open iff the operator is strict, and shading
/// points right iff the operator is `>` or `\u{2265}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum ExpectedSolution {
    Single {
        boundary: i32,
        circle: CircleType,
        shading: ShadingDirection,
    },
    Compound {
        left: i32,
        right: i32,
        left_circle: CircleType,
        right_circle: CircleType,
    },
}

impl ExpectedSolution {
    pub fn kind(&self) -> AnswerKind {
        match self {
            ExpectedSolution::Single { .. } => AnswerKind::Single,
            ExpectedSolution::Compound { .. } => AnswerKind::Compound,
        }
    }
}

/// A student's graph reading, as interpreted from a widget snapshot.
///
/// Kept as a separate type from [`ExpectedSolution`] so grader arguments
/// cannot be swapped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum StudentAnswer {
    Single {
        boundary: i32,
        circle: CircleType,
        shading: ShadingDirection,
    },
    Compound {
        left: i32,
        right: i32,
        left_circle: CircleType,
        right_circle: CircleType,
    },
}

impl StudentAnswer {
    pub fn kind(&self) -> AnswerKind {
        match self {
            StudentAnswer::Single { .. } => AnswerKind::Single,
            StudentAnswer::Compound { .. } => AnswerKind::Compound,
        }
    }
}

/// One shaded segment on the number line. Endpoint order carries no
/// meaning; use [`Segment::left`] and [`Segment::right`] for the sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start_value: f64,
    pub end_value: f64,
}

impl Segment {
    /// The smaller endpoint.
    pub fn left(&self) -> f64 {
        self.start_value.min(self.end_value)
    }

    /// The larger endpoint.
    pub fn right(&self) -> f64 {
        self.start_value.max(self.end_value)
    }
}

/// An immutable copy of the graph widget's state, taken at submit time.
///
/// The widget owns and mutates the live drawing; the tutor only ever reads
/// a copy handed over at the moment of submit. No cardinality is enforced
/// here: any number of circles and segments may be present, and the
/// interpreter decides what is readable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    /// Tick values marked with an open circle.
    #[serde(default)]
    pub empty_circle_ticks: Vec<i32>,
    /// Tick values marked with a filled circle.
    #[serde(default)]
    pub filled_circle_ticks: Vec<i32>,
    /// Shaded segments, in draw order.
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl GraphSnapshot {
    /// Deserialize a snapshot from the widget's camelCase JSON wire format.
    pub fn from_json(raw: &str) -> Result<Self, TutorError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Field-level disagreement flags for a single-boundary answer.
/// A `true` flag means the field disagrees with the expected solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SingleFieldErrors {
    pub boundary: bool,
    pub circle: bool,
    pub shading: bool,
}

/// Field-level disagreement flags for a compound answer.
/// A `true` flag means the field disagrees with the expected solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompoundFieldErrors {
    pub left_boundary: bool,
    pub right_boundary: bool,
    pub left_circle: bool,
    pub right_circle: bool,
}

/// Outcome of grading a student answer against the expected solution.
///
/// Exactly one variant is meaningful per grade: a structural mismatch never
/// carries field flags, and field flags only exist when the categories agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum GradeResult {
    /// The student graphed the wrong structural category of inequality.
    TypeMismatch {
        expected: AnswerKind,
        student: AnswerKind,
    },
    Single(SingleFieldErrors),
    Compound(CompoundFieldErrors),
}

impl GradeResult {
    /// True only when every compared field matches exactly.
    pub fn is_correct(&self) -> bool {
        match self {
            GradeResult::TypeMismatch { .. } => false,
            GradeResult::Single(errors) => !errors.boundary && !errors.circle && !errors.shading,
            GradeResult::Compound(errors) => {
                !errors.left_boundary
                    && !errors.right_boundary
                    && !errors.left_circle
                    && !errors.right_circle
            }
        }
    }
}
