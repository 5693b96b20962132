//! # Submission Report Module
//!
//! This module defines the data structures and response envelope for
//! returning one submit-evaluate result to the view layer.
//!
//! ## Overview
//!
//! The main types are:
//! - [`SubmissionReport`]: The graded outcome of one submission, including
//!   the hint script.
//! - [`SubmissionReportResponse`]: A response envelope that wraps a
//!   [`SubmissionReport`] with success and message fields.
//!
//! [`SubmissionReport`] is intended for presentation output. It contains
//! only serializable fields and is not used inside the grading logic.

use crate::types::GradeResult;
use serde::Serialize;

/// The result of evaluating one submission.
#[derive(Debug, Serialize)]
pub struct SubmissionReport {
    /// The inequality text the learner was asked to graph.
    pub prompt: String,
    /// True when the graph encodes the solution set exactly.
    pub correct: bool,
    /// Ordered hint lines; a single affirmation when correct.
    pub feedback: Vec<String>,
    /// Field-level grade; absent when the graph could not be interpreted.
    pub grade: Option<GradeResult>,
    /// RFC 3339 timestamp of the evaluation.
    pub created_at: String,
}

/// The response envelope for submission results.
///
/// Wraps a [`SubmissionReport`] and adds top-level `success` and `message`
/// fields for consistency with other view-layer responses.
#[derive(Debug, Serialize)]
pub struct SubmissionReportResponse {
    /// Indicates the evaluation ran to completion.
    success: bool,
    /// A human-readable message for the client.
    message: String,
    /// The detailed submission report.
    data: SubmissionReport,
}

impl From<SubmissionReport> for SubmissionReportResponse {
    fn from(report: SubmissionReport) -> Self {
        SubmissionReportResponse {
            success: true,
            message: "Submission graded.".to_string(),
            data: report,
        }
    }
}
