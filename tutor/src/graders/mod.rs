//! # Graders
//!
//! This module provides graders for judging a student's graph reading
//! against the expected solution. Each grader implements the
//! [`crate::traits::grader::AnswerGrader`] trait, which defines a common
//! interface so grading strategies stay interchangeable within the tutor
//! system.
//!
//! The available graders are:
//! - [`structural_grader`]: Compares answers field by field with exact
//!   equality.

pub mod structural_grader;
