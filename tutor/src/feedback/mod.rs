//! # Feedback Strategies Module
//!
//! This module provides pluggable feedback strategies for the tutor system.
//! Each strategy implements the [`crate::traits::feedback::Feedback`] trait
//! and produces an ordered hint script from a graded submission.
//!
//! ## Available Strategies
//!
//! - [`socratic`]: Guides with questions and affirmations of what is already
//!   right, without stating the correction directly.

pub mod socratic;
