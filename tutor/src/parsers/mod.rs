//! # Parsers
//!
//! This module parses the displayed inequality text back into the canonical
//! expected solution. The grader deliberately operates on text rather than
//! on the generated fact, so that what is judged is exactly what the learner
//! was shown.

pub mod solution_parser;
