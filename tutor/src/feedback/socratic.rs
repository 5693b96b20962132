//! # Socratic Feedback Strategy
//!
//! The default feedback strategy: a priority-ordered decision ladder where
//! exactly one branch fires per submission. The ladder runs top-down:
//!
//! 1. Unreadable graph state, in a single or compound variant.
//! 2. Fully correct answer: a single affirmation line.
//! 3. Wrong structural category: explain what category the prompt actually
//!    is.
//! 4. Field-level hints per category. Boundary mistakes outrank circle and
//!    shading mistakes in both the single and compound ladders: a circle or
//!    shading judgement is moot while the boundary itself is misplaced.
//!
//! Every non-correct script ends with an actionable retry instruction, and
//! hints open with whatever the learner already has right.

use crate::traits::feedback::Feedback;
use crate::types::{
    AnswerKind, CompoundFieldErrors, ExpectedSolution, GradeResult, SingleFieldErrors,
};

const ALMOST_THERE: &str = "Almost there! Double-check your work and press Submit again.";

/// Socratic feedback strategy: poses questions and highlights what is
/// already correct rather than stating the fix.
pub struct SocraticFeedback;

impl Feedback for SocraticFeedback {
    fn assemble_feedback(
        &self,
        prompt: &str,
        expected: &ExpectedSolution,
        grade: Option<&GradeResult>,
    ) -> Vec<String> {
        let Some(grade) = grade else {
            return incomplete_graph_lines(prompt, expected.kind());
        };

        if grade.is_correct() {
            return vec!["Answer Correct.".to_string()];
        }

        match (grade, expected) {
            (GradeResult::TypeMismatch { expected: kind, .. }, _) => {
                type_mismatch_lines(prompt, *kind)
            }
            (GradeResult::Single(errors), ExpectedSolution::Single { boundary, .. }) => {
                single_lines(prompt, *boundary, errors)
            }
            (GradeResult::Compound(errors), ExpectedSolution::Compound { left, right, .. }) => {
                compound_lines(prompt, *left, *right, errors)
            }
            // A grade can only disagree with the expected shape if a custom
            // grader produced it; fall through to the generic nudge.
            _ => vec![ALMOST_THERE.to_string()],
        }
    }
}

/// The graph could not be read as an answer at all.
fn incomplete_graph_lines(prompt: &str, expected_kind: AnswerKind) -> Vec<String> {
    match expected_kind {
        AnswerKind::Compound => vec![
            "Your graph isn\u{2019}t complete yet. This is a compound inequality \u{2014} x is between two values.".to_string(),
            format!(
                "What are the two boundary numbers in {prompt}? Place a circle at each one, then shade the region between them."
            ),
            "Try again and press Submit.".to_string(),
        ],
        AnswerKind::Single => vec![
            "Your graph isn\u{2019}t complete yet. Make sure you\u{2019}ve placed exactly one circle (open or filled) on a boundary value and drawn a shaded region in one direction.".to_string(),
            "What is the boundary value in the inequality? Place a circle there, then shade the side that represents the solution.".to_string(),
            "Try again and press Submit.".to_string(),
        ],
    }
}

/// The learner graphed the wrong structural category of inequality.
fn type_mismatch_lines(prompt: &str, expected_kind: AnswerKind) -> Vec<String> {
    let mut lines = Vec::new();
    match expected_kind {
        AnswerKind::Compound => {
            lines.push(format!(
                "Take another look at the inequality {prompt}. Notice that x is between two values \u{2014} this is a compound inequality."
            ));
            lines.push(
                "You\u{2019}ll need to place a circle at each boundary value and shade the region between them."
                    .to_string(),
            );
        }
        AnswerKind::Single => {
            lines.push(format!(
                "The inequality {prompt} compares x to just one value \u{2014} it\u{2019}s not a compound inequality."
            ));
            lines.push(
                "You only need one boundary circle and shading in one direction (left or right)."
                    .to_string(),
            );
        }
    }
    lines.push("Revise your graph and press Submit again.".to_string());
    lines
}

fn single_lines(prompt: &str, b: i32, errors: &SingleFieldErrors) -> Vec<String> {
    let boundary_ok = !errors.boundary;
    let circle_ok = !errors.circle;
    let shading_ok = !errors.shading;
    let mut lines = Vec::new();

    // Circle is the only mistake.
    if !circle_ok && boundary_ok && shading_ok {
        lines.push(format!(
            "Nice work \u{2014} you placed the boundary at {b} and shaded in the correct direction."
        ));
        lines.push(format!(
            "Now think about whether {b} itself is included in the solution set."
        ));
        lines.push(format!(
            "Try substituting x = {b} into the inequality {prompt}. Does it make a true statement?"
        ));
        lines.push(
            "If the boundary value is included, what type of circle represents inclusion on a number line?"
                .to_string(),
        );
        lines.push("Update the circle type and press Submit again.".to_string());
        return lines;
    }

    // Shading is the only mistake.
    if !shading_ok && boundary_ok && circle_ok {
        lines.push(format!(
            "Good \u{2014} you identified the boundary value {b} and chose the correct circle type."
        ));
        lines.push(format!(
            "Now consider: which values of x satisfy {prompt}? Are they greater than or less than {b}?"
        ));
        lines.push(format!(
            "On a number line, are those values to the left or to the right of {b}?"
        ));
        lines.push(
            "Remember: \u{201C}greater than\u{201D} means shade to the right, and \u{201C}less than\u{201D} means shade to the left."
                .to_string(),
        );
        lines.push("Adjust the shading direction and press Submit again.".to_string());
        return lines;
    }

    // A wrong boundary outranks whatever else is wrong alongside it.
    if errors.boundary {
        if circle_ok && shading_ok {
            lines.push(
                "Your circle type and shading direction look right \u{2014} nice job on those."
                    .to_string(),
            );
        } else if circle_ok {
            lines.push(
                "You chose the correct circle type \u{2014} that\u{2019}s a good start."
                    .to_string(),
            );
        } else if shading_ok {
            lines.push(
                "The shading direction looks correct \u{2014} that\u{2019}s a good start."
                    .to_string(),
            );
        }
        lines.push("Take another look at the boundary value you placed on the number line.".to_string());
        lines.push(format!(
            "In the inequality {prompt}, what number is being compared to x?"
        ));
        if b < 0 {
            lines.push(
                "Be careful with negatives \u{2014} make sure the sign of your boundary matches the inequality."
                    .to_string(),
            );
        }
        lines.push("Move the boundary point to the correct value and press Submit again.".to_string());
        return lines;
    }

    // Boundary is right; both circle and shading need work.
    lines.push(format!(
        "You placed the boundary at {b} \u{2014} that\u{2019}s correct."
    ));
    lines.push(format!(
        "Let\u{2019}s focus on the direction first. Which values of x satisfy {prompt}?"
    ));
    lines.push(format!(
        "Are the solutions to the left or to the right of {b} on the number line?"
    ));
    lines.push(format!(
        "Also, think about whether {b} itself is part of the solution. Should the circle be open or filled?"
    ));
    lines.push("Revise your graph and press Submit again.".to_string());
    lines
}

fn compound_lines(prompt: &str, a: i32, b: i32, errors: &CompoundFieldErrors) -> Vec<String> {
    let left_boundary_ok = !errors.left_boundary;
    let right_boundary_ok = !errors.right_boundary;
    let left_circle_ok = !errors.left_circle;
    let right_circle_ok = !errors.right_circle;
    let both_boundaries_ok = left_boundary_ok && right_boundary_ok;
    let both_circles_ok = left_circle_ok && right_circle_ok;
    let mut lines = Vec::new();

    // Both boundaries correct, one or both circles wrong.
    if both_boundaries_ok && !both_circles_ok {
        lines.push(format!(
            "You identified both boundary values ({a} and {b}) correctly \u{2014} nice work."
        ));

        if left_circle_ok && !right_circle_ok {
            lines.push(format!("The circle at {a} is correct."));
            lines.push(format!(
                "Now think about the circle at {b}. Is {b} itself included in the solution?"
            ));
            lines.push(format!(
                "Try substituting x = {b} into {prompt}. Does it make a true statement?"
            ));
        } else if right_circle_ok && !left_circle_ok {
            lines.push(format!("The circle at {b} is correct."));
            lines.push(format!(
                "Now think about the circle at {a}. Is {a} itself included in the solution?"
            ));
            lines.push(format!(
                "Try substituting x = {a} into {prompt}. Does it make a true statement?"
            ));
        } else {
            lines.push(
                "Now consider each boundary: is it included in the solution set or not?"
                    .to_string(),
            );
            lines.push(format!(
                "Try substituting x = {a} and x = {b} into {prompt}. Which make true statements?"
            ));
            lines.push(
                "Included boundaries use a filled circle; excluded boundaries use an open circle."
                    .to_string(),
            );
        }

        lines.push("Update the circle type(s) and press Submit again.".to_string());
        return lines;
    }

    // One or both boundaries wrong: outranks circle judgements, which only
    // count as encouragement when their own boundary is placed right.
    if !both_boundaries_ok {
        let mut correct_parts = Vec::new();
        if left_boundary_ok {
            correct_parts.push(format!("the left boundary at {a}"));
        }
        if right_boundary_ok {
            correct_parts.push(format!("the right boundary at {b}"));
        }
        if left_boundary_ok && left_circle_ok {
            correct_parts.push(format!("the circle type at {a}"));
        }
        if right_boundary_ok && right_circle_ok {
            correct_parts.push(format!("the circle type at {b}"));
        }

        if !correct_parts.is_empty() {
            lines.push(format!(
                "You got {} correct \u{2014} that\u{2019}s a good start.",
                correct_parts.join(" and ")
            ));
        }

        lines.push(format!(
            "Read the inequality {prompt} carefully. What are the two numbers that x is between?"
        ));

        if a < 0 || b < 0 {
            lines.push(
                "Be careful with negative values \u{2014} check the signs of both boundary numbers."
                    .to_string(),
            );
        }

        lines.push("Place a circle at each boundary value and shade the region between them.".to_string());
        lines.push("Revise your graph and press Submit again.".to_string());
        return lines;
    }

    // Both boundaries and both circles correct should not reach here.
    lines.push(ALMOST_THERE.to_string());
    lines
}
