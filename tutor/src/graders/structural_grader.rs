//! A grader that performs an exact structural comparison between the
//! student's answer and the expected solution.
//!
//! Comparison is field by field with no tolerance: integer boundaries and
//! circle/shading enums either match exactly or are flagged. When the two
//! answers are different structural categories altogether, the grader
//! reports a type mismatch and records both categories instead of a
//! field-level diff.

use crate::traits::grader::AnswerGrader;
use crate::types::{
    CompoundFieldErrors, ExpectedSolution, GradeResult, SingleFieldErrors, StudentAnswer,
};

/// Grades by exact field-level equality. The answer is correct only when
/// every compared field matches.
pub struct StructuralGrader;

impl AnswerGrader for StructuralGrader {
    fn grade(&self, student: &StudentAnswer, expected: &ExpectedSolution) -> GradeResult {
        match (student, expected) {
            (
                StudentAnswer::Single {
                    boundary,
                    circle,
                    shading,
                },
                ExpectedSolution::Single {
                    boundary: expected_boundary,
                    circle: expected_circle,
                    shading: expected_shading,
                },
            ) => GradeResult::Single(SingleFieldErrors {
                boundary: boundary != expected_boundary,
                circle: circle != expected_circle,
                shading: shading != expected_shading,
            }),
            (
                StudentAnswer::Compound {
                    left,
                    right,
                    left_circle,
                    right_circle,
                },
                ExpectedSolution::Compound {
                    left: expected_left,
                    right: expected_right,
                    left_circle: expected_left_circle,
                    right_circle: expected_right_circle,
                },
            ) => GradeResult::Compound(CompoundFieldErrors {
                left_boundary: left != expected_left,
                right_boundary: right != expected_right,
                left_circle: left_circle != expected_left_circle,
                right_circle: right_circle != expected_right_circle,
            }),
            _ => GradeResult::TypeMismatch {
                expected: expected.kind(),
                student: student.kind(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerKind, CircleType, ShadingDirection};

    fn expected_single() -> ExpectedSolution {
        ExpectedSolution::Single {
            boundary: 2,
            circle: CircleType::Open,
            shading: ShadingDirection::Right,
        }
    }

    fn student_single(
        boundary: i32,
        circle: CircleType,
        shading: ShadingDirection,
    ) -> StudentAnswer {
        StudentAnswer::Single {
            boundary,
            circle,
            shading,
        }
    }

    fn expected_compound() -> ExpectedSolution {
        ExpectedSolution::Compound {
            left: -3,
            right: 4,
            left_circle: CircleType::Open,
            right_circle: CircleType::Closed,
        }
    }

    #[test]
    fn test_matching_single_is_correct() {
        let grade = StructuralGrader.grade(
            &student_single(2, CircleType::Open, ShadingDirection::Right),
            &expected_single(),
        );
        assert!(grade.is_correct());
        assert_eq!(grade, GradeResult::Single(SingleFieldErrors::default()));
    }

    #[test]
    fn test_each_single_field_flags_independently() {
        let expected = expected_single();

        let grade = StructuralGrader.grade(
            &student_single(3, CircleType::Open, ShadingDirection::Right),
            &expected,
        );
        assert_eq!(
            grade,
            GradeResult::Single(SingleFieldErrors {
                boundary: true,
                ..Default::default()
            })
        );

        let grade = StructuralGrader.grade(
            &student_single(2, CircleType::Closed, ShadingDirection::Right),
            &expected,
        );
        assert_eq!(
            grade,
            GradeResult::Single(SingleFieldErrors {
                circle: true,
                ..Default::default()
            })
        );

        let grade = StructuralGrader.grade(
            &student_single(2, CircleType::Open, ShadingDirection::Left),
            &expected,
        );
        assert_eq!(
            grade,
            GradeResult::Single(SingleFieldErrors {
                shading: true,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_matching_compound_is_correct() {
        let student = StudentAnswer::Compound {
            left: -3,
            right: 4,
            left_circle: CircleType::Open,
            right_circle: CircleType::Closed,
        };
        let grade = StructuralGrader.grade(&student, &expected_compound());
        assert!(grade.is_correct());
    }

    #[test]
    fn test_each_compound_field_flags_independently() {
        let student = StudentAnswer::Compound {
            left: -3,
            right: 5,
            left_circle: CircleType::Open,
            right_circle: CircleType::Closed,
        };
        let grade = StructuralGrader.grade(&student, &expected_compound());
        assert_eq!(
            grade,
            GradeResult::Compound(CompoundFieldErrors {
                right_boundary: true,
                ..Default::default()
            })
        );

        let student = StudentAnswer::Compound {
            left: -3,
            right: 4,
            left_circle: CircleType::Closed,
            right_circle: CircleType::Closed,
        };
        let grade = StructuralGrader.grade(&student, &expected_compound());
        assert_eq!(
            grade,
            GradeResult::Compound(CompoundFieldErrors {
                left_circle: true,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_type_mismatch_records_both_kinds() {
        let grade = StructuralGrader.grade(
            &student_single(2, CircleType::Open, ShadingDirection::Right),
            &expected_compound(),
        );
        assert_eq!(
            grade,
            GradeResult::TypeMismatch {
                expected: AnswerKind::Compound,
                student: AnswerKind::Single,
            }
        );
        assert!(!grade.is_correct());

        let student = StudentAnswer::Compound {
            left: -3,
            right: 4,
            left_circle: CircleType::Open,
            right_circle: CircleType::Closed,
        };
        let grade = StructuralGrader.grade(&student, &expected_single());
        assert_eq!(
            grade,
            GradeResult::TypeMismatch {
                expected: AnswerKind::Single,
                student: AnswerKind::Compound,
            }
        );
    }
}
