//!
//! Graph State Interpretation Module
//!
//! This module converts a raw graph-widget snapshot into a structured
//! [`StudentAnswer`], or decides that the drawing cannot be read as one.
//!
//! # Rules
//!
//! - No snapshot at all is indeterminate.
//! - One circle plus at least one shaded segment reads as a single-boundary
//!   answer. Shading direction comes from scanning every segment for an
//!   endpoint that clears the boundary by more than the configured margin;
//!   the margin tolerates circle-radius rendering noise at the boundary tick.
//! - Two circles plus at least one shaded segment read as a compound answer,
//!   with the circles sorted by tick value. Segment content is not checked
//!   further for compound answers; the shaded span is enforced indirectly
//!   through boundary and circle comparison.
//! - Any other circle count, or circles with no shading, is indeterminate.

use crate::types::{CircleType, GraphSnapshot, ShadingDirection, StudentAnswer};
use tracing::debug;
use util::session_config::GraphOptions;

/// Converts a widget snapshot into a structured answer.
pub struct GraphStateInterpreter;

impl GraphStateInterpreter {
    /// Interpret a snapshot, if one was captured.
    ///
    /// Returns `None` when the drawing is absent, incomplete, or ambiguous.
    /// This is a pure function of its inputs: identical snapshots always
    /// yield identical results.
    pub fn interpret(
        &self,
        snapshot: Option<&GraphSnapshot>,
        config: &GraphOptions,
    ) -> Option<StudentAnswer> {
        let Some(snapshot) = snapshot else {
            debug!("no graph snapshot captured at submit time");
            return None;
        };

        let circle_count = snapshot.empty_circle_ticks.len() + snapshot.filled_circle_ticks.len();

        if circle_count == 1 && !snapshot.segments.is_empty() {
            return interpret_single(snapshot, config);
        }

        if circle_count == 2 && !snapshot.segments.is_empty() {
            return Some(interpret_compound(snapshot));
        }

        debug!(
            "snapshot is not readable: {} circle(s), {} segment(s)",
            circle_count,
            snapshot.segments.len()
        );
        None
    }
}

fn interpret_single(snapshot: &GraphSnapshot, config: &GraphOptions) -> Option<StudentAnswer> {
    let (boundary, circle) = match snapshot.empty_circle_ticks.first() {
        Some(&tick) => (tick, CircleType::Open),
        None => (*snapshot.filled_circle_ticks.first()?, CircleType::Closed),
    };

    // Scan every segment; an endpoint must clear the margin strictly before
    // it counts as extending past the boundary. Later segments win.
    let mut shading = None;
    for segment in &snapshot.segments {
        if segment.right() > boundary as f64 + config.shading_margin {
            shading = Some(ShadingDirection::Right);
        }
        if segment.left() < boundary as f64 - config.shading_margin {
            shading = Some(ShadingDirection::Left);
        }
    }

    let Some(shading) = shading else {
        debug!("shading does not extend past the boundary in either direction");
        return None;
    };

    Some(StudentAnswer::Single {
        boundary,
        circle,
        shading,
    })
}

/// Both circles become boundaries, smaller tick on the left, regardless of
/// how open and filled circles are mixed.
fn interpret_compound(snapshot: &GraphSnapshot) -> StudentAnswer {
    let mut circles: Vec<(i32, CircleType)> = snapshot
        .empty_circle_ticks
        .iter()
        .map(|&tick| (tick, CircleType::Open))
        .chain(
            snapshot
                .filled_circle_ticks
                .iter()
                .map(|&tick| (tick, CircleType::Closed)),
        )
        .collect();
    circles.sort_by_key(|&(tick, _)| tick);

    StudentAnswer::Compound {
        left: circles[0].0,
        right: circles[1].0,
        left_circle: circles[0].1,
        right_circle: circles[1].1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Segment;

    fn segment(start_value: f64, end_value: f64) -> Segment {
        Segment {
            start_value,
            end_value,
        }
    }

    fn single_snapshot(filled: bool, tick: i32, segments: Vec<Segment>) -> GraphSnapshot {
        GraphSnapshot {
            empty_circle_ticks: if filled { vec![] } else { vec![tick] },
            filled_circle_ticks: if filled { vec![tick] } else { vec![] },
            segments,
        }
    }

    #[test]
    fn test_missing_snapshot_is_indeterminate() {
        let result = GraphStateInterpreter.interpret(None, &GraphOptions::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_empty_snapshot_is_indeterminate() {
        let snapshot = GraphSnapshot::default();
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_single_open_circle_shaded_right() {
        let snapshot = single_snapshot(false, 2, vec![segment(2.0, 10.0)]);
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(
            result,
            Some(StudentAnswer::Single {
                boundary: 2,
                circle: CircleType::Open,
                shading: ShadingDirection::Right,
            })
        );
    }

    #[test]
    fn test_single_filled_circle_shaded_left() {
        let snapshot = single_snapshot(true, -1, vec![segment(-6.0, -1.0)]);
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(
            result,
            Some(StudentAnswer::Single {
                boundary: -1,
                circle: CircleType::Closed,
                shading: ShadingDirection::Left,
            })
        );
    }

    #[test]
    fn test_segment_endpoint_order_does_not_matter() {
        let snapshot = single_snapshot(false, 2, vec![segment(10.0, 2.0)]);
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(
            result,
            Some(StudentAnswer::Single {
                boundary: 2,
                circle: CircleType::Open,
                shading: ShadingDirection::Right,
            })
        );
    }

    #[test]
    fn test_endpoint_exactly_on_margin_registers_no_direction() {
        // The margin check is strict: 2.5 is not past 2 + 0.5, and 1.5 is
        // not past 2 - 0.5.
        let snapshot = single_snapshot(false, 2, vec![segment(1.5, 2.5)]);
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_degenerate_shading_near_boundary_is_indeterminate() {
        let snapshot = single_snapshot(true, -5, vec![segment(-5.0, -4.8)]);
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_circles_without_shading_are_indeterminate() {
        let snapshot = single_snapshot(false, 3, vec![]);
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(result, None);

        let snapshot = GraphSnapshot {
            empty_circle_ticks: vec![-2],
            filled_circle_ticks: vec![4],
            segments: vec![],
        };
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_three_circles_are_indeterminate() {
        let snapshot = GraphSnapshot {
            empty_circle_ticks: vec![-2, 0],
            filled_circle_ticks: vec![4],
            segments: vec![segment(-2.0, 4.0)],
        };
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_compound_circles_sorted_by_tick() {
        // The filled circle has the smaller tick, so it becomes the left
        // boundary even though open circles are listed first.
        let snapshot = GraphSnapshot {
            empty_circle_ticks: vec![4],
            filled_circle_ticks: vec![-3],
            segments: vec![segment(-3.0, 4.0)],
        };
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(
            result,
            Some(StudentAnswer::Compound {
                left: -3,
                right: 4,
                left_circle: CircleType::Closed,
                right_circle: CircleType::Open,
            })
        );
    }

    #[test]
    fn test_compound_allows_any_circle_composition() {
        let snapshot = GraphSnapshot {
            empty_circle_ticks: vec![-5, 0],
            filled_circle_ticks: vec![],
            segments: vec![segment(-5.0, 0.0)],
        };
        let result = GraphStateInterpreter.interpret(Some(&snapshot), &GraphOptions::default());
        assert_eq!(
            result,
            Some(StudentAnswer::Compound {
                left: -5,
                right: 0,
                left_circle: CircleType::Open,
                right_circle: CircleType::Open,
            })
        );
    }

    #[test]
    fn test_interpretation_is_pure() {
        let snapshot = single_snapshot(false, 2, vec![segment(2.0, 10.0)]);
        let config = GraphOptions::default();
        let first = GraphStateInterpreter.interpret(Some(&snapshot), &config);
        let second = GraphStateInterpreter.interpret(Some(&snapshot), &config);
        assert_eq!(first, second);
    }
}
