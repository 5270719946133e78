//! Stroke smoothing.
//!
//! Turns raw pointer samples into cubic Bézier segments. Each control point
//! is placed along the direction from the sample before to the sample after
//! the point it belongs to, so consecutive segments stay tangent-continuous.
//! Only the two previous samples are needed for a new segment.

use crate::path::PathCommand;
use kurbo::{Point, Vec2};
use std::f64::consts::PI;

/// Fraction of the neighbour distance used as control-arm length.
pub const SMOOTHING: f64 = 0.2;

/// Length and direction of the segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Euclidean distance.
    pub length: f64,
    /// Angle in radians, as returned by `atan2(dy, dx)`.
    pub angle: f64,
}

/// Compute the length and angle of the line from `a` to `b`.
pub fn line_metrics(a: Point, b: Point) -> LineMetrics {
    let delta = b - a;
    LineMetrics {
        length: delta.hypot(),
        angle: delta.atan2(),
    }
}

/// Compute a Bézier control point for `current`.
///
/// Missing neighbours fall back to `current` itself. With `reverse` the
/// point is mirrored to the other side of `current`.
pub fn control_point(
    current: Point,
    previous: Option<Point>,
    next: Option<Point>,
    reverse: bool,
) -> Point {
    let p = previous.unwrap_or(current);
    let n = next.unwrap_or(current);

    let metrics = line_metrics(p, n);
    let angle = metrics.angle + if reverse { PI } else { 0.0 };
    let length = metrics.length * SMOOTHING;

    current + Vec2::from_angle(angle) * length
}

/// Build the cubic segment ending at `point`, the sample at `index` in `sequence`.
///
/// Returns `None` when fewer than two samples precede `index`.
pub fn curve_command(point: Point, index: usize, sequence: &[Point]) -> Option<PathCommand> {
    if index < 2 {
        return None;
    }
    let before = *sequence.get(index - 1)?;

    let start_control = control_point(before, sequence.get(index - 2).copied(), Some(point), false);
    let end_control = control_point(point, Some(before), sequence.get(index + 1).copied(), true);

    Some(PathCommand::CurveTo {
        start_control,
        end_control,
        end: point,
    })
}
