//! Closed polygons.

use crate::error::{at_least, fail_soft, ShapeResult};
use crate::io::PathData;
use crate::primitives::{collect_points, half, Point2, Scalar, Vec2};

/// Closed polygon through `points` in order.
///
/// The first vertex is revisited with an `L` right after the `M`, so the path
/// has `points.len() + 2` commands. Accepts [`Point2`] values as well as
/// `[x, y]` arrays or `(x, y)` tuples.
///
/// Empty if fewer than 3 points are given.
///
/// ```
/// use shapepath::polygon;
///
/// let path = polygon::basic(&[[40.0_f64, 20.0], [80.0, 30.0], [70.0, 50.0]]);
/// assert_eq!(path, "M40 20L40 20L80 30L70 50Z");
/// ```
pub fn basic<F, P>(points: &[P]) -> String
where
    F: Scalar,
    P: Copy + Into<Point2<F>>,
{
    fail_soft("polygon::basic", build_basic(&collect_points(points)))
}

fn build_basic<F: Scalar>(points: &[Point2<F>]) -> ShapeResult<F> {
    at_least(3, points.len())?;

    let mut path = PathData::new();
    path.move_to(points[0].x, points[0].y);
    for p in points {
        path.line_to(p.x, p.y);
    }
    path.close();
    Ok(path)
}

/// Regular polygon with `sides` edges of length `radius`.
///
/// The first vertex sits at `(x + radius / 2, y)` and the first edge runs
/// along the positive x axis; each following edge turns by `2π / sides`. The
/// anchor is therefore *not* the polygon's center, and `radius` is the side
/// length rather than the circumradius. Both are kept for compatibility with
/// existing callers.
pub fn regular<F: Scalar>(x: F, y: F, sides: usize, radius: F) -> String {
    let count = F::from(sides).unwrap_or_else(F::nan);
    let step = F::TAU() / count;

    let mut path = PathData::new();
    path.move_to(x + half(radius), y);
    // the edge at angle 0 is drawn by the closing segment
    for i in 1..sides {
        let angle = step * F::from(i).unwrap_or_else(F::nan);
        let edge = Vec2::from_angle(angle, radius);
        path.line_by(edge.x, edge.y);
    }
    path.close();
    path.to_string()
}
