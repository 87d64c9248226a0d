//! Straight segments and open polylines.

use crate::error::{at_least, fail_soft, ShapeResult};
use crate::io::PathData;
use crate::primitives::{collect_points, Point2, Scalar};

/// Segment from `(x, y)` to `(x1, y1)`.
pub fn basic<F: Scalar>(x: F, y: F, x1: F, y1: F) -> String {
    let mut path = PathData::new();
    path.move_to(x, y).line_to(x1, y1);
    path.to_string()
}

/// Open polyline through `points`, without a closing segment.
///
/// Empty if fewer than 2 points are given.
///
/// ```
/// use shapepath::line;
///
/// let path = line::fold(&[[120.0_f64, 30.0], [80.0, 100.0], [70.0, 180.0]]);
/// assert_eq!(path, "M120 30L80 100L70 180");
/// ```
pub fn fold<F, P>(points: &[P]) -> String
where
    F: Scalar,
    P: Copy + Into<Point2<F>>,
{
    fail_soft("line::fold", build_fold(&collect_points(points)))
}

fn build_fold<F: Scalar>(points: &[Point2<F>]) -> ShapeResult<F> {
    at_least(2, points.len())?;

    let mut path = PathData::new();
    path.move_to(points[0].x, points[0].y);
    for p in &points[1..] {
        path.line_to(p.x, p.y);
    }
    Ok(path)
}
